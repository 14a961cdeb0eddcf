use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorState, Loading, Page},
        store::query::use_query,
        util::format::datetime,
    },
    model::admin::{format_amount, FederationPaymentDto},
};

#[component]
pub fn FederationPayments() -> Element {
    let payments =
        use_query::<Vec<FederationPaymentDto>>("/api/admin/federation-payments".to_string());

    rsx!(
        Title { "Federation payments | PitchPass" }
        Page { title: "Federation payments",
            match &*payments.read() {
                Some(Ok(payments)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Paid" }
                                    th { "Federation" }
                                    th { "Description" }
                                    th { class: "text-right", "Amount" }
                                }
                            }
                            tbody {
                                {payments.iter().map(|payment| {
                                    let paid = datetime(&payment.paid_at);
                                    let amount = format_amount(payment.amount, &payment.currency);
                                    rsx!(
                                        tr { key: "{payment.id}",
                                            td { "{paid}" }
                                            td { "{payment.federation}" }
                                            td { "{payment.description}" }
                                            td { class: "text-right", "{amount}" }
                                        }
                                    )
                                })}
                            }
                        }
                    }
                ),
                Some(Err(e)) => rsx!(ErrorState { message: e.to_string() }),
                None => rsx!(Loading {}),
            }
        }
    )
}
