use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorState, Loading, Page},
        store::query::use_query,
    },
    model::admin::{format_amount, FeeScheduleDto},
};

#[component]
pub fn FeeSchedules() -> Element {
    let fees = use_query::<Vec<FeeScheduleDto>>("/api/admin/fee-schedules".to_string());

    rsx!(
        Title { "Fee schedules | PitchPass" }
        Page { title: "Fee schedules",
            match &*fees.read() {
                Some(Ok(fees)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Action" }
                                    th { "Description" }
                                    th { "Effective from" }
                                    th { class: "text-right", "Fee" }
                                }
                            }
                            tbody {
                                {fees.iter().map(|fee| {
                                    let amount = format_amount(fee.amount, &fee.currency);
                                    rsx!(
                                        tr { key: "{fee.id}",
                                            td { code { "{fee.action_code}" } }
                                            td { "{fee.description}" }
                                            td { "{fee.effective_from}" }
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
