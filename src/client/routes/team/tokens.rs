use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        api,
        components::{BalanceBadge, ErrorState, Loading, Page},
        store::{query::use_query, toast::use_toaster},
        util::{
            format::datetime,
            spend::{cached_balance, precheck, refresh_balance, report_failure},
        },
    },
    model::token::{
        PurchaseTokensDto, SpendTokensDto, TokenAction, TokenBalanceDto, TokenPackage,
        TokenTransactionDto,
    },
};

#[component]
fn Packages() -> Element {
    let mut toaster = use_toaster();

    rsx!(
        div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
            {TokenPackage::ALL.into_iter().map(|package| {
                let name = package.as_str();
                let tokens = package.tokens();
                rsx!(
                    div { key: "{name}", class: "card bg-base-200",
                        div { class: "card-body items-center",
                            h3 { class: "card-title capitalize", "{name}" }
                            p { "{tokens} tokens" }
                            button {
                                class: "btn btn-primary btn-sm",
                                onclick: move |_| {
                                    spawn(async move {
                                        let purchase = PurchaseTokensDto { package };
                                        match api::post::<_, TokenBalanceDto>("/api/tokens/purchase", &purchase).await {
                                            Ok(balance) => {
                                                refresh_balance();
                                                toaster.success(format!("Balance is now {} tokens", balance.balance));
                                            }
                                            Err(e) => toaster.error(format!("Purchase failed: {}", e.message)),
                                        }
                                    });
                                },
                                "Buy"
                            }
                        }
                    }
                )
            })}
        }
    )
}

#[component]
fn SpendForm() -> Element {
    let balance = use_query::<TokenBalanceDto>("/api/tokens/balance".to_string());
    let mut toaster = use_toaster();

    let mut action = use_signal(|| TokenAction::VideoAnalysis);
    let mut reference = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let action = action();
        if !precheck(cached_balance(&balance), action, &mut toaster) {
            return;
        }

        let reference = reference().trim().to_string();
        let spend = SpendTokensDto {
            action,
            reference: (!reference.is_empty()).then_some(reference),
        };
        spawn(async move {
            match api::post::<_, TokenBalanceDto>("/api/tokens/spend", &spend).await {
                Ok(_) => {
                    refresh_balance();
                    toaster.success(format!("{} charged", action.label()));
                }
                Err(e) => report_failure(&e, action.label(), &mut toaster),
            }
        });
    };

    rsx!(
        form { class: "flex flex-wrap gap-2", onsubmit: onsubmit,
            select {
                class: "select",
                onchange: move |e| {
                    if let Some(selected) = TokenAction::parse(&e.value()) {
                        action.set(selected);
                    }
                },
                {TokenAction::ALL.into_iter().map(|option_action| {
                    let code = option_action.as_str();
                    let text = format!("{} ({} tokens)", option_action.label(), option_action.cost());
                    let selected = option_action == action();
                    rsx!(option { key: "{code}", value: "{code}", selected: selected, "{text}" })
                })}
            }
            input {
                class: "input",
                placeholder: "Reference (optional)",
                value: "{reference}",
                oninput: move |e| reference.set(e.value()),
            }
            button { class: "btn btn-outline", r#type: "submit", "Spend" }
        }
    )
}

#[component]
pub fn Tokens() -> Element {
    let balance = use_query::<TokenBalanceDto>("/api/tokens/balance".to_string());
    let transactions = use_query::<Vec<TokenTransactionDto>>("/api/tokens/transactions".to_string());

    rsx!(
        Title { "Tokens | PitchPass" }
        Page { title: "Tokens",
            if let Some(Ok(balance)) = &*balance.read() {
                div { class: "stats bg-base-200",
                    div { class: "stat",
                        div { class: "stat-title", "Balance" }
                        div { class: "stat-value", BalanceBadge {} }
                    }
                    div { class: "stat",
                        div { class: "stat-title", "Purchased" }
                        div { class: "stat-value", "{balance.lifetime_purchased}" }
                    }
                    div { class: "stat",
                        div { class: "stat-title", "Spent" }
                        div { class: "stat-value", "{balance.lifetime_spent}" }
                    }
                }
            }
            h2 { class: "text-xl", "Buy tokens" }
            Packages {}
            h2 { class: "text-xl", "Spend tokens" }
            SpendForm {}
            h2 { class: "text-xl", "History" }
            match &*transactions.read() {
                Some(Ok(transactions)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-sm",
                            thead {
                                tr {
                                    th { "When" }
                                    th { "Kind" }
                                    th { "Action" }
                                    th { "Amount" }
                                    th { "Balance" }
                                    th { "Reference" }
                                }
                            }
                            tbody {
                                {transactions.iter().map(|transaction| {
                                    let when = datetime(&transaction.created_at);
                                    let kind = transaction.kind.as_str();
                                    let reference = transaction.reference.clone().unwrap_or_default();
                                    rsx!(
                                        tr { key: "{transaction.id}",
                                            td { "{when}" }
                                            td { "{kind}" }
                                            td { "{transaction.action}" }
                                            td { "{transaction.amount}" }
                                            td { "{transaction.balance_after}" }
                                            td { "{reference}" }
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
