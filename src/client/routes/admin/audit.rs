use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorState, Loading, Page},
        store::query::use_query,
        util::format::datetime,
    },
    model::admin::AuditLogDto,
};

#[component]
pub fn AuditLogs() -> Element {
    let logs = use_query::<Vec<AuditLogDto>>("/api/admin/audit-logs".to_string());

    rsx!(
        Title { "Audit log | PitchPass" }
        Page { title: "Audit log",
            match &*logs.read() {
                Some(Ok(logs)) if logs.is_empty() => rsx!(p { "Nothing has been recorded yet." }),
                Some(Ok(logs)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-sm",
                            thead {
                                tr {
                                    th { "When" }
                                    th { "Actor" }
                                    th { "Action" }
                                    th { "Subject" }
                                    th { "Detail" }
                                }
                            }
                            tbody {
                                {logs.iter().map(|log| {
                                    let when = datetime(&log.created_at);
                                    let actor = log
                                        .actor_id
                                        .map(|id| format!("user {}", id))
                                        .unwrap_or_else(|| "system".to_string());
                                    let subject = match log.subject_id {
                                        Some(id) => format!("{} #{}", log.subject_type, id),
                                        None => log.subject_type.clone(),
                                    };
                                    let detail = log.detail.clone().unwrap_or_default();
                                    rsx!(
                                        tr { key: "{log.id}",
                                            td { "{when}" }
                                            td { "{actor}" }
                                            td { code { "{log.action}" } }
                                            td { "{subject}" }
                                            td { "{detail}" }
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
