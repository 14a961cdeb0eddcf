use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        api,
        components::{ErrorState, Loading, Page},
        router::Route,
        store::{
            query::{invalidate, use_query},
            toast::use_toaster,
            user::UserState,
        },
        util::{
            format::datetime,
            spend::{cached_balance, precheck, refresh_balance, report_failure},
        },
    },
    model::{
        scouting::{CreateMessageDto, ScoutingMessageDto},
        token::{TokenAction, TokenBalanceDto},
    },
};

#[component]
pub fn InquiryThread(id: i32) -> Element {
    let messages_path = format!("/api/scouting/inquiries/{}/messages", id);
    let messages = use_query::<Vec<ScoutingMessageDto>>(messages_path.clone());
    let balance = use_query::<TokenBalanceDto>("/api/tokens/balance".to_string());
    let user_store = use_context::<Store<UserState>>();
    let mut toaster = use_toaster();
    let mut body = use_signal(String::new);

    let own_id = user_store.read().user.as_ref().map(|user| user.id);
    let send_label = format!("Send ({} tokens)", TokenAction::Messaging.cost());

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let text = body().trim().to_string();
        if text.is_empty() {
            return;
        }
        if !precheck(cached_balance(&balance), TokenAction::Messaging, &mut toaster) {
            return;
        }

        let path = messages_path.clone();
        spawn(async move {
            let message = CreateMessageDto { body: text };
            match api::post::<_, ScoutingMessageDto>(&path, &message).await {
                Ok(_) => {
                    body.set(String::new());
                    refresh_balance();
                    invalidate([path.as_str()]);
                }
                Err(e) if e.status == 409 => toaster.error("This inquiry is closed"),
                Err(e) => report_failure(&e, "Sending message", &mut toaster),
            }
        });
    };

    rsx!(
        Title { "Inquiry thread | PitchPass" }
        Page { title: "Inquiry thread",
            Link { to: Route::Inquiries {}, class: "link", "Back to inquiries" }
            match &*messages.read() {
                Some(Ok(messages)) if messages.is_empty() => rsx!(p { class: "opacity-70", "No messages yet." }),
                Some(Ok(messages)) => rsx!(
                    div { class: "flex flex-col gap-2",
                        {messages.iter().map(|message| {
                            let sent = datetime(&message.created_at);
                            let side = if Some(message.sender_id) == own_id { "chat chat-end" } else { "chat chat-start" };
                            rsx!(
                                div { key: "{message.id}", class: side,
                                    div { class: "chat-header text-xs opacity-70", "{sent}" }
                                    div { class: "chat-bubble", "{message.body}" }
                                }
                            )
                        })}
                    }
                ),
                Some(Err(e)) => rsx!(ErrorState { message: e.to_string() }),
                None => rsx!(Loading {}),
            }
            form { class: "flex gap-2", onsubmit: onsubmit,
                textarea {
                    class: "textarea flex-1",
                    placeholder: "Write a message",
                    value: "{body}",
                    oninput: move |e| body.set(e.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "{send_label}" }
            }
        }
    )
}
