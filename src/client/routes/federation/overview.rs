use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorState, Loading, Page},
        router::Route,
        store::query::use_query,
    },
    model::{
        federation::{FederationLetterDto, NationalityCountDto},
        status::LetterStatus,
    },
};

#[component]
pub fn FederationOverview() -> Element {
    let letters = use_query::<Vec<FederationLetterDto>>("/api/federation/letters".to_string());
    let counts = use_query::<Vec<NationalityCountDto>>("/api/federation/map".to_string());

    let awaiting = match &*letters.read() {
        Some(Ok(letters)) => Some(
            letters
                .iter()
                .filter(|letter| letter.status == LetterStatus::Requested)
                .count(),
        ),
        _ => None,
    };

    rsx!(
        Title { "Federation | PitchPass" }
        Page { title: "Federation",
            if let Some(awaiting) = awaiting {
                div { class: "stats bg-base-200",
                    div { class: "stat",
                        div { class: "stat-title", "Letters awaiting a decision" }
                        div { class: "stat-value", "{awaiting}" }
                    }
                }
            }
            h2 { class: "text-xl", "Players by nationality" }
            match &*counts.read() {
                Some(Ok(counts)) => rsx!(
                    ul { class: "list bg-base-200 rounded-box",
                        {counts.iter().map(|count| rsx!(
                            li { key: "{count.nationality}", class: "list-row",
                                span { class: "font-semibold", "{count.nationality}" }
                                span { "{count.players}" }
                            }
                        ))}
                    }
                ),
                Some(Err(e)) => rsx!(ErrorState { message: e.to_string() }),
                None => rsx!(Loading {}),
            }
            div { class: "flex gap-2",
                Link { to: Route::Letters {}, class: "btn btn-primary", "Letters" }
                Link { to: Route::NationalityMap {}, class: "btn btn-outline", "Map" }
            }
        }
    )
}
