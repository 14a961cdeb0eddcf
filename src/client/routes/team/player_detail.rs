use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        api,
        components::{ErrorState, Loading, Page},
        routes::team::players::PlayerForm,
        store::{
            query::{invalidate, use_query},
            toast::use_toaster,
        },
        util::spend::refresh_balance,
    },
    model::{
        federation::{FederationLetterDto, RequestLetterDto},
        player::{EligibilityScores, PlayerDto, VisaType},
        role::Role,
    },
};

#[component]
pub fn ScoreTable(scores: EligibilityScores, overall: i16) -> Element {
    rsx!(
        table { class: "table table-sm",
            thead {
                tr {
                    th { "Visa" }
                    th { "Score" }
                }
            }
            tbody {
                {VisaType::ALL.into_iter().map(|visa| {
                    let label = visa.label();
                    let score = scores.get(visa);
                    rsx!(
                        tr { key: "{label}",
                            td { "{label}" }
                            td {
                                progress { class: "progress progress-primary w-32 mr-2", value: "{score}", max: "100" }
                                "{score}"
                            }
                        }
                    )
                })}
                tr {
                    td { class: "font-semibold", "Overall" }
                    td { class: "font-semibold", "{overall}" }
                }
            }
        }
    )
}

#[component]
fn LetterRequest(player_id: i32) -> Element {
    let mut toaster = use_toaster();
    let mut federation = use_signal(String::new);
    let mut purpose = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = RequestLetterDto {
            player_id,
            federation: federation(),
            purpose: purpose(),
        };

        spawn(async move {
            match api::post::<_, FederationLetterDto>("/api/federation/letters", &request).await {
                Ok(_) => {
                    toaster.success("Letter requested");
                    invalidate(["/api/federation/letters"]);
                    federation.set(String::new());
                    purpose.set(String::new());
                }
                Err(e) => toaster.error(format!("Letter request failed: {}", e.message)),
            }
        });
    };

    rsx!(
        form { class: "flex flex-wrap gap-2", onsubmit: onsubmit,
            input { class: "input", placeholder: "Federation", value: "{federation}", oninput: move |e| federation.set(e.value()) }
            input { class: "input flex-1", placeholder: "Purpose", value: "{purpose}", oninput: move |e| purpose.set(e.value()) }
            button { class: "btn btn-secondary", r#type: "submit", "Request letter" }
        }
    )
}

#[component]
pub fn PlayerDetail(id: i32) -> Element {
    let role = use_context::<Signal<Role>>();
    let player = use_query::<PlayerDto>(format!("/api/players/{}", id));

    // Scouts and agents pay for each profile view; refetch the balance once the server decided
    use_effect(move || {
        let decided = match &*player.read() {
            Some(Ok(_)) => true,
            Some(Err(e)) => e.is_insufficient_tokens(),
            None => false,
        };
        if decided && matches!(role(), Role::Scout | Role::Agent) {
            refresh_balance();
        }
    });

    let can_edit = matches!(role(), Role::Team | Role::Admin);

    rsx!(
        Title { "Player | PitchPass" }
        Page {
            match &*player.read() {
                Some(Ok(player)) => rsx!(
                    h1 { class: "text-2xl font-semibold", "{player.full_name}" }
                    p { class: "opacity-70",
                        {format!(
                            "{} · {} ({}, band {}) · {} caps · {} minutes",
                            player.nationality,
                            player.current_club,
                            player.current_league,
                            player.league_band,
                            player.international_caps,
                            player.minutes_played
                        )}
                    }
                    div { class: "flex gap-2",
                        if player.medical_available { span { class: "badge badge-outline", "Medical data" } }
                        if player.gps_available { span { class: "badge badge-outline", "GPS data" } }
                    }
                    ScoreTable { scores: player.scores, overall: player.overall_score }
                    if can_edit {
                        div { class: "card bg-base-200",
                            div { class: "card-body",
                                h2 { class: "card-title", "Edit player" }
                                PlayerForm { player: player.clone() }
                            }
                        }
                    }
                    if role() == Role::Team {
                        div { class: "card bg-base-200",
                            div { class: "card-body",
                                h2 { class: "card-title", "Federation letter" }
                                LetterRequest { player_id: player.id }
                            }
                        }
                    }
                ),
                Some(Err(e)) if e.is_insufficient_tokens() => rsx!(ErrorState { message: "Insufficient tokens to view this profile".to_string() }),
                Some(Err(e)) => rsx!(ErrorState { message: e.to_string() }),
                None => rsx!(Loading {}),
            }
        }
    )
}
