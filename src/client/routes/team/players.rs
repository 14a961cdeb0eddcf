use chrono::NaiveDate;
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
        },
        util::spend::{cached_balance, precheck},
    },
    model::{
        player::{PlayerDto, PlayerFormDto},
        role::Role,
        token::{TokenAction, TokenBalanceDto},
    },
};

/// Roles that view profiles at a token cost
fn pays_for_profiles(role: Role) -> bool {
    matches!(role, Role::Scout | Role::Agent)
}

/// Create or edit form; `player` pre-fills the fields and switches the form to update mode
#[component]
pub fn PlayerForm(player: Option<PlayerDto>) -> Element {
    let mut toaster = use_toaster();
    let initial = player.clone();

    let mut full_name = use_signal(|| initial.as_ref().map(|p| p.full_name.clone()).unwrap_or_default());
    let mut date_of_birth = use_signal(|| {
        initial
            .as_ref()
            .map(|p| p.date_of_birth.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    });
    let mut nationality = use_signal(|| initial.as_ref().map(|p| p.nationality.clone()).unwrap_or_default());
    let mut current_club = use_signal(|| initial.as_ref().map(|p| p.current_club.clone()).unwrap_or_default());
    let mut current_league = use_signal(|| initial.as_ref().map(|p| p.current_league.clone()).unwrap_or_default());
    let mut league_band = use_signal(|| initial.as_ref().map(|p| p.league_band.to_string()).unwrap_or_else(|| "3".to_string()));
    let mut caps = use_signal(|| initial.as_ref().map(|p| p.international_caps.to_string()).unwrap_or_else(|| "0".to_string()));
    let mut minutes = use_signal(|| initial.as_ref().map(|p| p.minutes_played.to_string()).unwrap_or_else(|| "0".to_string()));
    let mut medical = use_signal(|| initial.as_ref().is_some_and(|p| p.medical_available));
    let mut gps = use_signal(|| initial.as_ref().is_some_and(|p| p.gps_available));

    let player_id = player.as_ref().map(|p| p.id);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let Ok(date_of_birth) = NaiveDate::parse_from_str(&date_of_birth(), "%Y-%m-%d") else {
            toaster.error("Date of birth is required");
            return;
        };
        let form = PlayerFormDto {
            full_name: full_name(),
            date_of_birth,
            nationality: nationality(),
            current_club: current_club(),
            current_league: current_league(),
            league_band: league_band().trim().parse().unwrap_or_default(),
            international_caps: caps().trim().parse().unwrap_or(-1),
            minutes_played: minutes().trim().parse().unwrap_or(-1),
            medical_available: medical(),
            gps_available: gps(),
        };
        if let Err(message) = form.validate() {
            toaster.error(message);
            return;
        }

        spawn(async move {
            let result = match player_id {
                Some(id) => api::put::<_, PlayerDto>(&format!("/api/players/{}", id), &form).await,
                None => api::post::<_, PlayerDto>("/api/players", &form).await,
            };

            match result {
                Ok(saved) => {
                    toaster.success(format!("Saved {}", saved.full_name));
                    invalidate(["/api/players", "/api/dashboard/stats"]);
                    if player_id.is_none() {
                        full_name.set(String::new());
                        nationality.set(String::new());
                    }
                }
                Err(e) => toaster.error(format!("Saving player failed: {}", e.message)),
            }
        });
    };

    rsx!(
        form { class: "grid grid-cols-1 md:grid-cols-3 gap-2", onsubmit: onsubmit,
            input { class: "input", placeholder: "Full name", value: "{full_name}", oninput: move |e| full_name.set(e.value()) }
            input { class: "input", r#type: "date", value: "{date_of_birth}", oninput: move |e| date_of_birth.set(e.value()) }
            input { class: "input", placeholder: "Nationality", value: "{nationality}", oninput: move |e| nationality.set(e.value()) }
            input { class: "input", placeholder: "Current club", value: "{current_club}", oninput: move |e| current_club.set(e.value()) }
            input { class: "input", placeholder: "Current league", value: "{current_league}", oninput: move |e| current_league.set(e.value()) }
            select { class: "select", value: "{league_band}", onchange: move |e| league_band.set(e.value()),
                {(1..=5).map(|band| rsx!(option { key: "{band}", value: "{band}", "League band {band}" }))}
            }
            input { class: "input", r#type: "number", placeholder: "International caps", value: "{caps}", oninput: move |e| caps.set(e.value()) }
            input { class: "input", r#type: "number", placeholder: "Minutes played", value: "{minutes}", oninput: move |e| minutes.set(e.value()) }
            div { class: "flex gap-4 items-center",
                label { class: "label gap-2",
                    input { r#type: "checkbox", class: "checkbox", checked: medical(), onchange: move |e| medical.set(e.checked()) }
                    "Medical data"
                }
                label { class: "label gap-2",
                    input { r#type: "checkbox", class: "checkbox", checked: gps(), onchange: move |e| gps.set(e.checked()) }
                    "GPS data"
                }
            }
            button { class: "btn btn-primary md:col-start-3", r#type: "submit",
                if player_id.is_some() { "Update player" } else { "Add player" }
            }
        }
    )
}

#[component]
pub fn Players() -> Element {
    let role = use_context::<Signal<Role>>();
    let players = use_query::<Vec<PlayerDto>>("/api/players".to_string());
    let balance = use_query::<TokenBalanceDto>("/api/tokens/balance".to_string());
    let mut toaster = use_toaster();
    let navigator = use_navigator();

    let can_edit = matches!(role(), Role::Team | Role::Admin);
    let paid_view = pays_for_profiles(role());
    let view_label = if paid_view {
        format!("View ({} token)", TokenAction::ProfileView.cost())
    } else {
        "View".to_string()
    };

    rsx!(
        Title { "Players | PitchPass" }
        Page { title: "Players",
            if can_edit {
                div { class: "card bg-base-200",
                    div { class: "card-body",
                        h2 { class: "card-title", "Add player" }
                        PlayerForm {}
                    }
                }
            }
            match &*players.read() {
                Some(Ok(players)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Nationality" }
                                    th { "Club" }
                                    th { "Band" }
                                    th { "Overall" }
                                    th {}
                                }
                            }
                            tbody {
                                {players.iter().map(|player| {
                                    let id = player.id;
                                    rsx!(
                                        tr { key: "{id}",
                                            td { "{player.full_name}" }
                                            td { "{player.nationality}" }
                                            td { "{player.current_club}" }
                                            td { "{player.league_band}" }
                                            td { "{player.overall_score}" }
                                            td {
                                                button {
                                                    class: "btn btn-sm btn-outline",
                                                    onclick: move |_| {
                                                        if paid_view
                                                            && !precheck(cached_balance(&balance), TokenAction::ProfileView, &mut toaster)
                                                        {
                                                            return;
                                                        }
                                                        navigator.push(Route::PlayerDetail { id });
                                                    },
                                                    "{view_label}"
                                                }
                                            }
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
