use chrono::NaiveDate;
use dioxus::document::Title;
use dioxus::html::FileData;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUpload;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        api,
        components::{ErrorState, Loading, Page},
        store::{
            query::{invalidate, use_query},
            toast::use_toaster,
        },
        upload::{submit_video, HttpUploadTransport, SelectedFile, VideoForm},
        util::{
            format::datetime,
            spend::{cached_balance, precheck, refresh_balance, report_failure},
        },
    },
    model::{
        player::PlayerDto,
        token::{SpendTokensDto, TokenAction, TokenBalanceDto},
        video::{VideoDto, VideoSource},
    },
};

#[component]
fn UploadForm() -> Element {
    let players = use_query::<Vec<PlayerDto>>("/api/players".to_string());
    let mut toaster = use_toaster();

    let mut player_id = use_signal(String::new);
    let mut source = use_signal(|| VideoSource::Manual);
    let mut match_date = use_signal(String::new);
    let mut opponent = use_signal(String::new);
    let mut competition = use_signal(String::new);
    let mut minutes = use_signal(|| "90".to_string());
    let mut file = use_signal(|| None::<FileData>);
    let mut uploading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let Ok(player_id) = player_id().parse::<i32>() else {
            toaster.error("Select a player");
            return;
        };
        let Ok(match_date) = NaiveDate::parse_from_str(&match_date(), "%Y-%m-%d") else {
            toaster.error("Match date is required");
            return;
        };
        let Some(selected) = file() else {
            toaster.error("Attach a video file");
            return;
        };
        let form = VideoForm {
            player_id,
            source: source(),
            match_date,
            opponent: opponent(),
            competition: competition(),
            minutes_played: minutes().trim().parse().unwrap_or_default(),
        };

        uploading.set(true);
        spawn(async move {
            let bytes = match selected.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => {
                    toaster.error(format!("Upload failed: could not read file: {}", e));
                    uploading.set(false);
                    return;
                }
            };
            let selected = SelectedFile {
                name: selected.name(),
                content_type: selected
                    .content_type()
                    .unwrap_or_else(|| "application/octet-stream".to_string()),
                bytes,
            };

            match submit_video(&HttpUploadTransport, form, selected).await {
                Ok(_) => {
                    toaster.success("Video uploaded");
                    invalidate(["/api/videos", "/api/dashboard/stats"]);
                    file.set(None);
                }
                Err(e) => toaster.error(format!("Upload failed: {}", e.message)),
            }

            uploading.set(false);
        });
    };

    rsx!(
        form { class: "grid grid-cols-1 md:grid-cols-3 gap-2", onsubmit: onsubmit,
            select { class: "select", value: "{player_id}", onchange: move |e| player_id.set(e.value()),
                option { value: "", "Select player" }
                if let Some(Ok(players)) = &*players.read() {
                    {players.iter().map(|player| rsx!(
                        option { key: "{player.id}", value: "{player.id}", "{player.full_name}" }
                    ))}
                }
            }
            select {
                class: "select",
                onchange: move |e| {
                    source.set(VideoSource::parse(&e.value()).unwrap_or(VideoSource::Manual));
                },
                option { value: "manual", "Manual upload" }
                option { value: "partner", "Partner feed" }
            }
            input { class: "input", r#type: "date", value: "{match_date}", oninput: move |e| match_date.set(e.value()) }
            input { class: "input", placeholder: "Opponent", value: "{opponent}", oninput: move |e| opponent.set(e.value()) }
            input { class: "input", placeholder: "Competition", value: "{competition}", oninput: move |e| competition.set(e.value()) }
            input { class: "input", r#type: "number", placeholder: "Minutes played", value: "{minutes}", oninput: move |e| minutes.set(e.value()) }
            input {
                class: "file-input md:col-span-2",
                r#type: "file",
                accept: "video/*",
                onchange: move |e| file.set(e.files().into_iter().next()),
            }
            button { class: "btn btn-primary", r#type: "submit", disabled: uploading(),
                Icon {
                    width: 16,
                    height: 16,
                    icon: FaUpload
                }
                if uploading() { "Uploading..." } else { "Upload video" }
            }
        }
    )
}

#[component]
pub fn Videos() -> Element {
    let videos = use_query::<Vec<VideoDto>>("/api/videos".to_string());
    let balance = use_query::<TokenBalanceDto>("/api/tokens/balance".to_string());
    let mut toaster = use_toaster();

    let analysis_label = format!("Analyse ({} tokens)", TokenAction::VideoAnalysis.cost());

    rsx!(
        Title { "Videos | PitchPass" }
        Page { title: "Videos",
            div { class: "card bg-base-200",
                div { class: "card-body",
                    h2 { class: "card-title", "Upload match video" }
                    UploadForm {}
                }
            }
            match &*videos.read() {
                Some(Ok(videos)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Match date" }
                                    th { "Opponent" }
                                    th { "Competition" }
                                    th { "Minutes" }
                                    th { "Source" }
                                    th { "Analysis" }
                                    th { "Added" }
                                }
                            }
                            tbody {
                                {videos.iter().map(|video| {
                                    let id = video.id;
                                    let processed = video.processed;
                                    let source = video.source.as_str();
                                    let added = datetime(&video.created_at);
                                    let analysis_label = analysis_label.clone();
                                    rsx!(
                                        tr { key: "{id}",
                                            td { "{video.match_date}" }
                                            td { "{video.opponent}" }
                                            td { "{video.competition}" }
                                            td { "{video.minutes_played}" }
                                            td { "{source}" }
                                            td {
                                                if processed {
                                                    span { class: "badge badge-success", "processed" }
                                                } else {
                                                    button {
                                                        class: "btn btn-xs btn-outline",
                                                        onclick: move |_| {
                                                            if !precheck(cached_balance(&balance), TokenAction::VideoAnalysis, &mut toaster) {
                                                                return;
                                                            }
                                                            spawn(async move {
                                                                let spend = SpendTokensDto {
                                                                    action: TokenAction::VideoAnalysis,
                                                                    reference: Some(format!("video:{}", id)),
                                                                };
                                                                match api::post::<_, TokenBalanceDto>("/api/tokens/spend", &spend).await {
                                                                    Ok(_) => {
                                                                        refresh_balance();
                                                                        toaster.success("Analysis requested");
                                                                    }
                                                                    Err(e) => report_failure(&e, "Analysis request", &mut toaster),
                                                                }
                                                            });
                                                        },
                                                        "{analysis_label}"
                                                    }
                                                }
                                            }
                                            td { "{added}" }
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
