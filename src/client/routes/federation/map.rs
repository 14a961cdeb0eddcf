use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorState, Loading, Page, WorldMap},
        store::query::use_query,
    },
    model::{country::plot_points, federation::NationalityCountDto},
};

#[component]
pub fn NationalityMap() -> Element {
    let counts = use_query::<Vec<NationalityCountDto>>("/api/federation/map".to_string());

    rsx!(
        Title { "Nationality map | PitchPass" }
        Page { title: "Nationality map",
            match &*counts.read() {
                Some(Ok(counts)) => {
                    let points = plot_points(counts.iter().map(|c| (c.nationality.as_str(), c.players)));
                    let unmapped = counts.len() - points.len();
                    rsx!(
                        WorldMap { points: points }
                        if unmapped > 0 {
                            p { class: "text-sm opacity-70", "{unmapped} nationalities are not shown on the map" }
                        }
                    )
                }
                Some(Err(e)) => rsx!(ErrorState { message: e.to_string() }),
                None => rsx!(Loading {}),
            }
        }
    )
}
