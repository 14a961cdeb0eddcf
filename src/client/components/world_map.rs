use dioxus::prelude::*;

use crate::model::country::{project, MapPoint};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 360.0;

/// Marker radius grows with the square root of the count so large groups stay readable
fn radius(count: u32) -> f64 {
    4.0 + (count as f64).sqrt() * 3.0
}

#[component]
pub fn WorldMap(points: Vec<MapPoint>) -> Element {
    rsx!(
        svg {
            class: "w-full h-auto bg-base-200 rounded-box",
            view_box: "0 0 {WIDTH} {HEIGHT}",
            // Graticule
            {(1..12).map(|i| {
                let x = WIDTH / 12.0 * i as f64;
                rsx!(line { key: "lon-{i}", x1: "{x}", y1: "0", x2: "{x}", y2: "{HEIGHT}", stroke: "currentColor", stroke_opacity: "0.08" })
            })}
            {(1..6).map(|i| {
                let y = HEIGHT / 6.0 * i as f64;
                rsx!(line { key: "lat-{i}", x1: "0", y1: "{y}", x2: "{WIDTH}", y2: "{y}", stroke: "currentColor", stroke_opacity: "0.08" })
            })}
            {points.iter().map(|point| {
                let (x, y) = project(point.coordinates, WIDTH, HEIGHT);
                let r = radius(point.count);
                let label_y = y - r - 2.0;
                rsx!(
                    g { key: "{point.country}",
                        circle {
                            cx: "{x}",
                            cy: "{y}",
                            r: "{r}",
                            fill: "oklch(0.65 0.2 250)",
                            fill_opacity: "0.7",
                            title { "{point.country}: {point.count}" }
                        }
                        text {
                            x: "{x}",
                            y: "{label_y}",
                            text_anchor: "middle",
                            font_size: "9",
                            fill: "currentColor",
                            "{point.country} ({point.count})"
                        }
                    }
                )
            })}
        }
    )
}
