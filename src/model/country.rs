//! Static country → coordinate lookup for the nationality map.
//!
//! This is a presentation filter, not geocoding: names are matched against a fixed table after
//! normalising case and whitespace, and anything not in the table is left off the map.

use serde::{Deserialize, Serialize};

/// (normalised name, latitude, longitude)
const COUNTRY_COORDINATES: &[(&str, f64, f64)] = &[
    ("albania", 41.15, 20.17),
    ("algeria", 28.03, 1.66),
    ("argentina", -38.42, -63.62),
    ("australia", -25.27, 133.78),
    ("austria", 47.52, 14.55),
    ("belgium", 50.50, 4.47),
    ("bosnia and herzegovina", 43.92, 17.68),
    ("brazil", -14.24, -51.93),
    ("cameroon", 7.37, 12.35),
    ("canada", 56.13, -106.35),
    ("chile", -35.68, -71.54),
    ("china", 35.86, 104.20),
    ("colombia", 4.57, -74.30),
    ("costa rica", 9.75, -83.75),
    ("croatia", 45.10, 15.20),
    ("czech republic", 49.82, 15.47),
    ("denmark", 56.26, 9.50),
    ("ecuador", -1.83, -78.18),
    ("egypt", 26.82, 30.80),
    ("england", 52.36, -1.17),
    ("france", 46.23, 2.21),
    ("germany", 51.17, 10.45),
    ("ghana", 7.95, -1.02),
    ("greece", 39.07, 21.82),
    ("hungary", 47.16, 19.50),
    ("iceland", 64.96, -19.02),
    ("iran", 32.43, 53.69),
    ("ireland", 53.41, -8.24),
    ("italy", 41.87, 12.57),
    ("ivory coast", 7.54, -5.55),
    ("jamaica", 18.11, -77.30),
    ("japan", 36.20, 138.25),
    ("mali", 17.57, -4.00),
    ("mexico", 23.63, -102.55),
    ("morocco", 31.79, -7.09),
    ("netherlands", 52.13, 5.29),
    ("new zealand", -40.90, 174.89),
    ("nigeria", 9.08, 8.68),
    ("northern ireland", 54.79, -6.49),
    ("norway", 60.47, 8.47),
    ("paraguay", -23.44, -58.44),
    ("peru", -9.19, -75.02),
    ("poland", 51.92, 19.15),
    ("portugal", 39.40, -8.22),
    ("qatar", 25.35, 51.18),
    ("romania", 45.94, 24.97),
    ("russia", 61.52, 105.32),
    ("saudi arabia", 23.89, 45.08),
    ("scotland", 56.49, -4.20),
    ("senegal", 14.50, -14.45),
    ("serbia", 44.02, 21.01),
    ("slovakia", 48.67, 19.70),
    ("slovenia", 46.15, 14.99),
    ("south africa", -30.56, 22.94),
    ("south korea", 35.91, 127.77),
    ("spain", 40.46, -3.75),
    ("sweden", 60.13, 18.64),
    ("switzerland", 46.82, 8.23),
    ("tunisia", 33.89, 9.54),
    ("turkey", 38.96, 35.24),
    ("ukraine", 48.38, 31.17),
    ("united arab emirates", 23.42, 53.85),
    ("united kingdom", 55.38, -3.44),
    ("united states", 37.09, -95.71),
    ("uruguay", -32.52, -55.77),
    ("venezuela", 6.42, -66.59),
    ("wales", 52.13, -3.78),
];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub country: String,
    pub coordinates: Coordinates,
    pub count: u32,
}

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub fn lookup(country: &str) -> Option<Coordinates> {
    let key = normalize(country);

    COUNTRY_COORDINATES
        .iter()
        .find(|(name, _, _)| *name == key)
        .map(|(_, latitude, longitude)| Coordinates {
            latitude: *latitude,
            longitude: *longitude,
        })
}

/// Builds map points for `(country, count)` pairs, silently dropping unmapped countries.
pub fn plot_points<'a, I>(counts: I) -> Vec<MapPoint>
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    counts
        .into_iter()
        .filter_map(|(country, count)| {
            lookup(country).map(|coordinates| MapPoint {
                country: country.trim().to_string(),
                coordinates,
                count,
            })
        })
        .collect()
}

/// Equirectangular projection into a `width` x `height` SVG viewport.
pub fn project(coordinates: Coordinates, width: f64, height: f64) -> (f64, f64) {
    let x = (coordinates.longitude + 180.0) / 360.0 * width;
    let y = (90.0 - coordinates.latitude) / 180.0 * height;

    (x, y)
}
