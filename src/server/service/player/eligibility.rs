//! Visa eligibility scoring.
//!
//! Each visa type scores 0 to 100. A weighted sum of four player factors is scaled by the league
//! band multiplier:
//!
//! | visa | base | caps | minutes | medical | gps |
//! |---|---|---|---|---|---|
//! | schengen | 30 | 20 | 30 | 10 | 10 |
//! | uk_gbe | 10 | 45 | 30 | 10 | 5 |
//! | us_p1 | 20 | 30 | 30 | 10 | 10 |
//! | canada_work_permit | 35 | 15 | 30 | 10 | 10 |
//! | uae_residence | 40 | 15 | 25 | 10 | 10 |
//! | japan_specified_skilled | 30 | 15 | 25 | 20 | 10 |
//!
//! Caps saturate at [`CAPS_CEILING`] and minutes at [`MINUTES_CEILING`]. Band 1 keeps the full
//! score and every weaker band removes another tenth, so band 5 keeps 60%.

use crate::model::player::{EligibilityScores, PlayerFormDto, MAX_LEAGUE_BAND, MIN_LEAGUE_BAND};

pub const CAPS_CEILING: i32 = 30;
/// Thirty full matches
pub const MINUTES_CEILING: i32 = 2700;

struct Weights {
    base: f64,
    caps: f64,
    minutes: f64,
    medical: f64,
    gps: f64,
}

const SCHENGEN: Weights = Weights {
    base: 30.0,
    caps: 20.0,
    minutes: 30.0,
    medical: 10.0,
    gps: 10.0,
};
const UK_GBE: Weights = Weights {
    base: 10.0,
    caps: 45.0,
    minutes: 30.0,
    medical: 10.0,
    gps: 5.0,
};
const US_P1: Weights = Weights {
    base: 20.0,
    caps: 30.0,
    minutes: 30.0,
    medical: 10.0,
    gps: 10.0,
};
const CANADA_WORK_PERMIT: Weights = Weights {
    base: 35.0,
    caps: 15.0,
    minutes: 30.0,
    medical: 10.0,
    gps: 10.0,
};
const UAE_RESIDENCE: Weights = Weights {
    base: 40.0,
    caps: 15.0,
    minutes: 25.0,
    medical: 10.0,
    gps: 10.0,
};
const JAPAN_SPECIFIED_SKILLED: Weights = Weights {
    base: 30.0,
    caps: 15.0,
    minutes: 25.0,
    medical: 20.0,
    gps: 10.0,
};

pub fn league_band_multiplier(league_band: i16) -> f64 {
    let band = league_band.clamp(MIN_LEAGUE_BAND, MAX_LEAGUE_BAND);

    1.0 - 0.1 * f64::from(band - MIN_LEAGUE_BAND)
}

pub fn score(player: &PlayerFormDto) -> EligibilityScores {
    let factors = Factors::from(player);

    EligibilityScores {
        schengen: factors.apply(&SCHENGEN),
        uk_gbe: factors.apply(&UK_GBE),
        us_p1: factors.apply(&US_P1),
        canada_work_permit: factors.apply(&CANADA_WORK_PERMIT),
        uae_residence: factors.apply(&UAE_RESIDENCE),
        japan_specified_skilled: factors.apply(&JAPAN_SPECIFIED_SKILLED),
    }
}

struct Factors {
    multiplier: f64,
    caps: f64,
    minutes: f64,
    medical: f64,
    gps: f64,
}

impl From<&PlayerFormDto> for Factors {
    fn from(player: &PlayerFormDto) -> Self {
        let ratio =
            |value: i32, ceiling: i32| f64::from(value.clamp(0, ceiling)) / f64::from(ceiling);
        let flag = |value: bool| if value { 1.0 } else { 0.0 };

        Self {
            multiplier: league_band_multiplier(player.league_band),
            caps: ratio(player.international_caps, CAPS_CEILING),
            minutes: ratio(player.minutes_played, MINUTES_CEILING),
            medical: flag(player.medical_available),
            gps: flag(player.gps_available),
        }
    }
}

impl Factors {
    fn apply(&self, weights: &Weights) -> i16 {
        let raw = weights.base
            + weights.caps * self.caps
            + weights.minutes * self.minutes
            + weights.medical * self.medical
            + weights.gps * self.gps;

        (raw * self.multiplier).round().clamp(0.0, 100.0) as i16
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn player(
        league_band: i16,
        caps: i32,
        minutes: i32,
        medical: bool,
        gps: bool,
    ) -> PlayerFormDto {
        PlayerFormDto {
            full_name: "Yuki Tanaka".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1999, 9, 3).unwrap(),
            nationality: "Japan".to_string(),
            current_club: "Kashima".to_string(),
            current_league: "J1 League".to_string(),
            league_band,
            international_caps: caps,
            minutes_played: minutes,
            medical_available: medical,
            gps_available: gps,
        }
    }

    #[test]
    fn complete_profile_in_top_band_scores_full_marks() {
        let scores = score(&player(1, 30, 2700, true, true));

        assert_eq!(
            scores,
            EligibilityScores {
                schengen: 100,
                uk_gbe: 100,
                us_p1: 100,
                canada_work_permit: 100,
                uae_residence: 100,
                japan_specified_skilled: 100,
            }
        );
        assert_eq!(scores.overall(), 100);
    }

    #[test]
    fn weakest_band_keeps_sixty_percent() {
        let scores = score(&player(5, 30, 2700, true, true));

        assert_eq!(scores.schengen, 60);
        assert_eq!(scores.overall(), 60);
    }

    #[test]
    fn caps_and_minutes_saturate() {
        assert_eq!(
            score(&player(2, 30, 2700, false, false)),
            score(&player(2, 120, 9000, false, false))
        );
    }

    #[test]
    fn empty_profile_scores_base_only() {
        let scores = score(&player(1, 0, 0, false, false));

        assert_eq!(scores.schengen, 30);
        assert_eq!(scores.uk_gbe, 10);
        assert_eq!(scores.uae_residence, 40);
    }

    #[test]
    fn band_multiplier_steps_by_tenths() {
        let multipliers: Vec<f64> = (1..=5).map(league_band_multiplier).collect();

        for (actual, expected) in multipliers.iter().zip([1.0, 0.9, 0.8, 0.7, 0.6]) {
            assert!((actual - expected).abs() < 1e-9);
        }
    }
}
