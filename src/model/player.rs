use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const MIN_LEAGUE_BAND: i16 = 1;
pub const MAX_LEAGUE_BAND: i16 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum VisaType {
    Schengen,
    UkGbe,
    UsP1,
    CanadaWorkPermit,
    UaeResidence,
    JapanSpecifiedSkilled,
}

impl VisaType {
    pub const ALL: [VisaType; 6] = [
        VisaType::Schengen,
        VisaType::UkGbe,
        VisaType::UsP1,
        VisaType::CanadaWorkPermit,
        VisaType::UaeResidence,
        VisaType::JapanSpecifiedSkilled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VisaType::Schengen => "Schengen",
            VisaType::UkGbe => "UK GBE",
            VisaType::UsP1 => "US P-1",
            VisaType::CanadaWorkPermit => "Canada Work Permit",
            VisaType::UaeResidence => "UAE Residence",
            VisaType::JapanSpecifiedSkilled => "Japan Specified Skilled",
        }
    }
}

/// Per-visa eligibility scores, each 0–100
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EligibilityScores {
    pub schengen: i16,
    pub uk_gbe: i16,
    pub us_p1: i16,
    pub canada_work_permit: i16,
    pub uae_residence: i16,
    pub japan_specified_skilled: i16,
}

impl EligibilityScores {
    pub fn get(&self, visa: VisaType) -> i16 {
        match visa {
            VisaType::Schengen => self.schengen,
            VisaType::UkGbe => self.uk_gbe,
            VisaType::UsP1 => self.us_p1,
            VisaType::CanadaWorkPermit => self.canada_work_permit,
            VisaType::UaeResidence => self.uae_residence,
            VisaType::JapanSpecifiedSkilled => self.japan_specified_skilled,
        }
    }

    /// Rounded mean of all six scores
    pub fn overall(&self) -> i16 {
        let total: i32 = VisaType::ALL
            .iter()
            .map(|visa| self.get(*visa) as i32)
            .sum();

        ((total as f64) / VisaType::ALL.len() as f64).round() as i16
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PlayerDto {
    pub id: i32,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
    pub current_club: String,
    pub current_league: String,
    pub league_band: i16,
    pub international_caps: i32,
    pub minutes_played: i32,
    pub medical_available: bool,
    pub gps_available: bool,
    pub scores: EligibilityScores,
    pub overall_score: i16,
    pub updated_at: NaiveDateTime,
}

/// Body for creating or updating a player record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PlayerFormDto {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
    pub current_club: String,
    pub current_league: String,
    pub league_band: i16,
    pub international_caps: i32,
    pub minutes_played: i32,
    pub medical_available: bool,
    pub gps_available: bool,
}

impl PlayerFormDto {
    /// Returns a message describing the first invalid field, if any.
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("Player name is required".to_string());
        }
        if self.nationality.trim().is_empty() {
            return Err("Nationality is required".to_string());
        }
        if !(MIN_LEAGUE_BAND..=MAX_LEAGUE_BAND).contains(&self.league_band) {
            return Err(format!(
                "League band must be between {} and {}",
                MIN_LEAGUE_BAND, MAX_LEAGUE_BAND
            ));
        }
        if self.international_caps < 0 || self.minutes_played < 0 {
            return Err("Caps and minutes played cannot be negative".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PlayerFormDto {
        PlayerFormDto {
            full_name: "Kwame Mensah".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2001, 4, 12).unwrap(),
            nationality: "Ghana".to_string(),
            current_club: "Accra Lions".to_string(),
            current_league: "Ghana Premier League".to_string(),
            league_band: 4,
            international_caps: 3,
            minutes_played: 1800,
            medical_available: true,
            gps_available: false,
        }
    }

    #[test]
    fn rejects_league_band_outside_range() {
        let mut player = form();
        assert!(player.validate().is_ok());

        player.league_band = 0;
        assert!(player.validate().is_err());

        player.league_band = 6;
        assert!(player.validate().is_err());
    }

    #[test]
    fn overall_is_rounded_mean() {
        let scores = EligibilityScores {
            schengen: 80,
            uk_gbe: 61,
            us_p1: 70,
            canada_work_permit: 70,
            uae_residence: 90,
            japan_specified_skilled: 50,
        };

        // 421 / 6 = 70.17
        assert_eq!(scores.overall(), 70);
    }
}
