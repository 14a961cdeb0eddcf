use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AuditLogDto {
    pub id: i32,
    pub actor_id: Option<i32>,
    pub action: String,
    pub subject_type: String,
    pub subject_id: Option<i32>,
    pub detail: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FederationPaymentDto {
    pub id: i32,
    pub federation: String,
    pub description: String,
    /// Amount in minor currency units
    pub amount: i64,
    pub currency: String,
    pub paid_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FeeScheduleDto {
    pub id: i32,
    pub action_code: String,
    pub description: String,
    /// Amount in minor currency units
    pub amount: i64,
    pub currency: String,
    pub effective_from: NaiveDate,
}

/// Formats minor currency units as `12.50 EUR`
pub fn format_amount(amount: i64, currency: &str) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let amount = amount.unsigned_abs();

    format!("{}{}.{:02} {}", sign, amount / 100, amount % 100, currency)
}

#[cfg(test)]
mod tests {
    use super::format_amount;

    #[test]
    fn formats_minor_units() {
        assert_eq!(format_amount(1250, "EUR"), "12.50 EUR");
        assert_eq!(format_amount(5, "GBP"), "0.05 GBP");
        assert_eq!(format_amount(-300, "USD"), "-3.00 USD");
    }
}
