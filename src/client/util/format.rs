use chrono::NaiveDateTime;

pub fn datetime(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

pub fn optional_datetime(value: &Option<NaiveDateTime>) -> String {
    value.as_ref().map(datetime).unwrap_or_else(|| "-".to_string())
}
