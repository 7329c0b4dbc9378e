use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Id;

/// Calendar-date format accepted from clients (`2020-01-15`)
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single logged activity entry
///
/// The owner's username is denormalized in at creation time and never
/// refreshed afterwards. `date` carries no time component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Id,
    pub user_id: Id,
    pub username: String,
    pub description: String,
    pub duration: u32,
    #[serde(with = "log_date")]
    pub date: NaiveDate,
}

/// Parse a caller-supplied calendar date, `2020-01-15` style
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), INPUT_DATE_FORMAT).ok()
}

/// Log entries render their date the way the log has always shown it:
/// `Wed Jan 15 2020`
pub mod log_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%a %b %d %Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entry(date: NaiveDate) -> Exercise {
        Exercise {
            id: Id::from("exrcse01"),
            user_id: Id::from("user0001"),
            username: "alice".to_owned(),
            description: "jogging".to_owned(),
            duration: 30,
            date,
        }
    }

    #[test]
    fn date_renders_human_readable_without_time() {
        let exercise = entry(NaiveDate::from_ymd_opt(2020, 1, 15).unwrap());
        let value = serde_json::to_value(&exercise).unwrap();
        assert_eq!(value["date"], json!("Wed Jan 15 2020"));
    }

    #[test]
    fn json_uses_camel_case_user_id() {
        let exercise = entry(NaiveDate::from_ymd_opt(2020, 1, 15).unwrap());
        let value = serde_json::to_value(&exercise).unwrap();
        assert_eq!(value["userId"], json!("user0001"));
        assert_eq!(value["duration"], json!(30));
    }

    #[test]
    fn log_date_round_trips() {
        let exercise = entry(NaiveDate::from_ymd_opt(2021, 12, 5).unwrap());
        let text = serde_json::to_string(&exercise).unwrap();
        let back: Exercise = serde_json::from_str(&text).unwrap();
        assert_eq!(back, exercise);
    }

    #[test]
    fn parse_date_accepts_iso_calendar_dates() {
        assert_eq!(
            parse_date("2020-01-15"),
            NaiveDate::from_ymd_opt(2020, 1, 15)
        );
        assert_eq!(parse_date(" 2020-01-15 "), NaiveDate::from_ymd_opt(2020, 1, 15));
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2020-13-40"), None);
        assert_eq!(parse_date(""), None);
    }
}
