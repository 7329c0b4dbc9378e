use serde::{Deserialize, Deserializer, Serialize};

use crate::{model::Exercise, types::Id};

/// Body accepted by the new-user endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserRequest {
    pub username: String,
}

/// Body accepted by the add endpoint
///
/// Form posts deliver every value as a string, so `duration` and `date`
/// arrive raw here and are parsed by the handler, which owns the typed
/// rejection for malformed values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExerciseRequest {
    pub user_id: Id,
    pub description: String,
    #[serde(deserialize_with = "string_or_number")]
    pub duration: String,
    pub date: Option<String>,
}

/// Query parameters accepted by the log endpoint, unparsed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogQuery {
    pub user_id: Option<Id>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// One user's filtered exercise log
///
/// `id` is the user's id and `count` the post-filter length of `log`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub id: Id,
    pub username: String,
    pub count: usize,
    pub log: Vec<Exercise>,
}

/// JSON clients send `"duration": 30` as readily as `"duration": "30"`;
/// accept both and hand the handler a string either way
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(value) => value,
        StringOrNumber::Number(value) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_accepts_a_string() {
        let request: NewExerciseRequest = serde_json::from_str(
            r#"{"userId": "user0001", "description": "rowing", "duration": "30"}"#,
        )
        .unwrap();
        assert_eq!(request.duration, "30");
        assert_eq!(request.date, None);
    }

    #[test]
    fn duration_accepts_a_number() {
        let request: NewExerciseRequest = serde_json::from_str(
            r#"{"userId": "user0001", "description": "rowing", "duration": 30, "date": "2020-01-15"}"#,
        )
        .unwrap();
        assert_eq!(request.duration, "30");
        assert_eq!(request.date.as_deref(), Some("2020-01-15"));
    }

    #[test]
    fn log_query_fields_are_all_optional() {
        let query: LogQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, LogQuery::default());
    }
}
