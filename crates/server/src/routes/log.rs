use axum::{extract::Query, Json};
use chrono::NaiveDate;
use shared::{
    api::{
        payloads::{LogQuery, LogResponse},
        response_errors::LogError,
    },
    model::parse_date,
};
use tracing::instrument;

use crate::{
    store::{LogFilter, Store},
    AppError,
};

/// One user's exercise log, with optional date-range and count filters
#[instrument]
pub async fn log(
    store: Store,
    Query(query): Query<LogQuery>,
) -> Result<Json<LogResponse>, AppError> {
    let user_id = match query.user_id {
        Some(id) if !id.is_empty() => id,
        _ => Err(LogError::MissingUserId)?,
    };

    let filter = LogFilter {
        from: parse_date_param(&query.from, "from")?,
        to: parse_date_param(&query.to, "to")?,
        limit: parse_limit(&query.limit)?,
    };

    let (user, log) = store
        .query_log(&user_id, filter)
        .await
        .ok_or(LogError::UserNotFound)?;

    Ok(Json(LogResponse {
        id: user.id,
        username: user.username,
        count: log.len(),
        log,
    }))
}

// Empty parameters count as absent rather than malformed
fn parse_date_param(value: &Option<String>, field: &str) -> Result<Option<NaiveDate>, LogError> {
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| LogError::InvalidDate {
                field: field.to_owned(),
                value: raw.to_owned(),
            }),
    }
}

fn parse_limit(value: &Option<String>) -> Result<Option<usize>, LogError> {
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| LogError::InvalidLimit {
                value: raw.to_owned(),
            }),
    }
}
