use axum::Json;
use chrono::Local;
use shared::{
    api::{payloads::NewExerciseRequest, response_errors::AddExerciseError},
    model::{parse_date, Exercise},
};
use tracing::instrument;

use crate::{
    store::{NewEntry, Store},
    AppError, FormOrJson,
};

/// Log an exercise against a user
#[instrument]
pub async fn add_exercise(
    store: Store,
    FormOrJson(request): FormOrJson<NewExerciseRequest>,
) -> Result<Json<Exercise>, AppError> {
    let NewExerciseRequest {
        user_id,
        description,
        duration,
        date,
    } = request;

    let minutes =
        duration
            .trim()
            .parse::<u32>()
            .map_err(|_| AddExerciseError::InvalidDuration {
                value: duration.clone(),
            })?;

    // Absent and empty both mean today
    let date = match date.as_deref() {
        None | Some("") => Local::now().date_naive(),
        Some(value) => parse_date(value).ok_or_else(|| AddExerciseError::InvalidDate {
            value: value.to_owned(),
        })?,
    };

    let exercise = store
        .add_exercise(
            &user_id,
            NewEntry {
                description,
                duration: minutes,
                date,
            },
        )
        .await
        .ok_or(AddExerciseError::UserNotFound)?;

    Ok(Json(exercise))
}
