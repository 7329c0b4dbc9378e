use axum::Json;
use shared::{api::payloads::NewUserRequest, model::User};
use tracing::instrument;

use crate::{store::Store, FormOrJson};

/// Register a user
///
/// Usernames are stored as supplied: no validation, no duplicate check
#[instrument]
pub async fn new_user(
    store: Store,
    FormOrJson(request): FormOrJson<NewUserRequest>,
) -> Json<User> {
    Json(store.add_user(request.username).await)
}
