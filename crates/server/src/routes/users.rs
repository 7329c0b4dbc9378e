use axum::Json;
use shared::model::User;
use tracing::instrument;

use crate::store::Store;

/// Every registered user, oldest first
#[instrument]
pub async fn users(store: Store) -> Json<Vec<User>> {
    Json(store.list_users().await)
}
