use axum::{
    handler::HandlerWithoutStateExt,
    routing::{get, post},
    Router,
};
use shared::api::Object;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::{AppError, AppState};

mod add;
pub use add::*;

mod log;
pub use log::*;

mod new_user;
pub use new_user::*;

mod users;
pub use users::*;

/// The full application router: the API routes, static assets for
/// everything else, and a plain text 404 when neither matches
pub fn router(state: AppState) -> Router {
    let assets_dir = state.args.assets_dir.clone();

    Router::new()
        .route(Object::NewUser.path(), post(new_user))
        .route(Object::Users.path(), get(users))
        .route(Object::Add.path(), post(add_exercise))
        .route(Object::Log.path(), get(log))
        .fallback_service(ServeDir::new(assets_dir).not_found_service(not_found.into_service()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::not_found()
}
