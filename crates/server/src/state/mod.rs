use std::sync::Arc;

use axum::extract::FromRef;

use crate::{cli::Cli, store::ExerciseStore};

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<dyn ExerciseStore>,
    pub args: Arc<Cli>,
}

impl AppState {
    pub fn new(store: Arc<dyn ExerciseStore>, args: Arc<Cli>) -> Self {
        Self { store, args }
    }
}

impl FromRef<AppState> for Arc<dyn ExerciseStore> {
    fn from_ref(state: &AppState) -> Self {
        // Arc clone is cheap
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<Cli> {
    fn from_ref(state: &AppState) -> Self {
        state.args.clone()
    }
}
