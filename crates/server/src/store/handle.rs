use std::{ops::Deref, sync::Arc};

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};

use super::ExerciseStore;

/// Request extractor handing routes the shared store
#[derive(Debug, Clone)]
pub struct Store(pub Arc<dyn ExerciseStore>);

impl From<Arc<dyn ExerciseStore>> for Store {
    fn from(store: Arc<dyn ExerciseStore>) -> Self {
        Store(store)
    }
}

impl Deref for Store {
    type Target = Arc<dyn ExerciseStore>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Store
where
    S: Send + Sync,
    Arc<dyn ExerciseStore>: FromRef<S>,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let store = <Arc<dyn ExerciseStore>>::from_ref(state);

        Ok(store.into())
    }
}
