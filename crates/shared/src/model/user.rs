use serde::{Deserialize, Serialize};

use crate::types::Id;

/// Stored identity
///
/// Usernames are caller supplied and may collide across users; the id
/// is the only unique handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub id: Id,
}

impl User {
    pub fn new<T: Into<String>>(username: T, id: Id) -> Self {
        Self {
            username: username.into(),
            id,
        }
    }
}
