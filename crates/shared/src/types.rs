use std::fmt;

use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

/// Number of characters in a generated [`Id`]
pub const ID_LEN: usize = 8;

/// Opaque short identifier handed out for users and log entries
///
/// Generation is random; uniqueness is the store's responsibility (it
/// re-rolls on collision and never reissues an id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self(
            (0..ID_LEN)
                .map(|_| char::from(rng.sample(Alphanumeric)))
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
