use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use axum::async_trait;
use chrono::NaiveDate;
use shared::{
    model::{Exercise, User},
    Id,
};
use tokio::sync::RwLock;

mod handle;
pub use handle::*;

/// The caller-supplied fields of a log entry; the store fills in the
/// id and the owner's username
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub description: String,
    pub duration: u32,
    pub date: NaiveDate,
}

/// Date-range and count filtering for log queries
///
/// Applied in order: drop entries before `from`, drop entries after
/// `to`, truncate to the first `limit` entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl LogFilter {
    pub fn apply(&self, entries: &[Exercise]) -> Vec<Exercise> {
        let matching = entries
            .iter()
            .filter(|e| self.from.map_or(true, |from| e.date >= from))
            .filter(|e| self.to.map_or(true, |to| e.date <= to))
            .cloned();

        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}

/// Repository seam between the request handlers and whatever holds the
/// records
///
/// Lookups return `Option` rather than failing; the handlers decide how
/// a missing user surfaces to the client
#[async_trait]
pub trait ExerciseStore: fmt::Debug + Send + Sync {
    /// Create a user with a fresh id. Usernames are not deduplicated;
    /// two users may share one
    async fn add_user(&self, username: String) -> User;

    /// Every user, in registration order
    async fn list_users(&self) -> Vec<User>;

    /// `None` for an id that was never issued
    async fn find_user(&self, id: &Id) -> Option<User>;

    /// Append a log entry for `user_id`. `None` when the user is
    /// unknown, in which case nothing is stored
    async fn add_exercise(&self, user_id: &Id, entry: NewEntry) -> Option<Exercise>;

    /// The user's entries with `filter` applied, oldest first. `None`
    /// when the user is unknown
    async fn query_log(&self, user_id: &Id, filter: LogFilter) -> Option<(User, Vec<Exercise>)>;
}

#[derive(Debug, Default)]
struct Records {
    users: HashMap<Id, User>,
    user_order: Vec<Id>,
    entries: HashMap<Id, Vec<Exercise>>,
    issued: HashSet<Id>,
}

impl Records {
    /// Ids are unique across users and entries and never reissued
    fn issue_id(&mut self) -> Id {
        loop {
            let id = Id::generate();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}

/// Process-lifetime store; every record lives and dies with the server
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
}

#[async_trait]
impl ExerciseStore for MemoryStore {
    async fn add_user(&self, username: String) -> User {
        let mut records = self.records.write().await;
        let id = records.issue_id();
        let user = User::new(username, id.clone());
        records.user_order.push(id.clone());
        records.users.insert(id, user.clone());
        user
    }

    async fn list_users(&self) -> Vec<User> {
        let records = self.records.read().await;
        records
            .user_order
            .iter()
            .filter_map(|id| records.users.get(id))
            .cloned()
            .collect()
    }

    async fn find_user(&self, id: &Id) -> Option<User> {
        self.records.read().await.users.get(id).cloned()
    }

    async fn add_exercise(&self, user_id: &Id, entry: NewEntry) -> Option<Exercise> {
        // Owner lookup and append share one write guard
        let mut records = self.records.write().await;
        let username = records.users.get(user_id)?.username.clone();

        let id = records.issue_id();
        let exercise = Exercise {
            id,
            user_id: user_id.clone(),
            username,
            description: entry.description,
            duration: entry.duration,
            date: entry.date,
        };

        records
            .entries
            .entry(user_id.clone())
            .or_default()
            .push(exercise.clone());

        Some(exercise)
    }

    async fn query_log(&self, user_id: &Id, filter: LogFilter) -> Option<(User, Vec<Exercise>)> {
        let records = self.records.read().await;
        let user = records.users.get(user_id)?.clone();
        let log = records
            .entries
            .get(user_id)
            .map(|entries| filter.apply(entries))
            .unwrap_or_default();

        Some((user, log))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(description: &str, date: NaiveDate) -> NewEntry {
        NewEntry {
            description: description.to_owned(),
            duration: 30,
            date,
        }
    }

    #[tokio::test]
    async fn users_list_in_registration_order() {
        let store = MemoryStore::default();
        let a = store.add_user("alice".to_owned()).await;
        let b = store.add_user("bob".to_owned()).await;
        let c = store.add_user("carol".to_owned()).await;

        assert_eq!(store.list_users().await, vec![a, b, c]);
    }

    #[tokio::test]
    async fn shared_usernames_get_distinct_ids() {
        let store = MemoryStore::default();
        let first = store.add_user("alice".to_owned()).await;
        let second = store.add_user("alice".to_owned()).await;

        assert_ne!(first.id, second.id);
        assert_eq!(store.list_users().await, vec![first, second]);
    }

    #[tokio::test]
    async fn find_user_is_an_option_not_a_failure() {
        let store = MemoryStore::default();
        let user = store.add_user("alice".to_owned()).await;

        assert_eq!(store.find_user(&user.id).await, Some(user));
        assert_eq!(store.find_user(&Id::from("missing1")).await, None);
    }

    #[tokio::test]
    async fn entries_get_their_own_ids() {
        let store = MemoryStore::default();
        let user = store.add_user("alice".to_owned()).await;

        let first = store
            .add_exercise(&user.id, entry("rowing", date(2020, 1, 1)))
            .await
            .unwrap();
        let second = store
            .add_exercise(&user.id, entry("rowing", date(2020, 1, 1)))
            .await
            .unwrap();

        // Two identical submissions must stay distinguishable
        assert_ne!(first.id, second.id);
        assert_ne!(first.id, user.id);
        assert_eq!(first.user_id, user.id);
        assert_eq!(first.username, "alice");
    }

    #[tokio::test]
    async fn adding_for_an_unknown_user_stores_nothing() {
        let store = MemoryStore::default();
        let user = store.add_user("alice".to_owned()).await;

        let unknown = Id::from("missing1");
        assert_eq!(
            store
                .add_exercise(&unknown, entry("rowing", date(2020, 1, 1)))
                .await,
            None
        );

        let (_, log) = store.query_log(&user.id, LogFilter::default()).await.unwrap();
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn querying_an_unknown_user_is_none_not_a_panic() {
        let store = MemoryStore::default();
        assert_eq!(
            store
                .query_log(&Id::from("missing1"), LogFilter::default())
                .await,
            None
        );
    }

    #[tokio::test]
    async fn log_comes_back_oldest_first_with_no_filter() {
        let store = MemoryStore::default();
        let user = store.add_user("alice".to_owned()).await;

        store
            .add_exercise(&user.id, entry("january", date(2020, 1, 1)))
            .await
            .unwrap();
        store
            .add_exercise(&user.id, entry("february", date(2020, 2, 1)))
            .await
            .unwrap();

        let (found, log) = store.query_log(&user.id, LogFilter::default()).await.unwrap();
        assert_eq!(found, user);
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].description, "january");
        assert_eq!(log[1].description, "february");
    }

    #[tokio::test]
    async fn filter_applies_from_then_to_then_limit() {
        let store = MemoryStore::default();
        let user = store.add_user("alice".to_owned()).await;

        for (description, d) in [
            ("january", date(2020, 1, 1)),
            ("february", date(2020, 2, 1)),
            ("march", date(2020, 3, 1)),
        ] {
            store.add_exercise(&user.id, entry(description, d)).await.unwrap();
        }

        let from = LogFilter {
            from: Some(date(2020, 1, 15)),
            ..Default::default()
        };
        let (_, log) = store.query_log(&user.id, from).await.unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].description, "february");
        assert_eq!(log[1].description, "march");

        let window = LogFilter {
            from: Some(date(2020, 1, 15)),
            to: Some(date(2020, 2, 15)),
            limit: None,
        };
        let (_, log) = store.query_log(&user.id, window).await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].description, "february");

        // Limit takes a prefix of what survives the date filters
        let limited = LogFilter {
            from: Some(date(2020, 1, 15)),
            to: None,
            limit: Some(1),
        };
        let (_, log) = store.query_log(&user.id, limited).await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].description, "february");
    }

    #[test]
    fn filter_boundaries_are_inclusive() {
        let sample = Exercise {
            id: Id::from("entry001"),
            user_id: Id::from("user0001"),
            username: "alice".to_owned(),
            description: "rowing".to_owned(),
            duration: 30,
            date: date(2020, 2, 1),
        };

        let filter = LogFilter {
            from: Some(date(2020, 2, 1)),
            to: Some(date(2020, 2, 1)),
            limit: None,
        };
        assert_eq!(filter.apply(std::slice::from_ref(&sample)), vec![sample]);
    }

    #[test]
    fn zero_limit_empties_the_log() {
        let filter = LogFilter {
            limit: Some(0),
            ..Default::default()
        };
        let sample = Exercise {
            id: Id::from("entry001"),
            user_id: Id::from("user0001"),
            username: "alice".to_owned(),
            description: "rowing".to_owned(),
            duration: 30,
            date: date(2020, 2, 1),
        };
        assert!(filter.apply(&[sample]).is_empty());
    }
}
