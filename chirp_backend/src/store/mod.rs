//! Local data store for posts and the current user.
//!
//! Each collection lives under its own key as a JSON document. Every call
//! loads the whole document, mutates it in memory and writes it back.

mod posts;
mod users;

pub use posts::{CreatePostInput, PostStore};
pub use users::{UpdateUserInput, UserStore, DEFAULT_DISPLAY_NAME};

use crate::config::StorageKeys;
use crate::database::repositories::KeyValueRepository;
use crate::database::Database;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Clone)]
pub struct DataStore {
    posts: PostStore,
    users: UserStore,
}

impl DataStore {
    pub fn new(database: Database, keys: &StorageKeys) -> Self {
        Self {
            posts: PostStore::new(database.clone(), keys.posts.clone()),
            users: UserStore::new(database, keys.user.clone()),
        }
    }

    pub fn posts(&self) -> &PostStore {
        &self.posts
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }
}

/// Reads and decodes the value under `key`. Missing, unreadable or corrupt
/// values all come back as `None`.
fn load_json<T: DeserializeOwned>(database: &Database, key: &str) -> Option<T> {
    match load_json_for_update(database, key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to read stored value");
            None
        }
    }
}

/// Loads the value under `key` ahead of a write. Backend failures are errors
/// so a caller never overwrites a document it could not read; undecodable
/// values are discarded and read as `None`.
fn load_json_for_update<T: DeserializeOwned>(database: &Database, key: &str) -> Result<Option<T>> {
    let raw = database
        .with_repositories(|repos| repos.kv().get(key))
        .with_context(|| format!("failed to read key '{key}'"))?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding undecodable stored value");
            Ok(None)
        }
    }
}

fn save_json<T: Serialize + ?Sized>(database: &Database, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)
        .with_context(|| format!("failed to encode value for key '{key}'"))?;
    database
        .with_repositories(|repos| repos.kv().set(key, &raw))
        .with_context(|| format!("failed to persist key '{key}'"))
}
