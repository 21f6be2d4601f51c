use super::{load_json, load_json_for_update, save_json};
use crate::database::models::UserRecord;
use crate::database::Database;
use crate::utils::now_utc_iso;
use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_DISPLAY_NAME: &str = "Anonymous User";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserInput {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Slot holding the single local profile.
#[derive(Clone)]
pub struct UserStore {
    database: Database,
    key: String,
}

impl UserStore {
    pub(super) fn new(database: Database, key: String) -> Self {
        Self { database, key }
    }

    pub fn get(&self) -> Option<UserRecord> {
        load_json(&self.database, &self.key)
    }

    pub fn set(&self, user: &UserRecord) -> Result<()> {
        save_json(&self.database, &self.key, user)
    }

    /// Merges the given fields into the stored profile. Does nothing when no
    /// profile exists yet.
    pub fn update(&self, input: UpdateUserInput) -> Result<()> {
        let Some(mut user) = self.load_for_update()? else {
            return Ok(());
        };
        if let Some(display_name) = input.display_name {
            user.display_name = display_name;
        }
        if let Some(bio) = input.bio {
            user.bio = bio;
        }
        self.set(&user)
    }

    fn load_for_update(&self) -> Result<Option<UserRecord>> {
        load_json_for_update(&self.database, &self.key)
    }

    pub fn initialize(&self) -> Result<UserRecord> {
        if let Some(existing) = self.load_for_update()? {
            return Ok(existing);
        }
        let suffix: u32 = rand::rng().random_range(0..10_000);
        let user = UserRecord {
            id: Uuid::new_v4().to_string(),
            name: format!("user{suffix}"),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            bio: String::new(),
            created_at: now_utc_iso(),
        };
        self.set(&user)?;
        tracing::info!(user_id = %user.id, handle = %user.name, "created local profile");
        Ok(user)
    }
}
