use super::{load_json, load_json_for_update, save_json};
use crate::database::models::{PostRecord, UserRecord};
use crate::database::Database;
use crate::utils::now_utc_iso;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostInput {
    pub content: String,
    #[serde(default)]
    pub reply_to: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum Engagement {
    Like,
    Repost,
}

impl Engagement {
    fn as_str(self) -> &'static str {
        match self {
            Engagement::Like => "like",
            Engagement::Repost => "repost",
        }
    }
}

/// The ordered post collection, newest first.
#[derive(Clone)]
pub struct PostStore {
    database: Database,
    key: String,
}

impl PostStore {
    pub(super) fn new(database: Database, key: String) -> Self {
        Self { database, key }
    }

    #[cfg(test)]
    pub(crate) fn database(&self) -> &Database {
        &self.database
    }

    pub fn list(&self) -> Vec<PostRecord> {
        load_json(&self.database, &self.key).unwrap_or_default()
    }

    pub fn get(&self, id: &str) -> Option<PostRecord> {
        self.list().into_iter().find(|post| post.id == id)
    }

    /// Stores a new post authored by `author`. Content is not validated here.
    pub fn create(&self, input: CreatePostInput, author: &UserRecord) -> Result<PostRecord> {
        let mut posts = self.load_for_update()?;
        let record = PostRecord {
            id: Uuid::new_v4().to_string(),
            content: input.content,
            author_name: author.display_name.clone(),
            author_id: author.id.clone(),
            created_at: now_utc_iso(),
            likes: 0,
            liked_by: Vec::new(),
            reposts: 0,
            reposted_by: Vec::new(),
            reply_to: input.reply_to,
            replies: Vec::new(),
        };

        if let Some(parent_id) = record.reply_to.as_deref() {
            match posts.iter_mut().find(|post| post.id == parent_id) {
                Some(parent) => parent.replies.push(record.id.clone()),
                None => tracing::debug!(parent_id, "reply parent not found; storing unlinked"),
            }
        }

        posts.insert(0, record.clone());
        self.save(&posts)?;
        tracing::debug!(post_id = %record.id, reply_to = ?record.reply_to, "post created");
        Ok(record)
    }

    /// Removes the post. Reply links held by other posts are left untouched.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut posts = self.load_for_update()?;
        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            return Ok(());
        }
        self.save(&posts)?;
        tracing::debug!(post_id = id, "post deleted");
        Ok(())
    }

    pub fn like(&self, post_id: &str, user_id: &str) -> Result<()> {
        self.engage(post_id, user_id, Engagement::Like, true)
    }

    pub fn unlike(&self, post_id: &str, user_id: &str) -> Result<()> {
        self.engage(post_id, user_id, Engagement::Like, false)
    }

    pub fn repost(&self, post_id: &str, user_id: &str) -> Result<()> {
        self.engage(post_id, user_id, Engagement::Repost, true)
    }

    pub fn unrepost(&self, post_id: &str, user_id: &str) -> Result<()> {
        self.engage(post_id, user_id, Engagement::Repost, false)
    }

    fn engage(&self, post_id: &str, user_id: &str, kind: Engagement, add: bool) -> Result<()> {
        let mut posts = self.load_for_update()?;
        let Some(post) = posts.iter_mut().find(|post| post.id == post_id) else {
            return Ok(());
        };

        let (members, count) = match kind {
            Engagement::Like => (&mut post.liked_by, &mut post.likes),
            Engagement::Repost => (&mut post.reposted_by, &mut post.reposts),
        };
        let present = members.iter().any(|id| id == user_id);
        if present == add {
            return Ok(());
        }
        if add {
            members.push(user_id.to_string());
        } else {
            members.retain(|id| id != user_id);
        }
        *count = members.len() as u32;

        self.save(&posts)?;
        tracing::debug!(post_id, user_id, kind = kind.as_str(), add, "engagement updated");
        Ok(())
    }

    fn load_for_update(&self) -> Result<Vec<PostRecord>> {
        Ok(load_json_for_update(&self.database, &self.key)?.unwrap_or_default())
    }

    fn save(&self, posts: &[PostRecord]) -> Result<()> {
        save_json(&self.database, &self.key, posts)
    }
}
