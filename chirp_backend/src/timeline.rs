use crate::database::models::{PostRecord, UserRecord};
use crate::store::{CreatePostInput, DataStore, UpdateUserInput};
use crate::validation;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// User-facing flows on top of [`DataStore`]: validation, the acting user and
/// timeline filtering.
#[derive(Clone)]
pub struct TimelineService {
    store: DataStore,
}

impl TimelineService {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Top-level posts, newest first.
    pub fn home(&self) -> Vec<PostRecord> {
        self.store
            .posts()
            .list()
            .into_iter()
            .filter(|post| !post.is_reply())
            .collect()
    }

    pub fn replies_to(&self, post_id: &str) -> Vec<PostRecord> {
        self.store
            .posts()
            .list()
            .into_iter()
            .filter(|post| post.reply_to.as_deref() == Some(post_id))
            .collect()
    }

    pub fn thread(&self, post_id: &str) -> Option<ThreadView> {
        let post = self.store.posts().get(post_id)?;
        let replies = self.replies_to(post_id);
        Some(ThreadView { post, replies })
    }

    pub fn current_user(&self) -> Result<UserRecord> {
        self.store
            .users()
            .initialize()
            .context("failed to initialize local profile")
    }

    pub fn compose(&self, content: &str, reply_to: Option<String>) -> Result<PostRecord> {
        let content = validation::post_content(content)?;
        if let Some(parent_id) = reply_to.as_deref() {
            if self.store.posts().get(parent_id).is_none() {
                anyhow::bail!("post {parent_id} not found");
            }
        }
        let author = self.current_user()?;
        self.store
            .posts()
            .create(CreatePostInput { content, reply_to }, &author)
    }

    /// Likes the post, or removes the like if the current user already gave
    /// one. Returns the new state, or `None` when the post does not exist.
    pub fn toggle_like(&self, post_id: &str) -> Result<Option<bool>> {
        let user = self.current_user()?;
        let Some(post) = self.store.posts().get(post_id) else {
            return Ok(None);
        };
        if post.is_liked_by(&user.id) {
            self.store.posts().unlike(post_id, &user.id)?;
            Ok(Some(false))
        } else {
            self.store.posts().like(post_id, &user.id)?;
            Ok(Some(true))
        }
    }

    pub fn toggle_repost(&self, post_id: &str) -> Result<Option<bool>> {
        let user = self.current_user()?;
        let Some(post) = self.store.posts().get(post_id) else {
            return Ok(None);
        };
        if post.is_reposted_by(&user.id) {
            self.store.posts().unrepost(post_id, &user.id)?;
            Ok(Some(false))
        } else {
            self.store.posts().repost(post_id, &user.id)?;
            Ok(Some(true))
        }
    }

    pub fn update_profile(
        &self,
        display_name: Option<&str>,
        bio: Option<&str>,
    ) -> Result<UserRecord> {
        let input = UpdateUserInput {
            display_name: display_name.map(validation::display_name).transpose()?,
            bio: bio.map(validation::bio).transpose()?,
        };
        self.current_user()?;
        self.store.users().update(input)?;
        self.store
            .users()
            .get()
            .context("profile vanished after update")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadView {
    pub post: PostRecord,
    pub replies: Vec<PostRecord>,
}
