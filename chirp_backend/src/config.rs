use anyhow::{anyhow, Result};
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_POSTS_KEY: &str = "chirp-posts";
pub const DEFAULT_USER_KEY: &str = "chirp-user";

#[derive(Debug, Clone)]
pub struct ChirpConfig {
    pub paths: ChirpPaths,
    pub keys: StorageKeys,
}

impl ChirpConfig {
    pub fn from_env() -> Result<Self> {
        let paths = match env::var("CHIRP_HOME").ok().filter(|raw| !raw.trim().is_empty()) {
            Some(home) => ChirpPaths::from_base_dir(home)?,
            None => ChirpPaths::discover()?,
        };
        let keys = StorageKeys::from_env();
        Ok(Self { paths, keys })
    }

    pub fn new(paths: ChirpPaths) -> Self {
        Self {
            paths,
            keys: StorageKeys::default(),
        }
    }
}

/// Keys under which the two collections are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub posts: String,
    pub user: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            posts: DEFAULT_POSTS_KEY.to_string(),
            user: DEFAULT_USER_KEY.to_string(),
        }
    }
}

impl StorageKeys {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let posts = non_empty_var("CHIRP_POSTS_KEY").unwrap_or(defaults.posts);
        let user = non_empty_var("CHIRP_USER_KEY").unwrap_or(defaults.user);
        Self { posts, user }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[derive(Debug, Clone, Default)]
pub struct ChirpPaths {
    pub base: PathBuf,
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
}

impl ChirpPaths {
    pub fn discover() -> Result<Self> {
        let exe_path = std::env::current_exe()
            .map_err(|err| anyhow!("failed to resolve current executable: {err}"))?;
        let base = exe_path
            .parent()
            .ok_or_else(|| anyhow!("executable path missing parent"))?
            .to_path_buf();
        Self::from_base_dir(base)
    }

    pub fn from_base_dir<P: AsRef<Path>>(base: P) -> Result<Self> {
        let base = base.as_ref().to_path_buf();
        let data_dir = base.join("data");
        let db_path = data_dir.join("chirp.db");

        Ok(Self {
            base,
            data_dir,
            db_path,
        })
    }
}
