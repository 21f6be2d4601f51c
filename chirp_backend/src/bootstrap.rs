use crate::config::ChirpConfig;
use crate::database::Database;
use crate::store::DataStore;
use anyhow::{Context, Result};
use std::fs;

pub struct BootstrapResources {
    pub directories_created: Vec<String>,
    pub database_initialized: bool,
    pub store: DataStore,
}

pub fn initialize(config: &ChirpConfig) -> Result<BootstrapResources> {
    let mut directories_created = Vec::new();
    create_dir_if_missing(&config.paths.data_dir, &mut directories_created)?;

    let database = Database::connect(&config.paths)
        .with_context(|| format!("failed to open {}", config.paths.db_path.display()))?;
    let database_initialized = database
        .ensure_migrations()
        .context("failed to apply migrations")?;

    let store = DataStore::new(database, &config.keys);

    Ok(BootstrapResources {
        directories_created,
        database_initialized,
        store,
    })
}

fn create_dir_if_missing(path: &std::path::Path, created: &mut Vec<String>) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
        created.push(path.display().to_string());
    }
    Ok(())
}
