pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod database;
pub mod store;
pub mod telemetry;
pub mod timeline;
pub mod utils;
pub mod validation;
