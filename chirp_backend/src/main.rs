use anyhow::Result;
use clap::{Parser, Subcommand};
use chirp_backend::bootstrap;
use chirp_backend::cli;
use chirp_backend::config::ChirpConfig;
use chirp_backend::telemetry;
use chirp_backend::timeline::TimelineService;
use chirp_backend::utils;

#[derive(Parser)]
#[command(author, version, about = "Chirp local timeline")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive CLI (default)
    Cli,
    /// Print the home timeline and exit
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    utils::print_banner();
    telemetry::init_tracing();

    let args = Args::parse();

    let config = ChirpConfig::from_env()?;
    let resources = bootstrap::initialize(&config)?;
    tracing::info!(
        db_path = %config.paths.db_path.display(),
        database_initialized = resources.database_initialized,
        directories_created = resources.directories_created.len(),
        "bootstrap complete"
    );

    let service = TimelineService::new(resources.store);
    match args.command.unwrap_or(Command::Cli) {
        Command::Cli => cli::run_cli(service).await,
        Command::Show => cli::show_timeline(&service),
    }
}
