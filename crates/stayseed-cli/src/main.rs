mod config;
mod dry_run;
mod pipeline;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::Rng;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stayseed_store::{PostgresGateway, StoreError};

use config::{ConfigError, SeedConfig};
use dry_run::DryRunStore;
use pipeline::{Pipeline, RunOutcome, RunSummary};

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("run aborted: {0}")]
    Aborted(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "stayseed",
    version,
    about = "Seed a relational store with a synthetic hotel catalog"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate hotel aggregates and persist them destination by destination.
    Seed(SeedArgs),
}

#[derive(Args, Debug)]
struct SeedArgs {
    /// Postgres connection string; falls back to the config file, then to
    /// the DATABASE_URL environment variable.
    #[arg(long, value_name = "CONNECTION_STRING")]
    database_url: Option<String>,
    /// TOML file with destinations and run options.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Generator seed; reruns with the same seed produce the same catalog.
    #[arg(long)]
    seed: Option<u64>,
    /// Lower bound of the pause between hotel inserts, in milliseconds.
    #[arg(long, value_name = "MS")]
    min_pause_ms: Option<u64>,
    /// Upper bound of the pause between hotel inserts; zero disables it.
    #[arg(long, value_name = "MS")]
    max_pause_ms: Option<u64>,
    /// Generate without a store; prints one JSON document per hotel.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Seed(args) => run_seed(args).await,
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run_seed(args: SeedArgs) -> Result<(), CliError> {
    let mut config = SeedConfig::load(args.config.as_deref())?;
    if let Some(url) = args.database_url {
        config.database_url = Some(url);
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(min) = args.min_pause_ms {
        config.throttle.min_pause_ms = min;
    }
    if let Some(max) = args.max_pause_ms {
        config.throttle.max_pause_ms = max;
    }
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        seed,
        destinations = config.destinations.len(),
        dry_run = args.dry_run,
        "configuration resolved"
    );

    let source = config.source.build(seed);
    let interrupt = spawn_interrupt_handler();

    let summary = if args.dry_run {
        Pipeline::new(source, DryRunStore, config.throttle, interrupt)
            .run(&config.destinations)
            .await
    } else {
        let url = config
            .database_url
            .clone()
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .ok_or_else(|| ConfigError::Missing("database_url".to_string()))?;
        let store = PostgresGateway::connect(&url).await?;
        Pipeline::new(source, store, config.throttle, interrupt)
            .run(&config.destinations)
            .await
    };

    report(&summary)?;

    match summary.outcome {
        RunOutcome::Aborted(reason) => Err(CliError::Aborted(reason)),
        RunOutcome::Completed | RunOutcome::Interrupted => Ok(()),
    }
}

fn report(summary: &RunSummary) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Watch channel flipped to `true` on the first ctrl-c. The pipeline checks
/// it between hotels, so the in-flight transaction always finishes or rolls
/// back before the run stops.
fn spawn_interrupt_handler() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt requested; finishing the in-flight hotel");
            let _ = tx.send(true);
        }
    });
    rx
}
