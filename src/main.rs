mod aggregate;
mod db;
mod models;
mod run;
mod store;
mod validate;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

fn main() -> Result<()> {
    let cli = run::Cli::parse();
    setup_logging(cli.verbose);

    let db_path = match cli.db {
        Some(path) => path,
        None => get_db_path()?,
    };
    let db = db::Database::open(&db_path)?;
    let mut ledger = store::Ledger::open(db)?;
    for warning in ledger.load_warnings() {
        eprintln!("warning: {warning}");
    }

    let session = run::Session {
        currency: cli.currency,
        today: chrono::Local::now().date_naive(),
    };
    run::execute(cli.command, &mut ledger, &session, &mut std::io::stdout().lock())
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(filter))
        .init();
}

fn get_db_path() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "fintrack", "fintrack")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("fintrack.db"))
}
