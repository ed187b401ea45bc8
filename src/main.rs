//! MONSTERDEX: look up a monster through interchangeable data sources
//!
//! Entry point. Loads configuration, initialises structured logging,
//! parses the two positional arguments, runs a single lookup and prints
//! the result to stdout.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use monsterdex::config::{self, AppConfig};
use monsterdex::loader;
use monsterdex::output;
use monsterdex::registry::SourceRegistry;

/// Look up a monster by name through the selected data source.
#[derive(Debug, Parser)]
#[command(name = "monsterdex", version, about)]
struct Cli {
    /// Data source to query (e.g. pokemon, digimon)
    source: Option<String>,

    /// Name of the monster to look up
    name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    let cli = Cli::parse();

    let config_path = std::env::var("MONSTERDEX_CONFIG").ok();
    let cfg = AppConfig::load_or_default(config_path.as_deref())?;
    debug!(
        path = config_path.as_deref().unwrap_or(config::DEFAULT_CONFIG_FILE),
        format = ?cfg.output.format,
        "Configuration loaded"
    );

    let registry = SourceRegistry::with_defaults();
    let monster = loader::run_args(
        &registry,
        &cfg,
        cli.source.as_deref(),
        cli.name.as_deref(),
    )
    .await?;

    println!("{}", output::render(&monster, cfg.output.format)?);
    Ok(())
}

/// Initialise the tracing subscriber (logs go to stderr).
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("monsterdex=info"));

    let json_logging = std::env::var("MONSTERDEX_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
