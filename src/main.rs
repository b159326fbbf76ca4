//! Gapdash
//!
//! Loads the dataset and serves the dashboard.
//!
//! Run with: cargo run -- --port 8050

use anyhow::Context;
use clap::Parser;
use gapdash::api::{serve, AppState};
use gapdash::config::{generate_default_config, Config, LoggingConfig};
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gapdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Single-page dashboard with a data table, a chart and one control")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Dataset URL or local CSV path
    #[arg(short, long)]
    data: Option<String>,

    /// Print the default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    // The configured subscriber needs the config, so loading logs to a bootstrap one
    let config = tracing::subscriber::with_default(bootstrap_subscriber(std::io::stderr), || {
        load_config(&cli)
    })?;

    init_tracing(&config.logging);

    tracing::info!("Starting Gapdash v{}", env!("CARGO_PKG_VERSION"));

    let source = config.data.data_source();
    tracing::info!("Loading dataset from {}", source);
    let dataset = gapdash::data::load(&source, config.data.request_timeout())
        .await
        .with_context(|| format!("failed to load dataset from {}", source))?;

    let state = AppState::new(dataset, config.data.page_size);
    serve(state, &config.server).await?;

    tracing::info!("Gapdash stopped");
    Ok(())
}

/// Config file, then `GAPDASH_*` variables, then command-line flags
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let config = Config::load_with_env(path)
                .with_context(|| format!("failed to load config from {:?}", path))?;
            tracing::info!("Loaded config from {:?}", path);
            config
        }
        None => Config::load_default(),
    };

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(data) = &cli.data {
        config.data.source = data.clone();
    }

    Ok(config)
}

/// Plain subscriber used until the config is known
fn bootstrap_subscriber<W>(writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gapdash=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .finish()
}

/// Initialize tracing; `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("gapdash={level},tower_http={level}", level = logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
