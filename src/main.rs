//! Scamazon storefront server.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;

use scamazon::config::{self, AppConfig};
use scamazon::observability::{logging, metrics};
use scamazon::{Catalog, CatalogService, HttpServer, Renderer};

#[derive(Parser)]
#[command(name = "scamazon")]
#[command(about = "Serve the Scamazon parody storefront", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the configuration.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!("scamazon v{} starting", env!("CARGO_PKG_VERSION"));

    match run(config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}

fn load(cli: &Cli) -> Result<AppConfig, config::ConfigError> {
    let mut config = config::load_or_default(cli.config.as_deref())?;
    if let Some(bind) = &cli.bind {
        config.server.bind_address = bind.clone();
    }
    config::validate_config(&config).map_err(config::ConfigError::Validation)?;
    Ok(config)
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin()?;
    tracing::info!(
        products = catalog.len(),
        bind_address = %config.server.bind_address,
        assets_dir = %config.assets.dir,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let renderer = Renderer::new(&config.assets.url_prefix)?;
    let service = CatalogService::new(catalog, renderer);
    let listener = TcpListener::bind(&config.server.bind_address).await?;

    let server = HttpServer::new(config, service);
    server.run(listener).await?;
    Ok(())
}
