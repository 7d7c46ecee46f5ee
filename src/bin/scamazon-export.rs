//! Freeze the storefront into a static site.
//!
//! Every page route is rendered in-process, asset links are made relative,
//! and the asset bundle is copied alongside. Skipped routes are reported
//! but never fail the run.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use scamazon::config::{self, AppConfig};
use scamazon::observability::logging;
use scamazon::{Catalog, CatalogService, Exporter, HttpServer, Renderer};

#[derive(Parser)]
#[command(name = "scamazon-export")]
#[command(about = "Export the Scamazon storefront as static HTML", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (recreated on every run).
    #[arg(short, long)]
    out: Option<String>,

    /// Asset source directory.
    #[arg(short, long)]
    assets: Option<String>,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
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

    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to load catalog: {e}");
            return ExitCode::FAILURE;
        }
    };

    let renderer = match Renderer::new(&config.assets.url_prefix) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("Failed to load page templates: {e}");
            return ExitCode::FAILURE;
        }
    };

    let service = CatalogService::new(catalog, renderer);
    let server = HttpServer::new(config, service);
    let exporter = Exporter::new(&server);

    let report = match exporter.run().await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Export failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(out_dir = %exporter.out_dir().display(), "Export finished");

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to encode summary: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{report}");
    }

    ExitCode::SUCCESS
}

fn load(cli: &Cli) -> Result<AppConfig, config::ConfigError> {
    let mut config = config::load_or_default(cli.config.as_deref())?;
    if let Some(out) = &cli.out {
        config.export.out_dir = out.clone();
    }
    if let Some(assets) = &cli.assets {
        config.assets.dir = assets.clone();
    }
    config::validate_config(&config).map_err(config::ConfigError::Validation)?;
    Ok(config)
}
