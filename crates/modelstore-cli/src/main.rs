//! modelstore CLI
//!
//! Command-line interface for the model storage service.

mod commands;

use clap::{Parser, Subcommand};
use modelstore_client::ModelStorageClient;
use modelstore_core::{ClientConfig, ModelId};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// modelstore - look up, list and upload stored models
#[derive(Parser, Debug)]
#[command(name = "modelstore")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Root URL of the service (overrides the config file)
    #[arg(long, global = true)]
    root: Option<String>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the file name of a model
    Lookup {
        /// Model ID
        id: ModelId,
    },

    /// List all models
    List {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Upload a model file
    Upload {
        /// File to upload, or `-` for standard input
        path: PathBuf,

        /// File name to store the model under (defaults to the file's name)
        #[arg(long)]
        name: Option<String>,
    },
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };
    if let Some(root) = cli.root {
        config.storage.root = root;
    }

    // Initialize logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        parse_level(&config.logging.level)
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let client = ModelStorageClient::from_config(&config)?;

    match cli.command {
        Commands::Lookup { id } => {
            commands::lookup(&client, id).await?;
        }
        Commands::List { json } => {
            commands::list(&client, json).await?;
        }
        Commands::Upload { path, name } => {
            commands::upload(&client, path, name).await?;
        }
    }

    Ok(())
}
