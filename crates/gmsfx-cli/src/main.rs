use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use gmsfx_core::{Config, Gmsfx};

#[derive(Parser)]
#[clap(name = "gmsfx")]
#[clap(about = "Fetch sound effects from the GMSFX sound collection")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// JSON configuration file
    #[clap(long, global = true)]
    config: Option<PathBuf>,
    /// Give up on a request after this many seconds
    #[clap(long, global = true)]
    timeout: Option<u64>,
    /// Accept sound names with path separators or URL delimiters
    #[clap(long, global = true)]
    allow_any_name: bool,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the download URL of a sound
    Url {
        /// Sound name (e.g., click)
        name: String,
    },
    /// Download one or more sounds
    Get {
        /// Sound names
        #[clap(required = true)]
        names: Vec<String>,
        /// Directory to save into (default: configured directory or system temp)
        #[clap(short, long)]
        dir: Option<PathBuf>,
        /// Append a random number to each file name
        #[clap(short, long)]
        randomize: bool,
        /// Print one JSON result per line
        #[clap(long)]
        json: bool,
        /// Delete the downloaded files again before exiting
        #[clap(long)]
        cleanup: bool,
    },
    /// Print the base version of the sound collection
    BaseVersion {
        /// Print the version built into this binary instead of asking the remote
        #[clap(long = "static")]
        use_static: bool,
    },
    /// Show library version and configured URLs
    Info,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(timeout) = cli.timeout {
        config.request_timeout_secs = Some(timeout);
    }
    if cli.allow_any_name {
        config.strict_names = false;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    gmsfx_core::init_logging();

    let cli = Cli::parse();
    let client = Gmsfx::new(load_config(&cli)?)?;

    match cli.command {
        Commands::Url { name } => {
            println!("{}", client.sound_url(&name));
        }
        Commands::Get {
            names,
            dir,
            randomize,
            json,
            cleanup,
        } => {
            let mut failed = 0;

            for name in &names {
                let result = client.get_with(name, dir.as_deref(), randomize).await;

                if !result.is_success() {
                    failed += 1;
                }

                if json {
                    println!("{}", serde_json::to_string(&result)?);
                    continue;
                }

                match result.into_result() {
                    Ok(path) => println!("{name}: {}", path.display()),
                    Err(error) => eprintln!("{name}: {error}"),
                }
            }

            if cleanup {
                let removed = client.clear_cached_sounds();
                tracing::info!(removed, "Removed downloaded sounds");
            }

            if failed > 0 {
                tracing::warn!(failed, total = names.len(), "Some sounds could not be downloaded");
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::BaseVersion { use_static } => {
            if use_static {
                println!("{}", client.static_base_version());
            } else {
                println!("{}", client.base_version().await);
            }
        }
        Commands::Info => {
            let repository = &client.config().repository;
            println!("gmsfx {}", client.version());
            println!("Sound URL template: {}", repository.sound_url_template);
            println!("Base version URL:   {}", repository.base_version_url);
            println!("Static base version: {}", client.static_base_version());
            match &client.config().download_dir {
                Some(dir) => println!("Download directory: {}", dir.display()),
                None => println!("Download directory: {}", std::env::temp_dir().display()),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
