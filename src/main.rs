use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use jsv2_updater::commands::{check, update};
use jsv2_updater::core::{config, release::HttpReleaseSource, workspace};

#[derive(Parser)]
#[clap(name = "jsv2-updater")]
#[clap(about = "Installs the latest alt:V JS v2 client module into your launcher folder")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Path to the configuration file
    #[clap(long, global = true, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Temporary directory used for the download
    #[clap(long, global = true, default_value = workspace::DEFAULT_TEMP_DIR)]
    temp_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Disable diagnostic logging
    #[clap(short, long, global = true)]
    quiet: bool,

    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the latest client module and install it (default)
    Update,
    /// Validate the configuration and launcher folder without downloading
    Check,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logger(cli.verbose);
    }

    match cli.command.unwrap_or(Commands::Update) {
        Commands::Update => {
            let source = HttpReleaseSource::new().context("failed to build HTTP client")?;
            let options = update::UpdateOptions {
                config_path: cli.config,
                temp_dir: cli.temp_dir,
            };
            update::update(&source, &options).await;
        }
        Commands::Check => {
            if let Err(e) = check::check(&cli.config).await {
                eprintln!("Error: {e}");
            }
        }
    }

    Ok(())
}
