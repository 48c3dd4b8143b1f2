use crate::core::config::{self, Config};
use crate::core::installer;
use crate::error::Result;
use colored::Colorize;
use std::path::Path;

/// What an update run would do with the current configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum CheckReport {
    MissingConfig,
    EmptyInstallPath,
    InvalidInstallation(String),
    Ready { installed_module: bool },
}

/// Inspects the configuration and installation folder without any network
/// access or filesystem changes.
pub async fn inspect(config_path: &Path) -> Result<CheckReport> {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(CheckReport::MissingConfig)
        }
        Err(e) => return Err(e.into()),
    };

    let Some(install_path) = Config::parse(&content)?.install_path() else {
        return Ok(CheckReport::EmptyInstallPath);
    };

    match installer::validate_install_dir(&install_path).await {
        Ok(()) => {}
        Err(e) if e.is_precondition() => {
            return Ok(CheckReport::InvalidInstallation(e.to_string()))
        }
        Err(e) => return Err(e),
    }

    let module_dir = installer::module_dir(&install_path);
    let installed_module = tokio::fs::metadata(module_dir.join("js-client-v2.dll"))
        .await
        .is_ok();
    Ok(CheckReport::Ready { installed_module })
}

pub async fn check(config_path: &Path) -> Result<()> {
    println!("🔍 Checking {}", config_path.display());

    match inspect(config_path).await? {
        CheckReport::MissingConfig => {
            println!(
                "  {} no configuration file; run the updater once to create {}",
                "❌".red(),
                config::DEFAULT_CONFIG_FILE
            );
        }
        CheckReport::EmptyInstallPath => {
            println!(
                "  {} {}",
                "❌".red(),
                "altVPath is empty, add the path to your alt:V launcher folder".red()
            );
        }
        CheckReport::InvalidInstallation(message) => {
            println!("  {} {}", "❌".red(), message.red());
        }
        CheckReport::Ready { installed_module } => {
            println!("  {} alt:V launcher folder found", "✅".green());
            if installed_module {
                println!("  {} JS v2 client module is installed", "✅".green());
            } else {
                println!(
                    "  {} JS v2 client module is not installed yet",
                    "⚠️".yellow()
                );
            }
        }
    }
    Ok(())
}
