use std::path::PathBuf;
use std::sync::LazyLock;

use clap::Parser;

mod app;
mod commands;
mod config;
mod content;
mod ui;

use anyhow::Result;
use commands::export::ExportCommand;
use commands::run::RunCommand;
use dirs::{config_dir, home_dir, state_dir};

/// Get the configuration file path using XDG Base Directory specification
/// Prefers XDG config location (~/.config/devfolio/config.toml) but falls back to
/// legacy location (~/.devfolio) if it exists and XDG doesn't
static CONFIG_FILE: LazyLock<PathBuf> = LazyLock::new(|| {
    let xdg_config = config_dir()
        .unwrap_or_else(|| {
            home_dir()
                .expect("HOME directory must be set to run devfolio")
                .join(".config")
        })
        .join("devfolio")
        .join("config.toml");

    // Use XDG location if it exists
    if xdg_config.exists() {
        return xdg_config;
    }

    // Otherwise check for legacy location
    let legacy_config = home_dir()
        .expect("HOME directory must be set to run devfolio")
        .join(".devfolio");

    if legacy_config.exists() {
        legacy_config
    } else {
        // Neither exists - use XDG for new installations
        xdg_config
    }
});

/// Get the state directory path using XDG Base Directory specification
/// Used for logs and other state files
pub fn get_state_dir() -> PathBuf {
    state_dir()
        .unwrap_or_else(|| {
            home_dir()
                .expect("HOME directory must be set to run devfolio")
                .join(".local")
                .join("state")
        })
        .join("devfolio")
}

#[derive(Parser)]
#[clap(name = "devfolio", bin_name = "devfolio", version, about)]
struct DevfolioApp {
    #[clap(subcommand)]
    command: Option<DevfolioCommand>,
}

#[derive(Parser)]
enum DevfolioCommand {
    Run(RunCommand),
    Export(ExportCommand),
}

impl DevfolioApp {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Some(DevfolioCommand::Run(cmd)) => cmd.run().await,
            Some(DevfolioCommand::Export(cmd)) => cmd.run(),
            None => {
                RunCommand {
                    file: None,
                    locale: None,
                }
                .run()
                .await
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let app = DevfolioApp::parse();
    app.run().await?;
    std::process::exit(0);
}
