use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};

use crate::app::run_app;
use crate::app::state::App;
use crate::config::DevfolioConfig;
use crate::content::Locale;
use anyhow::Result;

#[derive(Parser, Debug)]
pub struct RunCommand {
    #[clap(short, long)]
    pub file: Option<String>,
    /// Content locale; overrides the config and falls back to Spanish
    #[clap(short, long, value_enum)]
    pub locale: Option<Locale>,
}

impl RunCommand {
    pub async fn run(&self) -> Result<()> {
        // setup logging
        if let Ok(log_level) = std::env::var("DEVFOLIO_LOG") {
            setup_logging(&log_level)?;
        }

        // Read config file
        let path = self.file.as_ref().map(PathBuf::from);
        let config = DevfolioConfig::from_file(path.as_ref())?;
        let locale = config.resolved_locale(self.locale);

        // setup terminal (includes panic hooks) and run app
        let mut terminal = ratatui::init();
        // Mouse capture is needed for the palette trigger, outside-press
        // dismissal and header tabs
        execute!(stdout(), EnableMouseCapture)?;

        let app = App::new(config, locale);
        let result = run_app(&mut terminal, Arc::new(Mutex::new(app))).await;

        execute!(stdout(), DisableMouseCapture)?;
        info!("Shutting down the terminal...");
        ratatui::restore();
        result
    }
}

fn setup_logging(log_level: &str) -> Result<()> {
    // Get the XDG state directory for logs
    let log_dir = crate::get_state_dir().join("logs");

    // Create the log directory if it doesn't exist
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join(format!(
        "devfolio-debug-{}.log",
        chrono::Local::now().format("%Y%m%d%H%M%S")
    ));

    let log_level = match log_level.to_lowercase().as_str() {
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    WriteLogger::init(log_level, Config::default(), File::create(&log_file_path)?)?;

    // Log the file location so users know where to find it
    info!("Logging to: {}", log_file_path.display());

    Ok(())
}
