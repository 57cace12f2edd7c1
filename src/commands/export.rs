use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::DevfolioConfig;
use crate::content::resume::ResumeData;
use crate::content::Locale;

/// Headless CV export: writes the localized resume JSON without starting
/// the TUI. The same export the palette's "Download CV" command performs.
#[derive(Parser, Debug)]
pub struct ExportCommand {
    #[clap(short, long)]
    pub file: Option<String>,
    #[clap(short, long, value_enum)]
    pub locale: Option<Locale>,
    /// Target directory; defaults to the configured download dir
    #[clap(short, long)]
    pub out: Option<PathBuf>,
}

impl ExportCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.file.as_ref().map(PathBuf::from);
        let config = DevfolioConfig::from_file(path.as_ref())?;
        let locale = config.resolved_locale(self.locale);
        let directory = self
            .out
            .clone()
            .unwrap_or_else(|| config.resolved_download_dir());

        let written = ResumeData::for_locale(locale).export_to(locale, &directory)?;
        println!("Exported CV to {}", written.display());
        Ok(())
    }
}
