use std::path::PathBuf;

use anyhow::Result;
use log::info;
use serde::Deserialize;

use crate::app::nav::ScrollBehavior;
use crate::content::resume::ResumeData;
use crate::content::{Locale, SectionId};
use crate::CONFIG_FILE;

/// GitHub profile used when the config does not override it. The address is
/// not part of the resume data, matching the source site.
pub const DEFAULT_GITHUB: &str = "https://github.com/javij98";

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DevfolioConfig {
    pub default_locale: Option<Locale>,
    pub download_dir: Option<String>,
    pub hidden_sections: Option<Vec<SectionId>>,
    pub links: Option<LinksConfig>,
    pub scroll: Option<ScrollTuning>,
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct LinksConfig {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
}

/// Overrides for the section navigator tunables. The correction delay is an
/// empirical constant, so it is deliberately configurable.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScrollTuning {
    pub narrow_extra_offset: Option<u16>,
    pub wide_extra_offset: Option<u16>,
    pub correction_delay_ms: Option<u64>,
    pub behavior: Option<ScrollBehavior>,
}

/// External addresses consumed by the command registry, resolved from the
/// config with resume-profile fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLinks {
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

impl DevfolioConfig {
    pub fn from_file(config_path: Option<&PathBuf>) -> Result<Self> {
        let path = config_path
            .filter(|p| p.exists())
            .cloned()
            .unwrap_or_else(|| {
                // No valid path was provided by the user, use the default path
                let default_path = CONFIG_FILE.as_path().to_path_buf();
                info!("Using configuration path: {}", default_path.display());
                default_path
            });

        // If no config at the default path, return an empty (default) config
        let toml_config = std::fs::read_to_string(&path).unwrap_or_default();
        let mut config = Self::from_str(&toml_config)?;
        config.path = Some(path);
        Ok(config)
    }

    pub fn from_str(config: &str) -> Result<Self> {
        let config: DevfolioConfig = toml::from_str(config)?;
        info!(
            "Loaded config: locale={:?}, hidden_sections={}",
            config.default_locale,
            config.hidden_sections.as_ref().map_or(0, Vec::len)
        );
        Ok(config)
    }

    pub fn is_hidden(&self, section: SectionId) -> bool {
        self.hidden_sections
            .as_ref()
            .is_some_and(|hidden| hidden.contains(&section))
    }

    pub fn resolved_locale(&self, cli_locale: Option<Locale>) -> Locale {
        cli_locale.or(self.default_locale).unwrap_or_default()
    }

    /// Download directory with `~` expanded; defaults to the current dir.
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .as_deref()
            .map_or_else(|| PathBuf::from("."), |dir| {
                PathBuf::from(shellexpand::tilde(dir).into_owned())
            })
    }

    pub fn resolved_links(&self, resume: &ResumeData) -> ExternalLinks {
        let links = self.links.clone().unwrap_or_default();
        ExternalLinks {
            email: links.email.unwrap_or_else(|| resume.profile.email.clone()),
            linkedin: links
                .linkedin
                .unwrap_or_else(|| resume.profile.linkedin.clone()),
            github: links.github.unwrap_or_else(|| DEFAULT_GITHUB.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CONFIG: &str = r#"
default_locale = "en"
download_dir = "~/Downloads"
hidden_sections = ["education"]

[links]
github = "https://github.com/someone-else"

[scroll]
correction_delay_ms = 500
"#;

    #[test]
    fn test_get_config() {
        let config = DevfolioConfig::from_str(TEST_CONFIG).unwrap();
        assert_eq!(config.default_locale, Some(Locale::En));
        assert!(config.is_hidden(SectionId::Education));
        assert!(!config.is_hidden(SectionId::Skills));
        assert_eq!(
            config.scroll.unwrap().correction_delay_ms,
            Some(500)
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = DevfolioConfig::from_str("").unwrap();
        assert_eq!(config.resolved_locale(None), Locale::Es);
        assert_eq!(config.resolved_locale(Some(Locale::En)), Locale::En);
        assert!(!config.is_hidden(SectionId::Contact));
        assert_eq!(config.resolved_download_dir(), PathBuf::from("."));
    }

    #[test]
    fn cli_locale_wins_over_config() {
        let config = DevfolioConfig::from_str(TEST_CONFIG).unwrap();
        assert_eq!(config.resolved_locale(Some(Locale::Es)), Locale::Es);
        assert_eq!(config.resolved_locale(None), Locale::En);
    }

    #[test]
    fn links_fall_back_to_resume_profile() {
        let config = DevfolioConfig::from_str(TEST_CONFIG).unwrap();
        let resume = ResumeData::for_locale(Locale::En);
        let links = config.resolved_links(resume);
        assert_eq!(links.github, "https://github.com/someone-else");
        assert_eq!(links.email, resume.profile.email);
        assert_eq!(links.linkedin, resume.profile.linkedin);
    }

    #[test]
    fn download_dir_expands_tilde() {
        let config = DevfolioConfig::from_str(TEST_CONFIG).unwrap();
        let dir = config.resolved_download_dir();
        assert!(!dir.to_string_lossy().contains('~'));
        assert!(dir.to_string_lossy().ends_with("Downloads"));
    }

    #[test]
    fn non_existing_path() {
        let path = PathBuf::from("non-existing.toml");
        let config = DevfolioConfig::from_file(Some(&path));
        assert!(config.is_ok());

        let config = config.unwrap();
        assert!(config.path.is_some());
    }

    #[test]
    fn scroll_behavior_parses() {
        let config = DevfolioConfig::from_str("[scroll]\nbehavior = \"instant\"\n").unwrap();
        assert_eq!(
            config.scroll.unwrap().behavior,
            Some(ScrollBehavior::Instant)
        );
    }
}
