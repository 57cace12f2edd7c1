use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::Locale;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MetricTrend {
    Up,
    Stable,
    Processing,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ResumeMetric {
    pub label: String,
    pub value: String,
    pub trend: MetricTrend,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ResumeImpactCase {
    pub title: String,
    pub context: String,
    pub challenge: String,
    pub action: String,
    pub result: String,
    pub stack: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ResumeExperienceItem {
    pub company: String,
    pub role: String,
    pub period: String,
    pub achievements: Vec<String>,
    pub is_current: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ResumeEducationItem {
    pub degree: String,
    pub institution: String,
    pub faculty: String,
    pub location: String,
    pub period: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ResumeSkills {
    pub core: Vec<String>,
    pub dev: Vec<String>,
    pub observability: Vec<String>,
    pub learning: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ResumeProfile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub status: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
}

/// The full localized content model. Immutable for the lifetime of the
/// process; every section renders from a borrowed copy of this.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ResumeData {
    pub profile: ResumeProfile,
    pub summary: String,
    pub metrics: Vec<ResumeMetric>,
    pub impact_cases: Vec<ResumeImpactCase>,
    pub experience: Vec<ResumeExperienceItem>,
    pub education: Vec<ResumeEducationItem>,
    pub skills: ResumeSkills,
}

static RESUME_ES: LazyLock<ResumeData> = LazyLock::new(|| {
    serde_json::from_str(include_str!("data/resume.es.json"))
        .expect("embedded Spanish resume data must deserialize")
});

static RESUME_EN: LazyLock<ResumeData> = LazyLock::new(|| {
    serde_json::from_str(include_str!("data/resume.en.json"))
        .expect("embedded English resume data must deserialize")
});

impl ResumeData {
    pub fn for_locale(locale: Locale) -> &'static ResumeData {
        match locale {
            Locale::Es => &RESUME_ES,
            Locale::En => &RESUME_EN,
        }
    }

    /// Extracts the "+N" years-of-experience figure from the summary, the
    /// same heuristic the hero KPI chips use.
    pub fn years_of_experience(&self) -> Option<String> {
        let re = regex::Regex::new(r"\+(\d+)").ok()?;
        re.captures(&self.summary)
            .map(|captures| format!("+{}", &captures[1]))
    }

    /// Writes the localized CV export as pretty JSON into `directory`,
    /// creating it if needed, and returns the written path.
    pub fn export_to(&self, locale: Locale, directory: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(directory)?;
        let path = directory.join(format!("devfolio-cv-{locale}.json"));
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }
}
