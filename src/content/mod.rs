use std::fmt::{Display, Formatter};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

pub mod labels;
pub mod resume;
pub mod route;

/// Supported content locales. Every resume and label table exists for each
/// variant; adding one here without the matching content fails the locale
/// coverage tests.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum, EnumIter, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Parses a path segment into a locale, `None` for unrecognized segments.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stable identifiers for the page sections. The navigator resolves these
/// against the rendered document; identifiers double as URL fragments.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    Metrics,
    Experience,
    Education,
    Skills,
    Contact,
}

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Metrics => "metrics",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn nav_label(self, labels: &'static labels::UiLabels) -> &'static str {
        match self {
            SectionId::Hero => labels.nav.home,
            SectionId::Metrics => labels.nav.metrics,
            SectionId::Experience => labels.nav.experience,
            SectionId::Education => labels.nav.education,
            SectionId::Skills => labels.nav.skills,
            SectionId::Contact => labels.nav.contact,
        }
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn locale_segments_round_trip() {
        for locale in Locale::iter() {
            assert_eq!(Locale::from_segment(locale.as_str()), Some(locale));
        }
        assert_eq!(Locale::from_segment("fr"), None);
        assert_eq!(Locale::from_segment(""), None);
    }

    #[test]
    fn section_ids_are_unique() {
        let ids: Vec<&str> = SectionId::iter().map(SectionId::as_str).collect();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }
}
