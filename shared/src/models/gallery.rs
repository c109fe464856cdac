//! Gallery Model (图库)

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Display locale of the public pages
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Self::En, Self::Es, Self::Fr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "es-MX" and "es_MX" resolve to the base language
        let base = s.trim().split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|locale| locale.as_str().eq_ignore_ascii_case(base))
            .ok_or_else(|| ModelError::UnknownLocale(s.to_string()))
    }
}

/// Text with one translation per locale.
///
/// Lookups fall back to the default locale, then to any translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Locale, String>);

impl LocalizedText {
    pub fn new(default_text: impl Into<String>) -> Self {
        let mut translations = BTreeMap::new();
        translations.insert(Locale::default(), default_text.into());
        Self(translations)
    }

    pub fn with(mut self, locale: Locale, text: impl Into<String>) -> Self {
        self.0.insert(locale, text.into());
        self
    }

    pub fn get(&self, locale: Locale) -> &str {
        self.0
            .get(&locale)
            .or_else(|| self.0.get(&Locale::default()))
            .or_else(|| self.0.values().next())
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn has(&self, locale: Locale) -> bool {
        self.0.contains_key(&locale)
    }
}

/// Gallery category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Dishes,
    Interior,
    Events,
    Kitchen,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 4] = [
        Self::Dishes,
        Self::Interior,
        Self::Events,
        Self::Kitchen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Dishes => "dishes",
            GalleryCategory::Interior => "interior",
            GalleryCategory::Events => "events",
            GalleryCategory::Kitchen => "kitchen",
        }
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GalleryCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

/// Gallery item, static for the whole session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: u32,
    /// Full-size image URL
    pub src: String,
    pub thumbnail: String,
    pub caption: LocalizedText,
    /// Longer text shown in the lightbox
    pub story: LocalizedText,
    pub category: GalleryCategory,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub likes: u32,
    #[serde(default)]
    pub featured: bool,
}
