//! Localized page text.
//!
//! Every page is laid out once in `crate::pages`; a locale only supplies the
//! words. Adding a language means adding one more `Strings` table.

mod en;
mod pt;

use crate::state::Page;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Specifying the supported languages.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    /// Return the text table for this locale.
    ///
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::En => &en::STRINGS,
            Locale::Pt => &pt::STRINGS,
        }
    }

    /// Return the other locale.
    ///
    pub fn toggle(self) -> Locale {
        match self {
            Locale::En => Locale::Pt,
            Locale::Pt => Locale::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Locale::En),
            "pt" | "pt-br" | "portuguese" | "português" => Ok(Locale::Pt),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

/// Text of the Overview page.
///
pub struct OverviewStrings {
    pub title: &'static str,
    pub intro: &'static str,
    pub slack_caption: &'static str,
    pub objective: &'static str,
    pub login_aggregate: &'static str,
    pub first_time_login: &'static str,
    pub reminder: &'static str,
    pub folder_heading: &'static str,
    pub ready_heading: &'static str,
    pub button: &'static str,
}

/// Text of the cloud environment setup page.
///
pub struct CloudStrings {
    pub title: &'static str,
    pub body: &'static str,
    pub ready_heading: &'static str,
    pub button: &'static str,
}

/// Text of the local environment setup page.
///
pub struct LocalStrings {
    pub title: &'static str,
    pub body: &'static str,
    pub button: &'static str,
}

/// Text of the suggested architecture page.
///
pub struct ArchitectureStrings {
    pub title: &'static str,
    pub body: &'static str,
    pub diagram_caption: &'static str,
    pub button: &'static str,
}

/// Labels used by the surrounding interface rather than the pages.
///
pub struct ChromeStrings {
    pub rows: &'static str,
    pub image: &'static str,
    pub log_title: &'static str,
    pub hint_sidebar: &'static str,
    pub hint_page: &'static str,
    pub hint_global: &'static str,
}

/// All text of one locale.
///
pub struct Strings {
    pub sidebar_title: &'static str,
    pub sidebar_prompt: &'static str,
    pub page_labels: [&'static str; 4],
    pub overview: OverviewStrings,
    pub cloud: CloudStrings,
    pub local: LocalStrings,
    pub architecture: ArchitectureStrings,
    pub chrome: ChromeStrings,
}

impl Strings {
    /// Return the sidebar label of the page.
    ///
    pub fn page_label(&self, page: Page) -> &'static str {
        self.page_labels[page.index()]
    }
}
