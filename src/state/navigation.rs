//! Navigation-related state types.
//!
//! This module contains the closed set of pages, the per-session navigation
//! state and the focus enum used by the terminal handler.

use super::StateError;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Specifying the different pages.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Page {
    Overview,
    CloudEnvironment,
    LocalEnvironment,
    DataArchitecture,
}

impl Page {
    /// Every page in sidebar order.
    ///
    pub const ALL: [Page; 4] = [
        Page::Overview,
        Page::CloudEnvironment,
        Page::LocalEnvironment,
        Page::DataArchitecture,
    ];

    /// Return the position of the page in the sidebar.
    ///
    pub fn index(self) -> usize {
        match self {
            Page::Overview => 0,
            Page::CloudEnvironment => 1,
            Page::LocalEnvironment => 2,
            Page::DataArchitecture => 3,
        }
    }

    /// Return the stable key used on the command line and in logs.
    ///
    pub fn key(self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::CloudEnvironment => "cloud-environment",
            Page::LocalEnvironment => "local-environment",
            Page::DataArchitecture => "data-architecture",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl TryFrom<usize> for Page {
    type Error = StateError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Page::ALL
            .get(index)
            .copied()
            .ok_or_else(|| StateError::InvalidPage(format!("index {}", index)))
    }
}

impl FromStr for Page {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(Page::Overview),
            "cloud-environment" | "cloud" => Ok(Page::CloudEnvironment),
            "local-environment" | "local" => Ok(Page::LocalEnvironment),
            "data-architecture" | "architecture" => Ok(Page::DataArchitecture),
            _ => Err(StateError::InvalidPage(s.to_string())),
        }
    }
}

impl TryFrom<&str> for Page {
    type Error = StateError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Converting a `Page` into itself cannot fail.
///
impl From<Infallible> for StateError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Holds the current page of one session.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NavigationState {
    current: Page,
}

impl Default for NavigationState {
    fn default() -> Self {
        NavigationState {
            current: Page::Overview,
        }
    }
}

impl NavigationState {
    /// Return the current page.
    ///
    pub fn current(&self) -> Page {
        self.current
    }

    /// Overwrite the current page with anything that converts into a page.
    /// Out-of-range values are rejected and the state is left untouched.
    /// Does not render.
    ///
    pub fn set<P>(&mut self, page: P) -> Result<(), StateError>
    where
        P: TryInto<Page>,
        StateError: From<P::Error>,
    {
        self.current = page.try_into()?;
        Ok(())
    }
}

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Sidebar,
    Page,
}
