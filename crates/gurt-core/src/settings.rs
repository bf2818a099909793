use crate::error::Result;
use figment::{providers::Env, Figment};
use serde::Deserialize;
use std::time::Duration;

/// Environment variable naming the preferred URL opener
pub const BROWSER_VAR: &str = "BROWSER";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Command used to open URLs before falling back to the platform default
    #[serde(default)]
    pub browser: Option<String>,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn load() -> Result<Self> {
        let settings: Settings = Figment::new()
            .merge(Env::raw().only(&[BROWSER_VAR]))
            .extract()?;
        Ok(settings.normalized())
    }

    /// An empty or blank opener is the same as none at all
    fn normalized(mut self) -> Self {
        self.browser = self
            .browser
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());
        self
    }

    pub fn preferred_opener(&self) -> Option<&str> {
        self.browser.as_deref()
    }
}

/// Cosmetic pauses in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub surprise_delay: Duration,
    pub unknown_choice_pause: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            surprise_delay: Duration::from_millis(300),
            unknown_choice_pause: Duration::from_millis(500),
        }
    }
}

impl Pacing {
    /// No pauses at all, for scripted sessions
    pub fn instant() -> Self {
        Self {
            surprise_delay: Duration::ZERO,
            unknown_choice_pause: Duration::ZERO,
        }
    }
}
