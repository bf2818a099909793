//! Menu choices
//!
//! Each entry accepts a numeric key, a single letter and one or more words.

use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum MenuChoice {
    Art,
    SystemInfo,
    Surprise,
    Game,
    Quit,
}

impl MenuChoice {
    /// Tokens accepted for this entry, already lowercase
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Art => &["1", "a", "art"],
            Self::SystemInfo => &["2", "s", "sys", "system"],
            Self::Surprise => &["3", "w", "web", "surprise"],
            Self::Game => &["4", "g", "game"],
            Self::Quit => &["q", "quit", "exit"],
        }
    }

    /// The line shown in the menu
    pub fn label(&self) -> &'static str {
        match self {
            Self::Art => "1) Random ASCII art",
            Self::SystemInfo => "2) System info",
            Self::Surprise => "3) Surprise web (uses $BROWSER if set)",
            Self::Game => "4) Guess the number",
            Self::Quit => "q) Quit",
        }
    }

    /// Whether the screen is cleared and the banner redrawn before running.
    ///
    /// The surprise path skips it so the browser opens as quickly as possible.
    pub fn redraws_banner(&self) -> bool {
        matches!(self, Self::Art | Self::SystemInfo | Self::Game)
    }

    /// Every choice, in menu order
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn parse(input: &str) -> Option<Self> {
        let token = input.trim().to_lowercase();
        Self::iter().find(|choice| choice.aliases().contains(&token.as_str()))
    }
}
