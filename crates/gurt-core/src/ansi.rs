//! ANSI formatting helpers
//!
//! Thin wrappers over crossterm's commands that render to plain `String`s, so
//! styled text can be assembled, measured and tested before it reaches stdout.
//! No capability detection: gurt assumes a true-color capable terminal.

use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
    Command,
};
use std::io::Write;

/// Columns assumed when the terminal size cannot be detected
pub const FALLBACK_WIDTH: u16 = 80;

/// A 24-bit foreground color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

fn render(command: impl Command) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = command.write_ansi(&mut out);
    out
}

/// Escape sequence that switches the foreground to `color`
pub fn fg(color: Rgb) -> String {
    render(SetForegroundColor(color.into()))
}

/// Escape sequence that restores the terminal's default styling
pub fn reset() -> String {
    render(ResetColor)
}

/// Escape sequence that turns on bold text
pub fn bold_on() -> String {
    render(SetAttribute(Attribute::Bold))
}

/// Render `text` in `color`, followed by a reset so later output is unaffected.
pub fn colorize(text: &str, color: Rgb) -> String {
    format!("{}{}{}", fg(color), text, reset())
}

/// Render `text` in bold, followed by a reset.
pub fn bold(text: &str) -> String {
    format!("{}{}{}", bold_on(), text, reset())
}

/// Clear the visible terminal area and move the cursor home.
pub fn clear_screen<W: Write>(out: &mut W) -> std::io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Current terminal width in columns, or [`FALLBACK_WIDTH`] when unknown.
pub fn terminal_width() -> u16 {
    match terminal::size() {
        Ok((cols, _)) if cols > 0 => cols,
        _ => FALLBACK_WIDTH,
    }
}
