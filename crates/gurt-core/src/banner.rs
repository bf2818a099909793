//! Gradient banner
//!
//! The title is painted character by character, interpolating each RGB channel
//! linearly from a start color to an end color, then centered on the terminal.

use crate::ansi::{self, Rgb};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

pub const BANNER_TEXT: &str = "G U R T";
pub const SUBTITLE_TEXT: &str = "a tiny playground of silly and useful tricks";

pub const BANNER_START: Rgb = Rgb::new(255, 100, 0);
pub const BANNER_END: Rgb = Rgb::new(0, 200, 255);
pub const SUBTITLE_COLOR: Rgb = Rgb::new(200, 200, 200);

fn lerp(start: u8, end: u8, index: usize, span: usize) -> u8 {
    let start = i64::from(start);
    let end = i64::from(end);
    // index <= span keeps the result between start and end
    let value = start + (end - start) * index as i64 / span as i64;
    value.clamp(0, 255) as u8
}

/// Colors for each of `len` positions, running from `start` to `end` inclusive.
///
/// A single position gets `start`; the divisor never drops below one.
pub fn gradient_colors(len: usize, start: Rgb, end: Rgb) -> Vec<Rgb> {
    let span = len.saturating_sub(1).max(1);
    (0..len)
        .map(|i| {
            Rgb::new(
                lerp(start.r, end.r, i, span),
                lerp(start.g, end.g, i, span),
                lerp(start.b, end.b, i, span),
            )
        })
        .collect()
}

/// Paint `text` with a left-to-right gradient, one color per character.
pub fn gradient_text(text: &str, start: Rgb, end: Rgb) -> String {
    let colors = gradient_colors(text.chars().count(), start, end);
    let mut out = String::new();
    for (ch, color) in text.chars().zip(colors) {
        out.push_str(&ansi::fg(color));
        out.push(ch);
    }
    out.push_str(&ansi::reset());
    out
}

/// Left padding that centers `visible` within `width` columns.
pub fn center_padding(width: u16, visible: &str) -> usize {
    (usize::from(width).saturating_sub(visible.width())) / 2
}

/// Write the banner and subtitle, centered for a terminal `width` columns wide.
pub fn print_banner<W: Write>(out: &mut W, width: u16) -> std::io::Result<()> {
    let title = gradient_text(BANNER_TEXT, BANNER_START, BANNER_END);
    let subtitle = ansi::colorize(SUBTITLE_TEXT, SUBTITLE_COLOR);

    writeln!(out)?;
    writeln!(
        out,
        "{}{}{}{}",
        " ".repeat(center_padding(width, BANNER_TEXT)),
        ansi::bold_on(),
        title,
        ansi::reset()
    )?;
    writeln!(
        out,
        "{}{}",
        " ".repeat(center_padding(width, SUBTITLE_TEXT)),
        subtitle
    )?;
    writeln!(out)?;
    Ok(())
}
