//! Random ASCII art

use crate::ansi::{self, Rgb};
use rand::{seq::SliceRandom, Rng};
use std::io::Write;

pub const GALLERY: &[&str] = &[
    r"
      .-'''-.
     / .===. \
     \/ 6 6 \/
     ( \___/ )
 ___ooo__V__ooo___
",
    r"
   (\_/)
   ( •_•)
  / >🍪   -- cookie bot
",
    r"
   ____  /|
  / . .\/ /
  \  ---|/
   \  /
__/_/__
",
    r"
   _____
  /     \
 | () () |
  \  ^  /
   |||||
   |||||
",
    r"
    _~_
   (o o)
  /  V  \
 /(  _  )\
   ^^ ^^
",
];

/// Pick one picture from the gallery.
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Option<&'static str> {
    GALLERY.choose(rng).copied()
}

/// Tint for the line at `index`; every channel steps by a fixed amount and wraps.
pub fn line_color(index: usize) -> Rgb {
    let i = index as i64;
    let channel = |base: i64, step: i64| (base + step * i).rem_euclid(256) as u8;
    Rgb::new(channel(50, 30), channel(100, 20), channel(200, -15))
}

/// Split `art` into lines without the blank lines around it and tint each one.
pub fn tint_lines(art: &str) -> Vec<String> {
    let lines: Vec<&str> = art.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());

    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last]
            .iter()
            .enumerate()
            .map(|(i, line)| ansi::colorize(line, line_color(i)))
            .collect(),
        _ => Vec::new(),
    }
}

/// Print a random picture, one tinted line at a time, then a blank line.
pub fn show_ascii_art<W: Write, R: Rng + ?Sized>(out: &mut W, rng: &mut R) -> std::io::Result<()> {
    if let Some(art) = pick(rng) {
        for line in tint_lines(art) {
            writeln!(out, "{}", line)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_gallery_has_enough_art() {
        assert!(GALLERY.len() >= 4);
        for art in GALLERY {
            assert!(!tint_lines(art).is_empty());
        }
    }

    #[test]
    fn test_blank_lines_are_stripped() {
        let lines = tint_lines("\n\n  /\\\n /  \\\n   \n\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], ansi::colorize("  /\\", line_color(0)));
        assert_eq!(lines[1], ansi::colorize(" /  \\", line_color(1)));
    }

    #[test]
    fn test_line_colors_are_deterministic_and_distinct() {
        assert_eq!(line_color(0), Rgb::new(50, 100, 200));
        assert_eq!(line_color(1), Rgb::new(80, 120, 185));
        // Blue wraps below zero instead of saturating
        assert_eq!(line_color(14), Rgb::new(214, 124, 246));

        let colors: Vec<Rgb> = (0..8).map(line_color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_same_seed_same_picture() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(pick(&mut a), pick(&mut b));
    }

    #[test]
    fn test_show_ascii_art_ends_with_blank_line() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut out = Vec::new();
        show_ascii_art(&mut out, &mut rng).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("\x1b[0m\n\n"));
        assert!(text.contains("\x1b[38;2;50;100;200m"));
    }
}
