//! Line input on a real terminal
//!
//! Reads one line at a time in raw mode so Ctrl+C arrives as a key press
//! instead of killing the process mid-prompt.

use crossterm::{
    cursor::MoveLeft,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use gurt_core::{input::LineSource, GurtError, Result};
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

/// Raw mode for as long as this value lives
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// What a single key press does to the line being edited
#[derive(Debug, Clone, PartialEq, Eq)]
enum Edit {
    Insert(char),
    Erase,
    Submit,
    EndOfInput,
    Interrupt,
    Ignore,
}

fn classify(key: KeyEvent) -> Edit {
    if key.kind != KeyEventKind::Press {
        return Edit::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Edit::Interrupt,
        KeyCode::Char('d') if ctrl => Edit::EndOfInput,
        KeyCode::Char(_) if ctrl => Edit::Ignore,
        KeyCode::Char(c) => Edit::Insert(c),
        KeyCode::Backspace => Edit::Erase,
        KeyCode::Enter => Edit::Submit,
        _ => Edit::Ignore,
    }
}

#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for TerminalInput {
    fn next_line(&mut self) -> Result<Option<String>> {
        let _raw = RawMode::enable()?;
        let mut stdout = io::stdout();
        let mut line = String::new();

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };

            match classify(key) {
                Edit::Insert(c) => {
                    line.push(c);
                    write!(stdout, "{}", c)?;
                }
                Edit::Erase => {
                    if let Some(c) = line.pop() {
                        let cols = c.width().unwrap_or(1).max(1) as u16;
                        execute!(stdout, MoveLeft(cols), Clear(ClearType::UntilNewLine))?;
                    }
                }
                Edit::Submit => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(Some(line));
                }
                // Only an empty line ends the input, like a shell
                Edit::EndOfInput if line.is_empty() => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(None);
                }
                Edit::Interrupt => return Err(GurtError::Interrupted),
                Edit::EndOfInput | Edit::Ignore => {}
            }
            stdout.flush()?;
        }
    }
}
