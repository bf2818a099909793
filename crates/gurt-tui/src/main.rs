use anyhow::Result;
use gurt_core::{
    input::{LineSource, ReaderSource},
    settings::Settings,
    GurtError,
};
use std::io::{self, IsTerminal, Write};
use tracing::info;

#[cfg(unix)]
mod interrupt;
mod logging;
mod terminal_input;
mod ui;

use terminal_input::TerminalInput;
use ui::app::App;

fn main() -> Result<()> {
    logging::init();

    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to load settings: {}. Using defaults.", e);
            Settings::default()
        }
    };

    #[cfg(unix)]
    interrupt::watch(|| {
        // The line editor may still hold the terminal in raw mode
        let _ = crossterm::terminal::disable_raw_mode();
        say_bye();
        std::process::exit(0);
    })?;

    let input: Box<dyn LineSource> = if io::stdin().is_terminal() {
        Box::new(TerminalInput::new())
    } else {
        Box::new(ReaderSource::new(io::stdin().lock()))
    };

    let mut app = App::new(io::stdout(), input, settings);

    match app.run() {
        Ok(()) => {
            info!("session ended");
            Ok(())
        }
        Err(GurtError::Interrupted) => {
            info!("session interrupted");
            say_bye();
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn say_bye() {
    let mut stdout = io::stdout();
    let _ = writeln!(stdout, "\nInterrupted. Bye.");
    let _ = stdout.flush();
}
