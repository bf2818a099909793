use gurt_core::{
    ansi, art, banner,
    game::{self, GuessingGame},
    host::{Host, SystemHost},
    input::LineSource,
    menu::MenuChoice,
    settings::{Pacing, Settings},
    surprise::{self, Launcher, SystemLauncher},
    system_info, Result,
};
use rand::{rngs::StdRng, SeedableRng};
use std::io::Write;
use std::thread;
use tracing::{debug, info};

const MENU_PROMPT: &str = "\nChoose: ";
const ACK_PROMPT: &str = "Press Enter to continue...";

/// The menu loop: draw, read one choice, run it, repeat until quit.
pub struct App<W: Write> {
    out: W,
    input: Box<dyn LineSource>,
    host: Box<dyn Host>,
    launcher: Box<dyn Launcher>,
    settings: Settings,
    pacing: Pacing,
    rng: StdRng,
    width: Option<u16>,
    should_quit: bool,
}

impl<W: Write> App<W> {
    pub fn new(out: W, input: Box<dyn LineSource>, settings: Settings) -> Self {
        Self {
            out,
            input,
            host: Box::new(SystemHost::new()),
            launcher: Box::new(SystemLauncher::new()),
            settings,
            pacing: Pacing::default(),
            rng: StdRng::from_entropy(),
            width: None,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        while !self.should_quit {
            self.draw_header()?;
            self.draw_menu()?;

            match self.prompt(MENU_PROMPT)? {
                Some(line) => self.dispatch(&line)?,
                // Nothing left to read: leave the same way as an explicit quit
                None => self.dispatch("q")?,
            }
        }
        Ok(())
    }

    fn width(&self) -> u16 {
        self.width.unwrap_or_else(ansi::terminal_width)
    }

    fn draw_header(&mut self) -> Result<()> {
        let width = self.width();
        ansi::clear_screen(&mut self.out)?;
        banner::print_banner(&mut self.out, width)?;
        Ok(())
    }

    fn draw_menu(&mut self) -> Result<()> {
        writeln!(self.out, "Menu:")?;
        for choice in MenuChoice::all() {
            writeln!(self.out, "  {}", choice.label())?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        self.input.next_line()
    }

    fn dispatch(&mut self, line: &str) -> Result<()> {
        let Some(choice) = MenuChoice::parse(line) else {
            debug!(input = line, "unknown menu choice");
            writeln!(self.out, "Unknown choice.")?;
            self.out.flush()?;
            pause(self.pacing.unknown_choice_pause);
            return Ok(());
        };

        debug!(?choice, "menu choice");
        if choice == MenuChoice::Quit {
            writeln!(self.out, "Goodbye.")?;
            self.out.flush()?;
            self.should_quit = true;
            return Ok(());
        }

        if choice.redraws_banner() {
            self.draw_header()?;
        }
        self.perform(choice)?;
        self.prompt(ACK_PROMPT)?;
        Ok(())
    }

    fn perform(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Art => art::show_ascii_art(&mut self.out, &mut self.rng)?,
            MenuChoice::SystemInfo => {
                system_info::show_system_info(&mut self.out, self.host.as_ref())?
            }
            MenuChoice::Surprise => {
                let outcome = surprise::open_surprise(
                    &mut self.out,
                    &mut self.rng,
                    self.launcher.as_ref(),
                    self.settings.preferred_opener(),
                    self.pacing.surprise_delay,
                )?;
                debug!(?outcome, "surprise opened");
            }
            MenuChoice::Game => {
                let mut game = GuessingGame::new(&mut self.rng);
                game::play(&mut self.out, self.input.as_mut(), &mut game)?;
            }
            MenuChoice::Quit => {}
        }
        Ok(())
    }
}

/// Hooks for scripted sessions
#[cfg(test)]
impl<W: Write> App<W> {
    pub fn with_host(mut self, host: Box<dyn Host>) -> Self {
        self.host = host;
        self
    }

    pub fn with_launcher(mut self, launcher: Box<dyn Launcher>) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Pin the terminal width instead of asking the terminal
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn into_writer(self) -> W {
        self.out
    }
}

fn pause(duration: std::time::Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gurt_core::host::{DiskUsage, Platform};
    use gurt_core::input::{ReaderSource, ScriptedInput};
    use gurt_core::surprise::LaunchError;
    use gurt_core::GurtError;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};

    /// A machine where only `uname` answers
    struct UnameOnlyHost;

    impl Host for UnameOnlyHost {
        fn platform(&self) -> Option<Platform> {
            None
        }

        fn runtime_version(&self) -> Option<String> {
            None
        }

        fn command_output(&self, program: &str, _args: &[&str]) -> Option<String> {
            (program == "uname").then(|| "Linux testbox 6.1.0 x86_64".to_string())
        }

        fn read_to_string(&self, _path: &Path) -> Option<String> {
            None
        }

        fn current_dir(&self) -> Option<PathBuf> {
            None
        }

        fn disk_usage(&self, _path: &Path) -> Option<DiskUsage> {
            None
        }
    }

    struct BrokenLauncher;

    impl Launcher for BrokenLauncher {
        fn launch(&self, _command: &str, _url: &str) -> std::result::Result<(), LaunchError> {
            Err(LaunchError::Unsupported)
        }

        fn open_default(&self, _url: &str) -> std::result::Result<(), LaunchError> {
            Err(LaunchError::Unsupported)
        }
    }

    fn scripted_app(input: impl LineSource + 'static) -> App<Vec<u8>> {
        App::new(Vec::new(), Box::new(input), Settings::default())
            .with_host(Box::new(UnameOnlyHost))
            .with_launcher(Box::new(BrokenLauncher))
            .with_rng(StdRng::seed_from_u64(42))
            .with_pacing(Pacing::instant())
            .with_width(80)
    }

    fn run_script(input: impl LineSource + 'static) -> (Result<()>, String) {
        let mut app = scripted_app(input);
        let result = app.run();
        let out = String::from_utf8(app.into_writer()).unwrap();
        (result, out)
    }

    const CLEAR: &str = "\x1b[2J";

    #[test]
    fn test_padded_uppercase_q_quits() {
        let (result, out) = run_script(ScriptedInput::new(["  Q  ", "1"]));

        assert!(result.is_ok());
        assert!(out.ends_with("Goodbye.\n"));
        assert_eq!(out.matches(MENU_PROMPT).count(), 1);
        assert!(!out.contains(ACK_PROMPT));
    }

    #[test]
    fn test_menu_lists_every_option() {
        let (_, out) = run_script(ScriptedInput::new(["q"]));

        assert!(out.contains("Menu:\n"));
        for choice in MenuChoice::all() {
            assert!(out.contains(&format!("  {}\n", choice.label())));
        }
        assert!(out.contains(banner::SUBTITLE_TEXT));
    }

    #[test]
    fn test_unknown_choice_reloops_without_ack() {
        let (result, out) = run_script(ScriptedInput::new(["zzz", "exit"]));

        assert!(result.is_ok());
        assert!(out.contains("Unknown choice.\n"));
        assert!(!out.contains(ACK_PROMPT));
        assert_eq!(out.matches(MENU_PROMPT).count(), 2);
    }

    #[test]
    fn test_art_redraws_banner_and_waits() {
        let (result, out) = run_script(ScriptedInput::new(["a", "", "q"]));

        assert!(result.is_ok());
        // menu, art, menu
        assert_eq!(out.matches(CLEAR).count(), 3);
        assert!(out.contains("\x1b[38;2;50;100;200m"));
        assert_eq!(out.matches(ACK_PROMPT).count(), 1);
    }

    #[test]
    fn test_system_info_uses_host_probes() {
        let (_, out) = run_script(ScriptedInput::new(["sys", "", "q"]));

        assert!(out.contains("Uname:      Linux testbox 6.1.0 x86_64\n"));
        assert!(!out.contains("Uptime:"));
        assert!(!out.contains("Disk (cwd):"));
    }

    #[test]
    fn test_surprise_skips_redraw_and_falls_back_to_text() {
        let (result, out) = run_script(ScriptedInput::new(["3", "", "q"]));

        assert!(result.is_ok());
        // Only the two menu screens clear; the surprise itself does not
        assert_eq!(out.matches(CLEAR).count(), 2);
        assert!(out.contains("Couldn't open browser. Try visiting: https://"));
        assert_eq!(out.matches(ACK_PROMPT).count(), 1);
    }

    #[test]
    fn test_game_can_be_aborted() {
        let (result, out) = run_script(ScriptedInput::new(["game", "abc", "q", "", "q"]));

        assert!(result.is_ok());
        assert!(out.contains("Guess the Number"));
        assert!(out.contains("> Type a number or 'q' to quit.\n"));
        assert!(out.contains("> Aborted.\n"));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (result, out) = run_script(ScriptedInput::new(Vec::<String>::new()));

        assert!(result.is_ok());
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_interrupt_at_prompt_surfaces_once() {
        let (result, out) = run_script(ScriptedInput::new(["zzz"]).then_interrupt());

        assert!(matches!(result, Err(GurtError::Interrupted)));
        assert!(!out.contains("Goodbye."));
    }

    #[test]
    fn test_undecodable_piped_bytes_are_an_unknown_choice() {
        let piped = ReaderSource::new(Cursor::new(b"\xff\xfe\nq\n".to_vec()));
        let (result, out) = run_script(piped);

        assert!(result.is_ok());
        assert!(out.contains("Unknown choice.\n"));
        assert!(out.ends_with("Goodbye.\n"));
    }
}
