//! Surprise web opener
//!
//! Picks a random URL and tries, in order: the user's preferred opener, the
//! platform's default opener, and finally printing the URL for a manual visit.

use crate::ansi;
use rand::{seq::SliceRandom, Rng};
use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const SURPRISES: &[&str] = &[
    "https://thisworddoesnotexist.com/",
    "https://web.archive.org/web/20200202020202/https://www.retrojunk.com/",
    "https://patatap.com/",
    "https://shadertoy.com/",
    "https://pointerpointer.com/",
];

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("could not start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Status { program: String, status: ExitStatus },

    #[error("no default URL opener on this platform")]
    Unsupported,
}

/// Which step of the cascade handled the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Preferred,
    Default,
    Manual,
}

/// Something that can hand a URL to a browser.
pub trait Launcher {
    /// Run `command` with `url` as its only argument and wait for it.
    ///
    /// The command is used as-is: no shell, no splitting.
    fn launch(&self, command: &str, url: &str) -> Result<(), LaunchError>;

    /// Open `url` with whatever the platform uses by default.
    fn open_default(&self, url: &str) -> Result<(), LaunchError>;
}

/// Launches real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }

    fn default_command(url: &str) -> Option<Command> {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            Some(cmd)
        } else if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            Some(cmd)
        } else if cfg!(unix) {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            Some(cmd)
        } else {
            None
        }
    }
}

fn wait_for(mut cmd: Command) -> Result<ExitStatus, LaunchError> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| LaunchError::Spawn { program, source })
}

impl Launcher for SystemLauncher {
    fn launch(&self, command: &str, url: &str) -> Result<(), LaunchError> {
        let mut cmd = Command::new(command);
        cmd.arg(url);
        // The preferred opener counts as handled once it runs, whatever it returns
        let status = wait_for(cmd)?;
        debug!(command, %status, "preferred opener finished");
        Ok(())
    }

    fn open_default(&self, url: &str) -> Result<(), LaunchError> {
        let cmd = Self::default_command(url).ok_or(LaunchError::Unsupported)?;
        let program = cmd.get_program().to_string_lossy().into_owned();
        let status = wait_for(cmd)?;
        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::Status { program, status })
        }
    }
}

pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Option<&'static str> {
    SURPRISES.choose(rng).copied()
}

/// Hand `url` to the preferred opener, then the default one, then the user.
pub fn open_url<W: Write>(
    out: &mut W,
    launcher: &dyn Launcher,
    preferred: Option<&str>,
    url: &str,
) -> std::io::Result<OpenOutcome> {
    if let Some(command) = preferred.map(str::trim).filter(|c| !c.is_empty()) {
        match launcher.launch(command, url) {
            Ok(()) => return Ok(OpenOutcome::Preferred),
            Err(e) => warn!(error = %e, "preferred opener failed, trying the default"),
        }
    }

    let outcome = match launcher.open_default(url) {
        Ok(()) => OpenOutcome::Default,
        Err(e) => {
            warn!(error = %e, "default opener failed");
            writeln!(out, "Couldn't open browser. Try visiting: {}", url)?;
            OpenOutcome::Manual
        }
    };
    writeln!(out)?;
    Ok(outcome)
}

/// Announce a random surprise, pause for effect, then open it.
pub fn open_surprise<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rng: &mut R,
    launcher: &dyn Launcher,
    preferred: Option<&str>,
    delay: Duration,
) -> std::io::Result<OpenOutcome> {
    let Some(url) = pick(rng) else {
        return Ok(OpenOutcome::Manual);
    };

    writeln!(out, "{} {}", ansi::bold("Opening surprise:"), url)?;
    out.flush()?;
    if !delay.is_zero() {
        thread::sleep(delay);
    }

    open_url(out, launcher, preferred, url)
}
