use thiserror::Error;

/// Errors that can escape a gurt session.
///
/// Almost everything in gurt is best-effort, so this stays small: the user
/// pressed Ctrl+C, the terminal went away, or the settings could not be read.
#[derive(Debug, Error)]
pub enum GurtError {
    #[error("interrupted by user")]
    Interrupted,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to load settings: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for GurtError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, GurtError>;
