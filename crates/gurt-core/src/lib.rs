//! # Gurt Core Library
//!
//! This crate holds everything gurt does, independent of the terminal it runs in.
//! Every component writes to a caller-supplied sink and takes its randomness,
//! input and host access as injected capabilities so it can be driven by tests.
//!
//! ## Modules
//!
//! - `ansi`: Escape-sequence formatting and screen helpers
//! - `banner`: Gradient title and subtitle
//! - `art`: Random ASCII art gallery
//! - `host`: Best-effort probes of the machine we run on
//! - `system_info`: The system info report built on `host`
//! - `surprise`: Random URL opener
//! - `game`: Guess-the-number state machine
//! - `menu`: Menu choices and their aliases
//! - `input`: Line sources for interactive prompts
//! - `settings`: Environment-driven settings

pub mod ansi;
pub mod art;
pub mod banner;
pub mod error;
pub mod game;
pub mod host;
pub mod input;
pub mod menu;
pub mod settings;
pub mod surprise;
pub mod system_info;

pub use error::{GurtError, Result};
