//! Guess the Number
//!
//! `GuessingGame` is the pure state machine; [`play`] wires it to a prompt.

use crate::ansi;
use crate::error::Result;
use crate::input::LineSource;
use rand::Rng;
use std::io::Write;
use std::num::IntErrorKind;
use tracing::debug;

pub const LOW: i64 = 1;
pub const HIGH: i64 = 100;

const QUIT_TOKENS: [&str; 3] = ["q", "quit", "exit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    Won,
    Aborted,
}

/// What the game says back to one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Higher,
    Lower,
    Won { secret: i64, attempts: u32 },
    Aborted,
    /// Not a number; nothing changed
    Invalid,
}

#[derive(Debug, Clone)]
pub struct GuessingGame {
    low: i64,
    high: i64,
    secret: i64,
    attempts: u32,
    state: GameState,
}

impl GuessingGame {
    /// Start a new game with a secret drawn from `LOW..=HIGH`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let secret = rng.gen_range(LOW..=HIGH);
        Self::with_secret(LOW, HIGH, secret)
    }

    pub fn with_secret(low: i64, high: i64, secret: i64) -> Self {
        Self {
            low,
            high,
            secret,
            attempts: 0,
            state: GameState::AwaitingGuess,
        }
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::AwaitingGuess
    }

    /// Advance the game by one line of input.
    pub fn feed(&mut self, input: &str) -> Reply {
        match self.state {
            GameState::Won => {
                return Reply::Won {
                    secret: self.secret,
                    attempts: self.attempts,
                }
            }
            GameState::Aborted => return Reply::Aborted,
            GameState::AwaitingGuess => {}
        }

        let input = input.trim();
        if QUIT_TOKENS.contains(&input.to_lowercase().as_str()) {
            self.state = GameState::Aborted;
            return Reply::Aborted;
        }

        // Integers past the i64 range are still guesses, just far off
        let guess = match input.parse::<i64>() {
            Ok(guess) => guess,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Reply::Invalid,
            },
        };

        self.attempts = self.attempts.saturating_add(1);
        if guess < self.secret {
            Reply::Higher
        } else if guess > self.secret {
            Reply::Lower
        } else {
            self.state = GameState::Won;
            Reply::Won {
                secret: self.secret,
                attempts: self.attempts,
            }
        }
    }
}

fn reply_text(reply: Reply) -> String {
    match reply {
        Reply::Higher => "Higher.".to_string(),
        Reply::Lower => "Lower.".to_string(),
        Reply::Won { secret, attempts } => format!("Nice! {} in {} attempts.", secret, attempts),
        Reply::Aborted => "Aborted.".to_string(),
        Reply::Invalid => "Type a number or 'q' to quit.".to_string(),
    }
}

/// Run `game` to completion against `input`; end of input aborts it.
pub fn play<W: Write>(
    out: &mut W,
    input: &mut dyn LineSource,
    game: &mut GuessingGame,
) -> Result<GameState> {
    writeln!(out, "{}", ansi::bold("Guess the Number"))?;
    writeln!(
        out,
        "I'm thinking of a number between {} and {}. Try to guess!",
        game.low(),
        game.high()
    )?;

    while !game.is_over() {
        write!(out, "> ")?;
        out.flush()?;

        let reply = match input.next_line()? {
            Some(line) => game.feed(&line),
            None => game.feed(QUIT_TOKENS[0]),
        };
        writeln!(out, "{}", reply_text(reply))?;
    }

    debug!(state = ?game.state(), attempts = game.attempts(), "game finished");
    Ok(game.state())
}
