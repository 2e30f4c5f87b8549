//! Yes/no confirmation with bounded retries.
//!
//! ```text
//! Prompting --unrecognised--> Retrying(1) --...--> Retrying(MAX_TRIES)
//!     |                            |                      |
//!     +--------y/n/default---------+                  Fallback
//!                  |                                      |
//!              Resolved <-------"y..." or anything else---+
//! ```
//!
//! Responses match on their first letter, case-insensitively. An empty
//! response takes the default if there is one. After `MAX_TRIES`
//! unrecognised responses a single override question is asked, and
//! anything not starting with "y" counts as no.

use std::str::FromStr;

use crate::core::{GameError, Result};

/// Unrecognised responses tolerated before the fallback question.
pub const MAX_TRIES: u32 = 7;

/// A yes/no answer, used as a confirmation default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    #[must_use]
    pub const fn as_bool(self) -> bool {
        matches!(self, Answer::Yes)
    }

    /// Choice hint shown after the question.
    #[must_use]
    pub fn hint(default: Option<Answer>) -> &'static str {
        match default {
            None => " [y/n] ",
            Some(Answer::Yes) => " [Y/n] ",
            Some(Answer::No) => " [y/N] ",
        }
    }
}

impl FromStr for Answer {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yes" => Ok(Answer::Yes),
            "no" => Ok(Answer::No),
            _ => Err(GameError::InvalidDefaultAnswer(s.to_string())),
        }
    }
}

/// Line-oriented prompt/response channel.
pub trait Ask {
    /// Show `prompt` and return the next line of input, without its line
    /// ending.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Show a line of text.
    fn say(&mut self, line: &str) -> Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConfirmState {
    Prompting,
    Retrying(u32),
    Fallback,
    Resolved(bool),
}

/// Interpret a response: `Some(answer)` if it starts with y or n.
#[must_use]
pub fn parse_response(response: &str, default: Option<Answer>) -> Option<bool> {
    let response = response.trim();
    if response.is_empty() {
        return default.map(Answer::as_bool);
    }
    match response.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y') => Some(true),
        Some('n') => Some(false),
        _ => None,
    }
}

/// Ask `question` until it is answered.
pub fn confirm<A: Ask + ?Sized>(ask: &mut A, question: &str, default: Option<Answer>) -> Result<bool> {
    let prompt = format!("{}{}", question, Answer::hint(default));
    let mut state = ConfirmState::Prompting;

    loop {
        state = match state {
            ConfirmState::Prompting | ConfirmState::Retrying(_) => {
                let tries = match state {
                    ConfirmState::Retrying(n) => n,
                    _ => 0,
                };
                let response = ask.ask(&prompt)?;
                match parse_response(&response, default) {
                    Some(answer) => ConfirmState::Resolved(answer),
                    None if tries + 1 >= MAX_TRIES => ConfirmState::Fallback,
                    None => {
                        ask.say("Please enter \"yes\" or \"no\" (or \"y\" or \"n\").")?;
                        ConfirmState::Retrying(tries + 1)
                    }
                }
            }
            ConfirmState::Fallback => {
                ask.say("Please enter \"yes\" or \"no\" (or \"y\" or \"n\").")?;
                ask.say("I'm having trouble understanding your responses!")?;
                let response = ask.ask("Please enter \"yes\" if you wish to continue. ")?;
                ConfirmState::Resolved(parse_response(&response, None) == Some(true))
            }
            ConfirmState::Resolved(answer) => return Ok(answer),
        };
    }
}
