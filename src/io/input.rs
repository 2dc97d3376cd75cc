//! Input collaborator.
//!
//! The engine asks for raw tokens and validates them itself, asking
//! again until it gets something usable. An implementation returns
//! `None` when no more input will ever arrive; the engine then stops the
//! round with `GameError::InputClosed`.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use tracing::warn;

use super::display::GameDisplay;
use crate::core::GameError;

/// Source of human decisions.
pub trait GameInput {
    /// One of a fixed set of tokens (matched case-insensitively by the engine).
    fn request_choice(&mut self, prompt: &str, alternatives: &[&str]) -> Option<String>;

    /// A number within `range` (1-based, as shown to the player).
    fn request_index(&mut self, prompt: &str, range: RangeInclusive<usize>) -> Option<String>;

    /// Free text, such as a name.
    fn request_text(&mut self, prompt: &str) -> Option<String>;

    /// Wait until the player is ready to go on.
    fn acknowledge(&mut self, _prompt: &str) {}
}

/// Pre-recorded answers, consumed in order.
///
/// Acknowledgements consume nothing.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// No answers at all, for bot-only tables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Every prompt asked so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    fn next(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front()
    }
}

impl GameInput for ScriptedInput {
    fn request_choice(&mut self, prompt: &str, _alternatives: &[&str]) -> Option<String> {
        self.next(prompt)
    }

    fn request_index(&mut self, prompt: &str, _range: RangeInclusive<usize>) -> Option<String> {
        self.next(prompt)
    }

    fn request_text(&mut self, prompt: &str) -> Option<String> {
        self.next(prompt)
    }
}

/// Parse a 1-based number and check it falls in `range`.
pub fn parse_index(token: &str, range: &RangeInclusive<usize>) -> Result<usize, GameError> {
    let reason = || {
        format!(
            "please type an integer between {} and {}",
            range.start(),
            range.end()
        )
    };
    match token.trim().parse::<usize>() {
        Ok(n) if range.contains(&n) => Ok(n),
        _ => Err(GameError::invalid_input(reason())),
    }
}

/// Ask for a number in `range` until one is given. Returns the 1-based answer.
pub fn ask_index(
    input: &mut dyn GameInput,
    display: &mut dyn GameDisplay,
    prompt: &str,
    range: RangeInclusive<usize>,
) -> Result<usize, GameError> {
    loop {
        let token = input
            .request_index(prompt, range.clone())
            .ok_or(GameError::InputClosed)?;
        match parse_index(&token, &range) {
            Ok(n) => return Ok(n),
            Err(err) if err.is_recoverable() => {
                warn!(token = %token, "rejected index");
                display.show_warning(&format!("ERROR: {err}"));
            }
            Err(err) => return Err(err),
        }
    }
}

/// Ask for one of `alternatives` until one is given. Returns it upper-cased.
pub fn ask_choice(
    input: &mut dyn GameInput,
    display: &mut dyn GameDisplay,
    prompt: &str,
    alternatives: &[&str],
) -> Result<String, GameError> {
    loop {
        let token = input
            .request_choice(prompt, alternatives)
            .ok_or(GameError::InputClosed)?;
        let normalized = token.trim().to_ascii_uppercase();
        if alternatives.iter().any(|a| a.eq_ignore_ascii_case(&normalized)) {
            return Ok(normalized);
        }
        warn!(token = %token, "rejected choice");
        display.show_warning(&format!(
            "ERROR: please type one of {}",
            alternatives.join(", ")
        ));
    }
}
