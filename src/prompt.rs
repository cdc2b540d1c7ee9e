//! Validated single-line prompts.
//!
//! A [`Prompt`] keeps asking until the answer is one of an accepted set of
//! tokens or matches a pattern. An empty answer selects the default when one
//! is configured.

use std::io::{BufRead, Write};

use regex::Regex;
use thiserror::Error;

use crate::console::{Console, ConsoleError};

const GENERIC_WARNING: &str = "Sorry, please enter a valid input.";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("accepted inputs and a pattern cannot be used together")]
    ConflictingConstraints,
    #[error("a prompt needs either accepted inputs or a pattern")]
    MissingConstraint,
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

enum Constraint<'p> {
    Inputs(Vec<String>),
    Pattern(&'p Regex),
}

pub struct Prompt<'a> {
    message: &'a str,
    inputs: Option<Vec<String>>,
    pattern: Option<Regex>,
    default: Option<&'a str>,
    warning: Option<&'a str>,
    extra_information: Option<&'a str>,
    case_sensitive: bool,
}

impl<'a> Prompt<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            inputs: None,
            pattern: None,
            default: None,
            warning: None,
            extra_information: None,
            case_sensitive: false,
        }
    }

    pub fn inputs(mut self, inputs: &[&str]) -> Self {
        self.inputs = Some(inputs.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn default(mut self, default: &'a str) -> Self {
        self.default = Some(default);
        self
    }

    pub fn warning(mut self, warning: &'a str) -> Self {
        self.warning = Some(warning);
        self
    }

    pub fn extra_information(mut self, info: &'a str) -> Self {
        self.extra_information = Some(info);
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    fn constraint(&self) -> Result<Constraint<'_>, PromptError> {
        match (&self.inputs, &self.pattern) {
            (Some(_), Some(_)) => Err(PromptError::ConflictingConstraints),
            (None, None) => Err(PromptError::MissingConstraint),
            (Some(inputs), None) => Ok(Constraint::Inputs(
                inputs.iter().map(|i| self.normalize(i)).collect(),
            )),
            (None, Some(pattern)) => Ok(Constraint::Pattern(pattern)),
        }
    }

    fn normalize(&self, value: &str) -> String {
        if self.case_sensitive {
            value.to_string()
        } else {
            value.to_lowercase()
        }
    }

    /// Asks until a valid answer is given.
    ///
    /// The constraint is checked before anything is written, so a misused
    /// prompt fails without touching the terminal.
    pub fn ask<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<String, PromptError> {
        let constraint = self.constraint()?;

        loop {
            if let Some(info) = self.extra_information {
                console.warning(info)?;
            }

            let answer = self.normalize(&console.read_line(self.message)?);

            let accepted = match &constraint {
                Constraint::Inputs(inputs) => inputs.contains(&answer),
                Constraint::Pattern(pattern) => pattern.find(&answer).is_some_and(|m| m.start() == 0),
            };
            if accepted {
                return Ok(answer);
            }

            if let Some(default) = self.default {
                if answer.is_empty() {
                    console.overwrite_previous(self.message, default)?;
                    return Ok(default.to_string());
                }
            }

            console.danger(self.warning.unwrap_or(GENERIC_WARNING))?;
        }
    }
}

/// Asks a y/n question and returns whether the answer was "y".
pub fn confirm<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    message: &str,
    default_yes: bool,
) -> Result<bool, PromptError> {
    let answer = Prompt::new(message)
        .inputs(&["y", "n"])
        .default(if default_yes { "y" } else { "n" })
        .ask(console)?;
    Ok(answer == "y")
}
