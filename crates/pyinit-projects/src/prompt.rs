//! Terminal prompt abstraction
//!
//! The question flow only talks to a [`Prompter`]. [`DialoguerPrompter`] drives
//! a real terminal; [`ScriptedPrompter`] replays canned answers for tests and
//! non-interactive use.

use std::collections::VecDeque;

use dialoguer::{Confirm, Input, MultiSelect, Select};
use pyinit_core::{RawAnswer, ValidationError};

use crate::error::{Error, Result};

/// Kind of input a prompt collects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Input,
    Select,
    MultiSelect,
    Confirm,
}

/// Everything a prompter needs to render one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    pub message: String,
    pub kind: PromptKind,
    /// Default answer; for confirm prompts `"true"` or `"false"`
    pub default: Option<String>,
    /// Choices for select prompts
    pub options: Vec<String>,
}

impl PromptSpec {
    pub fn input(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: PromptKind::Input,
            default: None,
            options: Vec::new(),
        }
    }

    pub fn select<I, S>(message: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            message: message.into(),
            kind: PromptKind::Select,
            default: None,
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn multi_select<I, S>(message: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: PromptKind::MultiSelect,
            ..Self::select(message, options)
        }
    }

    pub fn confirm(message: impl Into<String>, default: bool) -> Self {
        Self {
            message: message.into(),
            kind: PromptKind::Confirm,
            default: Some(default.to_string()),
            options: Vec::new(),
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Index of the default option for select prompts
    fn default_index(&self) -> usize {
        self.default
            .as_ref()
            .and_then(|d| self.options.iter().position(|o| o == d))
            .unwrap_or(0)
    }

    fn default_flag(&self) -> bool {
        self.default.as_deref() == Some("true")
    }
}

/// Source of answers for interactive questions
pub trait Prompter {
    /// Render a prompt and collect the raw answer
    fn ask(&mut self, spec: &PromptSpec) -> Result<RawAnswer>;

    /// Report a validation failure before the question is asked again
    fn reject(&mut self, error: &ValidationError);

    /// Yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        match self.ask(&PromptSpec::confirm(message, default))? {
            RawAnswer::Flag(answer) => Ok(answer),
            other => Err(Error::prompt(format!(
                "expected a yes/no answer, got '{}'",
                other.to_value()
            ))),
        }
    }

    /// Free-text question with an optional default
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let mut spec = PromptSpec::input(message);
        if let Some(d) = default {
            spec = spec.with_default(d);
        }
        Ok(self.ask(&spec)?.to_value())
    }

    /// Pick any number of options
    fn multi_select(&mut self, message: &str, options: &[&str]) -> Result<Vec<String>> {
        match self.ask(&PromptSpec::multi_select(message, options.iter().copied()))? {
            RawAnswer::Choices(items) => Ok(items),
            other => Err(Error::prompt(format!(
                "expected a list of choices, got '{}'",
                other.to_value()
            ))),
        }
    }
}

/// Prompter backed by dialoguer on the controlling terminal
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, spec: &PromptSpec) -> Result<RawAnswer> {
        let answer = match spec.kind {
            PromptKind::Input => {
                let mut input = Input::<String>::new()
                    .with_prompt(&spec.message)
                    .allow_empty(true);
                if let Some(default) = &spec.default {
                    input = input.default(default.clone()).show_default(!default.is_empty());
                }
                RawAnswer::Text(input.interact_text()?)
            }
            PromptKind::Select => {
                let selection = Select::new()
                    .with_prompt(&spec.message)
                    .items(&spec.options)
                    .default(spec.default_index())
                    .interact()?;
                let choice = spec
                    .options
                    .get(selection)
                    .cloned()
                    .ok_or_else(|| Error::prompt("invalid selection"))?;
                RawAnswer::Choice(choice)
            }
            PromptKind::MultiSelect => {
                let selection = MultiSelect::new()
                    .with_prompt(&spec.message)
                    .items(&spec.options)
                    .interact()?;
                RawAnswer::Choices(
                    selection
                        .into_iter()
                        .filter_map(|i| spec.options.get(i).cloned())
                        .collect(),
                )
            }
            PromptKind::Confirm => RawAnswer::Flag(
                Confirm::new()
                    .with_prompt(&spec.message)
                    .default(spec.default_flag())
                    .interact()?,
            ),
        };
        Ok(answer)
    }

    fn reject(&mut self, error: &ValidationError) {
        eprintln!("{} {}", console::style("✗").red().bold(), error);
    }
}

/// Queue-backed prompter that replays canned answers.
///
/// An empty answer (`Text("")`) on a prompt with a default yields the
/// default, mirroring pressing enter in a terminal. Running out of answers
/// behaves like a closed input stream.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<RawAnswer>,
    asked: Vec<String>,
    rejections: Vec<ValidationError>,
}

impl ScriptedPrompter {
    pub fn new<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = RawAnswer>,
    {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Messages of every prompt shown so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Validation failures reported so far
    pub fn rejections(&self) -> &[ValidationError] {
        &self.rejections
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, spec: &PromptSpec) -> Result<RawAnswer> {
        self.asked.push(spec.message.clone());
        let answer = self
            .answers
            .pop_front()
            .ok_or_else(|| Error::prompt(format!("no answer for '{}'", spec.message)))?;

        let answer = match (&answer, &spec.default) {
            (RawAnswer::Text(s), Some(default)) if s.is_empty() => match spec.kind {
                PromptKind::Input => RawAnswer::Text(default.clone()),
                PromptKind::Select => RawAnswer::Choice(default.clone()),
                PromptKind::Confirm => RawAnswer::Flag(spec.default_flag()),
                PromptKind::MultiSelect => RawAnswer::Choices(Vec::new()),
            },
            _ => answer,
        };
        Ok(answer)
    }

    fn reject(&mut self, error: &ValidationError) {
        self.rejections.push(*error);
    }
}
