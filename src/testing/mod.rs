//! Testing utilities
//!
//! [`ScriptedChooser`] replays a queue of answers so the ordering workflow can
//! be driven without a terminal.

use crate::interaction::{Chooser, Selection, Validator};
use anyhow::{anyhow, bail, Result};
use std::collections::VecDeque;

/// One queued answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Pick the offered item with this value
    Pick(String),
    /// Pick the offered item at this position
    PickIndex(usize),
    /// Return this selection verbatim, even if it was never offered
    Raw(Selection),
    /// Type this text
    Text(String),
    /// Fail the prompt, as if the user aborted
    Abort,
}

/// Chooser that answers from a script and records what it was asked
#[derive(Debug, Default)]
pub struct ScriptedChooser {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
    offered: Vec<Vec<String>>,
    rejections: Vec<String>,
}

impl ScriptedChooser {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Labels of every prompt shown, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Item lists of every `select_one` call, in order
    pub fn offered(&self) -> &[Vec<String>] {
        &self.offered
    }

    /// Validator messages produced for rejected text answers
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    /// Answers that were never consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, label: &str) -> Result<Answer> {
        self.asked.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("No scripted answer available for '{label}'"))
    }
}

/// Shorthand for [`Answer::Pick`]
pub fn pick(value: &str) -> Answer {
    Answer::Pick(value.to_string())
}

/// Shorthand for [`Answer::Text`]
pub fn text(value: &str) -> Answer {
    Answer::Text(value.to_string())
}

impl Chooser for ScriptedChooser {
    fn select_one(&mut self, label: &str, items: &[String]) -> Result<Selection> {
        self.offered.push(items.to_vec());
        match self.next(label)? {
            Answer::Pick(value) => items
                .iter()
                .position(|item| *item == value)
                .map(|index| Selection::new(index, value.clone()))
                .ok_or_else(|| anyhow!("'{value}' was not offered for '{label}'")),
            Answer::PickIndex(index) => items
                .get(index)
                .map(|value| Selection::new(index, value.clone()))
                .ok_or_else(|| anyhow!("index {index} out of range for '{label}'")),
            Answer::Raw(selection) => Ok(selection),
            Answer::Text(_) => bail!("expected a selection for '{label}', got text"),
            Answer::Abort => bail!("^C"),
        }
    }

    fn prompt_text(&mut self, label: &str, validate: Validator<'_>) -> Result<String> {
        loop {
            match self.next(label)? {
                Answer::Text(value) => match validate(&value) {
                    Ok(()) => return Ok(value),
                    Err(reason) => self.rejections.push(reason),
                },
                Answer::Abort => bail!("^C"),
                other => bail!("expected text for '{label}', got {other:?}"),
            }
        }
    }
}
