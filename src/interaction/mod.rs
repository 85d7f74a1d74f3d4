//! User interaction
//!
//! The workflow never talks to the terminal directly. It asks a [`Chooser`]
//! to pick from a list or to read a line of text, which keeps the ordering
//! logic testable with scripted answers.

pub mod prompts;

pub use prompts::TerminalChooser;

use anyhow::Result;

/// Validates free-text input; `Err` carries the message shown before re-asking
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// An answer to [`Chooser::select_one`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Position of the answer in the offered items
    pub index: usize,
    /// The offered item at that position
    pub value: String,
}

impl Selection {
    pub fn new(index: usize, value: impl Into<String>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }
}

/// Trait for asking the user to choose
pub trait Chooser {
    /// Present `items` under `label` and return the one picked
    fn select_one(&mut self, label: &str, items: &[String]) -> Result<Selection>;

    /// Read a line of text, re-asking until `validate` accepts it
    fn prompt_text(&mut self, label: &str, validate: Validator<'_>) -> Result<String>;
}

impl<C: Chooser + ?Sized> Chooser for &mut C {
    fn select_one(&mut self, label: &str, items: &[String]) -> Result<Selection> {
        (**self).select_one(label, items)
    }

    fn prompt_text(&mut self, label: &str, validate: Validator<'_>) -> Result<String> {
        (**self).prompt_text(label, validate)
    }
}
