//! Terminal implementation of [`Chooser`]

use super::{Chooser, Selection, Validator};
use anyhow::{bail, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Numbered-list chooser over any line reader and writer
pub struct TerminalChooser<R, W> {
    input: R,
    output: W,
}

impl TerminalChooser<StdinLock<'static>, Stdout> {
    /// Chooser bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed before an answer was given");
        }
        Ok(line.trim().to_string())
    }

    /// Validate and parse a choice input
    /// Returns Some(index) if valid, None if invalid
    pub fn validate_choice_input(input: &str, num_choices: usize) -> Option<usize> {
        if num_choices == 0 {
            return None;
        }

        input.parse::<usize>().ok().and_then(|num| {
            if num > 0 && num <= num_choices {
                Some(num - 1)
            } else {
                None
            }
        })
    }

    /// Format choice prompt message
    pub fn format_choice_prompt(label: &str, items: &[String]) -> String {
        let mut output = String::new();
        output.push_str(label);
        output.push('\n');
        for (i, item) in items.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, item));
        }
        output
    }

    /// Format choice input prompt
    pub fn format_choice_input_prompt(num_choices: usize) -> String {
        format!("Enter choice (1-{num_choices}): ")
    }

    /// Format invalid choice message
    pub fn format_invalid_choice_message(num_choices: usize) -> String {
        format!("Invalid choice. Please enter a number between 1 and {num_choices}: ")
    }
}

impl<R: BufRead, W: Write> Chooser for TerminalChooser<R, W> {
    fn select_one(&mut self, label: &str, items: &[String]) -> Result<Selection> {
        if items.is_empty() {
            bail!("No choices provided");
        }

        write!(self.output, "{}", Self::format_choice_prompt(label, items))?;
        write!(self.output, "{}", Self::format_choice_input_prompt(items.len()))?;
        self.output.flush()?;

        loop {
            let input = self.read_line()?;
            if let Some(index) = Self::validate_choice_input(&input, items.len()) {
                return Ok(Selection::new(index, items[index].clone()));
            }
            write!(
                self.output,
                "{}",
                Self::format_invalid_choice_message(items.len())
            )?;
            self.output.flush()?;
        }
    }

    fn prompt_text(&mut self, label: &str, validate: Validator<'_>) -> Result<String> {
        loop {
            write!(self.output, "{label}: ")?;
            self.output.flush()?;

            let input = self.read_line()?;
            match validate(&input) {
                Ok(()) => return Ok(input),
                Err(reason) => {
                    writeln!(self.output, "✗ {reason}")?;
                }
            }
        }
    }
}
