//! CLI handling
//!
//! This module contains the CLI-related functionality:
//! - Argument parsing structures
//! - Turning arguments into an [`AppConfig`](crate::app::AppConfig)
//! - Running the order against the terminal

pub mod args;

pub use args::Cli;

use crate::app::AppConfig;
use crate::interaction::TerminalChooser;
use crate::workflow::OrderWorkflow;
use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

/// Run the interactive order and return the path it was saved to
pub fn execute(config: &AppConfig) -> Result<PathBuf> {
    let output_dir = config.resolved_output_dir();
    debug!(
        working_dir = %config.working_dir.display(),
        output_dir = %output_dir.display(),
        "starting order"
    );

    let mut workflow = OrderWorkflow::new(
        TerminalChooser::stdio(),
        config.working_dir.clone(),
        output_dir,
    );
    Ok(workflow.run()?)
}
