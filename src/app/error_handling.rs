//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use crate::error::{describe_error_code, TakeawayError};
use tracing::error;

/// Render a fatal error for the terminal and pick the exit code
///
/// - For `TakeawayError`: the user message, plus the code description and the
///   full chain when verbose
/// - For other errors: the message, plus the cause chain when verbose
pub fn describe_fatal_error(error: &anyhow::Error, verbose: u8) -> (String, i32) {
    if let Some(takeaway_err) = error.downcast_ref::<TakeawayError>() {
        let mut text = takeaway_err.user_message();
        if verbose >= 1 {
            let code = takeaway_err.code();
            text.push_str(&format!(
                "\n\nError code E{:04}: {}\n\nContext Chain:\n{}",
                code,
                describe_error_code(code),
                takeaway_err.developer_message()
            ));
        }
        (text, takeaway_err.exit_code())
    } else {
        let mut text = format!("Error: {error}");
        if verbose >= 1 {
            text.push_str("\n\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                text.push_str(&format!("\n  {}: {}", i, cause));
            }
        }
        (text, 1)
    }
}

/// Handle fatal errors and exit with appropriate status code
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    let (text, exit_code) = describe_fatal_error(&error, verbose);
    eprintln!("{text}");

    std::process::exit(exit_code)
}
