use super::{ErrorCode, TakeawayError};
use std::path::Path;

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// The order file's extension does not map to a known format
    pub fn unrecognized_format(path: impl AsRef<Path>) -> TakeawayError {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => TakeawayError::format_with_code(
                ErrorCode::FORMAT_UNRECOGNIZED,
                format!("failed to determine file type from extension '.{}'", ext),
                Some(path.to_path_buf()),
            ),
            None => TakeawayError::format_with_code(
                ErrorCode::FORMAT_MISSING_EXTENSION,
                "failed to determine file type: no extension",
                Some(path.to_path_buf()),
            ),
        }
    }

    /// The chooser returned something that was not offered
    pub fn unexpected_answer(step: &str, answer: &str) -> TakeawayError {
        TakeawayError::prompt_with_code(
            ErrorCode::PROMPT_UNEXPECTED_ANSWER,
            format!("failed to understand choice '{}'", answer),
            Some(step.to_string()),
        )
    }

    /// The chooser failed to produce an answer
    pub fn no_answer(
        step: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> TakeawayError {
        TakeawayError::prompt_with_code(
            ErrorCode::PROMPT_NO_ANSWER,
            "failed to get response",
            Some(step.to_string()),
        )
        .with_source(source)
    }
}
