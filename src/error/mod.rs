use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;


pub use codes::{describe_error_code, ErrorCode};
pub use helpers::common;

/// Result alias used across the crate
pub type Result<T, E = TakeawayError> = std::result::Result<T, E>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// The unified error type for the takeaway application
#[derive(Error, Debug)]
pub enum TakeawayError {
    #[error("[E{code:04}] Input error: {message}")]
    Input {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Format error: {message}")]
    Format {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Decode error: {message}")]
    Decode {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Prompt error: {message}")]
    Prompt {
        code: u16,
        message: String,
        step: Option<String>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Persist error: {message}")]
    Persist {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl TakeawayError {
    /// Create an input error with specific code and path
    pub fn input_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a format detection error with specific code and path
    pub fn format_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Format {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a decode error with specific code
    pub fn decode_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Decode {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a prompt error with specific code and the step that was prompting
    pub fn prompt_with_code(code: u16, message: impl Into<String>, step: Option<String>) -> Self {
        Self::Prompt {
            code,
            message: message.into(),
            step,
            source: None,
        }
    }

    /// Create a persist error with specific code and path
    pub fn persist_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Persist {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        match &mut self {
            Self::Input { source: src, .. }
            | Self::Format { source: src, .. }
            | Self::Decode { source: src, .. }
            | Self::Prompt { source: src, .. }
            | Self::Persist { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Input { message, .. }
            | Self::Format { message, .. }
            | Self::Decode { message, .. }
            | Self::Prompt { message, .. }
            | Self::Persist { message, .. } => {
                *message = format!("{}: {}", context, message);
            }
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Input { .. } => 2,
            Self::Format { .. } => 3,
            Self::Decode { .. } => 4,
            Self::Prompt { .. } => 5,
            Self::Persist { .. } => 6,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Input { code, .. }
            | Self::Format { code, .. }
            | Self::Decode { code, .. }
            | Self::Prompt { code, .. }
            | Self::Persist { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Input { message, path, .. } => match path {
                Some(p) => format!("Cannot use {}: {}", p.display(), message),
                None => format!("Input error: {}", message),
            },
            Self::Format { message, path, .. } => match path {
                Some(p) => format!("Unsupported order file {}: {}", p.display(), message),
                None => format!("Unsupported order format: {}", message),
            },
            Self::Decode { message, .. } => format!("Order file is malformed: {}", message),
            Self::Prompt { message, step, .. } => match step {
                Some(s) => format!("No answer while {}: {}", s, message),
                None => format!("Prompt failed: {}", message),
            },
            Self::Persist { message, path, .. } => match path {
                Some(p) => format!("Could not save order to {}: {}", p.display(), message),
                None => format!("Could not save order: {}", message),
            },
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut out = format!("{:#}", self);
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            out.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        out
    }
}
