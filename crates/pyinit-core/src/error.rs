//! Error types for pyinit-core

use thiserror::Error;

/// Result type alias using pyinit-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Rejection produced by a prompt validator.
///
/// Each variant maps to a stable reason tag (see [`ValidationError::reason`])
/// so callers and tests can match on the cause without parsing messages.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty after trimming
    #[error("this field is required")]
    Required,

    /// Input did not match the expected shape
    #[error("enter a valid email address")]
    InvalidFormat,

    /// Validator received an answer of the wrong kind
    #[error("invalid input")]
    InvalidInput,

    /// Project name sanitizes to nothing usable as a directory
    #[error("project name must contain at least one letter, digit, '-' or '_'")]
    InvalidName,
}

impl ValidationError {
    /// Stable reason tag for this rejection
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidFormat => "invalid_format",
            Self::InvalidInput => "invalid_input",
            Self::InvalidName => "invalid_name",
        }
    }
}

/// Core error types for pyinit
#[derive(Error, Debug)]
pub enum Error {
    /// Bad user input at a prompt
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Mismatch between the question table and the configuration model
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Project name that cannot be turned into a directory
    #[error("Invalid project name: '{name}' does not produce a usable directory name")]
    InvalidProjectName { name: String },

    /// Home directory could not be resolved
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// Settings file could not be read or written
    #[error("Settings file error at {path}: {source}")]
    Settings {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Template context could not be built
    #[error("Template context error: {0}")]
    Context(#[from] tera::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(field: &str) -> Self {
        tracing::debug!("rejected unknown field identifier: {}", field);
        Self::configuration("unknown_field")
    }

    /// Create an invalid value error for a known field
    pub fn invalid_value(field: &str, value: &str) -> Self {
        Self::configuration(format!("invalid_value: '{}' for {}", value, field))
    }

    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName { name: name.into() }
    }

    /// Create a settings file error
    pub fn settings(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Settings {
            path: path.into(),
            source,
        }
    }

    /// Whether this is a configuration (programmer-level) error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
