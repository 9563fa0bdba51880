//! Error types for pyinit-projects

use thiserror::Error;

/// Result type alias using pyinit-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// User declined to reuse an existing directory
    #[error("Project creation cancelled: {path} already exists")]
    Cancelled { path: String },

    /// Terminal prompt failed (closed input stream, no tty, ...)
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// Filesystem operation failed for a specific artifact
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Template rendering failed
    #[error("Template rendering failed for {template}: {message}")]
    Template { template: String, message: String },

    /// Template not registered
    #[error("Template not found: {template}")]
    TemplateNotFound { template: String },

    /// No generation plan for the selected project type
    #[error("Project type '{project_type}' is not supported yet")]
    UnsupportedProjectType { project_type: String },

    /// External command exited unsuccessfully
    #[error("Command '{command}' failed: {message}")]
    Subprocess { command: String, message: String },

    /// External command not installed
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// Core library error
    #[error(transparent)]
    Core(#[from] pyinit_core::Error),
}

impl Error {
    /// Create a cancelled error
    pub fn cancelled(path: impl Into<String>) -> Self {
        Self::Cancelled { path: path.into() }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create an IO error tagged with the failing path
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a template rendering error
    pub fn template(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Template {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Create a template not found error
    pub fn template_not_found(template: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            template: template.into(),
        }
    }

    /// Create an unsupported project type error
    pub fn unsupported_project_type(project_type: impl Into<String>) -> Self {
        Self::UnsupportedProjectType {
            project_type: project_type.into(),
        }
    }

    /// Create a subprocess error
    pub fn subprocess(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Subprocess {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Whether the user cancelled generation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Self::prompt(err.to_string())
    }
}
