//! # pyinit-core
//!
//! Core library for the pyinit CLI providing:
//! - The project configuration model and its template context
//! - Project name sanitization
//! - Prompt answer validators
//! - Persisted user settings (`~/.pyinitrc`)

pub mod error;
pub mod project;
pub mod sanitize;
pub mod settings;
pub mod types;
pub mod utils;
pub mod validation;

pub use error::{Error, Result, ValidationError};
pub use project::{ProjectConfig, TemplateContext};
pub use sanitize::sanitize_project_name;
pub use settings::{Settings, SettingsStore};
pub use types::{
    Answer, Field, ProjectStructure, ProjectType, RawAnswer, WebFramework, PYTHON_VERSIONS,
};
pub use utils::get_home_dir;
