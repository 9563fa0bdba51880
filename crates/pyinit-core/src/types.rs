//! Core types for the project model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Top-level project category; selects which generation plan runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    /// Plain Python package with a `main.py` entry point
    Basic,
    /// Command-line application
    Cli,
    /// Web application (framework chosen separately)
    Web,
    /// Reusable library
    Library,
    /// Data science project
    DataScience,
}

impl ProjectType {
    /// Get all available project types in prompt order
    pub fn all() -> Vec<Self> {
        vec![
            Self::Basic,
            Self::Cli,
            Self::Web,
            Self::Library,
            Self::DataScience,
        ]
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Cli => "cli",
            Self::Web => "web",
            Self::Library => "library",
            Self::DataScience => "data-science",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| Error::invalid_value("project_type", s))
    }
}

/// Web framework, meaningful only for [`ProjectType::Web`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebFramework {
    FastApi,
    Flask,
    Django,
}

impl WebFramework {
    /// Get all available frameworks in prompt order
    pub fn all() -> Vec<Self> {
        vec![Self::FastApi, Self::Flask, Self::Django]
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FastApi => "fastapi",
            Self::Flask => "flask",
            Self::Django => "django",
        }
    }
}

impl fmt::Display for WebFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WebFramework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|fw| fw.as_str() == s.trim())
            .ok_or_else(|| Error::invalid_value("web_framework", s))
    }
}

/// Layout of the main package directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStructure {
    /// Package lives in `src/`
    Src,
    /// Package directory named after the project
    Direct,
}

impl ProjectStructure {
    pub fn all() -> Vec<Self> {
        vec![Self::Src, Self::Direct]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Src => "src",
            Self::Direct => "direct",
        }
    }
}

impl fmt::Display for ProjectStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectStructure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|st| st.as_str() == s.trim())
            .ok_or_else(|| Error::invalid_value("project_structure", s))
    }
}

/// Python versions offered by the question flow, newest first
pub const PYTHON_VERSIONS: &[&str] = &["3.13", "3.12", "3.11", "3.10", "3.9"];

/// Identifier of a field that the question flow can populate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    UserName,
    Email,
    ProjectName,
    ProjectDescription,
    ProjectType,
    WebFramework,
    ProjectStructure,
    PythonVersion,
}

impl Field {
    /// Get all fields
    pub fn all() -> Vec<Self> {
        vec![
            Self::UserName,
            Self::Email,
            Self::ProjectName,
            Self::ProjectDescription,
            Self::ProjectType,
            Self::WebFramework,
            Self::ProjectStructure,
            Self::PythonVersion,
        ]
    }

    /// Get the identifier used in the question table
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserName => "user_name",
            Self::Email => "email",
            Self::ProjectName => "project_name",
            Self::ProjectDescription => "project_description",
            Self::ProjectType => "project_type",
            Self::WebFramework => "web_framework",
            Self::ProjectStructure => "project_structure",
            Self::PythonVersion => "python_version",
        }
    }

    /// Look up a field by identifier
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.as_str() == identifier)
    }

    /// Parse a raw string answer into the typed payload for this field
    pub fn parse_answer(&self, value: &str) -> Result<Answer> {
        let answer = match self {
            Self::UserName => Answer::UserName(value.trim().to_string()),
            Self::Email => Answer::Email(value.trim().to_string()),
            Self::ProjectName => Answer::ProjectName(value.trim().to_string()),
            Self::ProjectDescription => Answer::ProjectDescription(value.trim().to_string()),
            Self::ProjectType => Answer::ProjectType(value.parse()?),
            Self::WebFramework => Answer::WebFramework(value.parse()?),
            Self::ProjectStructure => Answer::ProjectStructure(value.parse()?),
            Self::PythonVersion => Answer::PythonVersion(value.trim().to_string()),
        };
        Ok(answer)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A collected answer carrying its strongly-typed payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    UserName(String),
    Email(String),
    ProjectName(String),
    ProjectDescription(String),
    ProjectType(ProjectType),
    WebFramework(WebFramework),
    ProjectStructure(ProjectStructure),
    PythonVersion(String),
}

impl Answer {
    /// The field this answer populates
    pub fn field(&self) -> Field {
        match self {
            Self::UserName(_) => Field::UserName,
            Self::Email(_) => Field::Email,
            Self::ProjectName(_) => Field::ProjectName,
            Self::ProjectDescription(_) => Field::ProjectDescription,
            Self::ProjectType(_) => Field::ProjectType,
            Self::WebFramework(_) => Field::WebFramework,
            Self::ProjectStructure(_) => Field::ProjectStructure,
            Self::PythonVersion(_) => Field::PythonVersion,
        }
    }
}

/// Raw value returned by a prompt before it is typed into an [`Answer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAnswer {
    /// Free-text input
    Text(String),
    /// Single selection from an option list
    Choice(String),
    /// Multiple selections from an option list
    Choices(Vec<String>),
    /// Yes/no confirmation
    Flag(bool),
}

impl RawAnswer {
    /// The free-text payload, if this answer came from a text prompt
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// String form used when dispatching into the configuration model
    pub fn to_value(&self) -> String {
        match self {
            Self::Text(s) | Self::Choice(s) => s.clone(),
            Self::Choices(items) => items.join(","),
            Self::Flag(b) => b.to_string(),
        }
    }
}
