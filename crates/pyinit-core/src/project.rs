//! Project configuration model
//!
//! [`ProjectConfig`] is the single mutable record that accumulates answers
//! during a session. Rendering only ever sees the read-only
//! [`TemplateContext`] projection.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sanitize::{distribution_name, package_dir_name, sanitize_project_name};
use crate::types::{Answer, Field, ProjectStructure, ProjectType, WebFramework};

/// Main package directory used by the `src` layout
pub const SRC_DIR: &str = "src";

/// Collected answers for one project-creation session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub user_name: String,
    pub email: String,
    pub project_name: String,
    pub project_description: String,
    pub project_type: Option<ProjectType>,
    /// Set if and only if `project_type` is [`ProjectType::Web`]
    pub web_framework: Option<WebFramework>,
    pub project_structure: Option<ProjectStructure>,
    pub main_dir_name: String,
    pub project_path: Utf8PathBuf,
    /// `major.minor`, e.g. `3.13`
    pub python_version: String,
}

impl ProjectConfig {
    /// Zero-valued configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Store one typed answer
    pub fn apply(&mut self, answer: Answer) {
        match answer {
            Answer::UserName(v) => self.user_name = v,
            Answer::Email(v) => self.email = v,
            Answer::ProjectName(v) => self.project_name = v,
            Answer::ProjectDescription(v) => self.project_description = v,
            Answer::ProjectType(t) => {
                self.project_type = Some(t);
                if t != ProjectType::Web {
                    self.web_framework = None;
                }
            }
            Answer::WebFramework(fw) => self.web_framework = Some(fw),
            Answer::ProjectStructure(s) => self.project_structure = Some(s),
            Answer::PythonVersion(v) => self.python_version = v,
        }
    }

    /// Store a raw string answer by field identifier.
    ///
    /// Fails with `Configuration("unknown_field")` for identifiers outside
    /// the model and with `Configuration("invalid_value: ..")` when the value
    /// does not parse for the field's type.
    pub fn set(&mut self, identifier: &str, value: &str) -> Result<()> {
        let field =
            Field::from_identifier(identifier).ok_or_else(|| Error::unknown_field(identifier))?;
        let answer = field.parse_answer(value)?;
        self.apply(answer);
        Ok(())
    }

    /// Whether the web framework question applies
    pub fn is_web(&self) -> bool {
        self.project_type == Some(ProjectType::Web)
    }

    /// Derive `main_dir_name` from the chosen structure and project name.
    ///
    /// The direct layout uses the sanitized name so the package directory is
    /// importable even when the project name contains spaces.
    pub fn finalize(&mut self) {
        let name = match self.project_structure {
            Some(ProjectStructure::Src) => SRC_DIR.to_string(),
            _ => package_dir_name(&sanitize_project_name(&self.project_name)),
        };

        self.main_dir_name = if name.trim().is_empty() {
            SRC_DIR.to_string()
        } else {
            name
        };
    }

    /// Read-only projection consumed by template rendering.
    ///
    /// Computed fresh on every call since answers may still change.
    pub fn template_context(&self) -> TemplateContext {
        TemplateContext {
            project_name: self.project_name.clone(),
            project_slug: distribution_name(&self.project_name),
            project_type: self
                .project_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            project_description: self.project_description.clone(),
            user_name: self.user_name.clone(),
            email: self.email.clone(),
            main_dir_name: self.main_dir_name.clone(),
            python_version: self.python_version.clone(),
            python_version_for_ruff: ruff_target_version(&self.python_version),
            web_framework: self
                .web_framework
                .map(|fw| fw.as_str().to_string())
                .unwrap_or_default(),
            project_structure: self
                .project_structure
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

/// `3.13` -> `py313`; an empty version gives `py`
pub fn ruff_target_version(python_version: &str) -> String {
    format!("py{}", python_version.replace('.', ""))
}

/// String-keyed view of a [`ProjectConfig`] for template rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateContext {
    pub project_name: String,
    /// Normalized name, safe inside any quoted literal or docstring
    pub project_slug: String,
    pub project_type: String,
    pub project_description: String,
    pub user_name: String,
    pub email: String,
    pub main_dir_name: String,
    pub python_version: String,
    pub python_version_for_ruff: String,
    pub web_framework: String,
    pub project_structure: String,
}

impl TemplateContext {
    /// Convert to Tera context for template rendering
    pub fn to_tera_context(&self) -> Result<tera::Context> {
        let context = tera::Context::from_serialize(self)?;
        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruff_target_version() {
        assert_eq!(ruff_target_version("3.13"), "py313");
        assert_eq!(ruff_target_version("3.8"), "py38");
        assert_eq!(ruff_target_version(""), "py");
    }

    #[test]
    fn test_context_recomputes_ruff_version() {
        let mut config = ProjectConfig::new();
        assert_eq!(config.template_context().python_version_for_ruff, "py");

        config.set("python_version", "3.12").unwrap();
        assert_eq!(config.template_context().python_version_for_ruff, "py312");
    }

    #[test]
    fn test_set_accepts_every_field() {
        let samples = [
            ("user_name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("project_name", "engine"),
            ("project_description", "Analytical engine"),
            ("project_type", "web"),
            ("web_framework", "fastapi"),
            ("project_structure", "src"),
            ("python_version", "3.13"),
        ];
        let mut config = ProjectConfig::new();
        for (field, value) in samples {
            config.set(field, value).unwrap();
        }
        assert_eq!(config.web_framework, Some(WebFramework::FastApi));
        assert_eq!(config.project_structure, Some(ProjectStructure::Src));
    }

    #[test]
    fn test_set_rejects_unknown_field() {
        let mut config = ProjectConfig::new();
        let err = config.set("favourite_colour", "blue").unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(config, ProjectConfig::new());
    }

    #[test]
    fn test_non_web_type_clears_framework() {
        let mut config = ProjectConfig::new();
        config.set("project_type", "web").unwrap();
        config.set("web_framework", "flask").unwrap();
        config.set("project_type", "basic").unwrap();
        assert_eq!(config.web_framework, None);
    }

    #[test]
    fn test_finalize_main_dir_name() {
        let mut config = ProjectConfig::new();
        config.project_name = "My Cool-App".to_string();

        config.project_structure = Some(ProjectStructure::Direct);
        config.finalize();
        assert_eq!(config.main_dir_name, "my_cool_app");

        config.project_structure = Some(ProjectStructure::Src);
        config.finalize();
        assert_eq!(config.main_dir_name, "src");
    }

    #[test]
    fn test_finalize_never_empty() {
        let mut config = ProjectConfig::new();
        config.finalize();
        assert_eq!(config.main_dir_name, "src");
    }

    #[test]
    fn test_template_context_keys() {
        let mut config = ProjectConfig::new();
        config.set("project_type", "basic").unwrap();
        let value = serde_json::to_value(config.template_context()).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "project_name",
            "project_type",
            "project_description",
            "user_name",
            "email",
            "main_dir_name",
            "python_version",
            "python_version_for_ruff",
        ] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert_eq!(object["project_type"], "basic");
        assert_eq!(object["project_slug"], "project");
        assert_eq!(object["web_framework"], "");
    }
}
