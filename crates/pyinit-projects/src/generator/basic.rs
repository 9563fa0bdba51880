use pyinit_core::{ProjectConfig, ProjectType};

use super::{ProjectPlan, Scaffold};
use crate::error::Result;

/// Plain package with a `main.py` entry point
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPlan;

impl ProjectPlan for BasicPlan {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn matches(&self, config: &ProjectConfig) -> bool {
        config.project_type == Some(ProjectType::Basic)
    }

    fn generate(&self, scaffold: &mut Scaffold<'_>) -> Result<()> {
        let main_dir = scaffold.main_dir().to_string();

        scaffold.render("basic/README.md.tera", "README.md")?;

        scaffold.package(&main_dir)?;
        scaffold.render("basic/main.py.tera", format!("{main_dir}/main.py"))?;

        scaffold.render("basic/pyproject.toml.tera", "pyproject.toml")
    }
}
