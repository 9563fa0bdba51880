use pyinit_core::{ProjectConfig, ProjectType, WebFramework};

use super::{ProjectPlan, Scaffold};
use crate::error::Result;

/// Subpackages of the main directory, each with one placeholder module
const SUBPACKAGES: &[(&str, &str)] = &[
    ("api", "routes.py"),
    ("core", "config.py"),
    ("schemas", "user.py"),
    ("models", "user.py"),
];

/// FastAPI application with routers, settings, schemas, models and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct FastApiPlan;

impl ProjectPlan for FastApiPlan {
    fn name(&self) -> &'static str {
        "fastapi"
    }

    fn matches(&self, config: &ProjectConfig) -> bool {
        config.project_type == Some(ProjectType::Web)
            && config.web_framework == Some(WebFramework::FastApi)
    }

    fn generate(&self, scaffold: &mut Scaffold<'_>) -> Result<()> {
        let main_dir = scaffold.main_dir().to_string();

        scaffold.render("web/fastapi/README.md.tera", "README.md")?;

        // No generic entry point here, main.py comes from the framework template
        scaffold.package(&main_dir)?;
        scaffold.render("web/fastapi/pyproject.toml.tera", "pyproject.toml")?;
        scaffold.render("web/fastapi/main.py.tera", format!("{main_dir}/main.py"))?;

        for (package, module) in SUBPACKAGES {
            let dir = format!("{main_dir}/{package}");
            scaffold.package(&dir)?;
            scaffold.render(
                &format!("web/fastapi/{package}/{module}.tera"),
                format!("{dir}/{module}"),
            )?;
        }

        scaffold.package("tests")?;
        scaffold.render("web/fastapi/tests/test_main.py.tera", "tests/test_main.py")
    }
}
