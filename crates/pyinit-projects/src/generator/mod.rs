//! Project generation
//!
//! Generation always runs the common phase (project root, `scripts/`,
//! `.gitignore`, `.python-version`) and then the first [`ProjectPlan`] that
//! matches the configuration. New project types plug in through
//! [`Generator::with_plan`] without touching the common phase.

mod basic;
mod fastapi;
mod scaffold;

pub use basic::BasicPlan;
pub use fastapi::FastApiPlan;
pub use scaffold::{Artifact, ArtifactKind, GenerationReport, Scaffold, PACKAGE_MARKER};

use pyinit_core::ProjectConfig;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::location::confirm_if_exists;
use crate::prompt::Prompter;
use crate::templates::TemplateRegistry;

/// Type-specific part of a project tree
pub trait ProjectPlan {
    /// Short name for logs and reports
    fn name(&self) -> &'static str;

    /// Whether this plan handles the configuration
    fn matches(&self, config: &ProjectConfig) -> bool;

    /// Create the type-specific artifacts; the common phase has already run
    fn generate(&self, scaffold: &mut Scaffold<'_>) -> Result<()>;
}

/// Runs the common phase plus the matching plan
pub struct Generator {
    registry: TemplateRegistry,
    plans: Vec<Box<dyn ProjectPlan>>,
}

impl Generator {
    /// Generator with the built-in plans
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(TemplateRegistry::new()?)
            .with_plan(BasicPlan)
            .with_plan(FastApiPlan))
    }

    /// Generator without any plans
    pub fn with_registry(registry: TemplateRegistry) -> Self {
        Self {
            registry,
            plans: Vec::new(),
        }
    }

    /// Register another plan; earlier plans win when several match
    pub fn with_plan(mut self, plan: impl ProjectPlan + 'static) -> Self {
        self.plans.push(Box::new(plan));
        self
    }

    /// The plan that would handle `config`
    pub fn plan_for(&self, config: &ProjectConfig) -> Result<&dyn ProjectPlan> {
        self.plans
            .iter()
            .find(|plan| plan.matches(config))
            .map(|plan| plan.as_ref())
            .ok_or_else(|| Error::unsupported_project_type(describe_type(config)))
    }

    /// Materialize the project tree at `config.project_path`.
    ///
    /// Nothing is written when no plan matches or when the user declines to
    /// reuse an existing directory. Failures part-way through leave the
    /// already-created artifacts in place.
    pub fn generate(
        &self,
        config: &ProjectConfig,
        prompter: &mut dyn Prompter,
    ) -> Result<GenerationReport> {
        let plan = self.prepare(config, prompter)?;
        self.write(config, plan)
    }

    /// Pick the plan and pass the existing-directory gate without writing
    pub fn prepare(
        &self,
        config: &ProjectConfig,
        prompter: &mut dyn Prompter,
    ) -> Result<&dyn ProjectPlan> {
        let plan = self.plan_for(config)?;

        if !config.project_path.is_absolute() {
            return Err(pyinit_core::Error::configuration(format!(
                "project path must be absolute: '{}'",
                config.project_path
            ))
            .into());
        }

        if !confirm_if_exists(prompter, &config.project_path) {
            return Err(Error::cancelled(config.project_path.as_str()));
        }

        Ok(plan)
    }

    /// Run the common phase and `plan` against the filesystem
    pub fn write(
        &self,
        config: &ProjectConfig,
        plan: &dyn ProjectPlan,
    ) -> Result<GenerationReport> {
        info!(
            "Generating {} project at {}",
            plan.name(),
            config.project_path
        );

        let mut scaffold = Scaffold::new(config, &self.registry);
        generate_common(&mut scaffold)?;
        plan.generate(&mut scaffold)?;

        let artifacts = scaffold.into_artifacts();
        debug!("Created {} artifacts", artifacts.len());

        Ok(GenerationReport {
            root: config.project_path.clone(),
            plan: plan.name().to_string(),
            artifacts,
        })
    }
}

/// Steps shared by every project type
fn generate_common(scaffold: &mut Scaffold<'_>) -> Result<()> {
    scaffold.create_root()?;

    scaffold.package("scripts")?;
    scaffold.render("core/fmt.py.tera", "scripts/fmt.py")?;
    scaffold.render("core/fmt_check.py.tera", "scripts/fmt_check.py")?;

    scaffold.render("core/gitignore.tera", ".gitignore")?;
    scaffold.render("core/python-version.tera", ".python-version")?;
    Ok(())
}

fn describe_type(config: &ProjectConfig) -> String {
    match (config.project_type, config.web_framework) {
        (Some(project_type), Some(framework)) => format!("{project_type}/{framework}"),
        (Some(project_type), None) => project_type.to_string(),
        (None, _) => "unset".to_string(),
    }
}
