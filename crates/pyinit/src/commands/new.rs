//! Interactive project creation (the default command)

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use pyinit_core::{ProjectConfig, WebFramework};
use pyinit_projects::setup::{
    manual_dev_instructions, manual_fastapi_instructions, FASTAPI_DEPENDENCIES,
};
use pyinit_projects::{
    choose_location, DialoguerPrompter, EnvironmentSetup, Generator, Prompter, QuestionFlow,
    SystemRunner,
};
use tracing::debug;

use crate::{banner, output};

pub fn run() -> Result<()> {
    banner::show_if_enabled();

    let mut prompter = DialoguerPrompter::new();

    let flow = QuestionFlow::standard().context("Invalid question table")?;
    let mut config = flow
        .collect(&mut prompter)
        .context("Failed to collect project info")?;

    let cwd = current_dir()?;
    choose_location(&mut prompter, &mut config, &cwd)
        .context("Failed to set project location")?;

    let generator = Generator::new().context("Failed to load project templates")?;
    let plan = match generator.prepare(&config, &mut prompter) {
        Ok(plan) => plan,
        Err(e) if e.is_cancelled() => {
            output::warning(&e.to_string());
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to generate project"),
    };

    let spinner = output::spinner("Generating project...");
    let result = generator.write(&config, plan);
    spinner.finish_and_clear();

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            output::warning(&format!(
                "Project files already written under {} were left in place",
                config.project_path
            ));
            return Err(e).context("Failed to generate project");
        }
    };

    output::success(&format!(
        "Project '{}' created successfully at: {}",
        config.project_name, config.project_path
    ));
    output::kv("Template", &report.plan);
    output::kv("Files", &report.file_count().to_string());
    output::kv("Directories", &report.dir_count().to_string());

    let setup = EnvironmentSetup::system();

    if config.web_framework == Some(WebFramework::FastApi) {
        if let Err(e) = fastapi_dependencies(&mut prompter, &setup, &config) {
            output::warning(&format!("Failed to set up FastAPI dependencies: {:#}", e));
        }
    }

    if let Err(e) = environment(&mut prompter, &setup, &config.project_path) {
        output::warning(&format!("Failed to set up environment: {:#}", e));
    }

    Ok(())
}

fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow!("Current directory is not valid UTF-8: {}", p.display()))
}

/// Offer optional FastAPI packages and install the selection
fn fastapi_dependencies(
    prompter: &mut dyn Prompter,
    setup: &EnvironmentSetup<SystemRunner>,
    config: &ProjectConfig,
) -> Result<()> {
    let selected = prompter.multi_select(
        "Select additional FastAPI dependencies to install:",
        FASTAPI_DEPENDENCIES,
    )?;

    if selected.is_empty() {
        output::info("No dependencies selected, skipping installation.");
        return Ok(());
    }
    debug!("Selected FastAPI dependencies: {:?}", selected);

    if !setup.package_manager_available() {
        output::warning(
            "uv is not installed. You can install FastAPI dependencies later by running:",
        );
        output::commands(&manual_fastapi_instructions(&config.project_path, &selected));
        return Ok(());
    }

    output::info("Installing FastAPI dependencies...");
    setup
        .fastapi_dependencies(&config.project_path, &selected)
        .context("Failed to install FastAPI dependencies")?;
    output::success("FastAPI dependencies installed successfully!");
    Ok(())
}

/// Add dev tools and format the new project, or explain how to do it later
fn environment(
    prompter: &mut dyn Prompter,
    setup: &EnvironmentSetup<SystemRunner>,
    project_path: &Utf8Path,
) -> Result<()> {
    let wanted =
        prompter.confirm("Do you want to set up the development environment now?", true)?;

    if !wanted || !setup.package_manager_available() {
        if wanted {
            output::warning(
                "uv is not installed: https://docs.astral.sh/uv/getting-started/installation/",
            );
        }
        output::info("You can set up the development environment later by running:");
        output::commands(&manual_dev_instructions(project_path));
        return Ok(());
    }

    output::info("Setting up development environment...");
    let warnings = setup
        .dev_dependencies(project_path)
        .context("Failed to add development dependencies")?;
    for warning in &warnings {
        output::warning(&warning.to_string());
    }

    output::success("Development environment setup complete!");
    Ok(())
}
