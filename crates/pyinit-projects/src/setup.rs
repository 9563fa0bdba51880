//! Post-generation environment setup with `uv`

use std::process::{Command, Stdio};

use camino::Utf8Path;
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Package manager used for every setup step
pub const PACKAGE_MANAGER: &str = "uv";

/// Development tools added to every project
pub const DEV_DEPENDENCIES: &[&str] = &["ruff", "pyright"];

/// Optional FastAPI dependencies offered after generation
pub const FASTAPI_DEPENDENCIES: &[&str] = &[
    "uvicorn[standard]",
    "sqlalchemy",
    "alembic",
    "python-multipart",
    "python-jose[cryptography]",
    "passlib[bcrypt]",
    "httpx",
];

const INSTALL_URL: &str = "https://docs.astral.sh/uv/getting-started/installation/";

/// Runs external programs inside a project directory
pub trait CommandRunner {
    /// Whether `program` can be found
    fn is_available(&self, program: &str) -> bool;

    /// Run to completion; a non-zero exit is an error
    fn run(&self, program: &str, args: &[&str], cwd: &Utf8Path) -> Result<()>;
}

/// Runs commands with the terminal's stdio attached
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run(&self, program: &str, args: &[&str], cwd: &Utf8Path) -> Result<()> {
        let command_line = format_command(program, args);
        info!("Running `{}` in {}", command_line, cwd);

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::subprocess(&command_line, e.to_string()))?;

        if !status.success() {
            let message = match status.code() {
                Some(code) => format!("exited with status {code}"),
                None => "terminated by signal".to_string(),
            };
            return Err(Error::subprocess(command_line, message));
        }

        Ok(())
    }
}

fn format_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Installs dependencies and formats a freshly generated project
pub struct EnvironmentSetup<R: CommandRunner> {
    runner: R,
}

impl EnvironmentSetup<SystemRunner> {
    pub fn system() -> Self {
        Self::new(SystemRunner)
    }
}

impl<R: CommandRunner> EnvironmentSetup<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Whether the package manager is installed
    pub fn package_manager_available(&self) -> bool {
        self.runner.is_available(PACKAGE_MANAGER)
    }

    fn ensure_package_manager(&self) -> Result<()> {
        if self.package_manager_available() {
            Ok(())
        } else {
            Err(Error::command_not_found(format!(
                "{PACKAGE_MANAGER} (install it from {INSTALL_URL})"
            )))
        }
    }

    /// Add the dev tools, then format and check the project.
    ///
    /// Formatting failures do not fail setup; they are returned so the caller
    /// can show them as warnings.
    pub fn dev_dependencies(&self, project_path: &Utf8Path) -> Result<Vec<Error>> {
        self.ensure_package_manager()?;

        let mut args = vec!["add", "--dev"];
        args.extend_from_slice(DEV_DEPENDENCIES);
        self.runner.run(PACKAGE_MANAGER, &args, project_path)?;

        let mut warnings = Vec::new();
        for script in ["fmt", "fmt-check"] {
            if let Err(e) = self.runner.run(PACKAGE_MANAGER, &["run", script], project_path) {
                warn!("{}", e);
                warnings.push(e);
            }
        }
        Ok(warnings)
    }

    /// Add the selected FastAPI dependencies and sync the environment
    pub fn fastapi_dependencies(&self, project_path: &Utf8Path, deps: &[String]) -> Result<()> {
        self.ensure_package_manager()?;

        if !deps.is_empty() {
            let mut args = vec!["add"];
            args.extend(deps.iter().map(String::as_str));
            self.runner.run(PACKAGE_MANAGER, &args, project_path)?;
        }

        self.runner
            .run(PACKAGE_MANAGER, &["sync", "--dev"], project_path)
    }
}

/// Commands to set up the dev environment by hand
pub fn manual_dev_instructions(project_path: &Utf8Path) -> Vec<String> {
    vec![
        format!("cd {project_path}"),
        format!("uv add --dev {}", DEV_DEPENDENCIES.join(" ")),
        "uv run fmt".to_string(),
        "uv run fmt-check".to_string(),
    ]
}

/// Commands to install FastAPI dependencies by hand
pub fn manual_fastapi_instructions(project_path: &Utf8Path, deps: &[String]) -> Vec<String> {
    let mut lines = vec![format!("cd {project_path}")];
    if !deps.is_empty() {
        lines.push(format!("uv add {}", deps.join(" ")));
    }
    lines.push("uv sync --dev".to_string());
    lines
}
