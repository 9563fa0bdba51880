//! # pyinit-projects
//!
//! Project scaffolding library for the pyinit CLI providing:
//! - The prompt abstraction and the conditional question flow
//! - Project directory resolution
//! - Embedded templates and per-type generation plans
//! - Post-generation environment setup with `uv`
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use pyinit_projects::{choose_location, DialoguerPrompter, Generator, QuestionFlow};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut prompter = DialoguerPrompter::new();
//! let mut config = QuestionFlow::standard()?.collect(&mut prompter)?;
//! choose_location(&mut prompter, &mut config, Utf8Path::new("/home/me/code"))?;
//!
//! let report = Generator::new()?.generate(&config, &mut prompter)?;
//! println!("created {} files", report.file_count());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod flow;
pub mod generator;
pub mod location;
pub mod prompt;
pub mod setup;
pub mod templates;

pub use error::{Error, Result};
pub use flow::{default_steps, QuestionFlow, QuestionStep};
pub use generator::{
    BasicPlan, FastApiPlan, GenerationReport, Generator, ProjectPlan, Scaffold,
};
pub use location::{choose_location, confirm_if_exists, resolve_custom_path, resolve_default_path};
pub use prompt::{DialoguerPrompter, PromptKind, PromptSpec, Prompter, ScriptedPrompter};
pub use setup::{CommandRunner, EnvironmentSetup, SystemRunner};
pub use templates::TemplateRegistry;
