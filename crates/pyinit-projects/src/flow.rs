//! Conditional question flow
//!
//! A [`QuestionFlow`] is an ordered table of [`QuestionStep`]s interpreted by
//! one generic executor. Each step may carry a condition, evaluated against
//! the answers collected so far, and a validator enforced at the prompt: a
//! rejected answer is reported and the same question is asked again.

use std::collections::HashSet;

use pyinit_core::validation::{
    validate_email, validate_project_name, validate_required, Validator,
};
use pyinit_core::{
    Field, ProjectConfig, ProjectStructure, ProjectType, RawAnswer, WebFramework,
    PYTHON_VERSIONS,
};
use tracing::{debug, info};

use crate::error::Result;
use crate::prompt::{PromptSpec, Prompter};

/// Predicate deciding whether a step fires
pub type Condition = fn(&ProjectConfig) -> bool;

/// One question in the flow
#[derive(Debug, Clone)]
pub struct QuestionStep {
    /// Field populated by the answer
    pub field: Field,
    pub prompt: PromptSpec,
    pub validator: Option<Validator>,
    pub condition: Option<Condition>,
    /// Fields the condition reads; each must be written by an earlier step
    pub reads: &'static [Field],
}

impl QuestionStep {
    pub fn new(field: Field, prompt: PromptSpec) -> Self {
        Self {
            field,
            prompt,
            validator: None,
            condition: None,
            reads: &[],
        }
    }

    pub fn validate_with(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn when(mut self, condition: Condition, reads: &'static [Field]) -> Self {
        self.condition = Some(condition);
        self.reads = reads;
        self
    }

    /// Whether the step fires for the answers collected so far
    pub fn should_ask(&self, config: &ProjectConfig) -> bool {
        self.condition.map_or(true, |condition| condition(config))
    }
}

fn is_web_project(config: &ProjectConfig) -> bool {
    config.is_web()
}

/// The project questions, in dependency order
pub fn default_steps() -> Vec<QuestionStep> {
    vec![
        QuestionStep::new(Field::UserName, PromptSpec::input("Enter your name:"))
            .validate_with(validate_required),
        QuestionStep::new(Field::Email, PromptSpec::input("Enter your email:"))
            .validate_with(validate_email),
        QuestionStep::new(Field::ProjectName, PromptSpec::input("Enter project name:"))
            .validate_with(validate_project_name),
        QuestionStep::new(
            Field::ProjectDescription,
            PromptSpec::input("Enter project description (optional):").with_default(""),
        ),
        QuestionStep::new(
            Field::ProjectType,
            PromptSpec::select(
                "Select project type:",
                ProjectType::all().into_iter().map(|t| t.as_str()),
            )
            .with_default(ProjectType::Basic.as_str()),
        ),
        QuestionStep::new(
            Field::WebFramework,
            PromptSpec::select(
                "Select web framework:",
                WebFramework::all().into_iter().map(|fw| fw.as_str()),
            )
            .with_default(WebFramework::FastApi.as_str()),
        )
        .when(is_web_project, &[Field::ProjectType]),
        QuestionStep::new(
            Field::ProjectStructure,
            PromptSpec::select(
                "Select project structure:",
                ProjectStructure::all().into_iter().map(|s| s.as_str()),
            )
            .with_default(ProjectStructure::Direct.as_str()),
        ),
        QuestionStep::new(
            Field::PythonVersion,
            PromptSpec::select("Select Python version:", PYTHON_VERSIONS.iter().copied())
                .with_default(PYTHON_VERSIONS[0]),
        ),
    ]
}

/// Ordered, validated step table
#[derive(Debug, Clone)]
pub struct QuestionFlow {
    steps: Vec<QuestionStep>,
}

impl QuestionFlow {
    /// Build a flow, checking that fields are unique and that every
    /// condition only reads fields populated by earlier steps.
    pub fn new(steps: Vec<QuestionStep>) -> Result<Self> {
        let mut written: HashSet<Field> = HashSet::new();

        for step in &steps {
            for read in step.reads {
                if !written.contains(read) {
                    return Err(pyinit_core::Error::configuration(format!(
                        "step '{}' reads '{}' before it is asked",
                        step.field, read
                    ))
                    .into());
                }
            }

            if !written.insert(step.field) {
                return Err(pyinit_core::Error::configuration(format!(
                    "duplicate step '{}'",
                    step.field
                ))
                .into());
            }
        }

        Ok(Self { steps })
    }

    /// Flow built from [`default_steps`]
    pub fn standard() -> Result<Self> {
        Self::new(default_steps())
    }

    pub fn steps(&self) -> &[QuestionStep] {
        &self.steps
    }

    /// Ask every applicable question, writing answers into `config`
    pub fn run(&self, prompter: &mut dyn Prompter, config: &mut ProjectConfig) -> Result<()> {
        for step in &self.steps {
            if !step.should_ask(config) {
                debug!("Skipping step {}", step.field);
                continue;
            }

            let raw = ask_until_valid(step, prompter)?;
            let answer = step.field.parse_answer(&raw.to_value())?;
            debug!("Answered step {}", step.field);
            config.apply(answer);
        }

        Ok(())
    }

    /// Run against a fresh configuration and derive the main directory name
    pub fn collect(&self, prompter: &mut dyn Prompter) -> Result<ProjectConfig> {
        let mut config = ProjectConfig::new();
        self.run(prompter, &mut config)?;
        config.finalize();
        info!(
            "Collected answers for project '{}' ({})",
            config.project_name,
            config
                .project_type
                .map(|t| t.as_str())
                .unwrap_or_default()
        );
        Ok(config)
    }
}

fn ask_until_valid(step: &QuestionStep, prompter: &mut dyn Prompter) -> Result<RawAnswer> {
    loop {
        let raw = prompter.ask(&step.prompt)?;

        match step.validator.map_or(Ok(()), |validate| validate(&raw)) {
            Ok(()) => return Ok(raw),
            Err(err) => {
                debug!("Rejected answer for {}: {}", step.field, err.reason());
                prompter.reject(&err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::prompt::ScriptedPrompter;
    use pyinit_core::ValidationError;

    fn text(s: &str) -> RawAnswer {
        RawAnswer::Text(s.to_string())
    }

    fn choice(s: &str) -> RawAnswer {
        RawAnswer::Choice(s.to_string())
    }

    fn step(field: Field) -> QuestionStep {
        QuestionStep::new(field, PromptSpec::input(field.as_str()))
    }

    #[test]
    fn test_web_framework_condition() {
        let steps = default_steps();
        let web_step = steps
            .iter()
            .find(|s| s.field == Field::WebFramework)
            .unwrap();

        let mut config = ProjectConfig::new();
        config.project_type = Some(ProjectType::Basic);
        assert!(!web_step.should_ask(&config));

        config.project_type = Some(ProjectType::Web);
        assert!(web_step.should_ask(&config));
    }

    #[test]
    fn test_default_steps_form_a_valid_flow() {
        let flow = QuestionFlow::standard().unwrap();
        assert_eq!(flow.steps().len(), Field::all().len());
    }

    #[test]
    fn test_every_step_dispatches() {
        let mut config = ProjectConfig::new();
        for step in default_steps() {
            let value = step
                .prompt
                .default
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "value".to_string());
            config.set(step.field.as_str(), &value).unwrap();
        }
    }

    #[test]
    fn test_rejects_read_of_later_field() {
        let steps = vec![
            step(Field::UserName).when(|_| true, &[Field::ProjectType]),
            step(Field::ProjectType),
        ];
        let err = QuestionFlow::new(steps).unwrap_err();
        assert!(matches!(err, Error::Core(ref core) if core.is_configuration()));
    }

    #[test]
    fn test_rejects_duplicate_fields() {
        let steps = vec![step(Field::Email), step(Field::Email)];
        assert!(QuestionFlow::new(steps).is_err());
    }

    #[test]
    fn test_basic_flow_skips_framework() {
        let flow = QuestionFlow::standard().unwrap();
        let mut prompter = ScriptedPrompter::new([
            text("Ada"),
            text("ada@example.com"),
            text("Engine"),
            text(""),
            choice("basic"),
            choice("direct"),
            choice("3.12"),
        ]);

        let config = flow.collect(&mut prompter).unwrap();
        assert_eq!(config.project_type, Some(ProjectType::Basic));
        assert_eq!(config.web_framework, None);
        assert_eq!(config.python_version, "3.12");
        assert_eq!(config.main_dir_name, "engine");
        assert!(!prompter.asked().iter().any(|m| m.contains("web framework")));
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_web_flow_asks_framework() {
        let flow = QuestionFlow::standard().unwrap();
        let mut prompter = ScriptedPrompter::new([
            text("Ada"),
            text("ada@example.com"),
            text("api"),
            text("An API"),
            choice("web"),
            text(""),
            choice("src"),
            choice("3.13"),
        ]);

        let config = flow.collect(&mut prompter).unwrap();
        assert_eq!(config.web_framework, Some(WebFramework::FastApi));
        assert_eq!(config.project_description, "An API");
        assert_eq!(config.main_dir_name, "src");
    }

    #[test]
    fn test_invalid_answers_are_asked_again() {
        let flow = QuestionFlow::new(vec![
            step(Field::Email).validate_with(validate_email),
        ])
        .unwrap();
        let mut prompter = ScriptedPrompter::new([
            text(""),
            text("userexample.com"),
            text("user@example.com"),
        ]);

        let mut config = ProjectConfig::new();
        flow.run(&mut prompter, &mut config).unwrap();

        assert_eq!(config.email, "user@example.com");
        assert_eq!(
            prompter.rejections(),
            [ValidationError::Required, ValidationError::InvalidFormat]
        );
        assert_eq!(prompter.asked().len(), 3);
    }

    #[test]
    fn test_closed_input_fails_flow() {
        let flow = QuestionFlow::standard().unwrap();
        let mut prompter = ScriptedPrompter::new([text("Ada")]);
        let err = flow.collect(&mut prompter).unwrap_err();
        assert!(matches!(err, Error::Prompt { .. }));
    }

    #[test]
    fn test_unknown_choice_is_configuration_error() {
        let flow = QuestionFlow::new(vec![step(Field::ProjectType)]).unwrap();
        let mut prompter = ScriptedPrompter::new([choice("mobile")]);
        let err = flow.run(&mut prompter, &mut ProjectConfig::new()).unwrap_err();
        assert!(matches!(err, Error::Core(ref core) if core.is_configuration()));
    }
}
