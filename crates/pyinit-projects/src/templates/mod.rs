//! Embedded template registry
//!
//! Project templates are compiled into the binary and registered in a single
//! Tera instance under their path relative to the `templates/` directory,
//! e.g. `core/gitignore.tera`.
//!
//! Free-form answers must go through the `toml_str` or `py_str` filters when
//! they land inside a string literal.

use std::collections::HashMap;
use std::error::Error as StdError;

use pyinit_core::ProjectConfig;
use rust_embed::RustEmbed;
use tera::{Tera, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded project templates
#[derive(RustEmbed)]
#[folder = "templates/"]
struct ProjectTemplates;

/// Template registry for project files
pub struct TemplateRegistry {
    tera: Tera,
}

impl TemplateRegistry {
    /// Create a registry holding every embedded template
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.register_filter("toml_str", quoted_filter);
        tera.register_filter("py_str", quoted_filter);

        for file in ProjectTemplates::iter() {
            if let Some(content) = ProjectTemplates::get(&file) {
                let content_str = std::str::from_utf8(content.data.as_ref())
                    .map_err(|e| Error::template(&*file, e.to_string()))?;
                tera.add_raw_template(&file, content_str)
                    .map_err(|e| Error::template(&*file, error_chain(&e)))?;
            }
        }

        debug!(
            "Registered {} project templates",
            tera.get_template_names().count()
        );
        Ok(Self { tera })
    }

    /// Whether a template with this identifier is registered
    pub fn contains(&self, template_name: &str) -> bool {
        self.tera.get_template_names().any(|name| name == template_name)
    }

    /// Sorted identifiers of all registered templates
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tera
            .get_template_names()
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    /// Render a template against a prepared context
    pub fn render_with(&self, template_name: &str, context: &tera::Context) -> Result<String> {
        if !self.contains(template_name) {
            return Err(Error::template_not_found(template_name));
        }

        self.tera
            .render(template_name, context)
            .map_err(|e| Error::template(template_name, error_chain(&e)))
    }

    /// Render a template against the projection of `config`
    pub fn render(&self, template_name: &str, config: &ProjectConfig) -> Result<String> {
        let context = config.template_context().to_tera_context()?;
        self.render_with(template_name, &context)
    }
}

/// Render `value` as a double-quoted literal.
///
/// The escapes used are valid in both TOML basic strings and Python string
/// literals.
fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn quoted_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("Expected string"))?;
    Ok(Value::String(quote_literal(s)))
}

/// Tera nests the useful message in its source chain
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
