//! Project directory resolution

use camino::{Utf8Path, Utf8PathBuf};
use pyinit_core::{get_home_dir, sanitize_project_name, ProjectConfig};
use tracing::{debug, warn};

use crate::error::Result;
use crate::prompt::Prompter;

fn project_dir_name(project_name: &str) -> Result<String> {
    let dir = sanitize_project_name(project_name);
    if dir.is_empty() {
        return Err(pyinit_core::Error::invalid_project_name(project_name).into());
    }
    Ok(dir)
}

/// `<cwd>/<sanitized name>`
pub fn resolve_default_path(cwd: &Utf8Path, project_name: &str) -> Result<Utf8PathBuf> {
    Ok(cwd.join(project_dir_name(project_name)?))
}

/// `<parent>/<sanitized name>`
pub fn resolve_custom_path(parent: &Utf8Path, project_name: &str) -> Result<Utf8PathBuf> {
    Ok(parent.join(project_dir_name(project_name)?))
}

/// Gate for reusing an existing directory.
///
/// Returns `true` without asking when `path` does not exist. Otherwise asks
/// (default no); a failed prompt counts as "no".
pub fn confirm_if_exists(prompter: &mut dyn Prompter, path: &Utf8Path) -> bool {
    if !path.exists() {
        return true;
    }

    let name = path.file_name().unwrap_or(path.as_str());
    let message = format!("Directory '{}' already exists. Continue anyway?", name);
    match prompter.confirm(&message, false) {
        Ok(answer) => answer,
        Err(e) => {
            warn!("Directory confirmation failed: {}", e);
            false
        }
    }
}

/// Ask where the project goes and store the absolute path in `config`.
///
/// Relative parent directories are resolved against `cwd`.
pub fn choose_location(
    prompter: &mut dyn Prompter,
    config: &mut ProjectConfig,
    cwd: &Utf8Path,
) -> Result<()> {
    let default_path = resolve_default_path(cwd, &config.project_name)?;
    config.project_path = default_path.clone();

    let message = format!(
        "Create project in current directory?\nProject will be created at: {}",
        default_path
    );
    if prompter.confirm(&message, true)? {
        return Ok(());
    }

    let parent = prompter.input("Enter parent directory path:", Some(cwd.as_str()))?;
    let parent = resolve_parent(parent.trim(), cwd)?;

    config.project_path = resolve_custom_path(&parent, &config.project_name)?;
    debug!("Project path set to {}", config.project_path);
    Ok(())
}

/// Expand a leading `~` and anchor relative paths at `cwd`
fn resolve_parent(input: &str, cwd: &Utf8Path) -> Result<Utf8PathBuf> {
    let path = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            let home = get_home_dir()?;
            let home = Utf8PathBuf::from_path_buf(home).map_err(|p| {
                pyinit_core::Error::configuration(format!(
                    "home directory is not valid UTF-8: {}",
                    p.display()
                ))
            })?;
            match rest.trim_start_matches('/') {
                "" => home,
                rest => home.join(rest),
            }
        }
        _ => Utf8PathBuf::from(input),
    };

    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(cwd.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::prompt::ScriptedPrompter;
    use pyinit_core::RawAnswer;
    use serial_test::serial;

    /// Run `f` with HOME pointing at `home`, restoring it afterwards
    fn with_home<T>(home: &Utf8Path, f: impl FnOnce() -> T) -> T {
        let original = std::env::var("HOME").ok();
        std::env::set_var("HOME", home.as_str());
        let result = f();
        match original {
            Some(value) => std::env::set_var("HOME", value),
            None => std::env::remove_var("HOME"),
        }
        result
    }

    fn config_named(name: &str) -> ProjectConfig {
        ProjectConfig {
            project_name: name.to_string(),
            ..ProjectConfig::default()
        }
    }

    #[test]
    fn test_resolve_default_path_sanitizes() {
        let path = resolve_default_path(Utf8Path::new("/work"), "My Project").unwrap();
        assert_eq!(path, Utf8PathBuf::from("/work/my-project"));
    }

    #[test]
    fn test_empty_sanitized_name_is_rejected() {
        let err = resolve_custom_path(Utf8Path::new("/work"), "!!!").unwrap_err();
        assert!(matches!(
            err,
            Error::Core(pyinit_core::Error::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn test_confirm_skipped_for_missing_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("fresh")).unwrap();
        let mut prompter = ScriptedPrompter::default();

        assert!(confirm_if_exists(&mut prompter, &path));
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_confirm_existing_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();

        let mut prompter = ScriptedPrompter::new([RawAnswer::Flag(true)]);
        assert!(confirm_if_exists(&mut prompter, &path));

        let mut prompter = ScriptedPrompter::new([RawAnswer::Flag(false)]);
        assert!(!confirm_if_exists(&mut prompter, &path));

        // Closed input counts as a refusal
        let mut prompter = ScriptedPrompter::default();
        assert!(!confirm_if_exists(&mut prompter, &path));
    }

    #[test]
    fn test_choose_location_in_cwd() {
        let mut config = config_named("Demo App");
        let mut prompter = ScriptedPrompter::new([RawAnswer::Flag(true)]);

        choose_location(&mut prompter, &mut config, Utf8Path::new("/work")).unwrap();
        assert_eq!(config.project_path, Utf8PathBuf::from("/work/demo-app"));
    }

    #[test]
    fn test_choose_location_custom_relative_parent() {
        let mut config = config_named("demo");
        let mut prompter = ScriptedPrompter::new([
            RawAnswer::Flag(false),
            RawAnswer::Text("projects".into()),
        ]);

        choose_location(&mut prompter, &mut config, Utf8Path::new("/work")).unwrap();
        assert_eq!(config.project_path, Utf8PathBuf::from("/work/projects/demo"));
        assert!(config.project_path.is_absolute());
    }

    #[test]
    fn test_choose_location_custom_default_parent() {
        let mut config = config_named("demo");
        let mut prompter =
            ScriptedPrompter::new([RawAnswer::Flag(false), RawAnswer::Text(String::new())]);

        choose_location(&mut prompter, &mut config, Utf8Path::new("/work")).unwrap();
        assert_eq!(config.project_path, Utf8PathBuf::from("/work/demo"));
    }

    #[test]
    #[serial]
    fn test_choose_location_expands_home() {
        let mut config = config_named("demo");
        let mut prompter = ScriptedPrompter::new([
            RawAnswer::Flag(false),
            RawAnswer::Text("~/code".into()),
        ]);

        with_home(Utf8Path::new("/home/ada"), || {
            choose_location(&mut prompter, &mut config, Utf8Path::new("/work")).unwrap()
        });
        assert_eq!(config.project_path, Utf8PathBuf::from("/home/ada/code/demo"));
    }

    #[test]
    #[serial]
    fn test_resolve_parent_tilde_forms() {
        let cwd = Utf8Path::new("/work");
        with_home(Utf8Path::new("/home/ada"), || {
            assert_eq!(resolve_parent("~", cwd).unwrap(), "/home/ada");
            assert_eq!(resolve_parent("~/", cwd).unwrap(), "/home/ada");
            // Only a bare `~` or `~/` prefix means home
            assert_eq!(resolve_parent("~bob/x", cwd).unwrap(), "/work/~bob/x");
            assert_eq!(resolve_parent("/srv", cwd).unwrap(), "/srv");
        });
    }
}
