//! Project name sanitization

/// Convert a free-form project name into a filesystem-safe slug.
///
/// Lowercases, turns spaces into `-`, then drops everything outside
/// `[a-z0-9_-]`. Non-ASCII characters are removed, not transliterated,
/// so the result may be empty.
pub fn sanitize_project_name(name: &str) -> String {
    name.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '-' | '_'))
        .collect()
}

/// Name used for the `[project]` table of `pyproject.toml`.
///
/// The sanitized slug with leading and trailing separators removed, since
/// distribution names must start and end with a letter or digit.
pub fn distribution_name(project_name: &str) -> String {
    let slug = sanitize_project_name(project_name);
    let trimmed = slug.trim_matches(|c: char| c == '-' || c == '_');
    if trimmed.is_empty() {
        DEFAULT_DISTRIBUTION_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Fallback when a name has no letters or digits
pub const DEFAULT_DISTRIBUTION_NAME: &str = "project";

/// Package directory name for a project laid out without `src/`
pub fn package_dir_name(project_name: &str) -> String {
    project_name.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sanitize_spaces_and_case() {
        assert_eq!(sanitize_project_name("My Project"), "my-project");
    }

    #[test]
    fn test_sanitize_drops_punctuation() {
        assert_eq!(
            sanitize_project_name("My-Super_Project@2024!"),
            "my-super_project2024"
        );
    }

    #[test]
    fn test_sanitize_empty_and_all_punctuation() {
        assert_eq!(sanitize_project_name(""), "");
        assert_eq!(sanitize_project_name("@#$%!"), "");
    }

    #[test]
    fn test_sanitize_removes_non_ascii() {
        assert_eq!(sanitize_project_name("Café Über"), "caf-ber");
        assert_eq!(sanitize_project_name("项目 app"), "-app");
    }

    fn in_output_alphabet(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'
    }

    proptest! {
        #[test]
        fn test_sanitize_is_idempotent(name in any::<String>()) {
            let once = sanitize_project_name(&name);
            prop_assert_eq!(sanitize_project_name(&once), once);
        }

        #[test]
        fn test_sanitize_output_alphabet(name in any::<String>()) {
            prop_assert!(sanitize_project_name(&name).chars().all(in_output_alphabet));
        }

        #[test]
        fn test_distribution_name_is_well_formed(name in any::<String>()) {
            let dist = distribution_name(&name);
            prop_assert!(dist.chars().all(in_output_alphabet));
            prop_assert!(dist.starts_with(|c: char| c.is_ascii_alphanumeric()));
            prop_assert!(dist.ends_with(|c: char| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_distribution_name() {
        assert_eq!(distribution_name("My App!"), "my-app");
        assert_eq!(distribution_name("项目 app"), "app");
        assert_eq!(distribution_name("_private_"), "private");
        assert_eq!(distribution_name("--"), DEFAULT_DISTRIBUTION_NAME);
    }

    #[test]
    fn test_package_dir_name() {
        assert_eq!(package_dir_name("my-cool-app"), "my_cool_app");
        assert_eq!(package_dir_name("plain"), "plain");
    }
}
