//! Build metadata for `pyinit --version`

/// Application name as printed in version output
pub const NAME: &str = "pyinit";

/// Version information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Semantic version
    pub version: String,

    /// Git commit SHA (short)
    pub commit: Option<String>,

    /// Build date
    pub build_date: Option<String>,

    /// Target triple
    pub target: Option<String>,
}

impl VersionInfo {
    /// Create version info for current build
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit: option_env!("GIT_SHA").map(String::from),
            build_date: option_env!("BUILD_DATE").map(String::from),
            target: option_env!("TARGET").map(String::from),
        }
    }

    /// `pyinit <version>`
    pub fn display(&self) -> String {
        format!("{} {}", NAME, self.version)
    }

    /// Headline plus one line per known build detail
    pub fn details(&self) -> Vec<String> {
        let mut lines = vec![self.display()];

        if let Some(commit) = &self.commit {
            lines.push(format!("Commit:     {}", commit));
        }
        if let Some(date) = &self.build_date {
            lines.push(format!("Build date: {}", date));
        }
        if let Some(target) = &self.target {
            lines.push(format!("Target:     {}", target));
        }

        lines
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
