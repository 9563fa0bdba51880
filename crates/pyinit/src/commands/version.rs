//! Version output

use crate::version::VersionInfo;
use anyhow::Result;

pub fn run() -> Result<()> {
    for line in VersionInfo::current().details() {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::version::VersionInfo;

    #[test]
    fn test_version_info_current_is_valid_semver() {
        let info = VersionInfo::current();
        let parsed = semver::Version::parse(&info.version);
        assert!(
            parsed.is_ok(),
            "version should be valid semver, got: {}",
            info.version
        );
    }

    #[test]
    fn test_version_info_display_trait() {
        let info = VersionInfo::current();
        assert_eq!(format!("{}", info), info.display());
        assert!(info.display().starts_with("pyinit "));
    }

    #[test]
    fn test_details_with_all_fields() {
        let info = VersionInfo {
            version: "1.2.3".to_string(),
            commit: Some("abc1234".to_string()),
            build_date: Some("2026-01-01".to_string()),
            target: Some("x86_64-unknown-linux-gnu".to_string()),
        };
        assert_eq!(
            info.details(),
            [
                "pyinit 1.2.3",
                "Commit:     abc1234",
                "Build date: 2026-01-01",
                "Target:     x86_64-unknown-linux-gnu",
            ]
        );
    }

    #[test]
    fn test_details_without_optional_fields() {
        let info = VersionInfo {
            version: "0.1.0".to_string(),
            commit: None,
            build_date: None,
            target: None,
        };
        assert_eq!(info.details(), ["pyinit 0.1.0"]);
    }
}
