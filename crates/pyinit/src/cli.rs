//! CLI argument parsing with clap

use clap::{Parser, Subcommand};

/// pyinit - Interactive Python project scaffolding tool
///
/// Running `pyinit` without a subcommand starts the interactive project
/// creation flow.
#[derive(Parser, Debug)]
#[command(name = "pyinit")]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Show version information
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Increase log verbosity (--verbose, --verbose --verbose)
    #[arg(long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage pyinit configuration (~/.pyinitrc)
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Enable or disable the ASCII banner
    #[command(subcommand)]
    Banner(BannerCommands),
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerCommands {
    /// Enable ASCII banner
    Enable,

    /// Disable ASCII banner
    Disable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flags() {
        assert!(Cli::try_parse_from(["pyinit", "-v"]).unwrap().version);
        assert!(Cli::try_parse_from(["pyinit", "--version"]).unwrap().version);
        assert!(!Cli::try_parse_from(["pyinit"]).unwrap().version);
    }

    #[test]
    fn test_verbose_is_counted() {
        let cli = Cli::try_parse_from(["pyinit", "--verbose", "--verbose"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_banner_subcommand() {
        let cli = Cli::try_parse_from(["pyinit", "config", "banner", "disable"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigCommands::Banner(BannerCommands::Disable)))
        ));
    }

    #[test]
    fn test_banner_requires_action() {
        assert!(Cli::try_parse_from(["pyinit", "config", "banner"]).is_err());
    }
}
