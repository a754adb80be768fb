use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// prme: scaffold a new project from a starter template
#[derive(Parser, Debug)]
#[command(name = "prme")]
#[command(version)]
#[command(about = "Scaffold a new project from a starter template")]
#[command(
    long_about = "prme walks you through choosing a language, an application type and a starter stack, then clones the chosen template into a new directory named after your project."
)]
pub struct Cli {
    /// Template catalog file (defaults to $PRME_CATALOG, ./templates/templs.yml, then the user config dir)
    #[arg(short, long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["prme"]);

        assert_eq!(cli.catalog, None);
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "prme",
            "--catalog",
            "custom/templs.yml",
            "--log-level",
            "debug",
            "--log-file",
            "prme.log",
        ]);

        assert_eq!(cli.catalog, Some(PathBuf::from("custom/templs.yml")));
        assert_eq!(cli.log_level.to_filter_directive(), "debug");
        assert_eq!(cli.log_file, Some(PathBuf::from("prme.log")));
    }

    #[test]
    fn test_version_flag_is_handled_by_clap() {
        let err = Cli::try_parse_from(["prme", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["prme", "--bogus"]).is_err());
    }
}
