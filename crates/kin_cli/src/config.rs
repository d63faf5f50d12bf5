//! Command-line and environment configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kin", version, about = "Task data layer tools")]
pub struct CliConfig {
    /// SQLite database file.
    #[arg(long = "db", env = "KIN_DB_PATH", default_value = "kin.db", global = true)]
    pub db_path: PathBuf,

    /// trace|debug|info|warn|error. Defaults by build mode; needs `--log-dir`.
    #[arg(long, env = "KIN_LOG_LEVEL", global = true, requires = "log_dir")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. File logging is off when unset.
    #[arg(long, env = "KIN_LOG_DIR", global = true)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create initial data for the task management application.
    CreateInitialData,
    /// Delete all categories and priorities, cascading to every task row.
    ClearData,
}

#[cfg(test)]
mod tests {
    use super::{CliConfig, Command};
    use clap::{CommandFactory, Parser};
    use std::path::Path;

    #[test]
    fn cli_definition_is_consistent() {
        CliConfig::command().debug_assert();
    }

    #[test]
    fn parses_seed_command_with_global_db_flag() {
        let config =
            CliConfig::try_parse_from(["kin", "create-initial-data", "--db", "/tmp/seed.db"])
                .unwrap();
        assert_eq!(config.command, Command::CreateInitialData);
        assert_eq!(config.db_path, Path::new("/tmp/seed.db"));
    }

    #[test]
    fn log_level_without_log_dir_is_rejected() {
        let err = CliConfig::try_parse_from(["kin", "create-initial-data", "--log-level", "debug"])
            .expect_err("log level alone should not parse");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let config = CliConfig::try_parse_from([
            "kin",
            "create-initial-data",
            "--log-level",
            "debug",
            "--log-dir",
            "/tmp/kin-logs",
        ])
        .expect("log level with log dir should parse");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn requires_a_subcommand() {
        assert!(CliConfig::try_parse_from(["kin"]).is_err());
    }
}
