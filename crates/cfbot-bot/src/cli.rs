//! Command line arguments.

use cfbot_common::LoggingConfig;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level, overridden by `RUST_LOG`
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Append logs to this file instead of stdout
    #[arg(long)]
    pub log_file: Option<String>,
}

impl Args {
    /// Logging settings selected on the command line.
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            json_format: self.log_json,
            file_path: self.log_file.clone(),
            ..LoggingConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["cfbot"]).unwrap();
        assert!(args.config.is_none());

        let logging = args.logging_config();
        assert_eq!(logging.level, "info");
        assert!(!logging.json_format);
        assert!(logging.file_path.is_none());
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "cfbot",
            "--config",
            "bot.yaml",
            "-l",
            "debug",
            "--log-json",
            "--log-file",
            "cfbot.log",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("bot.yaml")));
        let logging = args.logging_config();
        assert_eq!(logging.level, "debug");
        assert!(logging.json_format);
        assert_eq!(logging.file_path.as_deref(), Some("cfbot.log"));
    }
}
