//! CLI argument definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// cuecast - Send a screenplay to a Telegram chat, one line of dialogue at a time
#[derive(Parser, Debug)]
#[command(name = "cuecast")]
#[command(about = "Send a screenplay to a Telegram chat, one line of dialogue at a time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Screenplay file (overrides SCRIPT_FILE and config)
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Additional configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Parse and print the dialogue without sending anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for --dry-run
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cuecast"]).unwrap();
        assert!(cli.script.is_none());
        assert!(!cli.dry_run);
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn test_dry_run_json() {
        let cli = Cli::try_parse_from([
            "cuecast",
            "--script",
            "Bee.txt",
            "--dry-run",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.script.as_deref(), Some(std::path::Path::new("Bee.txt")));
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
