//! Configuration management for the modulefile generator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Input file validation

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the modulefile generator
#[derive(Debug, Parser)]
#[command(name = "lmodgen")]
#[command(about = "Transcribes YAML module definitions into Lmod Lua scripts")]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// YAML definition files to process
    #[arg(help = "File paths to process")]
    pub files: Vec<PathBuf>,

    /// Directory the generated scripts are written into
    #[arg(long, help = "Directory for generated scripts (created if missing)")]
    pub output_path: PathBuf,

    /// Log level for the generator
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Input YAML files, in command-line order
    pub files: Vec<PathBuf>,
    /// Destination directory for generated scripts
    pub output_path: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        // Input entries must be files; definitions are never discovered by
        // walking a directory
        for path in &args.files {
            if path.is_dir() {
                bail!("{} is a directory", path.display());
            }
        }

        Ok(Config {
            files: args.files,
            output_path: args.output_path,
            log_level: args.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(files: Vec<PathBuf>) -> Args {
        Args {
            files,
            output_path: PathBuf::from("out"),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_config_from_args() {
        let config = Config::from_args(args(vec![PathBuf::from("defs.yaml")])).expect("config");
        assert_eq!(config.files, vec![PathBuf::from("defs.yaml")]);
        assert_eq!(config.output_path, PathBuf::from("out"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_directory_input_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = Config::from_args(args(vec![dir.path().to_path_buf()]));
        assert!(result.is_err());
    }
}
