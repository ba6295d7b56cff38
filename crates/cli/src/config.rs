//! Command-line configuration for the `meridian` tool.
//!
//! Every decoding option can also be set from the environment, so scripts
//! can pin behaviour without repeating flags.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MERIDIAN_STRICT` | false | Reject members the model does not know |
//! | `MERIDIAN_MAX_DEPTH` | 64 | Maximum object nesting while decoding |
//! | `MERIDIAN_LOG_LEVEL` | warn | Log level |
//!
//! # Example
//!
//! ```rust
//! use meridian_cli::CodecConfig;
//!
//! let config = CodecConfig {
//!     strict: true,
//!     ..Default::default()
//! };
//! assert!(config.decode_options().strict);
//! ```

use clap::{Args, Parser, Subcommand};
use meridian_serde::{Codec, DEFAULT_MAX_DEPTH, DecodeOptions};

use crate::commands::{CheckCommand, PrettyCommand, RoundtripCommand};

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "meridian")]
#[command(about = "Check, round-trip and outline FHIR R4 JSON documents")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub codec: CodecConfig,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode each file and report the first error with its location
    Check(CheckCommand),
    /// Decode, re-encode and list every member that changed
    Roundtrip(RoundtripCommand),
    /// Print an indented outline of a resource
    Pretty(PrettyCommand),
}

/// Options shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct CodecConfig {
    /// Reject members the model does not know instead of preserving them.
    #[arg(long, global = true, env = "MERIDIAN_STRICT", default_value = "false")]
    pub strict: bool,

    /// Maximum object nesting depth while decoding.
    #[arg(long, global = true, env = "MERIDIAN_MAX_DEPTH", default_value = "64")]
    pub max_depth: usize,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true, env = "MERIDIAN_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
            log_level: "warn".to_string(),
        }
    }
}

impl CodecConfig {
    pub fn decode_options(&self) -> DecodeOptions {
        let options = if self.strict {
            DecodeOptions::strict()
        } else {
            DecodeOptions::lenient()
        };
        options.with_max_depth(self.max_depth)
    }

    pub fn codec(&self) -> Codec {
        Codec::new(self.decode_options())
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.max_depth == 0 {
            errors.push("Max depth cannot be 0".to_string());
        }

        const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            errors.push(format!("Unknown log level '{}'", self.log_level));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert!(!config.strict);
        assert_eq!(config.max_depth, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_decode_options_follow_flags() {
        let config = CodecConfig {
            strict: true,
            max_depth: 8,
            ..Default::default()
        };
        let options = config.decode_options();
        assert!(options.strict);
        assert_eq!(options.max_depth, 8);
        assert_eq!(config.codec().options(), &options);
    }

    #[test]
    fn test_validate_zero_depth() {
        let config = CodecConfig {
            max_depth: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.unwrap_err().iter().any(|e| e.contains("depth")));
    }

    #[test]
    fn test_validate_log_level() {
        let config = CodecConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "meridian",
            "check",
            "patient.json",
            "--strict",
            "--max-depth",
            "12",
        ])
        .unwrap();
        assert!(cli.codec.strict);
        assert_eq!(cli.codec.max_depth, 12);
        assert!(matches!(cli.command, Command::Check(_)));
    }
}
