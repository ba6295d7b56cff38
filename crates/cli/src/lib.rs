//! # Meridian CLI
//!
//! Library side of the `meridian` command: argument parsing, logging setup
//! and the subcommands, kept out of `main.rs` so they can be driven from
//! tests.

pub mod commands;
pub mod config;

pub use config::{Cli, CodecConfig, Command};

use std::io::Write;

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` wins over `level` when it is set. Logs go to standard error so
/// command output stays clean.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "meridian_cli={level},meridian_serde={level},meridian_fhir={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Runs the selected subcommand, writing its report to `out`.
///
/// Returns `false` when the command ran but found a problem with its input.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<bool> {
    let codec = cli.codec.codec();
    match &cli.command {
        Command::Check(cmd) => cmd.execute(&codec, out),
        Command::Roundtrip(cmd) => cmd.execute(&codec, out),
        Command::Pretty(cmd) => cmd.execute(&codec, out),
    }
}
