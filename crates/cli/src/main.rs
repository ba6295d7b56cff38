//! `meridian`: check, round-trip and outline FHIR R4 JSON documents.

use clap::Parser;
use meridian_cli::{Cli, init_logging, run};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.codec.log_level);

    if let Err(errors) = cli.codec.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(2);
    }

    debug!(
        strict = cli.codec.strict,
        max_depth = cli.codec.max_depth,
        "Starting meridian"
    );

    let stdout = std::io::stdout();
    let ok = run(&cli, &mut stdout.lock())?;
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
