//! Roundtrip command implementation.

use clap::Args;
use meridian_fhir::r4::Resource;
use meridian_serde::{Codec, json_differences};
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use super::read_input;

/// Decode and re-encode a document, listing every member that changed
#[derive(Debug, Args)]
pub struct RoundtripCommand {
    /// File to round-trip (`-` reads standard input)
    pub file: PathBuf,

    /// Also print the original and re-encoded values at each difference
    #[arg(short, long)]
    pub verbose: bool,
}

impl RoundtripCommand {
    /// Returns `true` when the re-encoded tree matches the input.
    pub fn execute(&self, codec: &Codec, out: &mut impl Write) -> anyhow::Result<bool> {
        let content = read_input(&self.file)?;
        let original = codec.parse_str(&content)?;
        let resource: Resource = codec.decode(&original)?;
        let reencoded = codec.encode(&resource);

        let differences = json_differences(&original, &reencoded);
        info!(
            file = %self.file.display(),
            differences = differences.len(),
            "round trip finished"
        );
        if differences.is_empty() {
            writeln!(out, "{}: identical", self.file.display())?;
            return Ok(true);
        }

        writeln!(
            out,
            "{}: {} difference(s)",
            self.file.display(),
            differences.len()
        )?;
        for difference in &differences {
            let path = if difference.path.is_empty() {
                "<root>"
            } else {
                difference.path.as_str()
            };
            writeln!(out, "  {}", path)?;
            if self.verbose {
                writeln!(out, "    original:   {}", describe(&difference.original))?;
                writeln!(out, "    re-encoded: {}", describe(&difference.reencoded))?;
            }
        }
        Ok(false)
    }
}

fn describe(value: &Option<Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "(absent)".to_string(),
    }
}
