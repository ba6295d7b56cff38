//! Pretty command implementation.

use clap::Args;
use meridian_fhir::r4::Resource;
use meridian_serde::{Codec, pretty};
use std::io::Write;
use std::path::PathBuf;

use super::read_input;

/// Print a resource as an indented outline
#[derive(Debug, Args)]
pub struct PrettyCommand {
    /// File to print (`-` reads standard input)
    pub file: PathBuf,

    /// Print indented FHIR JSON instead of the outline
    #[arg(long)]
    pub json: bool,
}

impl PrettyCommand {
    pub fn execute(&self, codec: &Codec, out: &mut impl Write) -> anyhow::Result<bool> {
        let content = read_input(&self.file)?;
        let resource: Resource = codec.decode_str(&content)?;
        if self.json {
            writeln!(out, "{}", codec.encode_string_pretty(&resource)?)?;
        } else {
            write!(out, "{}", pretty(&resource))?;
        }
        Ok(true)
    }
}
