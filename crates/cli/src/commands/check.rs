//! Check command implementation.

use clap::Args;
use meridian_fhir::r4::Resource;
use meridian_serde::Codec;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use super::read_input;

/// Decode FHIR JSON files and report where decoding fails
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Files to check (`-` reads standard input)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

impl CheckCommand {
    /// Writes one line per file; returns `false` if any file failed.
    pub fn execute(&self, codec: &Codec, out: &mut impl Write) -> anyhow::Result<bool> {
        let mut all_ok = true;
        for path in &self.files {
            let content = read_input(path)?;
            match codec.decode_str::<Resource>(&content) {
                Ok(resource) => {
                    debug!(
                        file = %path.display(),
                        resource_type = %resource.resource_type(),
                        "decoded"
                    );
                    match resource.id() {
                        Some(id) => writeln!(
                            out,
                            "{}: ok ({}/{})",
                            path.display(),
                            resource.resource_type(),
                            id
                        )?,
                        None => writeln!(
                            out,
                            "{}: ok ({})",
                            path.display(),
                            resource.resource_type()
                        )?,
                    }
                }
                Err(err) => {
                    all_ok = false;
                    writeln!(out, "{}: {}", path.display(), err)?;
                }
            }
        }
        Ok(all_ok)
    }
}
