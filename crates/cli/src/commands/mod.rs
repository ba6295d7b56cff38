//! CLI commands module.

pub mod check;
pub mod pretty;
pub mod roundtrip;

pub use check::CheckCommand;
pub use pretty::PrettyCommand;
pub use roundtrip::RoundtripCommand;

use anyhow::Context;
use std::io::Read;
use std::path::Path;

/// Reads a whole document; `-` means standard input.
pub(crate) fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read standard input")?;
        return Ok(content);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
