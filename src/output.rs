//! Manifest output and stderr diagnostics
//!
//! The manifest is serialized in full before anything is written, so a
//! failure never leaves half a document behind.

use crate::manifest::{Manifest, Skipped};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Error serializing JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to write to stdout: {0}")]
    Stdout(io::Error),
}

/// Render the manifest as it is written: JSON plus a trailing newline
///
/// Non-ASCII text is emitted as UTF-8 rather than `\u` escapes.
pub fn render(manifest: &Manifest) -> Result<String, OutputError> {
    let mut json = manifest.to_json()?;
    json.push('\n');
    Ok(json)
}

/// Write the manifest to `path`, or to stdout when `path` is `None`
pub fn write_manifest(manifest: &Manifest, path: Option<&Path>) -> Result<(), OutputError> {
    let rendered = render(manifest)?;

    match path {
        Some(path) => std::fs::write(path, rendered).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(OutputError::Stdout)
        }
    }
}

/// Report skipped packages and totals on stderr
pub fn print_summary(manifest: &Manifest, skipped: &[Skipped<'_>]) {
    for skip in skipped {
        eprintln!(
            "skipping {} {}: {} source",
            skip.package.name, skip.package.version, skip.kind
        );
    }
    eprintln!(
        "{} crates from crates.io, {} skipped",
        manifest.crate_count(),
        skipped.len()
    );
}
