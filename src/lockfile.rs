//! Cargo.lock parsing
//!
//! The lockfile is read as plain text rather than TOML: every `[[package]]`
//! block is split into `key = value` lines and the four fields we need are
//! picked out. Anything that does not look like an assignment is ignored, so a
//! damaged lockfile yields packages with empty fields instead of an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Marker that opens every package block in Cargo.lock
const PACKAGE_MARKER: &str = "[[package]]";

#[derive(Error, Debug)]
pub enum LockfileError {
    #[error("{} not found at {path}", lockfile_label(.path))]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
}

/// One `[[package]]` entry of Cargo.lock
///
/// Missing keys are left as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub source: String,
    pub checksum: String,
}

/// How a missing lockfile is named in messages
fn lockfile_label(path: &Path) -> &'static str {
    if path.file_name().is_some_and(|name| name == "Cargo.lock") {
        "Cargo.lock"
    } else {
        "Lockfile"
    }
}

/// Read the lockfile at `path` into memory
pub fn read_lockfile(path: &Path) -> Result<String, LockfileError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LockfileError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LockfileError::ReadFile {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Parse every package block in lockfile order
pub fn parse_packages(content: &str) -> Vec<Package> {
    package_blocks(content).map(parse_block).collect()
}

/// Iterate over the text of each package block, skipping the header
fn package_blocks(content: &str) -> impl Iterator<Item = &str> {
    content.split(PACKAGE_MARKER).skip(1)
}

fn parse_block(block: &str) -> Package {
    let mut package = Package::default();

    for line in block.trim().lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = unquote(value.trim()).to_string();

        // Later assignments to the same key win
        match key.trim() {
            "name" => package.name = value,
            "version" => package.version = value,
            "source" => package.source = value,
            "checksum" => package.checksum = value,
            _ => {}
        }
    }

    package
}

/// Strip one pair of enclosing double quotes, if present
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
