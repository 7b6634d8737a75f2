//! flatpak-builder source manifest
//!
//! The manifest is a JSON array of flatpak-builder sources: an inline
//! `.cargo/config.toml` that points cargo at the vendor directory, followed by
//! one `file` source per vendored crate.

use crate::lockfile::Package;
use crate::sources::{self, SourceKind};
use serde::Serialize;

/// Cargo config that replaces crates.io with the vendored sources
pub const CARGO_CONFIG: &str = r#"[source.crates-io]
replace-with = "vendored-sources"

[source.vendored-sources]
directory = "cargo/vendor"
"#;

const CARGO_CONFIG_DIR: &str = ".cargo";
const CARGO_CONFIG_FILENAME: &str = "config.toml";

/// A single flatpak-builder source
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Source {
    Inline {
        contents: String,
        dest: String,
        #[serde(rename = "dest-filename")]
        dest_filename: String,
    },
    File {
        url: String,
        sha256: String,
        dest: String,
        #[serde(rename = "dest-filename")]
        dest_filename: String,
    },
}

impl Source {
    /// The `.cargo/config.toml` entry that always leads the manifest
    pub fn cargo_config() -> Self {
        Source::Inline {
            contents: CARGO_CONFIG.to_string(),
            dest: CARGO_CONFIG_DIR.to_string(),
            dest_filename: CARGO_CONFIG_FILENAME.to_string(),
        }
    }
}

/// A package that was left out of the manifest
#[derive(Debug)]
pub struct Skipped<'a> {
    pub package: &'a Package,
    pub kind: SourceKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    sources: Vec<Source>,
}

impl Manifest {
    /// Build the manifest for `packages`, keeping lockfile order
    ///
    /// Returns the packages that were skipped alongside it.
    pub fn build(packages: &[Package]) -> (Self, Vec<Skipped<'_>>) {
        let mut manifest = Manifest {
            sources: vec![Source::cargo_config()],
        };
        let mut skipped = Vec::new();

        for package in packages {
            match sources::file_source(package) {
                Some(source) => manifest.sources.push(source),
                None => skipped.push(Skipped {
                    package,
                    kind: SourceKind::of(package),
                }),
            }
        }

        (manifest, skipped)
    }

    /// Number of vendored crates (excludes the cargo config entry)
    pub fn crate_count(&self) -> usize {
        self.sources.len() - 1
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
