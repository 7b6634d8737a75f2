//! Source classification and crates.io download URLs
//!
//! Only packages that come from the public crates.io index are vendored.
//! Path dependencies, git checkouts and alternate registries are left out of
//! the manifest.

use crate::lockfile::Package;
use crate::manifest::Source;
use std::fmt;

/// Source string cargo writes for crates.io packages
pub const CRATES_IO_REGISTRY: &str = "registry+https://github.com/rust-lang/crates.io-index";

/// Base URL for `.crate` downloads
pub const DOWNLOAD_URL: &str = "https://static.crates.io/crates";

/// Directory (relative to the build dir) the crates are placed in
pub const VENDOR_DIR: &str = "cargo/vendor";

const GIT_PREFIX: &str = "git+";

/// Where a locked package comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// No `source` key: a workspace member or path dependency
    Path,
    Git,
    CratesIo,
    /// Anything else, e.g. a private registry
    Other,
}

impl SourceKind {
    pub fn of(package: &Package) -> Self {
        let source = package.source.as_str();
        if source.is_empty() {
            SourceKind::Path
        } else if source.starts_with(GIT_PREFIX) {
            SourceKind::Git
        } else if source.contains(CRATES_IO_REGISTRY) {
            SourceKind::CratesIo
        } else {
            SourceKind::Other
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Path => write!(f, "path"),
            SourceKind::Git => write!(f, "git"),
            SourceKind::CratesIo => write!(f, "crates.io"),
            SourceKind::Other => write!(f, "unsupported"),
        }
    }
}

/// File name of the `.crate` archive for a package
pub fn crate_filename(package: &Package) -> String {
    format!("{}-{}.crate", package.name, package.version)
}

/// Download URL for a package's `.crate` archive
///
/// Name and version are inserted as-is, without percent-encoding.
pub fn crate_url(package: &Package) -> String {
    format!("{}/{}/{}", DOWNLOAD_URL, package.name, crate_filename(package))
}

/// Build the manifest entry for a package, or `None` if it is not vendored
pub fn file_source(package: &Package) -> Option<Source> {
    if SourceKind::of(package) != SourceKind::CratesIo {
        return None;
    }

    Some(Source::File {
        url: crate_url(package),
        sha256: package.checksum.clone(),
        dest: VENDOR_DIR.to_string(),
        dest_filename: crate_filename(package),
    })
}
