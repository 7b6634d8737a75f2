//! Lockfile location
//!
//! The tool is installed next to the flatpak manifest, one level below the
//! project root (`<root>/flatpak/`), so by default the project root is the
//! parent of the directory holding the executable.
//!
//! The executable location comes from `std::env::current_exe`, which resolves
//! symlinks on Linux. A symlink at `<root>/flatpak/flatpak-cargo-sources`
//! therefore looks for the lockfile relative to the real binary, not the link;
//! use `--project-root` when the tool is linked into a project.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const LOCKFILE_NAME: &str = "Cargo.lock";

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Cannot determine executable location: {0}")]
    NoExecutable(std::io::Error),

    #[error("Cannot determine project root from {path}. Pass --project-root or --lockfile.")]
    NoProjectRoot { path: PathBuf },
}

/// Project root for an executable at `exe`: the parent of its directory
pub fn project_root_for(exe: &Path) -> Result<PathBuf, PathError> {
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| PathError::NoProjectRoot {
            path: exe.to_path_buf(),
        })
}

/// Path of the lockfile inside a project root
pub fn lockfile_in(root: &Path) -> PathBuf {
    root.join(LOCKFILE_NAME)
}

/// Resolve the lockfile to read
///
/// An explicit lockfile wins, then an explicit project root, then the root
/// derived from `exe`.
pub fn resolve_lockfile(
    lockfile: Option<&Path>,
    project_root: Option<&Path>,
    exe: impl FnOnce() -> std::io::Result<PathBuf>,
) -> Result<PathBuf, PathError> {
    if let Some(path) = lockfile {
        return Ok(path.to_path_buf());
    }
    if let Some(root) = project_root {
        return Ok(lockfile_in(root));
    }

    let exe = exe().map_err(PathError::NoExecutable)?;
    Ok(lockfile_in(&project_root_for(&exe)?))
}
