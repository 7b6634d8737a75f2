use clap::Parser;
use std::path::PathBuf;

/// Generate flatpak-builder sources for offline cargo builds from Cargo.lock
///
/// With no arguments, reads Cargo.lock from the parent of the directory the
/// executable lives in and prints the sources JSON to stdout.
#[derive(Parser, Debug)]
#[command(name = "flatpak-cargo-sources")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Read this lockfile instead of <project root>/Cargo.lock
    #[arg(long, value_name = "PATH")]
    pub lockfile: Option<PathBuf>,

    /// Project root containing Cargo.lock
    #[arg(long, value_name = "DIR", conflicts_with = "lockfile")]
    pub project_root: Option<PathBuf>,

    /// Write the sources JSON to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report skipped packages and totals on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
