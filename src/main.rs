mod cli;
mod lockfile;
mod manifest;
mod output;
mod paths;
mod sources;

use clap::Parser;
use cli::Cli;
use manifest::Manifest;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let lock_path = paths::resolve_lockfile(
        cli.lockfile.as_deref(),
        cli.project_root.as_deref(),
        std::env::current_exe,
    )?;

    let content = lockfile::read_lockfile(&lock_path)?;
    let packages = lockfile::parse_packages(&content);
    let (manifest, skipped) = Manifest::build(&packages);

    output::write_manifest(&manifest, cli.output.as_deref())?;

    if cli.verbose {
        output::print_summary(&manifest, &skipped);
    }

    Ok(())
}
