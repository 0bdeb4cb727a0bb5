// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, default_build_dir};
use crate::core::fixer::fix_build;
use crate::models::Policy;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Build directory to fix (defaults to ../data next to the executable)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Config file (defaults to ./unhash.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep going after a failed rename or rewrite and report every failure at the end
    #[arg(short, long)]
    pub keep_going: bool,

    /// Show what would be renamed and rewritten without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolves flags over the config file and runs one pass over the build
/// directory.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be loaded
/// * The build directory cannot be located or walked
/// * A rename or HTML rewrite fails (first failure under fail-fast, a
///   summary of all of them under `--keep-going`)
pub fn run(args: Args) -> Result<()> {
    let config = Config::discover(args.config.as_deref())?;

    let directory = match args.directory.or_else(|| config.directory.clone()) {
        Some(directory) => directory,
        None => default_build_dir()?,
    };

    let mut options = config.fix_options();
    if args.keep_going {
        options.policy = Policy::BestEffort;
    }
    if args.dry_run {
        options.dry_run = true;
    }

    tracing::debug!(directory = %directory.display(), ?options, "fixing build directory");
    let report = fix_build(&directory, &options)
        .with_context(|| format!("Failed to fix build directory: {}", directory.display()))?;

    if !report.is_success() {
        for failure in &report.failures {
            eprintln!("error: {failure}");
        }
        bail!(
            "{} of {} files could not be fixed in {}",
            report.failures.len(),
            report.files_scanned,
            directory.display()
        );
    }

    Ok(())
}
