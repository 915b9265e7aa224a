//! Workflow orchestration for both binaries
//!
//! Keeps argument parsing in the binaries and business logic here, so the
//! workflows can be driven programmatically (and from tests) without clap.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::bump::{BumpReport, VersionBumper};
use crate::config::{discover_root, load_config};
use crate::domain::ReleaseVersion;
use crate::screenshots::{ScreenshotSyncer, SyncReport};
use crate::ui::{self, ConsoleBumpProgress, ConsoleSyncProgress};

/// Arguments for the bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Version exactly as typed on the command line
    pub version: String,

    /// Repository root; discovered from the working directory when `None`
    pub root: Option<PathBuf>,
}

/// Arguments for the screenshot sync workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SyncWorkflowArgs {
    /// Repository root; discovered from the working directory when `None`
    pub root: Option<PathBuf>,
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Ok(discover_root(&cwd))
        }
    }
}

/// Bump workflow
///
/// 1. Validate the version (nothing is read or written if this fails)
/// 2. Locate the repository root and load its configuration
/// 3. Rewrite every manifest, then the build file, printing progress as it goes
///
/// # Returns
///
/// The report of everything updated or skipped, or the first fatal error
pub fn run_bump_workflow(args: BumpWorkflowArgs) -> Result<BumpReport> {
    let version = ReleaseVersion::parse(&args.version)?;
    let root = resolve_root(args.root)?;
    let config = load_config(&root)?;

    ui::display_banner(&format!("Bumping version to {}", version));

    let label = build_config_label(&config.bump.build_config);
    let mut progress = ConsoleBumpProgress::new(label);
    let report = VersionBumper::new(&root, &config.bump).run(&version, &mut progress)?;

    ui::display_rule();
    ui::display_success(&format!("Done. Version bumped to {}.", version));
    println!("No git commits or tags were created.");
    println!();

    Ok(report)
}

/// Screenshot sync workflow
///
/// Fails with `SourceNotFound` before any destination directory is created.
pub fn run_sync_workflow(args: SyncWorkflowArgs) -> Result<SyncReport> {
    let root = resolve_root(args.root)?;
    let config = load_config(&root)?;
    let syncer = ScreenshotSyncer::new(&root, &config.screenshots);

    ui::display_banner("Syncing screenshots");

    let mut progress = ConsoleSyncProgress::default();
    let report = syncer.run(&mut progress)?;

    ui::display_rule();
    ui::display_success(&format!(
        "Done. {} screenshots synced.",
        report.store_synced()
    ));
    println!();

    Ok(report)
}

fn build_config_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
