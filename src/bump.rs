//! Version propagation across manifests and the Android build file
//!
//! [VersionBumper] rewrites the configured files in a fixed order and reports
//! each step to a [BumpProgress] observer as it happens, so the terminal
//! output stays in sync with the files on disk even when a later file fails.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BumpConfig;
use crate::domain::{
    rewrite_build_config, rewrite_manifest, BuildConfigRewriteError, ManifestRewriteError,
    ReleaseVersion,
};
use crate::error::{ReleaseToolsError, Result};
use crate::warning::SkipWarning;

/// Phases of a bump, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpStage {
    Manifests,
    BuildConfig,
}

/// A manifest whose `version` field was rewritten
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestUpdate {
    /// Path relative to the repository root
    pub path: PathBuf,
    pub old_version: String,
    pub new_version: String,
}

/// The build file after `versionName` / `versionCode` were rewritten
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfigUpdate {
    /// Path relative to the repository root
    pub path: PathBuf,
    pub old_name: String,
    pub new_name: String,
    pub old_code: u64,
    pub new_code: u64,
}

/// Everything a completed bump touched or skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpReport {
    pub version: ReleaseVersion,
    pub manifests: Vec<ManifestUpdate>,
    pub build_config: Option<BuildConfigUpdate>,
    pub warnings: Vec<SkipWarning>,
}

/// Receives progress while a bump runs. All methods default to no-ops.
pub trait BumpProgress {
    fn stage(&mut self, _stage: BumpStage) {}
    fn manifest_updated(&mut self, _update: &ManifestUpdate) {}
    fn build_config_updated(&mut self, _update: &BuildConfigUpdate) {}
    fn skipped(&mut self, _warning: &SkipWarning) {}
}

impl BumpProgress for () {}

/// Rewrites version fields under a repository root.
pub struct VersionBumper<'a> {
    root: &'a Path,
    config: &'a BumpConfig,
}

impl<'a> VersionBumper<'a> {
    pub fn new(root: &'a Path, config: &'a BumpConfig) -> Self {
        VersionBumper { root, config }
    }

    /// Runs the full bump: every manifest in list order, then the build file.
    ///
    /// Missing files are skipped with a warning. The first hard failure stops
    /// the run; files written before it stay written.
    pub fn run(
        &self,
        version: &ReleaseVersion,
        progress: &mut impl BumpProgress,
    ) -> Result<BumpReport> {
        let mut report = BumpReport {
            version: version.clone(),
            manifests: Vec::new(),
            build_config: None,
            warnings: Vec::new(),
        };

        progress.stage(BumpStage::Manifests);
        for manifest in &self.config.manifests {
            match self.update_manifest(manifest, version)? {
                Ok(update) => {
                    progress.manifest_updated(&update);
                    report.manifests.push(update);
                }
                Err(warning) => {
                    progress.skipped(&warning);
                    report.warnings.push(warning);
                }
            }
        }

        progress.stage(BumpStage::BuildConfig);
        match self.update_build_config(version)? {
            Ok(update) => {
                progress.build_config_updated(&update);
                report.build_config = Some(update);
            }
            Err(warning) => {
                progress.skipped(&warning);
                report.warnings.push(warning);
            }
        }

        Ok(report)
    }

    /// Sets `version` in one manifest. The inner `Err` is a skip, not a failure.
    pub fn update_manifest(
        &self,
        manifest: &Path,
        version: &ReleaseVersion,
    ) -> Result<std::result::Result<ManifestUpdate, SkipWarning>> {
        let path = self.root.join(manifest);
        if !path.is_file() {
            return Ok(Err(SkipWarning::FileNotFound { path }));
        }

        let display = self.display_path(&path);
        let text = fs::read_to_string(&path)?;
        let rewrite = rewrite_manifest(&text, version).map_err(|e| match e {
            ManifestRewriteError::Parse(source) => ReleaseToolsError::ManifestParse {
                path: display.clone(),
                source,
            },
            ManifestRewriteError::NotAnObject => ReleaseToolsError::manifest(format!(
                "{}: top-level JSON value is not an object",
                display.display()
            )),
        })?;
        fs::write(&path, rewrite.text)?;

        Ok(Ok(ManifestUpdate {
            path: display,
            old_version: rewrite.old_version,
            new_version: version.to_string(),
        }))
    }

    /// Sets `versionName` and increments `versionCode` in the build file.
    pub fn update_build_config(
        &self,
        version: &ReleaseVersion,
    ) -> Result<std::result::Result<BuildConfigUpdate, SkipWarning>> {
        let path = self.root.join(&self.config.build_config);
        if !path.is_file() {
            return Ok(Err(SkipWarning::FileNotFound { path }));
        }

        let display = self.display_path(&path);
        let text = fs::read_to_string(&path)?;
        let rewrite = rewrite_build_config(&text, version).map_err(|e| {
            let reason = match e {
                BuildConfigRewriteError::CodeOutOfRange(code) => {
                    format!("versionCode {} is out of range", code)
                }
                BuildConfigRewriteError::CodeOverflow(code) => {
                    format!("versionCode {} cannot be incremented", code)
                }
            };
            ReleaseToolsError::build_config(format!("{}: {}", display.display(), reason))
        })?;
        fs::write(&path, &rewrite.text)?;

        Ok(Ok(BuildConfigUpdate {
            path: display,
            old_name: rewrite.old_name,
            new_name: rewrite.new_name,
            old_code: rewrite.old_code,
            new_code: rewrite.new_code,
        }))
    }

    fn display_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
