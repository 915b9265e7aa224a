//! Screenshot distribution to the docs site and store metadata

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ScreenshotsConfig;
use crate::domain::StoreOrder;
use crate::error::{ReleaseToolsError, Result};
use crate::fs_ops::{copy_with_times, files_identical};
use crate::warning::SkipWarning;

/// Destination of a sync step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTarget {
    /// Docs site, original filenames
    Docs,
    /// Store metadata, numbered filenames
    Store,
}

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncedFile {
    pub target: SyncTarget,
    pub source_name: String,
    pub target_name: String,
    /// `false` when an identical file was already in place
    pub copied: bool,
}

/// Totals for one sync run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    pub docs: Vec<SyncedFile>,
    pub store: Vec<SyncedFile>,
    pub warnings: Vec<SkipWarning>,
}

impl SyncReport {
    /// Store files actually written (unchanged and missing ones excluded)
    pub fn store_synced(&self) -> usize {
        self.store.iter().filter(|f| f.copied).count()
    }

    pub fn docs_synced(&self) -> usize {
        self.docs.iter().filter(|f| f.copied).count()
    }
}

/// Receives progress while a sync runs. All methods default to no-ops.
pub trait SyncProgress {
    fn target_started(&mut self, _target: SyncTarget) {}
    fn file_synced(&mut self, _file: &SyncedFile) {}
    fn skipped(&mut self, _warning: &SkipWarning) {}
}

impl SyncProgress for () {}

/// Copies screenshots from the canonical source directory into the docs and
/// store directories under a repository root.
pub struct ScreenshotSyncer<'a> {
    root: &'a Path,
    config: &'a ScreenshotsConfig,
}

impl<'a> ScreenshotSyncer<'a> {
    pub fn new(root: &'a Path, config: &'a ScreenshotsConfig) -> Self {
        ScreenshotSyncer { root, config }
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.config.source)
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.root.join(&self.config.docs)
    }

    pub fn store_dir(&self) -> PathBuf {
        self.root.join(&self.config.store)
    }

    /// Runs both syncs. Fails before touching any destination when the source
    /// directory is missing.
    pub fn run(&self, progress: &mut impl SyncProgress) -> Result<SyncReport> {
        let source = self.source_dir();
        if !source.is_dir() {
            return Err(ReleaseToolsError::SourceNotFound(source));
        }

        let docs = self.docs_dir();
        let store = self.store_dir();
        fs::create_dir_all(&docs)?;
        fs::create_dir_all(&store)?;

        let mut report = SyncReport::default();

        progress.target_started(SyncTarget::Docs);
        for name in self.source_images()? {
            let file = self.sync_file(SyncTarget::Docs, &source, &name, &docs, &name)?;
            progress.file_synced(&file);
            report.docs.push(file);
        }

        progress.target_started(SyncTarget::Store);
        let order = StoreOrder::new(self.config.store_order.clone(), &self.config.extension);
        for slot in order.slots() {
            if !source.join(slot.source_name).is_file() {
                let warning = SkipWarning::ScreenshotMissing {
                    name: slot.source_name.to_string(),
                };
                progress.skipped(&warning);
                report.warnings.push(warning);
                continue;
            }

            let file = self.sync_file(
                SyncTarget::Store,
                &source,
                slot.source_name,
                &store,
                &slot.target_name,
            )?;
            progress.file_synced(&file);
            report.store.push(file);
        }

        Ok(report)
    }

    /// Sorted names of the regular files ending in `.<extension>`, dot-files included.
    pub fn source_images(&self) -> Result<Vec<String>> {
        let suffix = format!(".{}", self.config.extension);
        let mut names = Vec::new();

        for entry in fs::read_dir(self.source_dir())? {
            let entry = entry?;
            // non-UTF-8 names cannot be listed in the store order anyway
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !name.ends_with(&suffix) || !entry.path().is_file() {
                continue;
            }
            names.push(name);
        }

        names.sort();
        Ok(names)
    }

    fn sync_file(
        &self,
        target: SyncTarget,
        source_dir: &Path,
        source_name: &str,
        dest_dir: &Path,
        target_name: &str,
    ) -> Result<SyncedFile> {
        let src = source_dir.join(source_name);
        let dest = dest_dir.join(target_name);

        let unchanged =
            self.config.skip_unchanged && dest.is_file() && files_identical(&src, &dest)?;
        if !unchanged {
            copy_with_times(&src, &dest)?;
        }

        Ok(SyncedFile {
            target,
            source_name: source_name.to_string(),
            target_name: target_name.to_string(),
            copied: !unchanged,
        })
    }
}
