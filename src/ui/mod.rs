//! User interface module - progress reporting and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Progress observers that drive the formatter while a workflow runs

use crate::bump::{BuildConfigUpdate, BumpProgress, BumpStage, ManifestUpdate};
use crate::screenshots::{SyncProgress, SyncTarget, SyncedFile};
use crate::warning::SkipWarning;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_banner, display_build_config_update, display_error, display_manifest_update,
    display_rule, display_section, display_success, display_synced_file, display_warning,
};

/// Prints bump progress as each file is rewritten.
pub struct ConsoleBumpProgress {
    build_config_label: String,
    sections: usize,
}

impl ConsoleBumpProgress {
    /// `build_config_label` names the build file in its section heading
    /// (e.g., "build.gradle").
    pub fn new(build_config_label: impl Into<String>) -> Self {
        ConsoleBumpProgress {
            build_config_label: build_config_label.into(),
            sections: 0,
        }
    }
}

impl BumpProgress for ConsoleBumpProgress {
    fn stage(&mut self, stage: BumpStage) {
        if self.sections > 0 {
            println!();
        }
        self.sections += 1;
        match stage {
            BumpStage::Manifests => display_section("Updating package.json files:"),
            BumpStage::BuildConfig => {
                display_section(&format!("Updating {}:", self.build_config_label))
            }
        }
    }

    fn manifest_updated(&mut self, update: &ManifestUpdate) {
        display_manifest_update(update);
    }

    fn build_config_updated(&mut self, update: &BuildConfigUpdate) {
        display_build_config_update(update);
    }

    fn skipped(&mut self, warning: &SkipWarning) {
        display_warning(warning);
    }
}

/// Prints sync progress as each screenshot is handled.
#[derive(Default)]
pub struct ConsoleSyncProgress {
    sections: usize,
}

impl SyncProgress for ConsoleSyncProgress {
    fn target_started(&mut self, target: SyncTarget) {
        if self.sections > 0 {
            println!();
        }
        self.sections += 1;
        match target {
            SyncTarget::Docs => display_section("Docs (named):"),
            SyncTarget::Store => display_section("Fastlane (numbered):"),
        }
    }

    fn file_synced(&mut self, file: &SyncedFile) {
        display_synced_file(file);
    }

    fn skipped(&mut self, warning: &SkipWarning) {
        display_warning(warning);
    }
}
