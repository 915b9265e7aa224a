use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseToolsError, Result};

/// File name of the repository-level configuration.
pub const CONFIG_FILE_NAME: &str = "release-tools.toml";

/// Represents the complete configuration for release-tools.
///
/// Every path is relative to the repository root. Missing sections fall back to
/// the layout of the mobile monorepo these tools were written for.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub bump: BumpConfig,

    #[serde(default)]
    pub screenshots: ScreenshotsConfig,
}

/// Returns the default list of JSON manifests carrying a `version` field.
fn default_manifests() -> Vec<PathBuf> {
    vec![
        PathBuf::from("package.json"),
        PathBuf::from("apps/mobile/package.json"),
        PathBuf::from("apps/docs/package.json"),
        PathBuf::from("packages/shared/package.json"),
    ]
}

fn default_build_config() -> PathBuf {
    PathBuf::from("apps/mobile/android/app/build.gradle")
}

/// Files rewritten by `bump-version`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BumpConfig {
    #[serde(default = "default_manifests")]
    pub manifests: Vec<PathBuf>,

    #[serde(default = "default_build_config")]
    pub build_config: PathBuf,
}

impl Default for BumpConfig {
    fn default() -> Self {
        BumpConfig {
            manifests: default_manifests(),
            build_config: default_build_config(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from("screenshots/mobile/original")
}

fn default_docs() -> PathBuf {
    PathBuf::from("apps/docs/static/img/screenshots")
}

fn default_store() -> PathBuf {
    PathBuf::from(
        "apps/mobile/android/app/fastlane/metadata/android/en-US/images/phoneScreenshots",
    )
}

fn default_extension() -> String {
    "png".to_string()
}

fn default_skip_unchanged() -> bool {
    true
}

/// Returns the default store ordering, position 1 first.
fn default_store_order() -> Vec<String> {
    vec![
        "Dashboard.png".to_string(),
        "LocationHistory.png".to_string(),
        "TripDetails.png".to_string(),
        "Trips.png".to_string(),
        "Settings.png".to_string(),
        "TrackingProfiles.png".to_string(),
        "Authentication.png".to_string(),
        "DarkMode.png".to_string(),
    ]
}

/// Directories and ordering used by `sync-screenshots`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScreenshotsConfig {
    #[serde(default = "default_source")]
    pub source: PathBuf,

    #[serde(default = "default_docs")]
    pub docs: PathBuf,

    #[serde(default = "default_store")]
    pub store: PathBuf,

    /// Image extension without the leading dot, matched case-sensitively.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Skip copies whose destination already holds identical bytes.
    #[serde(default = "default_skip_unchanged")]
    pub skip_unchanged: bool,

    #[serde(default = "default_store_order")]
    pub store_order: Vec<String>,
}

impl Default for ScreenshotsConfig {
    fn default() -> Self {
        ScreenshotsConfig {
            source: default_source(),
            docs: default_docs(),
            store: default_store(),
            extension: default_extension(),
            skip_unchanged: default_skip_unchanged(),
            store_order: default_store_order(),
        }
    }
}

/// Finds the repository root starting from `start`.
///
/// Walks up the ancestors of `start` and returns the first directory holding a
/// `release-tools.toml`. Failing that, the first directory holding `.git`.
/// Falls back to `start` itself.
pub fn discover_root(start: &Path) -> PathBuf {
    if let Some(dir) = start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE_NAME).is_file())
    {
        return dir.to_path_buf();
    }

    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .unwrap_or(start)
        .to_path_buf()
}

/// Loads configuration for the repository at `root`.
///
/// Reads `<root>/release-tools.toml` when present and returns the defaults
/// otherwise.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If the file exists but cannot be read or parsed
pub fn load_config(root: &Path) -> Result<Config> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(&path)?;
    toml::from_str(&config_str)
        .map_err(|e| ReleaseToolsError::config(format!("{}: {}", path.display(), e)))
}
