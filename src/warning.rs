use std::fmt;
use std::path::PathBuf;

/// Non-fatal anomalies hit while processing the configured files.
/// These are reported to the user but never change the exit status.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipWarning {
    /// A configured manifest or build file does not exist
    FileNotFound { path: PathBuf },
    /// A screenshot named in the store order is missing from the source directory
    ScreenshotMissing { name: String },
}

impl fmt::Display for SkipWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipWarning::FileNotFound { path } => {
                write!(f, "{} not found - skipping.", path.display())
            }
            SkipWarning::ScreenshotMissing { name } => {
                write!(f, "{} not found in source - skipping.", name)
            }
        }
    }
}
