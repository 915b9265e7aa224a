use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{ReleaseToolsError, Result};

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("valid version regex"))
}

/// A release version in `major.minor.patch` form.
///
/// Only checked against the pattern; the text is kept verbatim, so `01.2.3`
/// stays `01.2.3` in every file it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    /// Validate a version string (e.g., "1.2.3")
    pub fn parse(input: &str) -> Result<Self> {
        if version_pattern().is_match(input) {
            Ok(ReleaseVersion(input.to_string()))
        } else {
            Err(ReleaseToolsError::InvalidVersionFormat(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
