//! Gradle `versionName` / `versionCode` substitution.

use regex::{NoExpand, Regex};
use std::sync::OnceLock;

use super::version::ReleaseVersion;

/// Placeholder reported when no `versionName` literal is present.
pub const UNKNOWN_VERSION_NAME: &str = "(unknown)";

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"versionName "(.+?)""#).expect("valid versionName regex"))
}

fn code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"versionCode (\d+)").expect("valid versionCode regex"))
}

/// Result of rewriting a build file.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfigRewrite {
    pub old_name: String,
    pub new_name: String,
    pub old_code: u64,
    pub new_code: u64,
    pub text: String,
}

/// Errors raised while rewriting a build file.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildConfigRewriteError {
    /// The existing `versionCode` does not fit in a u64
    CodeOutOfRange(String),
    /// Incrementing would overflow
    CodeOverflow(u64),
}

/// Replaces every `versionName "..."` with the new version and every
/// `versionCode N` with the first code found plus one (0 + 1 when absent).
///
/// Everything else in `text` is kept byte-for-byte.
pub fn rewrite_build_config(
    text: &str,
    version: &ReleaseVersion,
) -> Result<BuildConfigRewrite, BuildConfigRewriteError> {
    let old_name = name_pattern()
        .captures(text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| UNKNOWN_VERSION_NAME.to_string());

    let old_code = match code_pattern().captures(text) {
        Some(caps) => caps[1]
            .parse::<u64>()
            .map_err(|_| BuildConfigRewriteError::CodeOutOfRange(caps[1].to_string()))?,
        None => 0,
    };
    let new_code = old_code
        .checked_add(1)
        .ok_or(BuildConfigRewriteError::CodeOverflow(old_code))?;

    let name_line = format!("versionName \"{}\"", version);
    let code_line = format!("versionCode {}", new_code);
    let text = name_pattern().replace_all(text, NoExpand(name_line.as_str()));
    let text = code_pattern()
        .replace_all(&text, NoExpand(code_line.as_str()))
        .into_owned();

    Ok(BuildConfigRewrite {
        old_name,
        new_name: version.to_string(),
        old_code,
        new_code,
        text,
    })
}
