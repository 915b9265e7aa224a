//! JSON manifest rewriting.
//!
//! Works on text only: the caller reads the file, hands the content in and
//! writes the returned text back.

use regex::Regex;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::sync::OnceLock;

use super::version::ReleaseVersion;

const DEFAULT_INDENT: &str = "  ";

/// Outcome of rewriting one manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestRewrite {
    /// Previous `version`, `(none)` when the field was absent
    pub old_version: String,
    /// Full new file content, ending in a newline
    pub text: String,
}

/// Errors raised while rewriting a manifest.
#[derive(Debug)]
pub enum ManifestRewriteError {
    Parse(serde_json::Error),
    NotAnObject,
}

fn indent_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?m)^[ \t]+").expect("valid indent regex"))
}

/// Returns the first leading-whitespace run in `text`, or two spaces.
pub fn detect_indent(text: &str) -> &str {
    indent_pattern()
        .find(text)
        .map(|m| m.as_str())
        .unwrap_or(DEFAULT_INDENT)
}

fn describe_version(value: Option<&Value>) -> String {
    match value {
        None => "(none)".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Sets the top-level `version` field of a JSON document.
///
/// Key order, number literals and the indentation of the original text are
/// preserved. Non-ASCII characters are written as-is.
pub fn rewrite_manifest(
    text: &str,
    version: &ReleaseVersion,
) -> Result<ManifestRewrite, ManifestRewriteError> {
    let mut document: Value = serde_json::from_str(text).map_err(ManifestRewriteError::Parse)?;
    let object = document
        .as_object_mut()
        .ok_or(ManifestRewriteError::NotAnObject)?;

    let old_version = describe_version(object.get("version"));
    object.insert(
        "version".to_string(),
        Value::String(version.as_str().to_string()),
    );

    let indent = detect_indent(text);
    let mut buf = Vec::with_capacity(text.len() + 16);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    document
        .serialize(&mut serializer)
        .map_err(ManifestRewriteError::Parse)?;
    buf.push(b'\n');

    // serde_json only emits valid UTF-8
    let text = String::from_utf8_lossy(&buf).into_owned();
    Ok(ManifestRewrite { old_version, text })
}
