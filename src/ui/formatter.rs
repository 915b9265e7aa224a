//! Pure formatting functions for terminal output.
//!
//! Progress goes to stdout, errors and warnings to stderr. `console` drops the
//! styling on its own when the stream is not a terminal.

use console::style;

use crate::bump::{BuildConfigUpdate, ManifestUpdate};
use crate::screenshots::{SyncTarget, SyncedFile};
use crate::warning::SkipWarning;

const RULE: &str = "================================";

/// Formats an error line: red `ERROR:` prefix followed by the message.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a skip warning, indented under the current section.
pub fn display_warning(warning: &SkipWarning) {
    eprintln!("  {} {}", style("Warning:").yellow(), warning);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a bold title followed by the rule line.
pub fn display_banner(title: &str) {
    println!();
    println!("{}", style(title).bold());
    println!("{}", RULE);
    println!();
}

/// Print the closing rule.
pub fn display_rule() {
    println!();
    println!("{}", RULE);
}

/// Print a section heading such as `Updating package.json files:`.
pub fn display_section(heading: &str) {
    println!("{}", style(heading).underlined());
}

/// `  apps/docs/package.json: 1.0.0 -> 1.1.0`
pub fn display_manifest_update(update: &ManifestUpdate) {
    println!(
        "  {}: {} -> {}",
        update.path.display(),
        style(&update.old_version).red(),
        style(&update.new_version).green()
    );
}

/// Path line followed by the name and code transitions.
pub fn display_build_config_update(update: &BuildConfigUpdate) {
    println!("  {}:", update.path.display());
    println!(
        "    versionName: \"{}\" -> \"{}\"",
        style(&update.old_name).red(),
        style(&update.new_name).green()
    );
    println!(
        "    versionCode: {} -> {}",
        style(update.old_code).red(),
        style(update.new_code).green()
    );
}

/// Formats the progress line for one synced screenshot (without indentation).
pub fn format_synced_file(file: &SyncedFile) -> String {
    let mapping = match file.target {
        SyncTarget::Docs if file.copied => format!("{} -> docs", file.source_name),
        SyncTarget::Docs => file.source_name.clone(),
        SyncTarget::Store => format!("{} -> {}", file.source_name, file.target_name),
    };

    if file.copied {
        mapping
    } else {
        format!("{} (unchanged)", mapping)
    }
}

pub fn display_synced_file(file: &SyncedFile) {
    let line = format_synced_file(file);
    if file.copied {
        println!("  {}", line);
    } else {
        println!("  {}", style(line).dim());
    }
}
