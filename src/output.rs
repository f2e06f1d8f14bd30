//! CLI output formatting for resolver results.
//!
//! # Key-First Display
//!
//! Output is organized around the **setting keys** a user wrote, not the
//! variables they produce. Each applied key leads its line with a positional
//! index (its place in the record), followed by the variables it wrote and
//! the final value. This makes it easy to spot which key won when two keys
//! target the same variable.
//!
//! # Output Format
//!
//! ```text
//! Theme: dark (reads dark_*)
//!
//! Variables
//! 001 light_primary_color → --color-primary = #2563eb
//!     inactive theme (light_*)
//! 002 dark_primary_color → --color-primary = #818cf8
//! 003 dark_card_color → --color-card-bg, --color-surface = #1e293b
//! 004 header_height → --header-height = 80px
//!
//! Derived
//!     Header: transparent
//!     Overlay: rgba(0, 0, 0, 0.8) → rgba(0, 0, 0, 0.32)
//!
//! Ignored
//!     site_name
//! ```
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` for testability and `print_*`
//! wrappers write to stdout. Format functions are pure.

use crate::resolve::{AppliedEntry, ApplyReport};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format one applied entry: index, key, variables, value.
fn entry_line(index: usize, entry: &AppliedEntry) -> String {
    let value = entry.value.as_deref().unwrap_or("(cleared)");
    format!(
        "{} {} → {} = {}",
        format_index(index),
        entry.key,
        entry.variables.join(", "),
        value
    )
}

/// Format the report of one resolver pass.
pub fn format_report(report: &ApplyReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "Theme: {} (reads {}*)",
        report.theme.as_str(),
        report.prefix
    ));

    if !report.applied.is_empty() {
        lines.push(String::new());
        lines.push("Variables".to_string());
        for (i, entry) in report.applied.iter().enumerate() {
            lines.push(entry_line(i + 1, entry));
            if entry.off_theme {
                let family = entry.key.split('_').next().unwrap_or_default();
                lines.push(format!("{}inactive theme ({}_*)", indent(1), family));
            }
        }
    }

    lines.push(String::new());
    lines.push("Derived".to_string());
    let header = if report.header_transparent {
        "transparent"
    } else {
        "stylesheet default"
    };
    lines.push(format!("{}Header: {}", indent(1), header));
    lines.push(format!(
        "{}Overlay: {} → {}",
        indent(1),
        report.overlay.start,
        report.overlay.end
    ));

    if !report.ignored.is_empty() {
        lines.push(String::new());
        lines.push("Ignored".to_string());
        for key in &report.ignored {
            lines.push(format!("{}{}", indent(1), key));
        }
    }

    lines
}

/// Print the report of one resolver pass.
pub fn print_report(report: &ApplyReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}
