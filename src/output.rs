//! CLI output formatting for batch results.
//!
//! Information-first: each item leads with its outcome marker and name, with
//! dimensions and the written format (or the error) as trailing context.
//!
//! ```text
//! ok    logo.png (64x64, image/png)
//! ok    logo-sm.jpg (32x32, image/jpeg)
//! FAIL  banner.gif (120x40): JPEG encoder rejected the buffer: ...
//!
//! 2 replicated, 1 failed
//! ```

use crate::types::BatchReport;

/// Format a batch report as display lines.
pub fn format_report(report: &BatchReport) -> Vec<String> {
    let mut lines = Vec::new();

    for item in &report.items {
        if item.ok {
            lines.push(format!(
                "ok    {} ({}x{}, {})",
                item.name,
                item.width,
                item.height,
                item.format.unwrap_or("?"),
            ));
        } else {
            lines.push(format!(
                "FAIL  {} ({}x{}): {}",
                item.name,
                item.width,
                item.height,
                item.error.as_deref().unwrap_or("unknown error"),
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} replicated, {} failed",
        report.succeeded, report.failed
    ));

    if report.all_failed() {
        lines.push("warning: no replicas were produced; the archive is empty".to_string());
    }

    lines
}

/// Print a batch report to stdout.
pub fn print_report(report: &BatchReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}
