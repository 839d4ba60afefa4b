//! Report rendering for the terminal

use plugcheck_types::{EntryKind, Finding, Report};
use std::fmt::Write;

/// Human-readable report: counts, warnings, errors, verdict
pub fn render_human(report: &Report) -> String {
    let mut out = String::new();

    let name = report.plugin_name.as_deref().unwrap_or("(unknown)");
    let _ = writeln!(out, "Plugin: {name}");
    for kind in EntryKind::ALL {
        let label = format!("{}:", kind.directory());
        let _ = writeln!(out, "  {label:<10}{}", report.counts.get(kind));
    }

    render_block(&mut out, "Warnings", &report.warnings);
    render_block(&mut out, "Errors", &report.errors);

    out.push('\n');
    if report.has_errors() {
        let _ = writeln!(
            out,
            "Validation failed with {} error(s)",
            report.errors.len()
        );
    } else if report.warnings.is_empty() {
        out.push_str("Validation passed\n");
    } else {
        let _ = writeln!(
            out,
            "Validation passed with {} warning(s)",
            report.warnings.len()
        );
    }

    out
}

fn render_block(out: &mut String, title: &str, findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title} ({}):", findings.len());
    for finding in findings {
        let _ = writeln!(out, "  - {finding}");
    }
}

/// Machine-readable report
pub fn render_json(report: &Report) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
