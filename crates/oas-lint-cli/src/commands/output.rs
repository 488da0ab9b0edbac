//! Shared output formatting for lint results.

use anyhow::Result;
use oas_lint_core::{LintResult, Severity, Violation};

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        print!("{}", render_text(violation));
        println!();
    }

    let counts = result.count_by_severity();
    let summary_color = if counts.errors > 0 {
        "\x1b[31m"
    } else if counts.warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!("{summary_color}{}\x1b[0m", result.summary());
}

fn render_text(violation: &Violation) -> String {
    let severity = violation.severity.to_string();
    let colored = match violation.severity {
        Severity::Error => format!("\x1b[31m{severity}\x1b[0m"),
        Severity::Warning => format!("\x1b[33m{severity}\x1b[0m"),
        Severity::Info => format!("\x1b[34m{severity}\x1b[0m"),
        Severity::Hint => format!("\x1b[36m{severity}\x1b[0m"),
    };
    violation
        .format()
        .replacen(&format!("  {severity}:"), &format!("  {colored}:"), 1)
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}
