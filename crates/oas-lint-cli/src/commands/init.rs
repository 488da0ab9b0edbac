//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# oas-lint configuration

# Rule preset: "recommended", "strict" or "minimal"
preset = "recommended"

# Exit with status 1 when a violation at or above this severity is found
fail_on = "error"

[analyzer]
# Documents to lint when none are given on the command line
include = ["openapi.yaml"]

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/generated/**",
]

# Rule configurations
# severity = "error" | "warning" | "info" | "hint" | "off"

[rules.inline-response-schema]
severity = "warning"

[rules.path-parameters]
missing_path_parameter = "error"
duplicate_path_parameter = "warning"

# [rules.string-boundary]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("oas-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created oas-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit oas-lint.toml to point `include` at your documents");
    println!("  2. Run: oas-lint check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oas_lint_core::{Config, Level, Severity};

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.preset.as_deref(), Some("recommended"));
        assert_eq!(config.fail_on(), Severity::Error);
        assert_eq!(
            config
                .rule_config("path-parameters")
                .and_then(|c| c.check_level("duplicate_path_parameter")),
            Some(Level::Warning)
        );
        assert!(config.is_rule_enabled("string-boundary"));
    }
}
