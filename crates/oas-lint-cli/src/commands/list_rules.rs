//! List rules command implementation.

use oas_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<30} {:<9} Description", "Code", "Name", "Severity");
    println!("{}", "-".repeat(100));

    for rule in all_rules() {
        println!(
            "{:<8} {:<30} {:<9} {}",
            rule.code(),
            rule.name(),
            rule.default_severity(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  recommended  - All rules at their default severity (default)");
    println!("  strict       - All rules, hints and infos reported as warnings");
    println!("  minimal      - OAS001, OAS002 (for gradual adoption)");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  oas-lint check openapi.yaml --rules inline-response-schema,path-parameters");
    println!("  oas-lint check 'specs/**/*.yaml' --rules OAS001,OAS002");
}
