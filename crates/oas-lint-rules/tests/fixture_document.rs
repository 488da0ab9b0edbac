//! Integration test: built-in rules end-to-end via Analyzer.
//!
//! Lints `tests/fixtures/drinks.yaml`, a small API description that breaks
//! each rule a known number of times.

use oas_lint_core::{Analyzer, Config, Document, Severity, Violation};
use oas_lint_rules::{all_rules, Preset};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/drinks.yaml")
}

fn analyze_with(rules: Vec<oas_lint_core::RuleBox>, config: Config) -> Vec<Violation> {
    let mut builder = Analyzer::builder().config(config);
    for rule in rules {
        builder = builder.rule_box(rule);
    }
    let analyzer = builder.build().expect("analyzer should build");
    let document = Document::from_file(&fixture_path()).expect("fixture should load");
    analyzer.analyze(&document)
}

fn count(violations: &[Violation], code: &str) -> usize {
    violations.iter().filter(|v| v.code == code).count()
}

fn paths_for(violations: &[Violation], code: &str) -> Vec<String> {
    violations
        .iter()
        .filter(|v| v.code == code)
        .map(|v| v.path.to_string())
        .collect()
}

// ── Every rule fires where expected ──

#[test]
fn detects_expected_violations_per_rule() {
    let violations = analyze_with(all_rules(), Config::default());

    let expected = [
        ("OAS001", 2),
        ("OAS002", 3),
        ("OAS003", 1),
        ("OAS004", 1),
        ("OAS005", 1),
        ("OAS006", 1),
        ("OAS007", 1),
        ("OAS008", 1),
        ("OAS009", 0),
        ("OAS010", 1),
        ("OAS011", 1),
    ];
    for (code, n) in expected {
        assert_eq!(
            count(&violations, code),
            n,
            "unexpected count for {code}: {:#?}",
            paths_for(&violations, code)
        );
    }
}

#[test]
fn inline_response_schema_details() {
    let violations = analyze_with(all_rules(), Config::default());
    assert_eq!(
        paths_for(&violations, "OAS001"),
        vec![
            "paths./v1/drinks.get.responses.200.content.application/json.schema",
            "paths./v1/drinks/{drink_id}.get.responses.404.content.application/json.schema",
        ]
    );
}

#[test]
fn path_parameter_details() {
    let violations = analyze_with(all_rules(), Config::default());
    let path_parameters: Vec<_> = violations.iter().filter(|v| v.code == "OAS002").collect();

    assert_eq!(
        path_parameters[0].path.to_string(),
        "paths./v1/drinks/{drink_id}.get.parameters.0"
    );
    assert_eq!(path_parameters[0].severity, Severity::Warning);
    assert_eq!(
        path_parameters[1].path.to_string(),
        "paths./v1/drinks/{drink_id}.delete.parameters.0"
    );
    assert_eq!(
        path_parameters[2].message,
        "Operation must include a path parameter with name: menu_id."
    );
    assert_eq!(path_parameters[2].severity, Severity::Error);
}

#[test]
fn violations_carry_source_file() {
    let analyzer = Analyzer::builder()
        .rule_box(Preset::Minimal.rules().remove(0))
        .build()
        .unwrap();
    let result = analyzer.analyze_files(&[fixture_path()]).unwrap();

    assert_eq!(result.documents_checked, 1);
    assert!(result
        .violations
        .iter()
        .all(|v| v.file.as_deref() == Some(fixture_path().as_path())));
}

// ── Configuration ──

#[test]
fn config_disables_rules_and_checks() {
    let config = Config::parse(
        r#"
[rules.inline-response-schema]
severity = "off"

[rules.path-parameters]
duplicate_path_parameter = "off"

[rules.string-boundary]
severity = "error"
"#,
    )
    .unwrap();
    let violations = analyze_with(all_rules(), config);

    assert_eq!(count(&violations, "OAS001"), 0);
    assert_eq!(count(&violations, "OAS002"), 1);
    assert!(violations
        .iter()
        .filter(|v| v.code == "OAS006")
        .all(|v| v.severity == Severity::Error));
}

#[test]
fn strict_preset_promotes_hints_and_infos() {
    let violations = analyze_with(Preset::Strict.rules(), Config::default());
    assert!(violations.iter().all(|v| v.severity >= Severity::Warning));
    assert_eq!(count(&violations, "OAS008"), 1);
}

#[test]
fn minimal_preset_runs_two_rules() {
    let violations = analyze_with(Preset::Minimal.rules(), Config::default());
    assert!(violations
        .iter()
        .all(|v| v.code == "OAS001" || v.code == "OAS002"));
    assert_eq!(violations.len(), 5);
}

// ── Determinism ──

#[test]
fn repeated_runs_are_identical() {
    let first = analyze_with(all_rules(), Config::default());
    let second = analyze_with(all_rules(), Config::default());
    assert_eq!(first, second);
}

#[test]
fn yaml_and_json_forms_lint_the_same() {
    let yaml = std::fs::read_to_string(fixture_path()).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    let json = serde_json::to_string(&value).unwrap();

    let analyzer = all_rules()
        .into_iter()
        .fold(Analyzer::builder(), |b, r| b.rule_box(r))
        .build()
        .unwrap();
    let from_yaml = analyzer.analyze(&Document::parse_yaml(&yaml).unwrap());
    let from_json = analyzer.analyze(&Document::parse_json(&json).unwrap());
    assert_eq!(from_yaml, from_json);
}
