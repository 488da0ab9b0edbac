//! Check command implementation.

use anyhow::{bail, Context, Result};
use oas_lint_core::{Analyzer, AnalyzerError, Config, RuleBox};
use oas_lint_rules::{all_rules, Preset};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Command-line options of `oas-lint check`.
pub struct CheckOptions {
    /// Documents or glob patterns given on the command line.
    pub files: Vec<String>,
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule names or codes.
    pub rules: Option<String>,
    /// Preset name overriding the config file's.
    pub preset: Option<String>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
    /// Abort on unparsable documents.
    pub fail_on_parse_error: bool,
}

/// Runs the check command.
pub fn run(options: CheckOptions, source: &ConfigSource) -> Result<()> {
    let config = load_config(source)?;
    let fail_on = config.fail_on();

    let rules_to_add = match &options.rules {
        Some(filter) => {
            let names: Vec<&str> = filter.split(',').map(str::trim).collect();
            filter_rules(&names)
        }
        None => {
            let preset_name = options
                .preset
                .as_deref()
                .or(config.preset.as_deref())
                .unwrap_or("recommended");
            let preset: Preset = preset_name.parse().map_err(anyhow::Error::msg)?;
            preset.rules()
        }
    };

    let patterns = if options.files.is_empty() {
        config.analyzer.include.clone()
    } else {
        options.files
    };
    if patterns.is_empty() {
        bail!("No documents to lint. Pass files or set `include` under [analyzer] in the config.");
    }

    let mut builder = Analyzer::builder()
        .config(config)
        .fail_on_parse_error(options.fail_on_parse_error);
    for pattern in options.exclude {
        builder = builder.exclude(pattern);
    }
    for rule in rules_to_add {
        builder = builder.rule_box(rule);
    }
    let analyzer = builder.build().context("Failed to build analyzer")?;

    let files = analyzer
        .discover(&patterns)
        .context("Failed to expand document patterns")?;
    tracing::info!(
        "Linting {} documents with {} rules",
        files.len(),
        analyzer.rule_count()
    );

    let result = match analyzer.analyze_files(&files) {
        Ok(result) => result,
        Err(AnalyzerError::Document(e)) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(2);
        }
        Err(e) => return Err(e).context("Analysis failed"),
    };

    super::output::print(&result, options.format)?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Selects rules by name or code, keeping the order given.
fn filter_rules(names: &[&str]) -> Vec<RuleBox> {
    let mut available = all_rules();
    let mut selected = Vec::new();

    for name in names.iter().filter(|n| !n.is_empty()) {
        match available
            .iter()
            .position(|r| r.name() == *name || r.code().eq_ignore_ascii_case(name))
        {
            Some(index) => selected.push(available.remove(index)),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }

    selected
}
