//! Config validation.
//!
//! Every [`ValidationRule`] gets to inspect the whole [`ConfigSpec`] and file
//! its findings into one [`ValidationReport`], so a bad config reports all of
//! its problems in one pass instead of one per run.
//!
//! ```rust,ignore
//! use rapid_summarizer::pipeline::validation::ValidationEngine;
//!
//! let report = ValidationEngine::with_defaults().validate(&spec);
//! for issue in report.errors() {
//!     eprintln!("{issue}");
//! }
//! report.into_result()?;
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::diagnostics::{ConfigIssue, ErrorCode};
use super::spec::{ConfigSpec, CONFIG_VERSION};
use crate::errors::{Result, SummarizeError};
use crate::logging;

/// How serious a finding is. Errors reject the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// Findings from one validation pass, split by severity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    errors: Vec<ConfigIssue>,
    warnings: Vec<ConfigIssue>,
}

impl ValidationReport {
    pub fn push(&mut self, severity: Severity, issue: ConfigIssue) {
        match severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }

    pub fn error(&mut self, issue: ConfigIssue) {
        self.push(Severity::Error, issue);
    }

    pub fn warning(&mut self, issue: ConfigIssue) {
        self.push(Severity::Warning, issue);
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.errors.iter()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.warnings.iter()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Warnings alone still leave the config usable.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `Err(SummarizeError::Config)` listing every error, or `Ok` if there
    /// are none.
    pub fn into_result(self) -> Result<()> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let joined: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        Err(SummarizeError::Config(joined.join("; ")))
    }
}

/// One check over a parsed config.
pub trait ValidationRule: Send + Sync {
    /// Stable identifier, e.g. `"version"`
    fn name(&self) -> &str;

    fn check(&self, spec: &ConfigSpec, report: &mut ValidationReport);
}

/// Ordered set of rules
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// An engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Version, stop-word, log-level and unknown-field checks.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(ExtraStopwordsRule));
        engine.add_rule(Box::new(LogLevelRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn validate(&self, spec: &ConfigSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            rule.check(spec, &mut report);
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn check(&self, spec: &ConfigSpec, report: &mut ValidationReport) {
        if spec.v != CONFIG_VERSION {
            report.error(
                ConfigIssue::new(
                    ErrorCode::UnsupportedVersion,
                    "/v",
                    format!("config version {} is not supported", spec.v),
                )
                .with_hint(format!("Set \"v\": {CONFIG_VERSION}")),
            );
        }
    }
}

/// Extra stop words must be single, non-blank words. Case-insensitive
/// repeats only warn.
struct ExtraStopwordsRule;

impl ValidationRule for ExtraStopwordsRule {
    fn name(&self) -> &str {
        "extra_stopwords"
    }

    fn check(&self, spec: &ConfigSpec, report: &mut ValidationReport) {
        let mut first_seen: HashMap<String, usize> = HashMap::new();

        for (i, word) in spec.stopwords.extra.iter().enumerate() {
            let path = format!("/stopwords/extra/{i}");
            let words = word.split_whitespace().count();

            if words == 0 {
                report.error(
                    ConfigIssue::new(ErrorCode::InvalidStopword, path, "stop word is empty")
                        .with_hint("Remove the empty entry"),
                );
            } else if words > 1 {
                report.error(
                    ConfigIssue::new(
                        ErrorCode::InvalidStopword,
                        path,
                        format!("\"{word}\" contains whitespace; stop words match single words"),
                    )
                    .with_hint("Split it into separate entries"),
                );
            } else if let Some(first) = first_seen.insert(word.to_lowercase(), i) {
                report.warning(ConfigIssue::new(
                    ErrorCode::InvalidStopword,
                    path,
                    format!("\"{word}\" duplicates entry {first}"),
                ));
            }
        }
    }
}

struct LogLevelRule;

impl ValidationRule for LogLevelRule {
    fn name(&self) -> &str {
        "log_level"
    }

    fn check(&self, spec: &ConfigSpec, report: &mut ValidationReport) {
        let level = &spec.logging.level;
        if !logging::is_valid_level(level) {
            report.error(
                ConfigIssue::new(
                    ErrorCode::InvalidValue,
                    "/logging/level",
                    format!("\"{level}\" is not a valid log filter"),
                )
                .with_hint("Use a level such as \"info\" or a directive like \"rapid_summarizer=debug\""),
            );
        }
    }
}

/// Fields serde did not recognize. Errors under `strict`, warnings otherwise.
struct UnknownFieldsRule;

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn check(&self, spec: &ConfigSpec, report: &mut ValidationReport) {
        let severity = if spec.strict {
            Severity::Error
        } else {
            Severity::Warning
        };
        let sections = [
            ("", &spec.unknown_fields),
            ("/stopwords", &spec.stopwords.unknown_fields),
            ("/export", &spec.export.unknown_fields),
            ("/logging", &spec.logging.unknown_fields),
        ];

        for (section, fields) in sections {
            let mut keys: Vec<&String> = fields.keys().collect();
            keys.sort();
            for key in keys {
                report.push(
                    severity,
                    ConfigIssue::new(
                        ErrorCode::UnknownField,
                        format!("{section}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                );
            }
        }
    }
}
