// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Turns Figment extraction failures into miette diagnostics that point at
//! the offending key in `sened.toml` and suggest the closest valid key or
//! category name by Jaro-Winkler similarity.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity for a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with rich diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// A key not present in the model.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(sened::config::unknown_key),
        help("{}", format_choices_help(suggestion.as_deref(), "valid keys", valid))
    )]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
        valid: String,
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// An enum value outside the accepted set, e.g. an unknown category.
    #[error("unknown value `{value}` for `{key}`")]
    #[diagnostic(
        code(sened::config::unknown_value),
        help("{}", format_choices_help(suggestion.as_deref(), "accepted values", valid))
    )]
    UnknownValue {
        key: String,
        value: String,
        suggestion: Option<String>,
        valid: String,
    },

    /// A value of the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(sened::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        detail: String,
        expected: String,
    },

    /// A required key is absent.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(sened::config::missing_key),
        help("add `{key} = <value>` to your sened.toml")
    )]
    MissingKey { key: String },

    /// A value that parsed but is out of range.
    #[error("validation error: {message}")]
    #[diagnostic(code(sened::config::validation))]
    Validation { message: String },

    /// Anything else Figment reports (unreadable file, TOML syntax).
    #[error("configuration error: {0}")]
    #[diagnostic(code(sened::config::other))]
    Other(String),
}

fn format_choices_help(suggestion: Option<&str>, what: &str, valid: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? {what}: {valid}"),
        None => format!("{what}: {valid}"),
    }
}

/// Convert a `figment::Error` (which may hold several errors) into diagnostics.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| {
            let dotted = error.path.join(".");
            match &error.kind {
                Kind::UnknownField(field, expected) => {
                    let (span, src) = find_source_span(&error, field, toml_sources);
                    ConfigError::UnknownKey {
                        key: qualify(&dotted, field),
                        suggestion: suggest_key(field, expected),
                        valid: expected.join(", "),
                        span,
                        src,
                    }
                }
                Kind::UnknownVariant(value, expected) => ConfigError::UnknownValue {
                    key: dotted,
                    value: value.clone(),
                    suggestion: suggest_key(value, expected),
                    valid: expected.join(", "),
                },
                Kind::MissingField(field) => ConfigError::MissingKey {
                    key: qualify(&dotted, field),
                },
                Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                    key: dotted,
                    detail: format!("found {actual}, expected {expected}"),
                    expected: expected.to_string(),
                },
                _ => ConfigError::Other(error.to_string()),
            }
        })
        .collect()
}

/// Join a dotted section path and a field name, unless the path already ends with it.
fn qualify(section: &str, field: &str) -> String {
    if section.is_empty() {
        field.to_string()
    } else if section.rsplit('.').next() == Some(field) {
        section.to_string()
    } else {
        format!("{section}.{field}")
    }
}

/// Locate an unknown key inside the TOML file Figment attributed it to.
fn find_source_span(
    error: &figment::error::Error,
    field: &str,
    toml_sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let origin = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .map(|source| match source {
            figment::Source::File(path) => path.display().to_string(),
            _ => "<inline>".to_string(),
        });

    let Some(origin) = origin else {
        return (None, None);
    };
    let Some((name, content)) = toml_sources.iter().find(|(p, _)| *p == origin) else {
        return (None, None);
    };

    // Array indices ("rules", "0") are not part of the table header.
    let section: Vec<&str> = error
        .path
        .iter()
        .map(String::as_str)
        .filter(|s| *s != field && s.parse::<usize>().is_err())
        .collect();

    match find_key_offset(content, &section, field) {
        Some(offset) => (
            Some(SourceSpan::new(offset.into(), field.len())),
            Some(NamedSource::new(name, content.clone())),
        ),
        None => (None, None),
    }
}

/// Byte offset of `field` as a key, searched after the `[section]` or
/// `[[section]]` header named by `path`. An empty path searches from the top.
pub fn find_key_offset(content: &str, path: &[&str], field: &str) -> Option<usize> {
    let start = if path.is_empty() {
        0
    } else {
        let name = path.join(".");
        let table = format!("[{name}]");
        let array = format!("[[{name}]]");
        content
            .find(&array)
            .map(|pos| pos + array.len())
            .or_else(|| content.find(&table).map(|pos| pos + table.len()))?
    };

    let mut offset = start;
    for line in content[start..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        let is_key = trimmed
            .strip_prefix(field)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_key {
            return Some(offset + (line.len() - trimmed.len()));
        }
        offset += line.len();
    }
    None
}

/// Closest candidate above [`SUGGESTION_THRESHOLD`], if any.
pub fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|c| (strsim::jaro_winkler(unknown, c), *c))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, c)| c.to_string())
}

/// Render diagnostics to stderr with miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = miette::GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        match handler.render_report(&mut buf, error as &dyn Diagnostic) {
            Ok(()) => eprint!("{buf}"),
            Err(_) => eprintln!("Error: {error}"),
        }
    }
}
