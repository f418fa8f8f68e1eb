// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sened - Amharic and English document classifier.
//!
//! This is the binary entry point for the `sened` command-line tool.

mod categories;
mod classify;
mod input;
mod self_test;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sened_classifier::DocumentClassifier;
use sened_config::SenedConfig;
use sened_core::SenedError;

/// Sened - classify Amharic and English document text.
#[derive(Parser, Debug)]
#[command(name = "sened", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default hierarchy.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a text file (or stdin) into a document category.
    Classify {
        /// Input file; `-` or omitted reads stdin.
        path: Option<PathBuf>,
        /// Print the full result as JSON.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Show script statistics and classification for a text.
    Analyze {
        /// Input file; `-` or omitted reads stdin.
        path: Option<PathBuf>,
        /// Print the analysis as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List document categories and their rule counts.
    Categories {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Classify the builtin sample documents and report accuracy.
    SelfTest {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => sened_config::load_and_validate_path(path),
        None => sened_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            sened_config::render_errors(&errors);
            let err = SenedError::Config(format!("{} invalid setting(s)", errors.len()));
            eprintln!("sened: {err}");
            std::process::exit(err.exit_code());
        }
    };

    init_tracing(&config.logging.level);

    if let Err(e) = run(cli.command, &config) {
        eprintln!("sened: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(command: Commands, config: &SenedConfig) -> Result<(), SenedError> {
    let classifier = DocumentClassifier::from_config(&config.classifier);
    let max_chars = config.input.max_chars;

    match command {
        Commands::Classify { path, json, plain } => {
            let text = input::read_input(path.as_deref(), max_chars)?;
            classify::run_classify(&classifier, &text, json, plain)
        }
        Commands::Analyze { path, json } => {
            let text = input::read_input(path.as_deref(), max_chars)?;
            classify::run_analyze(&classifier, &text, json)
        }
        Commands::Categories { json } => categories::run_categories(&classifier, json),
        Commands::SelfTest { plain } => self_test::run_self_test_command(&classifier, plain),
    }
}

/// Log to stderr; `RUST_LOG` overrides the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "sened={log_level},sened_classifier={log_level},sened_config={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_classify_with_flags() {
        let cli = Cli::try_parse_from(["sened", "classify", "doc.txt", "--json", "--plain"]).unwrap();
        match cli.command {
            Commands::Classify { path, json, plain } => {
                assert_eq!(path, Some(PathBuf::from("doc.txt")));
                assert!(json);
                assert!(plain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["sened", "self-test", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Commands::SelfTest { plain: false }));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["sened"]).is_err());
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = sened_config::load_and_validate_str("").expect("default config should be valid");
        assert_eq!(config.logging.level, "info");
        assert!(run(Commands::Categories { json: true }, &config).is_ok());
    }
}
