// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Sened document classifier.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Category;

/// The primary error type used across the Sened workspace.
///
/// Classification itself never surfaces these to callers; they are produced
/// while building rule tables, loading configuration, and reading input.
#[derive(Debug, Error)]
pub enum SenedError {
    /// Configuration errors (invalid TOML, out-of-range thresholds).
    #[error("configuration error: {0}")]
    Config(String),

    /// A rule pattern failed to compile.
    #[error("invalid pattern for {category}: `{pattern}`: {source}")]
    InvalidPattern {
        category: Category,
        pattern: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A rule weight is zero, negative, or not a finite number.
    #[error("invalid weight {weight} for {category} pattern `{pattern}` (must be positive)")]
    InvalidWeight {
        category: Category,
        pattern: String,
        weight: f64,
    },

    /// Reading input text failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SenedError {
    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::InvalidPattern { .. } | Self::InvalidWeight { .. } => 3,
            Self::Io { .. } => 4,
            Self::Internal(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SenedError>;
