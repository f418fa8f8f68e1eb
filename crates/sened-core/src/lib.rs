// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core types for the Sened document classifier.
//!
//! This crate provides the closed set of document categories, the script
//! labels reported by language detection, and the error type shared by the
//! configuration, classifier, and CLI crates.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{Result, SenedError};
pub use types::{Category, Script};
