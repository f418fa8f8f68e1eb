// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reading document text from a file or stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use sened_core::SenedError;
use tracing::{debug, warn};

/// Where the text comes from. `None` or `-` means stdin.
pub fn read_input(path: Option<&Path>, max_chars: usize) -> Result<String, SenedError> {
    let text = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p).map_err(|source| {
            SenedError::Io {
                path: p.to_path_buf(),
                source,
            }
        })?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| SenedError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            buf
        }
    };
    debug!(bytes = text.len(), "input read");
    Ok(truncate_chars(text, max_chars))
}

/// Keep at most `max_chars` characters.
pub fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some((cut, _)) = text.char_indices().nth(max_chars) {
        warn!(max_chars, "input truncated");
        text.truncate(cut);
    }
    text
}
