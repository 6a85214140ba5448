// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Docket contributors

//! Error types for Docket

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Docket operations
pub type Result<T> = std::result::Result<T, DocketError>;

/// Docket error types
#[derive(Error, Debug)]
pub enum DocketError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to read document {path}: {reason}")]
    Document { path: PathBuf, reason: String },

    #[error("Archive error: {0}")]
    Archive(String),
}

impl DocketError {
    /// Whether the batch pipeline may recover by skipping the current
    /// document. Configuration errors abort before any classification.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Document { .. })
    }
}
