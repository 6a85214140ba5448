// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Docket contributors

//! Configuration management for Docket
//!
//! All paths come from configuration passed at construction; nothing in
//! the pipeline reads hardcoded locations or environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::classify::Signature;
use crate::relevance::{default_terms, WeightedTerm};

/// Main application configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Directories scanned for incoming documents
    pub input_roots: Vec<String>,

    /// Root of the organized case file tree
    pub case_root: String,

    /// Scanner settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Classification and relevance settings
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Report output settings
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScanConfig {
    /// Extensions treated as scannable documents
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Characters of content kept as a preview in analysis records
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScoringConfig {
    /// Custom signature table; the built-in table is used when absent
    #[serde(default)]
    pub signatures: Option<Vec<Signature>>,

    /// Ordered weighted-term table for relevance scoring
    #[serde(default = "default_terms")]
    pub weighted_terms: Vec<WeightedTerm>,

    /// Relevance score from which a file counts as high-relevance
    #[serde(default = "default_high_relevance_cutoff")]
    pub high_relevance_cutoff: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReportConfig {
    /// Directory reports are written into (relative to case_root when
    /// not absolute)
    #[serde(default = "default_report_dir")]
    pub output_dir: String,

    /// Also render the HTML dashboard next to the JSON report
    #[serde(default = "default_true")]
    pub html: bool,
}

// Default value functions
fn default_extensions() -> Vec<String> {
    vec!["txt", "md", "rtf", "doc", "docx"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_preview_chars() -> usize { 200 }
fn default_high_relevance_cutoff() -> u32 { 70 }
fn default_report_dir() -> String { "reports".to_string() }
fn default_true() -> bool { true }

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            preview_chars: default_preview_chars(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            signatures: None,
            weighted_terms: default_terms(),
            high_relevance_cutoff: default_high_relevance_cutoff(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_report_dir(),
            html: default_true(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_roots: vec!["./intake".to_string()],
            case_root: "./case-management".to_string(),
            scan: ScanConfig::default(),
            scoring: ScoringConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content)
                .map_err(|e| crate::DocketError::Config(format!("Failed to parse config: {e}")))?;
            Ok(config)
        } else {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Directory reports land in, resolved against the case root
    pub fn report_dir(&self) -> PathBuf {
        let dir = PathBuf::from(&self.report.output_dir);
        if dir.is_absolute() {
            dir
        } else {
            PathBuf::from(&self.case_root).join(dir)
        }
    }
}
