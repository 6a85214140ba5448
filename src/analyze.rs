// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Docket contributors

//! Per-document analysis
//!
//! Combines classification, metadata extraction, and relevance scoring
//! into one record per document, together with the file facts (size,
//! hash, timestamps) the reports and the archiver need.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::classify::{top_type, SignatureSet, TypeMatch};
use crate::config::AppConfig;
use crate::metadata::{CaseMetadata, MetadataExtractor};
use crate::relevance::{Relevance, RelevanceScorer};
use crate::{DocketError, Result};

/// Full analysis record for one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub file_path: PathBuf,
    pub file_name: String,
    pub file_size: u64,
    pub file_hash: String,
    pub modified_date: Option<DateTime<Utc>>,
    pub analyzed_date: DateTime<Utc>,
    /// Ranked candidate types; empty means the document is unrecognized
    pub document_types: Vec<TypeMatch>,
    pub metadata: CaseMetadata,
    pub relevance_score: u32,
    pub relevance_factors: Vec<String>,
    pub content_preview: String,
}

impl DocumentAnalysis {
    /// Top-ranked document type, or "Unknown"
    pub fn top_type(&self) -> &str {
        top_type(&self.document_types)
    }
}

/// Analyzer bundling the three scoring engines behind one call
pub struct DocumentAnalyzer {
    signatures: SignatureSet,
    extractor: MetadataExtractor,
    scorer: RelevanceScorer,
    preview_chars: usize,
}

impl DocumentAnalyzer {
    /// Build the analyzer from configuration. Fails fast on an invalid
    /// signature table, before any document is touched.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let signatures = match &config.scoring.signatures {
            Some(table) => SignatureSet::compile(table)?,
            None => SignatureSet::builtin()?,
        };

        Ok(Self {
            signatures,
            extractor: MetadataExtractor::new()?,
            scorer: RelevanceScorer::new(&config.scoring.weighted_terms),
            preview_chars: config.scan.preview_chars,
        })
    }

    /// Analyze already-read text. Total over any string input.
    pub fn analyze_text(&self, text: &str, filename: &str) -> (Vec<TypeMatch>, CaseMetadata, Relevance) {
        let document_types = self.signatures.classify(text, filename);
        let metadata = self.extractor.extract(text);
        let relevance = self.scorer.score(text, &metadata);
        (document_types, metadata, relevance)
    }

    /// Read and analyze one document on disk.
    ///
    /// Read failures come back as recoverable [`DocketError::Document`]
    /// values so the batch scanner can skip the file and continue.
    pub fn analyze_file(&self, path: &Path) -> Result<DocumentAnalysis> {
        let bytes = std::fs::read(path).map_err(|e| DocketError::Document {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        // Non-UTF-8 input degrades to whatever text survives the lossy
        // decode; other formats are not converted.
        let text = String::from_utf8_lossy(&bytes);

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (document_types, metadata, relevance) = self.analyze_text(&text, &file_name);

        let fs_meta = std::fs::metadata(path).map_err(|e| DocketError::Document {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let modified_date = fs_meta.modified().ok().map(DateTime::<Utc>::from);

        Ok(DocumentAnalysis {
            file_path: path.to_path_buf(),
            file_name,
            file_size: fs_meta.len(),
            file_hash: blake3::hash(&bytes).to_hex().to_string(),
            modified_date,
            analyzed_date: Utc::now(),
            document_types,
            metadata,
            relevance_score: relevance.score,
            relevance_factors: relevance.factors,
            content_preview: preview(&text, self.preview_chars),
        })
    }
}

/// First `limit` characters of the content, with a trailing ellipsis when
/// truncated
fn preview(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let mut p: String = text.chars().take(limit).collect();
        p.push_str("...");
        p
    } else {
        text.to_string()
    }
}
