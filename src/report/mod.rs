// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Docket contributors

//! Case report generation
//!
//! Aggregates a batch of document analyses into one report record:
//! per-type counts, relevance bands, high-relevance ranking, and a
//! deduplicated metadata summary. Each run writes a new timestamped
//! file; existing reports are never updated in place.

pub mod html;
pub mod timeline;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::analyze::DocumentAnalysis;
use crate::Result;

/// One entry in the high-relevance ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighRelevanceFile {
    pub file: String,
    pub score: u32,
    #[serde(rename = "type")]
    pub doc_type: String,
}

/// Files bucketed by relevance score
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelevanceBands {
    /// 80-100
    pub critical: Vec<String>,
    /// 60-79
    pub high: Vec<String>,
    /// 40-59
    pub medium: Vec<String>,
    /// 0-39
    pub low: Vec<String>,
}

/// Deduplicated cross-document metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataSummary {
    pub court_files: Vec<String>,
    pub unique_names: Vec<String>,
    pub case_elements: Vec<String>,
}

/// The per-run case report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    pub analysis_date: DateTime<Utc>,
    pub total_files_analyzed: usize,
    pub skipped_files: usize,
    pub document_type_summary: BTreeMap<String, usize>,
    pub high_relevance_files: Vec<HighRelevanceFile>,
    pub files_by_relevance: RelevanceBands,
    pub case_metadata_summary: MetadataSummary,
    pub detailed_analysis: Vec<DocumentAnalysis>,
}

impl CaseReport {
    /// Build a report from a finished batch.
    ///
    /// `high_relevance_cutoff` is the score from which a file appears in
    /// the high-relevance ranking (band edges are fixed at 80/60/40).
    pub fn build(
        analyses: Vec<DocumentAnalysis>,
        skipped_files: usize,
        high_relevance_cutoff: u32,
    ) -> Self {
        let mut document_type_summary: BTreeMap<String, usize> = BTreeMap::new();
        let mut high_relevance_files = Vec::new();
        let mut files_by_relevance = RelevanceBands::default();

        let mut court_files = BTreeSet::new();
        let mut unique_names = BTreeSet::new();
        let mut case_elements = BTreeSet::new();

        for analysis in &analyses {
            if !analysis.document_types.is_empty() {
                *document_type_summary
                    .entry(analysis.top_type().to_string())
                    .or_insert(0) += 1;
            }

            if analysis.relevance_score >= high_relevance_cutoff {
                high_relevance_files.push(HighRelevanceFile {
                    file: analysis.file_name.clone(),
                    score: analysis.relevance_score,
                    doc_type: analysis.top_type().to_string(),
                });
            }

            let bucket = match analysis.relevance_score {
                80.. => &mut files_by_relevance.critical,
                60..=79 => &mut files_by_relevance.high,
                40..=59 => &mut files_by_relevance.medium,
                _ => &mut files_by_relevance.low,
            };
            bucket.push(analysis.file_name.clone());

            court_files.extend(analysis.metadata.court_file_numbers.iter().cloned());
            unique_names.extend(analysis.metadata.names.iter().cloned());
            case_elements.extend(analysis.metadata.case_elements.iter().cloned());
        }

        // Highest score first; stable, so batch order breaks ties.
        high_relevance_files.sort_by(|a, b| b.score.cmp(&a.score));

        Self {
            analysis_date: Utc::now(),
            total_files_analyzed: analyses.len(),
            skipped_files,
            document_type_summary,
            high_relevance_files,
            files_by_relevance,
            case_metadata_summary: MetadataSummary {
                court_files: court_files.into_iter().collect(),
                unique_names: unique_names.into_iter().collect(),
                case_elements: case_elements.into_iter().collect(),
            },
            detailed_analysis: analyses,
        }
    }

    /// Write the report as a new timestamped JSON file, returning its path
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = dir.join(format!("case_report_{stamp}.json"));
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }
}
