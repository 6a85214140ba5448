// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Docket contributors

//! Case relevance scoring
//!
//! Scores how pertinent a document is to the case, independent of its
//! type: an ordered weighted-term table plus flat bonuses for legal
//! formatting, an extracted court file number, and multiple case
//! elements. The factor list records every contribution in evaluation
//! order so a score can always be explained.

use serde::{Deserialize, Serialize};

use crate::metadata::CaseMetadata;

/// Terms whose joint presence marks a formally drafted legal document
const LEGAL_INDICATORS: &[&str] = &["sworn", "affirmed", "court", "motion", "affidavit"];

const LEGAL_BONUS: u32 = 15;
const FILE_NUMBER_BONUS: u32 = 10;
const CASE_ELEMENTS_BONUS: u32 = 10;

/// How many case elements trigger the multiple-elements bonus
const CASE_ELEMENTS_MIN: usize = 3;

/// One term in the weighted relevance table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedTerm {
    pub term: String,
    pub weight: u32,
}

/// Result of relevance scoring: a 0-100 score and its explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relevance {
    pub score: u32,
    pub factors: Vec<String>,
}

/// Relevance scorer over an ordered weighted-term table
pub struct RelevanceScorer {
    terms: Vec<WeightedTerm>,
}

impl RelevanceScorer {
    /// Build a scorer; terms are matched case-insensitively, so they are
    /// normalized to lowercase up front.
    pub fn new(terms: &[WeightedTerm]) -> Self {
        Self {
            terms: terms
                .iter()
                .map(|t| WeightedTerm {
                    term: t.term.to_lowercase(),
                    weight: t.weight,
                })
                .collect(),
        }
    }

    /// Scorer over the default term table
    pub fn default_table() -> Self {
        Self::new(&default_terms())
    }

    /// Score one document. Pure: identical inputs always yield the same
    /// score and factor list.
    pub fn score(&self, text: &str, metadata: &CaseMetadata) -> Relevance {
        let text_lower = text.to_lowercase();
        let mut score: u32 = 0;
        let mut factors = Vec::new();

        for entry in &self.terms {
            if text_lower.contains(entry.term.as_str()) {
                score += entry.weight;
                factors.push(format!("{} (+{})", entry.term, entry.weight));
            }
        }

        let legal_hits = LEGAL_INDICATORS
            .iter()
            .filter(|ind| text_lower.contains(*ind))
            .count();
        if legal_hits >= 2 {
            score += LEGAL_BONUS;
            factors.push(format!("Legal document (+{LEGAL_BONUS})"));
        }

        if !metadata.court_file_numbers.is_empty() {
            score += FILE_NUMBER_BONUS;
            factors.push(format!("Court file number (+{FILE_NUMBER_BONUS})"));
        }

        if metadata.case_elements.len() >= CASE_ELEMENTS_MIN {
            score += CASE_ELEMENTS_BONUS;
            factors.push(format!("Multiple case elements (+{CASE_ELEMENTS_BONUS})"));
        }

        Relevance {
            score: score.min(100),
            factors,
        }
    }
}

/// The default weighted-term table
pub fn default_terms() -> Vec<WeightedTerm> {
    let table: &[(&str, u32)] = &[
        ("sole caregiver", 20),
        ("ESA", 15),
        ("emotional support", 15),
        ("custody", 15),
        ("emergency", 10),
        ("accommodation", 10),
        ("disability", 10),
        ("child support", 10),
        ("family court", 10),
    ];
    table
        .iter()
        .map(|(term, weight)| WeightedTerm {
            term: (*term).to_string(),
            weight: *weight,
        })
        .collect()
}
