// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Docket contributors

//! Document type classification against a declarative signature table
//!
//! Each signature names one document type and carries regex patterns,
//! keyword substrings, and a priority weight. Classification is a pure
//! function of the input text, the filename, and the compiled table:
//! every signature is scored independently, so one document may
//! legitimately rank under several types.

pub mod signatures;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::{DocketError, Result};

/// Label reported when no signature clears the match threshold
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Minimum weighted confidence a signature must exceed to be reported
const MATCH_THRESHOLD: f64 = 20.0;

/// Score contribution of a matching regex pattern
const PATTERN_SCORE: f64 = 25.0;

/// Score contribution of a keyword found in the document text
const KEYWORD_SCORE: f64 = 10.0;

/// Score contribution when any keyword appears in the filename
const FILENAME_SCORE: f64 = 15.0;

/// A named document-type definition: regex patterns, keyword substrings,
/// and a priority weight from 1 to 10.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub patterns: Vec<String>,
    pub keywords: Vec<String>,
    pub priority: u8,
}

/// One ranked candidate type for a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeMatch {
    pub document_type: String,
    /// 0-100; fractional because of priority weighting
    pub confidence: f64,
    /// Human-readable evidence for each scored match
    pub matches: Vec<String>,
    pub priority: u8,
}

#[derive(Debug)]
struct CompiledSignature {
    name: String,
    patterns: Vec<(String, Regex)>,
    /// Normalized to lowercase so mixed-case configuration still matches
    keywords: Vec<String>,
    priority: u8,
}

/// An immutable, validated signature table ready for classification
#[derive(Debug)]
pub struct SignatureSet {
    entries: Vec<CompiledSignature>,
}

impl SignatureSet {
    /// Compile a signature table. Fails fast on an empty table, an
    /// out-of-range priority, or an invalid pattern; these are
    /// configuration errors and abort before any classification happens.
    pub fn compile(signatures: &[Signature]) -> Result<Self> {
        if signatures.is_empty() {
            return Err(DocketError::Config(
                "signature table is empty; at least one document type is required".to_string(),
            ));
        }

        let mut entries = Vec::with_capacity(signatures.len());
        for sig in signatures {
            if !(1..=10).contains(&sig.priority) {
                return Err(DocketError::Config(format!(
                    "signature '{}' has priority {} (expected 1-10)",
                    sig.name, sig.priority
                )));
            }

            let mut patterns = Vec::with_capacity(sig.patterns.len());
            for raw in &sig.patterns {
                let re = RegexBuilder::new(raw).case_insensitive(true).build()?;
                patterns.push((raw.clone(), re));
            }

            entries.push(CompiledSignature {
                name: sig.name.clone(),
                patterns,
                keywords: sig.keywords.iter().map(|k| k.to_lowercase()).collect(),
                priority: sig.priority,
            });
        }

        Ok(Self { entries })
    }

    /// Compile the built-in Ontario family-court table
    pub fn builtin() -> Result<Self> {
        Self::compile(&signatures::builtin())
    }

    /// Number of document types in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of all document types, in declaration order
    pub fn type_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Rank candidate document types for one document.
    ///
    /// Returns matches sorted descending by confidence; equal-confidence
    /// entries keep their declaration order. An empty result means the
    /// caller should report [`UNKNOWN_TYPE`].
    pub fn classify(&self, text: &str, filename: &str) -> Vec<TypeMatch> {
        if text.is_empty() {
            return Vec::new();
        }

        let text_lower = text.to_lowercase();
        let filename_lower = filename.to_lowercase();

        let mut results = Vec::new();
        for entry in &self.entries {
            let mut confidence = 0.0;
            let mut matches = Vec::new();

            for (raw, re) in &entry.patterns {
                if re.is_match(text) {
                    confidence += PATTERN_SCORE;
                    matches.push(format!("Pattern: {raw}"));
                }
            }

            for keyword in &entry.keywords {
                if text_lower.contains(keyword.as_str()) {
                    confidence += KEYWORD_SCORE;
                    matches.push(format!("Keyword: {keyword}"));
                }
            }

            if entry
                .keywords
                .iter()
                .any(|k| filename_lower.contains(k.as_str()))
            {
                confidence += FILENAME_SCORE;
                matches.push("Filename match".to_string());
            }

            confidence *= f64::from(entry.priority) / 10.0;

            if confidence > MATCH_THRESHOLD {
                results.push(TypeMatch {
                    document_type: entry.name.clone(),
                    confidence: confidence.min(100.0),
                    matches,
                    priority: entry.priority,
                });
            }
        }

        // Stable sort keeps declaration order for equal confidence.
        results.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results
    }
}

/// Label of the top-ranked match, or [`UNKNOWN_TYPE`] when nothing cleared
/// the threshold
pub fn top_type(matches: &[TypeMatch]) -> &str {
    matches
        .first()
        .map(|m| m.document_type.as_str())
        .unwrap_or(UNKNOWN_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(name: &str, patterns: &[&str], keywords: &[&str], priority: u8) -> Signature {
        Signature {
            name: name.to_string(),
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            priority,
        }
    }

    #[test]
    fn empty_table_is_a_configuration_error() {
        let err = SignatureSet::compile(&[]).unwrap_err();
        assert!(matches!(err, DocketError::Config(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn out_of_range_priority_rejected() {
        let err = SignatureSet::compile(&[sig("Bad", &[], &["x"], 11)]).unwrap_err();
        assert!(matches!(err, DocketError::Config(_)));
    }

    #[test]
    fn invalid_pattern_rejected() {
        let err = SignatureSet::compile(&[sig("Bad", &["("], &[], 5)]).unwrap_err();
        assert!(matches!(err, DocketError::Pattern(_)));
    }

    #[test]
    fn empty_text_scores_nothing() {
        let set = SignatureSet::builtin().unwrap();
        assert!(set.classify("", "motion_affidavit.txt").is_empty());
    }

    #[test]
    fn motion_form_worked_example() {
        let set = SignatureSet::compile(&[sig(
            "Form_14B_Motion",
            &["FORM 14B", "MOTION"],
            &["motion", "grounds"],
            9,
        )])
        .unwrap();

        let results = set.classify("FORM 14B\nNOTICE OF MOTION\ngrounds for the motion", "");
        assert_eq!(results.len(), 1);
        // (25 + 25 + 10 + 10) * 0.9
        assert!((results[0].confidence - 63.0).abs() < 1e-9);
        assert_eq!(results[0].document_type, "Form_14B_Motion");
    }

    #[test]
    fn filename_bonus_applies_once() {
        let set =
            SignatureSet::compile(&[sig("Affidavit", &[], &["affidavit", "sworn"], 10)]).unwrap();

        // Both keywords in the filename still add a single +15.
        let with = set.classify("affidavit sworn before me", "sworn_affidavit.txt");
        let without = set.classify("affidavit sworn before me", "scan0001.txt");
        assert!((with[0].confidence - 35.0).abs() < 1e-9);
        assert!(without.is_empty(), "20.0 does not clear the threshold");
    }

    #[test]
    fn below_threshold_excluded() {
        let set = SignatureSet::compile(&[sig("Weak", &[], &["motion"], 10)]).unwrap();
        // A single keyword is exactly 10 * 1.0 = 10 <= 20.
        assert!(set.classify("notice of motion", "").is_empty());
    }

    #[test]
    fn no_match_means_unknown() {
        let set = SignatureSet::builtin().unwrap();
        let results = set.classify("grocery list: apples, oranges", "list.txt");
        assert!(results.is_empty());
        assert_eq!(top_type(&results), UNKNOWN_TYPE);
    }

    #[test]
    fn ranking_descending_and_stable_on_ties() {
        let set = SignatureSet::compile(&[
            sig("First", &["MOTION"], &[], 9),
            sig("Strong", &["MOTION"], &["motion"], 10),
            sig("Second", &["MOTION"], &[], 9),
        ])
        .unwrap();

        let results = set.classify("NOTICE OF MOTION", "");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].document_type, "Strong");
        // First and Second tie at 22.5 and keep declaration order.
        assert_eq!(results[1].document_type, "First");
        assert_eq!(results[2].document_type, "Second");
    }

    #[test]
    fn equal_confidence_keeps_declaration_order() {
        let set = SignatureSet::compile(&[
            sig("Alpha", &["MOTION"], &[], 10),
            sig("Beta", &["MOTION"], &[], 10),
        ])
        .unwrap();

        let results = set.classify("NOTICE OF MOTION", "");
        assert_eq!(results.len(), 2);
        assert!((results[0].confidence - results[1].confidence).abs() < 1e-9);
        assert_eq!(results[0].document_type, "Alpha");
        assert_eq!(results[1].document_type, "Beta");
    }

    #[test]
    fn confidence_capped_at_100() {
        let set = SignatureSet::compile(&[sig(
            "Everything",
            &["FORM", "MOTION", "AFFIDAVIT"],
            &["form", "motion", "affidavit", "sworn", "court"],
            10,
        )])
        .unwrap();

        let results = set.classify(
            "FORM 14B MOTION AFFIDAVIT sworn before the court",
            "form_motion_affidavit.txt",
        );
        assert!((results[0].confidence - 100.0).abs() < 1e-9);
    }

    #[test]
    fn adding_a_matching_keyword_never_lowers_confidence() {
        let set = SignatureSet::compile(&[sig(
            "Motion",
            &["MOTION"],
            &["motion", "grounds", "relief"],
            9,
        )])
        .unwrap();

        let base = set.classify("NOTICE OF MOTION", "")[0].confidence;
        let more = set.classify("NOTICE OF MOTION with grounds", "")[0].confidence;
        let most = set.classify("NOTICE OF MOTION with grounds for relief", "")[0].confidence;
        assert!(more >= base);
        assert!(most >= more);
    }

    #[test]
    fn mixed_case_keywords_are_normalized() {
        let set = SignatureSet::compile(&[sig(
            "EsaLetter",
            &["EMOTIONAL SUPPORT"],
            &["ESA", "Accommodation"],
            10,
        )])
        .unwrap();

        let results = set.classify("emotional support animal (esa) accommodation letter", "");
        assert_eq!(results.len(), 1);
        // 25 + 10 + 10 at priority 10
        assert!((results[0].confidence - 45.0).abs() < 1e-9);
    }

    #[test]
    fn multiple_types_preserved_for_audit() {
        let set = SignatureSet::builtin().unwrap();
        let text = "FORM 14B\nNOTICE OF MOTION\nAFFIDAVIT sworn and affirmed under oath\n\
                    the respondent will make a motion for relief sought on stated grounds";
        let results = set.classify(text, "motion_affidavit.txt");
        assert!(results.len() >= 2, "expected several candidate types");
        for pair in results.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }
}
