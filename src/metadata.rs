// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Docket contributors

//! Case metadata extraction
//!
//! Pulls court file numbers, dates, names, phone numbers, emails, and
//! case-element keyword hits out of raw document text with fixed ordered
//! pattern lists. Matches are collected verbatim: date strings are never
//! parsed or validated ("13/45/2024" is accepted), name captures are not
//! checked against anything, and duplicates within a category are kept.
//! Report-level summaries deduplicate at aggregation time instead.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Case elements tracked for metadata aggregation, in declaration order
const CASE_ELEMENTS: &[&str] = &[
    "sole caregiver",
    "ESA",
    "emotional support",
    "custody",
    "emergency",
    "accommodation",
    "disability",
    "child support",
];

/// Extracted per-document case metadata; every field is empty when absent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseMetadata {
    pub court_file_numbers: Vec<String>,
    /// Raw matched substrings, unnormalized
    pub dates: Vec<String>,
    pub names: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub emails: Vec<String>,
    pub case_elements: Vec<String>,
}

impl CaseMetadata {
    pub fn is_empty(&self) -> bool {
        self.court_file_numbers.is_empty()
            && self.dates.is_empty()
            && self.names.is_empty()
            && self.phone_numbers.is_empty()
            && self.emails.is_empty()
            && self.case_elements.is_empty()
    }
}

/// Compiled pattern lists for metadata extraction
pub struct MetadataExtractor {
    file_number_patterns: Vec<Regex>,
    date_patterns: Vec<Regex>,
    name_patterns: Vec<Regex>,
    phone_pattern: Regex,
    email_pattern: Regex,
}

impl MetadataExtractor {
    pub fn new() -> Result<Self> {
        let ci = |p: &str| RegexBuilder::new(p).case_insensitive(true).build();

        Ok(Self {
            file_number_patterns: vec![
                ci(r"Court File Number:?\s*([A-Z0-9-]+)")?,
                ci(r"File Number:?\s*([A-Z0-9-]+)")?,
                ci(r"Case Number:?\s*([A-Z0-9-]+)")?,
            ],
            date_patterns: vec![
                Regex::new(r"\b(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\b")?,
                Regex::new(r"\b(\d{1,2}\s+\w+\s+\d{4})\b")?,
                Regex::new(r"\b(\w+\s+\d{1,2},?\s+\d{4})\b")?,
            ],
            name_patterns: vec![
                Regex::new(r"APPLICANT:?\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)")?,
                Regex::new(r"RESPONDENT:?\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)")?,
                Regex::new(r"Name:?\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)")?,
            ],
            phone_pattern: Regex::new(r"\b(\d{3}[-.]?\d{3}[-.]?\d{4})\b")?,
            email_pattern: Regex::new(
                r"\b([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})\b",
            )?,
        })
    }

    /// Extract all metadata categories from one document's text
    pub fn extract(&self, text: &str) -> CaseMetadata {
        let mut meta = CaseMetadata::default();

        for re in &self.file_number_patterns {
            collect_captures(re, text, &mut meta.court_file_numbers);
        }
        for re in &self.date_patterns {
            collect_captures(re, text, &mut meta.dates);
        }
        for re in &self.name_patterns {
            collect_captures(re, text, &mut meta.names);
        }
        collect_captures(&self.phone_pattern, text, &mut meta.phone_numbers);
        collect_captures(&self.email_pattern, text, &mut meta.emails);

        let text_lower = text.to_lowercase();
        for element in CASE_ELEMENTS {
            if text_lower.contains(&element.to_lowercase()) {
                meta.case_elements.push((*element).to_string());
            }
        }

        meta
    }
}

/// All non-overlapping first-group captures, in match order
fn collect_captures(re: &Regex, text: &str, out: &mut Vec<String>) {
    for caps in re.captures_iter(text) {
        if let Some(m) = caps.get(1) {
            out.push(m.as_str().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> MetadataExtractor {
        MetadataExtractor::new().unwrap()
    }

    #[test]
    fn empty_text_yields_empty_metadata() {
        let meta = extractor().extract("");
        assert!(meta.is_empty());
    }

    #[test]
    fn court_file_numbers_from_all_labels() {
        let text = "File Number: CV-2024-001\ncase number: FC-99-456";
        let meta = extractor().extract(text);
        assert_eq!(meta.court_file_numbers, vec!["CV-2024-001", "FC-99-456"]);
    }

    #[test]
    fn file_number_duplicates_are_kept() {
        // "Court File Number:" also satisfies the bare "File Number:"
        // pattern, so the same capture lands twice. Known quirk.
        let text = "Court File Number: FS-24-00123";
        let meta = extractor().extract(text);
        assert_eq!(meta.court_file_numbers, vec!["FS-24-00123", "FS-24-00123"]);
    }

    #[test]
    fn date_shapes_collected_raw() {
        let text = "sworn on 12/03/2024, served 5 March 2024, heard March 7, 2024";
        let meta = extractor().extract(text);
        assert!(meta.dates.contains(&"12/03/2024".to_string()));
        assert!(meta.dates.contains(&"5 March 2024".to_string()));
        assert!(meta.dates.contains(&"March 7, 2024".to_string()));
    }

    #[test]
    fn impossible_dates_are_accepted() {
        // Date strings are matched by shape only, never validated.
        let meta = extractor().extract("filed 13/45/2024");
        assert_eq!(meta.dates, vec!["13/45/2024"]);
    }

    #[test]
    fn names_follow_label_tokens() {
        // Pattern-list order, not text order: applicant, respondent, bare label.
        let text = "Name: Avery Park\nAPPLICANT: Jordan Quinn\nRESPONDENT: Casey Morgan Lee";
        let meta = extractor().extract(text);
        assert_eq!(
            meta.names,
            vec!["Jordan Quinn", "Casey Morgan Lee", "Avery Park"]
        );
    }

    #[test]
    fn name_captures_are_not_validated() {
        // Any capitalized-word run after the label is taken as a name.
        let meta = extractor().extract("Name: Superior Court");
        assert_eq!(meta.names, vec!["Superior Court"]);
    }

    #[test]
    fn phones_and_emails() {
        let text = "call 905-555-0123 or 4165550199, write jordan.quinn@example.ca";
        let meta = extractor().extract(text);
        assert_eq!(meta.phone_numbers, vec!["905-555-0123", "4165550199"]);
        assert_eq!(meta.emails, vec!["jordan.quinn@example.ca"]);
    }

    #[test]
    fn case_elements_once_each_in_declaration_order() {
        let text = "As the sole caregiver I request an ESA accommodation. \
                    The ESA letter covers my disability. Custody is in dispute.";
        let meta = extractor().extract(text);
        assert_eq!(
            meta.case_elements,
            vec!["sole caregiver", "ESA", "custody", "accommodation", "disability"]
        );
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "Court File Number: FS-24-00123 sworn 12/03/2024 custody emergency";
        let ex = extractor();
        let a = ex.extract(text);
        let b = ex.extract(text);
        assert_eq!(a.court_file_numbers, b.court_file_numbers);
        assert_eq!(a.dates, b.dates);
        assert_eq!(a.case_elements, b.case_elements);
    }
}
