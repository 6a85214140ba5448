// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Docket contributors

//! Batch directory scanning
//!
//! Walks the configured input roots recursively, analyzes every document
//! with a scannable extension, and tolerates per-document failures: an
//! unreadable file is logged and counted, never fatal. Only an invalid
//! signature table aborts, and that happens before the walk starts.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::analyze::{DocumentAnalysis, DocumentAnalyzer};
use crate::config::AppConfig;
use crate::Result;

/// Outcome of one batch scan
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub analyses: Vec<DocumentAnalysis>,
    /// Files that could not be read or listed; the batch continued
    pub skipped: usize,
}

impl ScanOutcome {
    fn merge(&mut self, other: ScanOutcome) {
        self.analyses.extend(other.analyses);
        self.skipped += other.skipped;
    }
}

/// Sequential directory scanner
pub struct Scanner {
    analyzer: DocumentAnalyzer,
    extensions: Vec<String>,
}

impl Scanner {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            analyzer: DocumentAnalyzer::from_config(config)?,
            extensions: config
                .scan
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
        })
    }

    /// Scan several roots, concatenating results in root order
    pub fn scan_roots(&self, roots: &[PathBuf]) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();
        for root in roots {
            if !root.exists() {
                warn!("Input root {:?} does not exist, skipping", root);
                continue;
            }
            info!("Scanning {:?}", root);
            outcome.merge(self.scan_dir(root));
        }
        outcome
    }

    /// Recursively scan one directory
    pub fn scan_dir(&self, dir: &Path) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();

        let pattern = format!("{}/**/*", dir.display());
        let paths = match glob::glob(&pattern) {
            Ok(paths) => paths,
            Err(e) => {
                warn!("Cannot glob {:?}: {}", dir, e);
                outcome.skipped += 1;
                return outcome;
            }
        };

        for entry in paths {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!("Cannot list entry: {}", e);
                    outcome.skipped += 1;
                    continue;
                }
            };

            if !path.is_file() || !self.is_scannable(&path) {
                continue;
            }

            match self.analyzer.analyze_file(&path) {
                Ok(analysis) => {
                    debug!(
                        "{}: {} (relevance {})",
                        analysis.file_name,
                        analysis.top_type(),
                        analysis.relevance_score
                    );
                    outcome.analyses.push(analysis);
                }
                Err(e) => {
                    warn!("Skipping document: {}", e);
                    outcome.skipped += 1;
                }
            }
        }

        outcome
    }

    fn is_scannable(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                let e = e.to_lowercase();
                self.extensions.iter().any(|known| known == &e)
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> Scanner {
        Scanner::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn scans_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("a/b")).unwrap();
        std::fs::write(dir.path().join("top.txt"), "NOTICE OF MOTION grounds").unwrap();
        std::fs::write(dir.path().join("a/mid.md"), "AFFIDAVIT sworn oath").unwrap();
        std::fs::write(dir.path().join("a/b/deep.txt"), "hello").unwrap();

        let outcome = scanner().scan_dir(dir.path());
        assert_eq!(outcome.analyses.len(), 3);
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn ignores_unscannable_extensions() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("photo.jpg"), [0xffu8, 0xd8]).unwrap();
        std::fs::write(dir.path().join("data.bin"), [0u8; 16]).unwrap();
        std::fs::write(dir.path().join("letter.txt"), "dear sir").unwrap();

        let outcome = scanner().scan_dir(dir.path());
        assert_eq!(outcome.analyses.len(), 1);
        assert_eq!(outcome.analyses[0].file_name, "letter.txt");
    }

    #[test]
    fn missing_root_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "text").unwrap();

        let roots = vec![PathBuf::from("/nonexistent/root"), dir.path().to_path_buf()];
        let outcome = scanner().scan_roots(&roots);
        assert_eq!(outcome.analyses.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_file_skipped_batch_continues() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked.txt");
        std::fs::write(&locked, "secret").unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
        if std::fs::read(&locked).is_ok() {
            // Running as root; permission bits don't apply here.
            return;
        }
        std::fs::write(dir.path().join("open.txt"), "readable").unwrap();

        let outcome = scanner().scan_dir(dir.path());
        assert_eq!(outcome.analyses.len(), 1);
        assert_eq!(outcome.skipped, 1);

        // Restore so the tempdir can be removed.
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("SHOUTY.TXT"), "text").unwrap();

        let outcome = scanner().scan_dir(dir.path());
        assert_eq!(outcome.analyses.len(), 1);
    }
}
