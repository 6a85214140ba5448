// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Docket contributors

//! Case file archiving
//!
//! Copies incoming documents into the fixed case-folder taxonomy, writes
//! a sidecar metadata record next to each copy, and appends every
//! operation to a JSONL archive log. Originals are never moved or
//! renamed; the archive is additive.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

use crate::analyze::DocumentAnalysis;
use crate::{DocketError, Result};

/// The case-folder taxonomy, created under the case root
pub const CATEGORIES: &[&str] = &[
    "correspondence/emails",
    "correspondence/letters",
    "correspondence/messages",
    "evidence/employment_records",
    "evidence/hr_responses",
    "evidence/screenshots",
    "evidence/supporting_documents",
    "evidence/esa_documents",
    "intake/new_files",
    "intake/processed",
    "reports/timeline",
    "reports/evidence_summaries",
    "reports/case_analysis",
];

/// Filename keywords recorded in sidecar metadata
const FILENAME_KEYWORDS: &[&str] = &[
    "esa",
    "accommodation",
    "caregiver",
    "sole",
    "hr",
    "request",
    "response",
    "email",
    "letter",
    "evidence",
    "support",
];

/// Case-management priority of an archived file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Pick the taxonomy category for a file from its name and extension.
/// Rule order matters; first hit wins.
pub fn categorize(path: &Path) -> &'static str {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let name_has = |words: &[&str]| words.iter().any(|w| filename.contains(w));

    if name_has(&["email", "message", "correspondence", "communication"]) {
        "correspondence/emails"
    } else if name_has(&["hr", "human_resources", "response", "reply"]) {
        "evidence/hr_responses"
    } else if name_has(&["esa", "emotional_support", "accommodation", "request"]) {
        "evidence/esa_documents"
    } else if name_has(&["screenshot", "screen", "capture", "image"]) {
        "evidence/screenshots"
    } else if name_has(&["chat", "conversation", "history"]) {
        "correspondence/messages"
    } else if name_has(&["caregiver", "sole"]) {
        "evidence/supporting_documents"
    } else if matches!(extension.as_str(), "pdf" | "doc" | "docx") {
        "evidence/supporting_documents"
    } else if matches!(extension.as_str(), "jpg" | "png" | "jpeg" | "gif") {
        "evidence/screenshots"
    } else {
        "intake/new_files"
    }
}

/// Keywords present in the filename, in table order
pub fn filename_keywords(path: &Path) -> Vec<String> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    FILENAME_KEYWORDS
        .iter()
        .filter(|kw| filename.contains(*kw))
        .map(|kw| (*kw).to_string())
        .collect()
}

/// Assess case-management priority from filename and category
pub fn assess_priority(path: &Path, category: &str) -> Priority {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let name_has = |words: &[&str]| words.iter().any(|w| filename.contains(w));

    if name_has(&["urgent", "deadline", "final", "legal"]) {
        Priority::High
    } else if name_has(&["esa", "accommodation", "hr"]) {
        Priority::High
    } else if category.starts_with("correspondence") {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Sidecar metadata written next to each archived copy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidecarMetadata {
    pub original_path: PathBuf,
    pub archived_path: PathBuf,
    pub category: String,
    pub file_size: u64,
    pub archived_date: DateTime<Utc>,
    pub original_modified: Option<DateTime<Utc>>,
    pub file_type: String,
    pub relevance_score: Option<u32>,
    pub keywords: Vec<String>,
    pub case_priority: Priority,
}

/// One archive operation in the log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub original_path: PathBuf,
    pub archived_path: PathBuf,
    pub category: String,
    pub relevance_score: Option<u32>,
    pub priority: Priority,
}

/// Append-only JSONL log of archive operations
pub struct ArchiveLog {
    path: PathBuf,
}

impl ArchiveLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append an entry to the log
    pub fn append(&self, entry: &ArchiveEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let json = serde_json::to_string(entry)?;
        writeln!(file, "{json}")?;

        Ok(())
    }

    /// Read all log entries; unparseable lines are logged and skipped
    pub fn read_all(&self) -> Result<Vec<ArchiveEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::warn!("Failed to parse archive log entry: {}", e);
                }
            }
        }

        Ok(entries)
    }

    /// The most recent N entries (newest first)
    pub fn recent(&self, count: usize) -> Result<Vec<ArchiveEntry>> {
        let mut entries = self.read_all()?;
        entries.reverse();
        entries.truncate(count);
        Ok(entries)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Result of archiving one file
#[derive(Debug, Clone)]
pub struct ArchivedFile {
    pub destination: PathBuf,
    pub category: &'static str,
    pub priority: Priority,
}

/// Copies files into the taxonomy under a case root
pub struct Archiver {
    root: PathBuf,
    log: ArchiveLog,
    dry_run: bool,
}

impl Archiver {
    pub fn new(case_root: &Path, dry_run: bool) -> Self {
        Self {
            root: case_root.to_path_buf(),
            log: ArchiveLog::new(case_root.join("archive_log.jsonl")),
            dry_run,
        }
    }

    /// Create the full folder taxonomy
    pub fn setup_structure(&self) -> Result<()> {
        for category in CATEGORIES {
            std::fs::create_dir_all(self.root.join(category))?;
        }
        info!("Case folder structure ready at {:?}", self.root);
        Ok(())
    }

    pub fn log(&self) -> &ArchiveLog {
        &self.log
    }

    /// Archive one file: categorize, copy with a timestamped name, write
    /// the sidecar, and append to the log. In dry-run mode only the
    /// decision is reported.
    pub fn archive(
        &self,
        source: &Path,
        analysis: Option<&DocumentAnalysis>,
    ) -> Result<ArchivedFile> {
        let category = categorize(source);
        let priority = assess_priority(source, category);

        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| {
                DocketError::Archive(format!("{} has no file name", source.display()))
            })?;
        let extension = source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let destination = self
            .root
            .join(category)
            .join(format!("{timestamp}_{stem}{extension}"));

        if self.dry_run {
            info!(
                "[dry run] {} -> {}",
                source.display(),
                destination.display()
            );
            return Ok(ArchivedFile {
                destination,
                category,
                priority,
            });
        }

        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(source, &destination)?;

        let fs_meta = std::fs::metadata(&destination)?;
        let original_modified = std::fs::metadata(source)
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Utc>::from);

        let sidecar = SidecarMetadata {
            original_path: source.to_path_buf(),
            archived_path: destination.clone(),
            category: category.to_string(),
            file_size: fs_meta.len(),
            archived_date: Utc::now(),
            original_modified,
            file_type: source
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default(),
            relevance_score: analysis.map(|a| a.relevance_score),
            keywords: filename_keywords(source),
            case_priority: priority,
        };
        let sidecar_path = destination.with_extension("json");
        std::fs::write(&sidecar_path, serde_json::to_string_pretty(&sidecar)?)?;

        self.log.append(&ArchiveEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            original_path: source.to_path_buf(),
            archived_path: destination.clone(),
            category: category.to_string(),
            relevance_score: analysis.map(|a| a.relevance_score),
            priority,
        })?;

        info!("Archived {} -> {}", source.display(), category);

        Ok(ArchivedFile {
            destination,
            category,
            priority,
        })
    }
}
