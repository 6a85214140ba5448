// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Docket contributors

//! Chronological case timeline
//!
//! Rebuilds a date-ordered event list from the archive log and writes it
//! as JSON plus a Markdown event-log table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::archive::{ArchiveEntry, Priority};
use crate::Result;

/// One archived file as a timeline event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub date: DateTime<Utc>,
    pub title: String,
    pub category: String,
    pub priority: Priority,
    pub relevance_score: Option<u32>,
}

/// Build the timeline from archive log entries, oldest first
pub fn build(entries: &[ArchiveEntry]) -> Vec<TimelineEvent> {
    let mut events: Vec<TimelineEvent> = entries
        .iter()
        .map(|entry| TimelineEvent {
            date: entry.timestamp,
            title: entry
                .original_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| entry.original_path.display().to_string()),
            category: entry.category.clone(),
            priority: entry.priority,
            relevance_score: entry.relevance_score,
        })
        .collect();

    events.sort_by_key(|e| e.date);
    events
}

/// Write the timeline as JSON
pub fn write_json(events: &[TimelineEvent], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(events)?)?;
    Ok(())
}

/// Write the timeline as a Markdown event-log table
pub fn write_markdown(events: &[TimelineEvent], path: &Path) -> Result<()> {
    let mut doc = String::from("# Case Timeline\n\n");
    doc.push_str("| Date | Event | Category | Priority |\n");
    doc.push_str("|------|-------|----------|----------|\n");

    for event in events {
        doc.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            event.date.format("%Y-%m-%d"),
            event.title,
            event.category,
            event.priority.as_str(),
        ));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, doc)?;
    Ok(())
}
