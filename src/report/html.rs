// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Docket contributors

//! HTML dashboard rendering for case reports

use minijinja::Environment;

use super::CaseReport;
use crate::Result;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Case Report</title>
<style>
  body { font-family: -apple-system, 'Segoe UI', sans-serif; margin: 2rem; background: #f5f6f8; color: #222; }
  h1 { margin-bottom: 0.25rem; }
  .generated { color: #666; margin-bottom: 1.5rem; }
  .cards { display: flex; gap: 1rem; flex-wrap: wrap; margin-bottom: 2rem; }
  .card { background: #fff; border-radius: 8px; padding: 1rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); min-width: 10rem; }
  .card .value { font-size: 2rem; font-weight: 700; }
  .card .label { color: #666; }
  table { border-collapse: collapse; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,0.1); margin-bottom: 2rem; }
  th, td { padding: 0.5rem 1rem; border-bottom: 1px solid #eee; text-align: left; }
  th { background: #2c3e50; color: #fff; }
  .score { font-weight: 700; }
</style>
</head>
<body>
<h1>Case Report</h1>
<p class="generated">Generated {{ analysis_date }}</p>

<div class="cards">
  <div class="card"><div class="value">{{ total_files_analyzed }}</div><div class="label">Files analyzed</div></div>
  <div class="card"><div class="value">{{ high_relevance_files | length }}</div><div class="label">High relevance</div></div>
  <div class="card"><div class="value">{{ document_type_summary | length }}</div><div class="label">Document types</div></div>
  <div class="card"><div class="value">{{ skipped_files }}</div><div class="label">Skipped</div></div>
</div>

<h2>Document types</h2>
<table>
  <tr><th>Type</th><th>Count</th></tr>
  {% for type, count in document_type_summary | items %}
  <tr><td>{{ type }}</td><td>{{ count }}</td></tr>
  {% endfor %}
</table>

<h2>Top relevant files</h2>
<table>
  <tr><th>File</th><th>Score</th><th>Type</th></tr>
  {% for entry in high_relevance_files %}
  <tr><td>{{ entry.file }}</td><td class="score">{{ entry.score }}</td><td>{{ entry.type }}</td></tr>
  {% endfor %}
</table>

<h2>Relevance bands</h2>
<table>
  <tr><th>Band</th><th>Files</th></tr>
  <tr><td>Critical (80+)</td><td>{{ files_by_relevance.critical | length }}</td></tr>
  <tr><td>High (60-79)</td><td>{{ files_by_relevance.high | length }}</td></tr>
  <tr><td>Medium (40-59)</td><td>{{ files_by_relevance.medium | length }}</td></tr>
  <tr><td>Low (0-39)</td><td>{{ files_by_relevance.low | length }}</td></tr>
</table>
</body>
</html>
"#;

/// Render the HTML dashboard for a report
pub fn render(report: &CaseReport) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("report", TEMPLATE)?;
    let tmpl = env.get_template("report")?;
    Ok(tmpl.render(minijinja::Value::from_serialize(report))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::DocumentAnalysis;
    use crate::metadata::CaseMetadata;
    use chrono::Utc;
    use std::path::PathBuf;

    fn sample_report() -> CaseReport {
        let analysis = DocumentAnalysis {
            file_path: PathBuf::from("motion.txt"),
            file_name: "motion.txt".to_string(),
            file_size: 12,
            file_hash: "0".repeat(64),
            modified_date: None,
            analyzed_date: Utc::now(),
            document_types: Vec::new(),
            metadata: CaseMetadata::default(),
            relevance_score: 85,
            relevance_factors: vec!["custody (+15)".to_string()],
            content_preview: String::new(),
        };
        CaseReport::build(vec![analysis], 1, 70)
    }

    #[test]
    fn renders_summary_numbers() {
        let html = render(&sample_report()).unwrap();
        assert!(html.contains("Case Report"));
        assert!(html.contains("motion.txt"));
        assert!(html.contains("85"));
    }

    #[test]
    fn renders_empty_report() {
        let html = render(&CaseReport::build(Vec::new(), 0, 70)).unwrap();
        assert!(html.contains("Files analyzed"));
    }
}
