// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Docket contributors

//! Docket: Legal Case File Scanner & Organizer
//!
//! Sequential batch pipeline: scan configured directories, classify and
//! score each document, archive files into the case taxonomy, and write
//! JSON/HTML/timeline reports.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, warn};

use docket::analyze::DocumentAnalyzer;
use docket::archive::Archiver;
use docket::classify::SignatureSet;
use docket::config::AppConfig;
use docket::relevance::RelevanceScorer;
use docket::report::{html, timeline, CaseReport};
use docket::scan::Scanner;
use docket::Result;

/// Docket CLI - Legal Case File Scanner & Organizer
#[derive(Parser, Debug)]
#[command(name = "docket")]
#[command(version = "1.2.0")]
#[command(about = "Legal case file scanner, classifier, and organizer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (JSON format)
    #[arg(short, long, default_value = "docket.json", global = true)]
    config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format for results
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan directories, classify documents, and write reports
    Scan {
        /// Directories to scan (overrides configured input roots)
        path: Vec<PathBuf>,

        /// Relevance score from which a file is listed as high-relevance
        /// (overrides config)
        #[arg(long)]
        min_relevance: Option<u32>,
    },

    /// Categorize and copy files into the case folder taxonomy
    Organize {
        /// Directories to organize (overrides configured input roots)
        path: Vec<PathBuf>,

        /// Show what would be archived without copying anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Regenerate timeline artifacts from the archive log
    Timeline,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Initialize a new case directory
    Init {
        /// Directory to initialize (default: current)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Force overwrite existing configuration
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Generate default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "docket.json")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration file
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Some(Commands::Scan { path, min_relevance }) => {
            run_scan(config, path, min_relevance, &cli.format)
        }
        Some(Commands::Organize { path, dry_run }) => run_organize(config, path, dry_run),
        Some(Commands::Timeline) => run_timeline(config),
        Some(Commands::Config { action }) => run_config_command(config, action, &cli.config),
        Some(Commands::Init { dir, force }) => run_init(dir, force),
        None => {
            // Default: scan the configured input roots.
            run_scan(config, vec![], None, &cli.format)
        }
    }
}

fn input_roots(config: &AppConfig, overrides: Vec<PathBuf>) -> Vec<PathBuf> {
    if overrides.is_empty() {
        config.input_roots.iter().map(PathBuf::from).collect()
    } else {
        overrides
    }
}

/// Scan, classify, score, and report
fn run_scan(
    config: AppConfig,
    path_overrides: Vec<PathBuf>,
    min_relevance: Option<u32>,
    format: &str,
) -> Result<()> {
    let roots = input_roots(&config, path_overrides);
    let cutoff = min_relevance.unwrap_or(config.scoring.high_relevance_cutoff);

    let scanner = Scanner::new(&config)?;
    let outcome = scanner.scan_roots(&roots);

    let report = CaseReport::build(outcome.analyses, outcome.skipped, cutoff);

    let report_dir = config.report_dir();
    let json_path = report.save(&report_dir)?;
    info!("Report saved to {:?}", json_path);

    if config.report.html {
        let html_path = json_path.with_extension("html");
        std::fs::write(&html_path, html::render(&report)?)?;
        info!("Dashboard saved to {:?}", html_path);
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Files analyzed:  {}", report.total_files_analyzed);
    println!("Skipped:         {}", report.skipped_files);
    println!("Document types:  {}", report.document_type_summary.len());
    println!("High relevance:  {}", report.high_relevance_files.len());

    if !report.high_relevance_files.is_empty() {
        println!("\nTop relevant files:");
        for entry in report.high_relevance_files.iter().take(5) {
            println!("  {} - {}% ({})", entry.file, entry.score, entry.doc_type);
        }
    }

    Ok(())
}

/// Categorize and copy files into the taxonomy
fn run_organize(config: AppConfig, path_overrides: Vec<PathBuf>, dry_run: bool) -> Result<()> {
    let roots = input_roots(&config, path_overrides);

    if dry_run {
        warn!("DRY RUN MODE - files will not be copied");
    }

    let analyzer = DocumentAnalyzer::from_config(&config)?;
    let case_root = PathBuf::from(&config.case_root);
    let archiver = Archiver::new(&case_root, dry_run);
    if !dry_run {
        archiver.setup_structure()?;
    }

    let extensions: Vec<String> = config
        .scan
        .extensions
        .iter()
        .map(|e| e.trim_start_matches('.').to_lowercase())
        .collect();

    let mut archived = 0usize;
    let mut failed = 0usize;

    for root in &roots {
        if !root.exists() {
            warn!("Input root {:?} does not exist, skipping", root);
            continue;
        }

        let pattern = format!("{}/**/*", root.display());
        let paths = match glob::glob(&pattern) {
            Ok(paths) => paths,
            Err(e) => {
                warn!("Cannot glob {:?}: {}", root, e);
                continue;
            }
        };

        for entry in paths.flatten() {
            if !entry.is_file() || is_hidden(&entry) {
                continue;
            }

            // Text-like documents get a full analysis so the sidecar
            // carries a relevance score; everything else is archived on
            // filename rules alone.
            let scannable = entry
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| extensions.iter().any(|known| known == &e.to_lowercase()))
                .unwrap_or(false);
            let analysis = if scannable {
                match analyzer.analyze_file(&entry) {
                    Ok(a) => Some(a),
                    Err(e) => {
                        warn!("Analysis failed, archiving without score: {}", e);
                        None
                    }
                }
            } else {
                None
            };

            match archiver.archive(&entry, analysis.as_ref()) {
                Ok(_) => archived += 1,
                Err(e) => {
                    error!("Failed to archive {:?}: {}", entry, e);
                    failed += 1;
                }
            }
        }
    }

    println!("Archived: {archived}");
    if failed > 0 {
        println!("Failed:   {failed}");
    }

    Ok(())
}

fn is_hidden(path: &std::path::Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Rebuild timeline artifacts from the archive log
fn run_timeline(config: AppConfig) -> Result<()> {
    let case_root = PathBuf::from(&config.case_root);
    let archiver = Archiver::new(&case_root, false);

    let entries = archiver.log().read_all()?;
    let events = timeline::build(&entries);

    let timeline_dir = case_root.join("reports/timeline");
    timeline::write_json(&events, &timeline_dir.join("timeline.json"))?;
    timeline::write_markdown(&events, &timeline_dir.join("event_log.md"))?;

    println!("Timeline events: {}", events.len());
    info!("Timeline written to {:?}", timeline_dir);

    Ok(())
}

fn run_config_command(
    config: AppConfig,
    action: ConfigCommands,
    config_path: &std::path::Path,
) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommands::Generate { output, force } => {
            if output.exists() && !force {
                return Err(docket::DocketError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    output.display()
                )));
            }
            AppConfig::default().save(&output)?;
            println!("Configuration written to {}", output.display());
            Ok(())
        }
        ConfigCommands::Validate => {
            // Surface table errors now rather than at the next scan.
            match &config.scoring.signatures {
                Some(table) => SignatureSet::compile(table)?,
                None => SignatureSet::builtin()?,
            };
            let _ = RelevanceScorer::new(&config.scoring.weighted_terms);
            println!("{} is valid", config_path.display());
            Ok(())
        }
    }
}

/// Create a case root skeleton and default configuration
fn run_init(dir: Option<PathBuf>, force: bool) -> Result<()> {
    let target = dir.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&target)?;

    let config_path = target.join("docket.json");
    if config_path.exists() && !force {
        return Err(docket::DocketError::Config(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }

    let intake_dir = target.join("intake");
    std::fs::create_dir_all(&intake_dir)?;

    let case_root = target.join("case-management");
    let mut config = AppConfig::default();
    config.input_roots = vec![intake_dir.to_string_lossy().to_string()];
    config.case_root = case_root.to_string_lossy().to_string();
    config.save(&config_path)?;

    Archiver::new(&case_root, false).setup_structure()?;

    println!("Docket initialized in {}", target.display());
    println!("\nCreated:");
    println!("  - docket.json");
    println!("  - intake/");
    println!("  - case-management/");
    println!("\nNext steps:");
    println!("  1. Drop documents into intake/");
    println!("  2. Run: docket scan");
    println!("  3. Run: docket organize");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["docket"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_scan_command() {
        let cli = Cli::try_parse_from([
            "docket", "scan", "/tmp/inbox", "--min-relevance", "50",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Scan { path, min_relevance }) => {
                assert_eq!(path, vec![PathBuf::from("/tmp/inbox")]);
                assert_eq!(min_relevance, Some(50));
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_cli_organize_command() {
        let cli = Cli::try_parse_from(["docket", "organize", "--dry-run"]).unwrap();

        match cli.command {
            Some(Commands::Organize { dry_run, path }) => {
                assert!(dry_run);
                assert!(path.is_empty());
            }
            _ => panic!("Expected Organize command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["docket", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_input_roots_override() {
        let config = AppConfig::default();
        let roots = input_roots(&config, vec![PathBuf::from("/tmp/x")]);
        assert_eq!(roots, vec![PathBuf::from("/tmp/x")]);

        let defaults = input_roots(&config, vec![]);
        assert_eq!(defaults, vec![PathBuf::from("./intake")]);
    }

    #[test]
    fn test_hidden_files_detected() {
        assert!(is_hidden(std::path::Path::new("/tmp/.DS_Store")));
        assert!(!is_hidden(std::path::Path::new("/tmp/letter.txt")));
    }
}
