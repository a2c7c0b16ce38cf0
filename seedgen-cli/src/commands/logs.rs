//! Logs command - view and manage the event log

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use clap::Subcommand;
use colored::Colorize;

use super::get_seedgen_dir;
use crate::output;
use seedgen_core::{EntryPoint, LoggingService};

#[derive(Subcommand)]
pub enum LogsCommands {
    /// Show recent log entries
    List {
        /// Number of entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
        /// Show only errors
        #[arg(long)]
        errors: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear old log entries
    Clear {
        /// Delete logs older than N days
        #[arg(long, default_value = "30")]
        older_than_days: u64,
        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show generation/check counts and the database path
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn get_logging_service() -> Result<LoggingService> {
    let seedgen_dir = get_seedgen_dir();
    std::fs::create_dir_all(&seedgen_dir)?;
    LoggingService::new(&seedgen_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION"))
}

/// Event counts summarized for `logs stats`
#[derive(Debug, Default, PartialEq, Eq)]
struct LogStats {
    total: u64,
    generations_completed: u64,
    generations_failed: u64,
    checks_run: u64,
}

impl LogStats {
    fn from_counts(counts: &BTreeMap<String, u64>) -> Self {
        let get = |event: &str| counts.get(event).copied().unwrap_or(0);
        Self {
            total: counts.values().sum(),
            generations_completed: get("generation_completed"),
            generations_failed: get("generation_failed"),
            checks_run: get("check_completed"),
        }
    }
}

fn format_timestamp(timestamp_ms: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

pub fn run(command: LogsCommands) -> Result<()> {
    match command {
        LogsCommands::List { limit, errors, json } => {
            let service = get_logging_service()?;
            let entries = if errors {
                service.get_errors(limit)?
            } else {
                service.get_recent(limit)?
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }

            if entries.is_empty() {
                println!("No log entries found.");
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Time", "Event", "Seed", "Records", "Output", "Error"]);

            for entry in entries {
                table.add_row(vec![
                    format_timestamp(entry.timestamp),
                    entry.event,
                    entry.seed.map(|s| s.to_string()).unwrap_or_default(),
                    entry.record_count.map(|c| c.to_string()).unwrap_or_default(),
                    entry.output_dir.unwrap_or_default(),
                    entry
                        .error_message
                        .map(|m| m.red().to_string())
                        .unwrap_or_default(),
                ]);
            }

            println!("{}", table);
        }
        LogsCommands::Clear {
            older_than_days,
            force,
            json,
        } => {
            let service = get_logging_service()?;
            let cutoff_ms =
                Utc::now().timestamp_millis() - (older_than_days as i64 * 24 * 60 * 60 * 1000);

            if !force && !json {
                use dialoguer::Confirm;
                if !Confirm::new()
                    .with_prompt(format!("Delete logs older than {} days?", older_than_days))
                    .default(false)
                    .interact()?
                {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let deleted = service.delete_before(cutoff_ms)?;

            if json {
                println!(
                    "{}",
                    serde_json::json!({"deleted": deleted, "cutoff": format_timestamp(cutoff_ms)})
                );
            } else {
                println!(
                    "Deleted {} log entries recorded before {}",
                    deleted,
                    format_timestamp(cutoff_ms)
                );
            }
        }
        LogsCommands::Stats { json } => {
            let service = get_logging_service()?;
            let stats = LogStats::from_counts(&service.count_by_event()?);
            let db_path = service.db_path().to_path_buf();
            let size_bytes = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);

            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "total_entries": stats.total,
                        "generations_completed": stats.generations_completed,
                        "generations_failed": stats.generations_failed,
                        "checks_run": stats.checks_run,
                        "database_path": db_path.to_string_lossy(),
                        "database_size_bytes": size_bytes
                    })
                );
            } else {
                println!("{}", "Event Log".bold());
                println!(
                    "  Generations: {} completed, {} failed",
                    stats.generations_completed.to_string().green(),
                    stats.generations_failed.to_string().red(),
                );
                println!("  Checks run: {}", stats.checks_run);
                println!("  Total entries: {}", stats.total);
                println!(
                    "  Database: {} ({})",
                    db_path.display(),
                    output::format_size(size_bytes)
                );
            }
        }
    }

    Ok(())
}
