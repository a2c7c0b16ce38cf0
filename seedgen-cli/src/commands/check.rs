//! Check command - run fixture health checks

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use comfy_table::{Cell, Color};
use serde_json::Value;

use super::{get_logger, load_output_config, log_event};
use crate::output;
use seedgen_core::{LogEvent, SeedgenContext};

/// Format a detail JSON value as "key: value, key: value"
fn format_detail(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| {
                let display_val = match v {
                    Value::String(s) => s.clone(),
                    Value::Array(arr) => arr
                        .iter()
                        .map(|item| item.as_str().map(str::to_string).unwrap_or_else(|| item.to_string()))
                        .collect::<Vec<_>>()
                        .join(", "),
                    _ => v.to_string(),
                };
                format!("{}: {}", k, display_val)
            })
            .collect::<Vec<_>>()
            .join(", "),
        Value::String(s) => s.clone(),
        _ => value.to_string(),
    }
}

pub fn run(output_dir: Option<PathBuf>, verbose: bool, json: bool) -> Result<()> {
    let ctx = SeedgenContext::from_config(load_output_config(output_dir)?);
    let fixture_dir = ctx.config.output_dir();
    let result = ctx.check_service.run_checks()?;

    let mut event = LogEvent::new("check_completed")
        .with_command("check")
        .with_output_dir(&fixture_dir);
    if result.summary.errors > 0 {
        event = event.with_error(format!("{} check(s) failed", result.summary.errors));
    }
    log_event(&get_logger(), event);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if result.summary.errors > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    println!("{}", "Fixture Health Check".bold());
    println!("{}", fixture_dir.display().to_string().dimmed());
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["Check", "Status", "Message"]);

    for (check_name, check_result) in &result.checks {
        let status_cell = match check_result.status.as_str() {
            "pass" => Cell::new("PASS").fg(Color::Green),
            "warning" => Cell::new("WARN").fg(Color::Yellow),
            "error" => Cell::new("ERROR").fg(Color::Red),
            _ => Cell::new(&check_result.status),
        };

        table.add_row(vec![
            Cell::new(check_name),
            status_cell,
            Cell::new(&check_result.message),
        ]);

        if verbose {
            if let Some(details) = &check_result.details {
                for detail in details {
                    table.add_row(vec![
                        Cell::new(""),
                        Cell::new(""),
                        Cell::new(format!("  - {}", format_detail(detail))),
                    ]);
                }
            }
        }
    }

    println!("{}", table);
    println!();

    println!(
        "Summary: {} passed, {} warnings, {} errors",
        result.summary.passed.to_string().green(),
        result.summary.warnings.to_string().yellow(),
        result.summary.errors.to_string().red(),
    );

    if result.summary.errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}
