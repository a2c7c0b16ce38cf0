//! Generate command - write every fixture file

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use super::{get_logger, load_config, log_event};
use crate::output;
use seedgen_core::{LogEvent, SeedgenContext};

pub fn run(seed: Option<u64>, output_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let logger = get_logger();
    let config = load_config(seed, output_dir)?;
    let ctx = SeedgenContext::from_config(config);

    let report = match ctx.generate() {
        Ok(report) => report,
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("generation_failed")
                    .with_command("generate")
                    .with_seed(ctx.config.seed)
                    .with_error(e.to_string())
                    .with_error_details(format!("{:#}", e)),
            );
            return Err(e);
        }
    };

    log_event(
        &logger,
        LogEvent::new("generation_completed")
            .with_command("generate")
            .with_seed(report.seed)
            .with_record_count(report.transaction_count)
            .with_output_dir(&report.output_dir),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::success(&format!("Seeds generated at: {}", report.output_dir.display()));
    println!(
        "Transactions generated: {}",
        report.transaction_count.to_string().bold()
    );

    Ok(())
}
