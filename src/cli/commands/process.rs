//! Process command implementation
//!
//! Loads the layered configuration, runs the full pipeline with a JSON file
//! sink and prints a run summary.

use super::shared::{apply_process_overrides, load_configuration, setup_logging};
use crate::Result;
use crate::app::services::output_sink::JsonFileSink;
use crate::app::services::pipeline::{Pipeline, PipelineSummary};
use crate::app::services::statistics::render_text;
use crate::cli::args::{OutputFormat, ProcessArgs};
use colored::Colorize;
use indicatif::HumanDuration;
use tracing::{debug, info};

/// Process command runner
///
/// 1. Set up logging and configuration
/// 2. Validate inputs and create the output directory
/// 3. Write patient records and the statistics report
/// 4. Print the run summary
pub fn run_process(args: ProcessArgs) -> Result<PipelineSummary> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting patient processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let mut config = load_configuration(&args.input)?;
    apply_process_overrides(&mut config, &args);
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    let mut sink = JsonFileSink::new(&config.output_dir)?;
    let summary = Pipeline::new(config).run(&mut sink)?;

    if !args.quiet {
        generate_final_report(args.output_format, &summary, sink.output_dir())?;
    }

    Ok(summary)
}

/// Generate final processing report
fn generate_final_report(
    format: OutputFormat,
    summary: &PipelineSummary,
    output_dir: &std::path::Path,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            generate_human_report(summary, output_dir);
            Ok(())
        }
        OutputFormat::Json => generate_json_report(summary, output_dir),
    }
}

fn generate_human_report(summary: &PipelineSummary, output_dir: &std::path::Path) {
    println!("\n{}", "Patient Processing Complete".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Input Summary:");
    println!(
        "   • Demographics: {} rows read, {} kept, {} rejected",
        summary.demographics.rows_read,
        summary.demographics.rows_kept,
        summary.demographics.rows_rejected
    );
    println!(
        "   • Events: {} rows read, {} kept, {} rejected",
        summary.events.rows_read, summary.events.rows_kept, summary.events.rows_rejected
    );
    println!(
        "   • Patients merged: {} ({} demographics only, {} events only)",
        summary.merge.merged, summary.merge.demographics_only, summary.merge.events_only
    );
    println!(
        "   • Records written: {} to {}",
        summary.records_written,
        output_dir.display()
    );
    match &summary.report_path {
        Some(path) => println!("   • Statistics report: {}", path.display()),
        None => println!("   • Statistics report: {}", "skipped".yellow()),
    }
    println!("   • Processing time: {}", HumanDuration(summary.elapsed));

    if summary.demographics.rows_rejected + summary.events.rows_rejected > 0 {
        println!(
            "{}",
            format!(
                "Incomplete rows dropped: {}",
                summary.demographics.rows_rejected + summary.events.rows_rejected
            )
            .yellow()
        );
    }

    println!("\nStatistics:");
    for line in render_text(&summary.statistics).lines() {
        println!("   {}", line);
    }
    println!();
}

/// Generate JSON report for machine consumption
fn generate_json_report(summary: &PipelineSummary, output_dir: &std::path::Path) -> Result<()> {
    let json = serde_json::json!({
        "output_dir": output_dir,
        "processing_time_seconds": summary.elapsed.as_secs_f64(),
        "summary": summary,
    });

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
