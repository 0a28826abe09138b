//! Shared components for CLI commands
//!
//! Logging setup and layered configuration loading used by every command.

use crate::cli::args::{InputArgs, ProcessArgs};
use crate::config::PipelineConfig;
use crate::{Error, Result};
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the level derived from the flags.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("patient_processor={}", log_level)));

    let init_result = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    init_result
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (file, then CLI flags)
///
/// An explicit `--config` file must exist. Without one, the default config
/// location is used only when a file is present there.
pub fn load_configuration(input: &InputArgs) -> Result<PipelineConfig> {
    info!("Loading configuration");

    let default_config_path = if input.config_file.is_none() {
        PipelineConfig::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &input.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults");
    }

    let mut config = PipelineConfig::load_layered(config_file)?;
    apply_input_overrides(&mut config, input);

    Ok(config)
}

/// Apply input file flags to the configuration
pub fn apply_input_overrides(config: &mut PipelineConfig, input: &InputArgs) {
    if let Some(demographics) = &input.demographics {
        config.demographics_path = demographics.clone();
    }
    if let Some(events) = &input.events {
        config.events_path = events.clone();
    }
}

/// Apply process command flags to the configuration
pub fn apply_process_overrides(config: &mut PipelineConfig, args: &ProcessArgs) {
    apply_input_overrides(config, &args.input);

    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(report) = &args.report {
        config.report_path = report.clone();
    }
    if let Some(report_format) = args.report_format {
        config.report_format = report_format;
    }

    // An explicit report flag re-enables a report the config file turned off
    if args.no_report {
        config.write_report = false;
    } else if args.requests_report() {
        config.write_report = true;
    }

    if let Some(show_progress) = args.progress_override() {
        config.show_progress = show_progress;
    }
}
