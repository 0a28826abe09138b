use anyhow::Context;
use clap::{CommandFactory, Parser};
use patient_processor::cli::args::{Args, Commands};
use patient_processor::cli::commands;
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and exit cleanly
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let command_name = match &command {
        Commands::Process(_) => "process",
        Commands::Validate(_) => "validate",
    };

    let result =
        commands::run(command).with_context(|| format!("{} command failed", command_name));

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information when no subcommand is provided
fn show_help_and_commands() {
    println!("Patient Processor - demographics and diagnosis events to JSON records");
    println!("=====================================================================");
    println!();
    println!("EXAMPLES:");
    println!("    # Process demo.psv and events.psv from the current directory:");
    println!("    patient-processor process");
    println!();
    println!("    # Custom inputs and output locations:");
    println!("    patient-processor process -d data/demo.psv -e data/events.psv \\");
    println!("                              -o out/patient -r out/statistics.txt");
    println!();
    println!("    # Check inputs without writing anything:");
    println!("    patient-processor validate --output-format json");
    println!();

    let mut command = Args::command();
    if command.print_help().is_err() {
        eprintln!("Failed to print help");
    }
    println!();
}
