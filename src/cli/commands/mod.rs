//! Command implementations for the patient processor CLI
//!
//! Each command lives in its own module:
//! - `process`: writes patient records and the statistics report
//! - `validate`: checks inputs and prints statistics without writing files
//! - `shared`: logging setup and configuration loading

pub mod process;
pub mod shared;
pub mod validate;

pub use process::run_process;
pub use validate::{ValidationSummary, run_validate};

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch to the handler for `command`
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Process(process_args) => run_process(process_args).map(|_| ()),
        Commands::Validate(validate_args) => run_validate(validate_args).map(|_| ()),
    }
}
