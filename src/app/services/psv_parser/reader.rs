//! Line splitting and file reading for PSV sources
//!
//! Every line becomes one [`PsvRow`]. Only the final field is trimmed, which
//! removes the line terminator and any trailing padding; inner fields are
//! kept verbatim so that completeness checks see exactly what was written.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::app::models::PsvRow;
use crate::constants::FIELD_DELIMITER;
use crate::{Error, Result};

/// Split one line into its fields, trimming only the last one
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields: Vec<String> = line.split(FIELD_DELIMITER).map(str::to_string).collect();

    if let Some(last) = fields.last_mut() {
        let trimmed = last.trim();
        if trimmed.len() != last.len() {
            *last = trimmed.to_string();
        }
    }

    fields
}

/// Parse every line of a buffered source into rows
pub fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<PsvRow>> {
    let mut rows = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| Error::io("Failed to read line", e))?;
        rows.push(PsvRow::from_fields(split_line(&line))?);
    }

    Ok(rows)
}

/// Read a whole PSV file into rows, header row included
pub fn read_psv(path: &Path) -> Result<Vec<PsvRow>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::io(format!("Failed to open {}", path.display()), e)
        }
    })?;

    let rows = parse_lines(BufReader::new(file)).map_err(|e| match e {
        Error::Io { source, .. } => {
            Error::io(format!("Failed to read {}", path.display()), source)
        }
        other => other,
    })?;

    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
