pub mod html;
pub mod report;
pub mod schema;
pub mod summary;
pub mod validate;

use crate::employees::{self, ParsedBatch};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read employee records from a CSV or JSON file (or stdin with "-")
pub fn read_employees(path: &Path) -> anyhow::Result<ParsedBatch> {
    if path.as_os_str() == "-" {
        return read_from_stdin();
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => employees::read_json(reader),
        // Default to CSV for .csv files and any other extension
        _ => Ok(employees::read_csv(reader)),
    }
}

fn read_from_stdin() -> anyhow::Result<ParsedBatch> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    // stdin is always treated as CSV
    Ok(employees::read_csv(io::Cursor::new(buffer)))
}
