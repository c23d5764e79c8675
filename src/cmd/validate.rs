//! Validate command - surface bad input rows without generating a report

use crate::cmd::read_employees;
use crate::employees::RowIssue;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// CSV or JSON file containing employee records
    #[arg(short, long)]
    employees: PathBuf,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// JSON output structure
#[derive(Debug, Serialize)]
struct ValidationOutput<'a> {
    record_count: usize,
    issue_count: usize,
    issues: &'a [RowIssue],
}

impl ValidateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let batch = read_employees(&self.employees)?;

        if self.json {
            let output = ValidationOutput {
                record_count: batch.employees.len(),
                issue_count: batch.issues.len(),
                issues: &batch.issues,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            self.print_text(&batch.issues, batch.employees.len());
        }

        // Exit with code 1 if issues found
        if !batch.issues.is_empty() {
            std::process::exit(1);
        }
        Ok(())
    }

    fn print_text(&self, issues: &[RowIssue], record_count: usize) {
        println!();
        println!("VALIDATION RESULTS ({} valid records)", record_count);
        println!();

        if issues.is_empty() {
            println!("\u{2713} No issues found.");
            return;
        }

        println!("\u{26A0} {} issue(s) found:", issues.len());
        println!();
        for issue in issues {
            match &issue.name {
                Some(name) => println!("  row {} ({}): {}", issue.row, name, issue.reason),
                None => println!("  row {}: {}", issue.row, issue.reason),
            }
        }
        println!();
    }
}
