//! Summary command - aggregated batch totals and regime comparison

use crate::cmd::read_employees;
use crate::money::format_inr;
use crate::tax::{calculate_batch, Regime};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SummaryCommand {
    /// CSV or JSON file containing employee records
    #[arg(short, long)]
    employees: PathBuf,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SummaryData {
    employee_count: usize,
    skipped_count: usize,
    total_old_tax: String,
    total_new_tax: String,
    recommended_old: usize,
    recommended_new: usize,
    cheaper_regime: String,
    total_saving: String,
}

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let batch = read_employees(&self.employees)?;
        let report = calculate_batch(&batch.employees);

        let data = SummaryData {
            employee_count: report.assessments.len(),
            skipped_count: batch.issues.len(),
            total_old_tax: format!("{:.2}", report.total_old_tax),
            total_new_tax: format!("{:.2}", report.total_new_tax),
            recommended_old: report.recommended_count(Regime::Old),
            recommended_new: report.recommended_count(Regime::New),
            cheaper_regime: report.cheaper_regime().to_string(),
            total_saving: format!("{:.2}", report.total_saving()),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&data)?);
            return Ok(());
        }

        println!();
        println!("BATCH SUMMARY");
        println!();
        if data.skipped_count > 0 {
            println!(
                "  Employees assessed: {} ({} rows skipped)",
                data.employee_count, data.skipped_count
            );
        } else {
            println!("  Employees assessed: {}", data.employee_count);
        }
        println!(
            "  Old regime total: {}",
            format_inr(report.total_old_tax)
        );
        println!(
            "  New regime total: {}",
            format_inr(report.total_new_tax)
        );
        println!(
            "  Recommended Old: {} | Recommended New: {}",
            data.recommended_old, data.recommended_new
        );
        println!(
            "  Cheaper overall: {} regime (saves {})",
            data.cheaper_regime,
            format_inr(report.total_saving())
        );
        println!();
        Ok(())
    }
}
