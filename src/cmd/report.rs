//! Report command - per-employee tax table under both regimes

use crate::cmd::read_employees;
use crate::money::format_inr;
use crate::tax::{calculate_batch, Assessment, Regime};
use clap::{Args, ValueEnum};
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct ReportCommand {
    /// CSV or JSON file containing employee records
    #[arg(short, long)]
    employees: PathBuf,

    /// Filter by department
    #[arg(short, long)]
    department: Option<String>,

    /// Only show employees for whom the given regime is recommended
    #[arg(short, long, value_enum)]
    recommended: Option<RegimeArg>,

    /// Process only the first N records
    #[arg(short, long)]
    limit: Option<usize>,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RegimeArg {
    Old,
    New,
}

impl From<RegimeArg> for Regime {
    fn from(arg: RegimeArg) -> Self {
        match arg {
            RegimeArg::Old => Regime::Old,
            RegimeArg::New => Regime::New,
        }
    }
}

impl ReportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let batch = read_employees(&self.employees)?;

        let mut employees = batch.employees;
        if let Some(ref department) = self.department {
            employees.retain(|e| e.department.eq_ignore_ascii_case(department));
        }
        if let Some(limit) = self.limit {
            employees.truncate(limit);
        }

        let report = calculate_batch(&employees);

        let regime_filter = self.recommended.map(Regime::from);
        let assessments: Vec<&Assessment> = report
            .assessments
            .iter()
            .filter(|a| regime_filter.is_none_or(|r| a.recommended == r))
            .collect();

        if self.csv {
            write_csv(&assessments)?;
        } else {
            print_table(&assessments);
            println!();
            println!(
                "Employees: {} | Old regime total: {} | New regime total: {}",
                assessments.len(),
                format_inr(report.total_old_tax),
                format_inr(report.total_new_tax),
            );
        }

        if !batch.issues.is_empty() {
            eprintln!(
                "Warning: {} input row(s) skipped; run `taxin validate` for details",
                batch.issues.len()
            );
        }
        Ok(())
    }
}

fn print_table(assessments: &[&Assessment]) {
    if assessments.is_empty() {
        println!("No employees found matching filters");
        return;
    }

    let rows: Vec<AssessmentRow> = assessments
        .iter()
        .enumerate()
        .map(|(i, a)| AssessmentRow::new(i + 1, a))
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

fn write_csv(assessments: &[&Assessment]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for assessment in assessments {
        wtr.serialize(assessment)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Row for the formatted table output
#[derive(Debug, Clone, Tabled)]
struct AssessmentRow {
    #[tabled(rename = "#")]
    row_num: String,

    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Department")]
    department: String,

    #[tabled(rename = "Age")]
    age: String,

    #[tabled(rename = "Net Income")]
    net_income: String,

    #[tabled(rename = "Deductions")]
    deductions: String,

    #[tabled(rename = "Old Regime")]
    old_regime_tax: String,

    #[tabled(rename = "New Regime")]
    new_regime_tax: String,

    #[tabled(rename = "Recommended")]
    recommended: String,
}

impl AssessmentRow {
    fn new(row_num: usize, assessment: &Assessment) -> Self {
        AssessmentRow {
            row_num: format!("#{}", row_num),
            name: assessment.name.clone(),
            department: assessment.department.clone(),
            age: assessment.age.to_string(),
            net_income: format_inr(assessment.net_income),
            deductions: format_inr(assessment.deductions),
            old_regime_tax: format_inr(assessment.old_regime_tax),
            new_regime_tax: format_inr(assessment.new_regime_tax),
            recommended: assessment.recommended.to_string(),
        }
    }
}
