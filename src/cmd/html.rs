//! HTML report generation - self-contained file with a regime comparison chart

use crate::cmd::read_employees;
use crate::money::{format_inr, format_inr_compact};
use crate::tax::{calculate_batch, BatchReport};
use clap::Args;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct HtmlCommand {
    /// CSV or JSON file containing employee records
    #[arg(short, long)]
    employees: PathBuf,

    /// Output file path (default: opens in browser)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl HtmlCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let batch = read_employees(&self.employees)?;
        let report = calculate_batch(&batch.employees);
        let html = generate(&report);

        if let Some(ref output_path) = self.output {
            std::fs::write(output_path, &html)?;
            println!("HTML report written to: {}", output_path.display());
        } else {
            // Write to temp file and open in browser
            let temp_path = std::env::temp_dir().join("taxin-report.html");
            std::fs::write(&temp_path, &html)?;
            opener::open(&temp_path)?;
            println!("Opened HTML report in browser: {}", temp_path.display());
        }
        Ok(())
    }
}

/// Generate the HTML report content
pub fn generate(report: &BatchReport) -> String {
    let mut rows = String::new();
    for assessment in &report.assessments {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td>\
             <td class=\"num\">{}</td><td class=\"num\">{}</td>\
             <td class=\"num\">{}</td><td class=\"num\">{}</td><td>{}</td></tr>\n",
            escape(&assessment.name),
            escape(&assessment.department),
            assessment.age,
            format_inr(assessment.net_income),
            format_inr(assessment.deductions),
            format_inr(assessment.old_regime_tax),
            format_inr(assessment.new_regime_tax),
            assessment.recommended,
        );
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Income Tax Report</title>
<style>
body {{ font-family: system-ui, sans-serif; margin: 2rem; color: #1f2937; background: #f7f9fc; }}
h1 {{ color: #0f4c81; }}
.cards {{ display: flex; gap: 1rem; margin: 1rem 0; flex-wrap: wrap; }}
.card {{ background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem 1.5rem; }}
.card h3 {{ margin: 0 0 .25rem; font-size: .8rem; text-transform: uppercase; color: #6b7280; }}
.card .value {{ margin: 0; font-size: 1.3rem; font-weight: 600; }}
table {{ border-collapse: collapse; background: #fff; width: 100%; }}
th, td {{ border: 1px solid #e5e7eb; padding: .4rem .7rem; text-align: left; }}
th {{ background: #0f4c81; color: #fff; }}
td.num {{ text-align: right; font-variant-numeric: tabular-nums; }}
.chart {{ margin: 1.5rem 0; }}
</style>
</head>
<body>
<h1>Indian Income Tax Report</h1>
<section class="cards">
  <div class="card"><h3>Employees</h3><p class="value">{employee_count}</p></div>
  <div class="card"><h3>Old Regime Total</h3><p class="value">{total_old}</p></div>
  <div class="card"><h3>New Regime Total</h3><p class="value">{total_new}</p></div>
  <div class="card"><h3>Cheaper Overall</h3><p class="value">{cheaper} (saves {saving})</p></div>
</section>
<section class="chart">
{chart}
</section>
<table>
<thead><tr><th>Name</th><th>Department</th><th>Age</th><th>Net Income</th>
<th>Deductions</th><th>Old Regime</th><th>New Regime</th><th>Recommended</th></tr></thead>
<tbody>
{rows}</tbody>
</table>
</body>
</html>
"##,
        employee_count = report.assessments.len(),
        total_old = format_inr(report.total_old_tax),
        total_new = format_inr(report.total_new_tax),
        cheaper = report.cheaper_regime(),
        saving = format_inr(report.total_saving()),
        chart = bar_chart(report.total_old_tax, report.total_new_tax),
        rows = rows,
    )
}

/// Two-bar SVG comparing the regime totals
fn bar_chart(total_old: Decimal, total_new: Decimal) -> String {
    const HEIGHT: u32 = 220;
    const BAR_MAX: u32 = 170;

    let max = total_old.max(total_new);
    let scale = |value: Decimal| -> u32 {
        if max.is_zero() {
            return 0;
        }
        // Proportional height, floored to whole pixels
        (value * Decimal::from(BAR_MAX) / max).to_u32().unwrap_or(0)
    };

    let old_h = scale(total_old);
    let new_h = scale(total_new);
    format!(
        r##"<svg width="360" height="{h}" role="img" aria-label="Total tax comparison">
<text x="180" y="16" text-anchor="middle" font-weight="bold">Total Tax Comparison</text>
<rect x="70" y="{old_y}" width="80" height="{old_h}" fill="#0f4c81"/>
<rect x="210" y="{new_y}" width="80" height="{new_h}" fill="#2563eb"/>
<text x="110" y="{old_label_y}" text-anchor="middle" font-size="12">{old_label}</text>
<text x="250" y="{new_label_y}" text-anchor="middle" font-size="12">{new_label}</text>
<text x="110" y="{axis_y}" text-anchor="middle">Old Regime</text>
<text x="250" y="{axis_y}" text-anchor="middle">New Regime</text>
</svg>"##,
        h = HEIGHT,
        old_y = HEIGHT - 30 - old_h,
        new_y = HEIGHT - 30 - new_h,
        old_h = old_h,
        new_h = new_h,
        old_label_y = HEIGHT - 34 - old_h,
        new_label_y = HEIGHT - 34 - new_h,
        old_label = format_inr_compact(total_old),
        new_label = format_inr_compact(total_new),
        axis_y = HEIGHT - 10,
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employees::Employee;
    use crate::tax::calculate_batch;
    use rust_decimal_macros::dec;

    #[test]
    fn report_contains_totals_and_rows() {
        let employees = vec![Employee {
            name: "Asha".to_string(),
            department: "R&D".to_string(),
            age: 40,
            gross_income: dec!(1000000),
            deductions: dec!(150000),
        }];
        let report = calculate_batch(&employees);
        let html = generate(&report);
        assert!(html.contains("Asha"));
        assert!(html.contains("R&amp;D"));
        assert!(html.contains("₹75,400.00"));
        assert!(html.contains("Total Tax Comparison"));
    }

    #[test]
    fn empty_batch_renders_zero_bars() {
        let report = calculate_batch(&[]);
        let html = generate(&report);
        assert!(html.contains("height=\"0\""));
        assert!(html.contains("₹0.00"));
    }
}
