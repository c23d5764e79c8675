use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;
use taxin_derive::CsvColumns;
use thiserror::Error;

/// Unified JSON input format
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BatchInput {
    pub employees: Vec<EmployeeRow>,
}

/// Description of a single CSV input column
#[derive(Debug, Clone, Copy)]
pub struct CsvColumn {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// Raw input row; CSV headers match the payroll export format
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, CsvColumns)]
pub struct EmployeeRow {
    /// Employee name or identifier
    #[serde(rename = "Name")]
    pub name: String,
    /// Department label, informational only
    #[serde(rename = "Department")]
    pub department: String,
    /// Age in completed years
    #[serde(rename = "Age")]
    pub age: i64,
    /// Annual gross salary income in rupees
    #[serde(rename = "GrossIncome")]
    pub gross_income: Decimal,
    /// Deductions claimed under the old regime, in rupees
    #[serde(rename = "Deductions")]
    pub deductions: Decimal,
}

/// A validated employee record
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub department: String,
    pub age: u32,
    pub gross_income: Decimal,
    pub deductions: Decimal,
}

/// Why a single row was rejected
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("age must be non-negative, got {0}")]
    NegativeAge(i64),
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = RecordError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let age = u32::try_from(row.age).map_err(|_| RecordError::NegativeAge(row.age))?;
        if row.gross_income < Decimal::ZERO {
            return Err(RecordError::NegativeAmount {
                field: "GrossIncome",
                value: row.gross_income,
            });
        }
        if row.deductions < Decimal::ZERO {
            return Err(RecordError::NegativeAmount {
                field: "Deductions",
                value: row.deductions,
            });
        }
        Ok(Employee {
            name: row.name,
            department: row.department,
            age,
            gross_income: row.gross_income,
            deductions: row.deductions,
        })
    }
}

/// A row that could not be parsed or failed validation
#[derive(Debug, Clone, Serialize)]
pub struct RowIssue {
    /// 1-based row number in the source file (CSV header is row 1)
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub reason: String,
}

/// Parse result: valid records plus flagged rows.
///
/// A bad row never aborts the batch; it is recorded here and skipped.
#[derive(Debug, Default)]
pub struct ParsedBatch {
    pub employees: Vec<Employee>,
    pub issues: Vec<RowIssue>,
}

/// Read employee records from CSV, flagging bad rows instead of failing
pub fn read_csv<R: Read>(reader: R) -> ParsedBatch {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut batch = ParsedBatch::default();
    for (i, result) in rdr.deserialize::<EmployeeRow>().enumerate() {
        let row = i + 2; // data starts after the header row
        match result {
            Ok(raw) => push_validated(&mut batch, raw, row),
            Err(err) => batch.issues.push(RowIssue {
                row,
                name: None,
                reason: err.to_string(),
            }),
        }
    }
    log::info!(
        "Read {} employee records, {} rows flagged",
        batch.employees.len(),
        batch.issues.len()
    );
    batch
}

/// Read employee records from JSON (`BatchInput` format)
pub fn read_json<R: Read>(reader: R) -> anyhow::Result<ParsedBatch> {
    let input: BatchInput = serde_json::from_reader(reader)?;
    let mut batch = ParsedBatch::default();
    for (i, raw) in input.employees.into_iter().enumerate() {
        push_validated(&mut batch, raw, i + 1);
    }
    log::info!(
        "Read {} employee records, {} rows flagged",
        batch.employees.len(),
        batch.issues.len()
    );
    Ok(batch)
}

fn push_validated(batch: &mut ParsedBatch, raw: EmployeeRow, row: usize) {
    let name = raw.name.clone();
    match Employee::try_from(raw) {
        Ok(employee) => batch.employees.push(employee),
        Err(err) => batch.issues.push(RowIssue {
            row,
            name: Some(name),
            reason: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_csv_rows() {
        let csv_data = "\
Name,Department,Age,GrossIncome,Deductions
Asha,Engineering,40,1000000,150000
Ravi,Sales,62,600000,0";

        let batch = read_csv(csv_data.as_bytes());
        assert!(batch.issues.is_empty());
        assert_eq!(batch.employees.len(), 2);
        assert_eq!(batch.employees[0].name, "Asha");
        assert_eq!(batch.employees[0].age, 40);
        assert_eq!(batch.employees[0].gross_income, dec!(1000000));
        assert_eq!(batch.employees[0].deductions, dec!(150000));
        assert_eq!(batch.employees[1].department, "Sales");
    }

    #[test]
    fn bad_rows_flagged_not_fatal() {
        let csv_data = "\
Name,Department,Age,GrossIncome,Deductions
Asha,Engineering,40,1000000,150000
Kiran,Finance,-3,500000,0
Meera,HR,35,not-a-number,0
Ravi,Sales,62,600000,0";

        let batch = read_csv(csv_data.as_bytes());
        assert_eq!(batch.employees.len(), 2);
        assert_eq!(batch.issues.len(), 2);
        assert_eq!(batch.issues[0].row, 3);
        assert_eq!(batch.issues[0].name.as_deref(), Some("Kiran"));
        assert!(batch.issues[0].reason.contains("age"));
        assert_eq!(batch.issues[1].row, 4);
    }

    #[test]
    fn negative_amounts_rejected() {
        let row = EmployeeRow {
            name: "X".to_string(),
            department: "Y".to_string(),
            age: 30,
            gross_income: dec!(-1),
            deductions: dec!(0),
        };
        assert_eq!(
            Employee::try_from(row),
            Err(RecordError::NegativeAmount {
                field: "GrossIncome",
                value: dec!(-1)
            })
        );
    }

    #[test]
    fn parse_json_batch() {
        let json_data = r#"{
            "employees": [
                {
                    "Name": "Asha",
                    "Department": "Engineering",
                    "Age": 40,
                    "GrossIncome": 1000000,
                    "Deductions": 150000
                }
            ]
        }"#;

        let batch = read_json(json_data.as_bytes()).unwrap();
        assert_eq!(batch.employees.len(), 1);
        assert!(batch.issues.is_empty());
    }

    #[test]
    fn empty_csv_is_not_an_error() {
        let batch = read_csv("Name,Department,Age,GrossIncome,Deductions".as_bytes());
        assert!(batch.employees.is_empty());
        assert!(batch.issues.is_empty());
    }

    #[test]
    fn csv_columns_match_headers() {
        let columns = EmployeeRow::csv_columns();
        let names: Vec<_> = columns.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            ["Name", "Department", "Age", "GrossIncome", "Deductions"]
        );
        assert!(columns.iter().all(|c| c.required));
    }
}
