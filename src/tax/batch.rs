//! Batch driver: applies the engine across a collection of employees.
//!
//! Each record is independent; the driver performs no I/O and keeps no
//! state beyond the running regime totals.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::employees::Employee;
use crate::tax::engine::{new_regime_tax, old_regime_tax, standard_deduction};
use crate::tax::slabs::Regime;

/// Computed tax position for a single employee, immutable once produced
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub name: String,
    pub department: String,
    pub age: u32,
    /// Salary income after the standard deduction
    pub net_income: Decimal,
    pub deductions: Decimal,
    pub old_regime_tax: Decimal,
    pub new_regime_tax: Decimal,
    pub recommended: Regime,
}

/// Assess one employee under both regimes.
///
/// Ties go to the new regime: only a strictly lower old-regime tax
/// produces an `Old` recommendation.
pub fn assess(employee: &Employee) -> Assessment {
    let net_income = standard_deduction(employee.gross_income);
    let old_tax = old_regime_tax(net_income, employee.deductions, employee.age);
    let new_tax = new_regime_tax(net_income);
    let recommended = if old_tax < new_tax {
        Regime::Old
    } else {
        Regime::New
    };
    log::debug!(
        "{}: net {} old {} new {} -> {}",
        employee.name,
        net_income,
        old_tax,
        new_tax,
        recommended
    );
    Assessment {
        name: employee.name.clone(),
        department: employee.department.clone(),
        age: employee.age,
        net_income,
        deductions: employee.deductions,
        old_regime_tax: old_tax,
        new_regime_tax: new_tax,
        recommended,
    }
}

/// Batch result with running totals for summary reporting
#[derive(Debug, Default)]
pub struct BatchReport {
    pub assessments: Vec<Assessment>,
    pub total_old_tax: Decimal,
    pub total_new_tax: Decimal,
}

impl BatchReport {
    pub fn recommended_count(&self, regime: Regime) -> usize {
        self.assessments
            .iter()
            .filter(|a| a.recommended == regime)
            .count()
    }

    /// Regime that is cheaper across the whole batch; ties go to New
    pub fn cheaper_regime(&self) -> Regime {
        if self.total_old_tax < self.total_new_tax {
            Regime::Old
        } else {
            Regime::New
        }
    }

    /// Saving of the cheaper regime's total over the other's
    pub fn total_saving(&self) -> Decimal {
        (self.total_old_tax - self.total_new_tax).abs()
    }
}

/// Compute assessments for every record in input order.
///
/// An empty batch yields an empty report with zero totals.
pub fn calculate_batch(employees: &[Employee]) -> BatchReport {
    let mut report = BatchReport::default();
    for employee in employees {
        let assessment = assess(employee);
        report.total_old_tax += assessment.old_regime_tax;
        report.total_new_tax += assessment.new_regime_tax;
        report.assessments.push(assessment);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn employee(name: &str, age: u32, gross: Decimal, deductions: Decimal) -> Employee {
        Employee {
            name: name.to_string(),
            department: "Engineering".to_string(),
            age,
            gross_income: gross,
            deductions,
        }
    }

    #[test]
    fn assess_applies_standard_deduction_first() {
        let a = assess(&employee("Asha", 40, dec!(1000000), dec!(150000)));
        assert_eq!(a.net_income, dec!(950000));
        assert_eq!(a.old_regime_tax, dec!(75400));
    }

    #[test]
    fn mid_income_recommends_new() {
        let a = assess(&employee("Ravi", 30, dec!(600000), dec!(0)));
        assert_eq!(a.new_regime_tax, dec!(0));
        assert_eq!(a.old_regime_tax, dec!(23400));
        assert_eq!(a.recommended, Regime::New);
    }

    #[test]
    fn heavy_deductions_recommend_old() {
        // Net 9.5L with 4L of deductions: old taxable 5.5L -> 23,400
        // versus new regime on 9.5L -> 54,600
        let a = assess(&employee("Meera", 45, dec!(1000000), dec!(400000)));
        assert!(a.old_regime_tax < a.new_regime_tax);
        assert_eq!(a.recommended, Regime::Old);
    }

    #[test]
    fn equal_taxes_recommend_new() {
        // Income fully covered by both regimes' zero bands
        let a = assess(&employee("Kiran", 40, dec!(250000), dec!(0)));
        assert_eq!(a.old_regime_tax, a.new_regime_tax);
        assert_eq!(a.recommended, Regime::New);
    }

    #[test]
    fn batch_accumulates_totals_in_order() {
        let employees = vec![
            employee("Asha", 40, dec!(1000000), dec!(150000)),
            employee("Ravi", 30, dec!(600000), dec!(0)),
        ];
        let report = calculate_batch(&employees);
        assert_eq!(report.assessments.len(), 2);
        assert_eq!(report.assessments[0].name, "Asha");
        assert_eq!(report.assessments[1].name, "Ravi");
        assert_eq!(report.total_old_tax, dec!(75400) + dec!(23400));
        assert_eq!(report.total_new_tax, dec!(54600));
        assert_eq!(report.recommended_count(Regime::New), 2);
        assert_eq!(report.recommended_count(Regime::Old), 0);
    }

    #[test]
    fn empty_batch_is_zeroes() {
        let report = calculate_batch(&[]);
        assert!(report.assessments.is_empty());
        assert_eq!(report.total_old_tax, Decimal::ZERO);
        assert_eq!(report.total_new_tax, Decimal::ZERO);
        assert_eq!(report.cheaper_regime(), Regime::New);
        assert_eq!(report.total_saving(), Decimal::ZERO);
    }

    #[test]
    fn cheaper_regime_over_batch() {
        let employees = vec![employee("Meera", 45, dec!(1000000), dec!(400000))];
        let report = calculate_batch(&employees);
        assert_eq!(report.cheaper_regime(), Regime::Old);
        assert_eq!(
            report.total_saving(),
            report.total_new_tax - report.total_old_tax
        );
    }
}
