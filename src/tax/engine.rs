//! Pure tax computation for a single individual.
//!
//! All functions are deterministic and side-effect free: identical inputs
//! always produce identical outputs. Amounts are `Decimal` rupees; final
//! tax figures are rounded to 2 decimal places.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::tax::slabs::{
    basic_exemption, surcharge_band, Regime, CESS_RATE, NEW_REGIME_REBATE_LIMIT,
    NEW_REGIME_SLABS, NEW_REGIME_TOP_RATE, STANDARD_DEDUCTION,
};

/// Net salary income after the standard deduction, clamped at zero.
pub fn standard_deduction(gross_income: Decimal) -> Decimal {
    (gross_income - STANDARD_DEDUCTION).max(Decimal::ZERO)
}

/// Old regime tax: claimed deductions reduce income, the basic exemption
/// depends on the age band, then the 5/20/30 slab schedule applies.
pub fn old_regime_tax(net_income: Decimal, deductions: Decimal, age: u32) -> Decimal {
    let taxable = (net_income - deductions).max(Decimal::ZERO);
    let exemption = basic_exemption(age);
    if taxable <= exemption {
        return Decimal::ZERO;
    }

    let tax = if taxable <= dec!(500000) {
        (taxable - exemption) * dec!(0.05)
    } else if taxable <= dec!(1000000) {
        (dec!(500000) - exemption) * dec!(0.05) + (taxable - dec!(500000)) * dec!(0.20)
    } else {
        (dec!(500000) - exemption) * dec!(0.05)
            + dec!(500000) * dec!(0.20)
            + (taxable - dec!(1000000)) * dec!(0.30)
    };

    surcharge_and_cess(tax, taxable, Regime::Old)
}

/// New regime tax: no deductions, fixed slab walk, full rebate at or
/// below the rebate limit.
pub fn new_regime_tax(net_income: Decimal) -> Decimal {
    if net_income <= NEW_REGIME_REBATE_LIMIT {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    let mut lower = Decimal::ZERO;
    for &(boundary, rate) in NEW_REGIME_SLABS {
        if net_income > boundary {
            tax += (boundary - lower) * rate;
            lower = boundary;
        } else {
            tax += (net_income - lower) * rate;
            lower = net_income;
            break;
        }
    }
    if net_income > lower {
        // Income above the last slab boundary
        tax += (net_income - lower) * NEW_REGIME_TOP_RATE;
    }

    surcharge_and_cess(tax, net_income, Regime::New)
}

/// Apply surcharge (with marginal relief) and the 4% cess.
///
/// Marginal relief caps the surcharge at the amount by which the taxable
/// base exceeds the band's entry threshold, so crossing a threshold can
/// never cost more than the income that crossed it.
pub fn surcharge_and_cess(tax: Decimal, taxable_base: Decimal, regime: Regime) -> Decimal {
    let surcharge = match surcharge_band(taxable_base, regime) {
        Some((threshold, rate)) => (tax * rate).min(taxable_base - threshold),
        None => Decimal::ZERO,
    };
    let cess = (tax + surcharge) * CESS_RATE;
    (tax + surcharge + cess).round_dp(2)
}
