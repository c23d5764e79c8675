use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// One of the two statutory computation schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regime {
    Old,
    New,
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Regime::Old => write!(f, "Old"),
            Regime::New => write!(f, "New"),
        }
    }
}

/// Standard deduction on gross salary, identical for both regimes
pub const STANDARD_DEDUCTION: Decimal = dec!(50000);

/// Health and education cess on tax plus surcharge
pub const CESS_RATE: Decimal = dec!(0.04);

/// New regime pays nothing at or below this net income (s87A rebate)
pub const NEW_REGIME_REBATE_LIMIT: Decimal = dec!(700000);

/// New regime slab boundaries with the marginal rate up to each boundary
pub const NEW_REGIME_SLABS: &[(Decimal, Decimal)] = &[
    (dec!(300000), dec!(0.00)),
    (dec!(600000), dec!(0.05)),
    (dec!(900000), dec!(0.10)),
    (dec!(1200000), dec!(0.15)),
    (dec!(1500000), dec!(0.20)),
];

/// Rate on new regime income above the last slab boundary
pub const NEW_REGIME_TOP_RATE: Decimal = dec!(0.30);

/// Old regime basic exemption limit by age band
pub fn basic_exemption(age: u32) -> Decimal {
    match age {
        0..=59 => dec!(250000),
        60..=79 => dec!(300000),
        _ => dec!(500000),
    }
}

/// Surcharge band for a taxable base: `(entry threshold, rate on tax)`.
/// The top band rate differs by regime; `None` below the first threshold.
pub fn surcharge_band(taxable_base: Decimal, regime: Regime) -> Option<(Decimal, Decimal)> {
    if taxable_base > dec!(50000000) {
        let rate = match regime {
            Regime::New => dec!(0.25),
            Regime::Old => dec!(0.37),
        };
        Some((dec!(50000000), rate))
    } else if taxable_base > dec!(20000000) {
        Some((dec!(20000000), dec!(0.25)))
    } else if taxable_base > dec!(10000000) {
        Some((dec!(10000000), dec!(0.15)))
    } else if taxable_base > dec!(5000000) {
        Some((dec!(5000000), dec!(0.10)))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exemption_by_age_band() {
        assert_eq!(basic_exemption(0), dec!(250000));
        assert_eq!(basic_exemption(59), dec!(250000));
        assert_eq!(basic_exemption(60), dec!(300000));
        assert_eq!(basic_exemption(79), dec!(300000));
        assert_eq!(basic_exemption(80), dec!(500000));
        assert_eq!(basic_exemption(95), dec!(500000));
    }

    #[test]
    fn no_surcharge_at_or_below_fifty_lakh() {
        assert_eq!(surcharge_band(dec!(4999999), Regime::Old), None);
        assert_eq!(surcharge_band(dec!(5000000), Regime::New), None);
    }

    #[test]
    fn surcharge_bands_by_threshold() {
        assert_eq!(
            surcharge_band(dec!(5000001), Regime::Old),
            Some((dec!(5000000), dec!(0.10)))
        );
        assert_eq!(
            surcharge_band(dec!(10000001), Regime::New),
            Some((dec!(10000000), dec!(0.15)))
        );
        assert_eq!(
            surcharge_band(dec!(20000001), Regime::Old),
            Some((dec!(20000000), dec!(0.25)))
        );
    }

    #[test]
    fn top_band_rate_differs_by_regime() {
        assert_eq!(
            surcharge_band(dec!(50000001), Regime::Old),
            Some((dec!(50000000), dec!(0.37)))
        );
        assert_eq!(
            surcharge_band(dec!(50000001), Regime::New),
            Some((dec!(50000000), dec!(0.25)))
        );
    }
}
