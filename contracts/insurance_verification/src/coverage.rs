//! Required coverage for a property.
//!
//! ```text
//! required = property_value / 2 + property_value * (risk_score * 100) / 100_000
//! ```
//!
//! A flat 50% floor plus a surcharge proportional to the risk score. The
//! multiplication happens before the division so integer truncation only
//! applies once.

use shared::constants::{COVERAGE_FLOOR_DIVISOR, RISK_FACTOR_DIVISOR, RISK_FACTOR_MULTIPLIER};

use crate::errors::InsuranceError;

pub fn required_coverage(risk_score: u32, property_value: u128) -> Result<u128, InsuranceError> {
    let floor = property_value / COVERAGE_FLOOR_DIVISOR;

    let risk_factor = (risk_score as u128)
        .checked_mul(RISK_FACTOR_MULTIPLIER)
        .ok_or(InsuranceError::ArithmeticOverflow)?;
    let surcharge = property_value
        .checked_mul(risk_factor)
        .ok_or(InsuranceError::ArithmeticOverflow)?
        / RISK_FACTOR_DIVISOR;

    floor
        .checked_add(surcharge)
        .ok_or(InsuranceError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        assert_eq!(required_coverage(20, 1_000_000), Ok(520_000));
        assert_eq!(required_coverage(80, 1_000_000), Ok(580_000));
        assert_eq!(required_coverage(50, 500_000), Ok(275_000));
        assert_eq!(required_coverage(80, 500_000), Ok(290_000));
    }

    #[test]
    fn test_zero_inputs() {
        assert_eq!(required_coverage(0, 1_000_000), Ok(500_000));
        assert_eq!(required_coverage(100, 0), Ok(0));
    }

    #[test]
    fn test_truncation() {
        // 7 / 2 = 3, 7 * 1000 / 100_000 = 0
        assert_eq!(required_coverage(10, 7), Ok(3));
        // 999 * 9900 / 100_000 = 98 (98.901 truncated)
        assert_eq!(required_coverage(99, 999), Ok(499 + 98));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            required_coverage(100, u128::MAX),
            Err(InsuranceError::ArithmeticOverflow)
        );
        assert_eq!(required_coverage(0, u128::MAX), Ok(u128::MAX / 2));
    }
}
