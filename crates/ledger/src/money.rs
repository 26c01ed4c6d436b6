use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

/// Signed money amount represented as integer **minor units** (kuruş).
///
/// Use this type for all monetary values in the ledger (transaction amounts,
/// running balances, statement totals) to avoid floating-point drift.
///
/// # Examples
///
/// ```rust
/// use ledger::Money;
///
/// let amount = Money::new(1_234_50);
/// assert_eq!(amount.minor(), 123450);
/// assert_eq!(amount.to_string(), "1234.50");
/// assert_eq!(amount.to_tr_string(), "1.234,50");
/// ```
///
/// Backend amounts arrive in major units and are rounded once:
///
/// ```rust
/// use ledger::Money;
///
/// assert_eq!(Money::from_major_f64(150.25).minor(), 15025);
/// assert_eq!(Money::from_major_f64(-2000.0).abs().to_tr_string(), "2.000,00");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Converts a backend amount in major units, rounding to the nearest
    /// minor unit.
    ///
    /// Non-finite values become zero; out of range values saturate.
    #[must_use]
    pub fn from_major_f64(major: f64) -> Self {
        if !major.is_finite() {
            return Self::ZERO;
        }
        Self((major * 100.0).round() as i64)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Absolute value, saturating at `i64::MAX`.
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Formats the amount the way Turkish statements print it: `.` groups
    /// thousands and `,` separates decimals.
    #[must_use]
    pub fn to_tr_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let major = (abs / 100).to_string();
        let minor = abs % 100;

        let mut grouped = String::with_capacity(major.len() + major.len() / 3);
        for (i, c) in major.chars().enumerate() {
            if i > 0 && (major.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        format!("{sign}{grouped},{minor:02}")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_plain_decimal() {
        assert_eq!(Money::new(0).to_string(), "0.00");
        assert_eq!(Money::new(1).to_string(), "0.01");
        assert_eq!(Money::new(1050).to_string(), "10.50");
        assert_eq!(Money::new(-1050).to_string(), "-10.50");
    }

    #[test]
    fn tr_format_groups_thousands() {
        assert_eq!(Money::new(0).to_tr_string(), "0,00");
        assert_eq!(Money::new(99_999).to_tr_string(), "999,99");
        assert_eq!(Money::new(500_000).to_tr_string(), "5.000,00");
        assert_eq!(Money::new(123_456_789).to_tr_string(), "1.234.567,89");
        assert_eq!(Money::new(-300_000).to_tr_string(), "-3.000,00");
    }

    #[test]
    fn from_major_rounds_to_minor_units() {
        assert_eq!(Money::from_major_f64(5000.0).minor(), 500_000);
        assert_eq!(Money::from_major_f64(12.346).minor(), 1235);
        assert_eq!(Money::from_major_f64(0.1 + 0.2).minor(), 30);
        assert_eq!(Money::from_major_f64(f64::NAN), Money::ZERO);
        assert_eq!(Money::from_major_f64(f64::INFINITY), Money::ZERO);
    }
}
