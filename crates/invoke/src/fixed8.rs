//! Fixed-point gas amounts.
//!
//! Amounts are stored as an `i64` count of 10^-8 units, the precision gas
//! and asset values use on the ledger.

use std::fmt;
use std::ops::{Add, Sub};

const DECIMALS: u32 = 8;
const D: i64 = 100_000_000;

/// A fixed-point amount with 8 decimal places.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed8(i64);

impl Fixed8 {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(D);

    /// Number of decimal places carried by the type.
    pub const fn decimals() -> u32 {
        DECIMALS
    }

    /// Builds an amount from a raw count of 10^-8 units.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Builds an amount from a whole number of units.
    pub fn from_integer(units: i64) -> Self {
        Self(units.saturating_mul(D))
    }

    /// Parses a decimal string such as `"10.4"`. Returns `None` when the
    /// text is not a decimal number or carries more than 8 fraction digits.
    pub fn from_decimal_str(text: &str) -> Option<Self> {
        let text = text.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, f),
            None => (text, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if frac_part.len() > DECIMALS as usize {
            return None;
        }
        let int_value: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().ok()?
        };
        let frac_value: i64 = if frac_part.is_empty() {
            0
        } else {
            let padded = format!("{frac_part:0<8}");
            padded.parse().ok()?
        };
        let raw = int_value.checked_mul(D)?.checked_add(frac_value)?;
        Some(Self(if negative { -raw } else { raw }))
    }

    /// The raw count of 10^-8 units.
    pub const fn raw(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Rounds up to the next whole unit. Whole amounts are unchanged;
    /// negative amounts round toward zero.
    pub fn ceiling(self) -> Self {
        let remainder = self.0 % D;
        if remainder == 0 {
            return self;
        }
        if remainder > 0 {
            Self(self.0 + (D - remainder))
        } else {
            Self(self.0 - remainder)
        }
    }
}

impl Add for Fixed8 {
    type Output = Fixed8;

    fn add(self, rhs: Fixed8) -> Fixed8 {
        Fixed8(self.0 + rhs.0)
    }
}

impl Sub for Fixed8 {
    type Output = Fixed8;

    fn sub(self, rhs: Fixed8) -> Fixed8 {
        Fixed8(self.0 - rhs.0)
    }
}

impl fmt::Display for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / D as u64;
        let frac = abs % D as u64;
        if frac == 0 {
            write!(f, "{sign}{units}")
        } else {
            let frac = format!("{frac:08}");
            write!(f, "{sign}{units}.{}", frac.trim_end_matches('0'))
        }
    }
}

impl fmt::Debug for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling() {
        assert_eq!(Fixed8::from_integer(3).ceiling(), Fixed8::from_integer(3));
        assert_eq!(Fixed8::from_raw(40_000_000).ceiling(), Fixed8::ONE);
        assert_eq!(Fixed8::from_raw(1).ceiling(), Fixed8::ONE);
        assert_eq!(Fixed8::ZERO.ceiling(), Fixed8::ZERO);
        // Negative amounts round toward zero.
        assert_eq!(Fixed8::from_raw(-40_000_000).ceiling(), Fixed8::ZERO);
    }

    #[test]
    fn test_decimal_parse() {
        assert_eq!(
            Fixed8::from_decimal_str("10.4"),
            Some(Fixed8::from_raw(1_040_000_000))
        );
        assert_eq!(Fixed8::from_decimal_str("0"), Some(Fixed8::ZERO));
        assert_eq!(Fixed8::from_decimal_str(".5"), Some(Fixed8::from_raw(50_000_000)));
        assert_eq!(
            Fixed8::from_decimal_str("-1.5"),
            Some(Fixed8::from_raw(-150_000_000))
        );
        assert_eq!(Fixed8::from_decimal_str(""), None);
        assert_eq!(Fixed8::from_decimal_str("."), None);
        assert_eq!(Fixed8::from_decimal_str("1.123456789"), None);
        assert_eq!(Fixed8::from_decimal_str("abc"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Fixed8::from_integer(12).to_string(), "12");
        assert_eq!(Fixed8::from_raw(1_040_000_000).to_string(), "10.4");
        assert_eq!(Fixed8::from_raw(-50_000_000).to_string(), "-0.5");
        assert_eq!(Fixed8::ZERO.to_string(), "0");
    }

    #[test]
    fn test_ordering_and_arithmetic() {
        let ten = Fixed8::from_integer(10);
        let small = Fixed8::from_raw(1);
        assert!(small < ten);
        assert_eq!(ten - ten, Fixed8::ZERO);
        assert_eq!((ten + small).raw(), 1_000_000_001);
    }
}
