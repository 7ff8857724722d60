//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths (i64) to avoid floating-point
//! drift in the running balance. On disk amounts are plain JSON numbers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

/// Largest amount a single entry may carry, 9,999,999,999,999.99
///
/// Amounts are stored as JSON numbers. Below this bound every hundredth
/// survives the trip through `f64` and back.
const MAX_HUNDREDTHS: i64 = 999_999_999_999_999;

impl Money {
    /// Largest amount accepted by `parse` and deserialization
    pub const MAX: Money = Money(MAX_HUNDREDTHS);

    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// let amount = Money::from_hundredths(1050); // 10.50
    /// assert_eq!(amount.to_decimal_string(), "10.50");
    /// ```
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn hundredths(&self) -> i64 {
        self.0
    }

    /// Whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional portion (0-99)
    pub const fn fraction(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Addition that returns `None` instead of overflowing
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtraction that returns `None` instead of overflowing
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Parse a non-negative amount typed by the user
    ///
    /// Accepts "50000", "12.5" and "12.50". Signs, separators, currency
    /// symbols and more than two fractional digits are rejected. Amounts
    /// above `Money::MAX` are an `Overflow`.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if s.ends_with('.') {
            return Err(invalid());
        }

        let units: i64 = whole.parse().map_err(|_| invalid())?;
        let hundredths: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        units
            .checked_mul(100)
            .and_then(|v| v.checked_add(hundredths))
            .filter(|v| *v <= MAX_HUNDREDTHS)
            .map(Self)
            .ok_or(MoneyParseError::Overflow(s.to_string()))
    }

    /// Plain decimal rendering, used for matching search keywords
    ///
    /// Whole amounts render without a fraction ("50000"), others with two
    /// digits ("12.50").
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        if self.fraction() == 0 {
            format!("{}{}", sign, self.units().abs())
        } else {
            format!("{}{}.{:02}", sign, self.units().abs(), self.fraction())
        }
    }

    /// Format with a currency symbol, e.g. "Rp 50,000"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let body = self.abs().to_string();
        match (self.is_negative(), symbol.is_empty()) {
            (true, true) => format!("-{}", body),
            (true, false) => format!("-{} {}", symbol, body),
            (false, true) => body,
            (false, false) => format!("{} {}", symbol, body),
        }
    }

    fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Group digits with commas: 1234567 -> "1,234,567"
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = group_thousands(self.units().unsigned_abs());
        if self.fraction() == 0 {
            write!(f, "{}{}", sign, units)
        } else {
            write!(f, "{}{}.{:02}", sign, units, self.fraction())
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        let hundredths = (value * 100.0).round();
        if !hundredths.is_finite() || hundredths.abs() > MAX_HUNDREDTHS as f64 {
            return Err(serde::de::Error::custom(format!(
                "amount out of range: {}",
                value
            )));
        }
        Ok(Self(hundredths as i64))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("Invalid amount: {0}")]
    InvalidFormat(String),
    #[error("Amount too large: {0}")]
    Overflow(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let m = Money::from_hundredths(1050);
        assert_eq!(m.hundredths(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.fraction(), 50);
        assert_eq!(Money::from_units(50000).hundredths(), 5_000_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_units(50000).to_string(), "50,000");
        assert_eq!(Money::from_units(999).to_string(), "999");
        assert_eq!(Money::from_units(1_234_567).to_string(), "1,234,567");
        assert_eq!(Money::from_hundredths(123450).to_string(), "1,234.50");
        assert_eq!(Money::from_units(-35000).to_string(), "-35,000");
        assert_eq!(Money::zero().to_string(), "0");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_units(35000).format_with_symbol("Rp"), "Rp 35,000");
        assert_eq!(Money::from_units(-5).format_with_symbol("Rp"), "-Rp 5");
        assert_eq!(Money::from_units(5).format_with_symbol(""), "5");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_units(50000).to_decimal_string(), "50000");
        assert_eq!(Money::from_hundredths(1250).to_decimal_string(), "12.50");
        assert_eq!(Money::from_hundredths(5).to_decimal_string(), "0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(10);
        let b = Money::from_units(5);

        assert_eq!(a + b, Money::from_units(15));
        assert_eq!(a - b, Money::from_units(5));
        assert_eq!(-a, Money::from_units(-10));
    }

    #[test]
    fn test_checked_arithmetic() {
        let near_max = Money::from_hundredths(i64::MAX - 10);

        assert_eq!(
            near_max.checked_add(Money::from_hundredths(10)),
            Some(Money::from_hundredths(i64::MAX))
        );
        assert_eq!(near_max.checked_add(Money::from_hundredths(11)), None);
        assert_eq!(
            Money::from_hundredths(i64::MIN).checked_sub(Money::from_hundredths(1)),
            None
        );
        assert_eq!(
            Money::from_units(10).checked_sub(Money::from_units(4)),
            Some(Money::from_units(6))
        );
    }

    #[test]
    fn test_parse_caps_at_max() {
        assert_eq!(Money::parse("9999999999999.99").unwrap(), Money::MAX);
        assert!(matches!(
            Money::parse("10000000000000"),
            Err(MoneyParseError::Overflow(_))
        ));
        assert!(matches!(
            Money::parse("90071992547409.93"),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_max_survives_json() {
        for m in [
            Money::MAX,
            Money::from_hundredths(999_999_999_999_901),
            Money::from_hundredths(123_456_789_012_345),
        ] {
            let json = serde_json::to_string(&m).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, m, "via {}", json);
        }
    }

    #[test]
    fn test_deserialization_rejects_above_max() {
        assert!(serde_json::from_str::<Money>("10000000000000.0").is_err());
        assert!(serde_json::from_str::<Money>("90071992547409.93").is_err());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
    }

    #[test]
    fn test_parse_accepts_plain_decimals() {
        assert_eq!(Money::parse("50000").unwrap(), Money::from_units(50000));
        assert_eq!(Money::parse(" 15000 ").unwrap(), Money::from_units(15000));
        assert_eq!(Money::parse("12.5").unwrap().hundredths(), 1250);
        assert_eq!(Money::parse("12.50").unwrap().hundredths(), 1250);
        assert_eq!(Money::parse("0").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "  ", "-5", "+5", "abc", "12a", "1,000", "1.234", ".5", "5.", "$5"] {
            assert!(Money::parse(input).is_err(), "accepted {:?}", input);
        }
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse("92233720368547759"),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Money::from_units(50000)).unwrap();
        assert_eq!(json, "50000.0");

        let json = serde_json::to_string(&Money::from_hundredths(1250)).unwrap();
        assert_eq!(json, "12.5");
    }

    #[test]
    fn test_deserialization_accepts_any_number() {
        let m: Money = serde_json::from_str("50000.0").unwrap();
        assert_eq!(m, Money::from_units(50000));

        let m: Money = serde_json::from_str("15000").unwrap();
        assert_eq!(m, Money::from_units(15000));

        let m: Money = serde_json::from_str("0.1").unwrap();
        assert_eq!(m.hundredths(), 10);

        assert!(serde_json::from_str::<Money>("\"12\"").is_err());
    }
}
