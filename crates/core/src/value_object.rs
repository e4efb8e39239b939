//! Value objects: equality by value, not identity.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects have no identity; two with the same attribute values are equal.
/// To "modify" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Monetary amount in the smallest currency unit (cents).
///
/// Signed on purpose: a negative price is a representable candidate that the
/// validation layer rejects, not something the type system hides.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// Parses decimal text such as `"19.99"`, `"5"` or `"-0.5"`.
///
/// At most two fractional digits are accepted.
impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let raw = s.trim();
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(DomainError::invalid_price(format!("'{raw}' has no digits")));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_price(format!("'{raw}' is not a decimal number")));
        }
        if frac.len() > 2 {
            return Err(DomainError::invalid_price(format!(
                "'{raw}' has more than two fractional digits"
            )));
        }

        let overflow = || DomainError::invalid_price(format!("'{raw}' is out of range"));
        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let frac_value: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| overflow())? * 10,
            _ => frac.parse::<i64>().map_err(|_| overflow())?,
        };

        let cents = whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_value))
            .ok_or_else(overflow)?;

        Ok(Self(if negative { -cents } else { cents }))
    }
}

/// On-hand quantity with its inventory bounds.
///
/// Holds whatever the caller proposes; `min <= stock <= max` is checked by the
/// catalog's validation layer, never here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StockLevels {
    pub stock: i64,
    pub min: i64,
    pub max: i64,
}

impl StockLevels {
    pub const fn new(stock: i64, min: i64, max: i64) -> Self {
        Self { stock, min, max }
    }
}

impl ValueObject for StockLevels {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_common_price_shapes() {
        assert_eq!("19.99".parse::<Price>().unwrap(), Price::from_cents(1999));
        assert_eq!("5".parse::<Price>().unwrap(), Price::from_cents(500));
        assert_eq!("5.5".parse::<Price>().unwrap(), Price::from_cents(550));
        assert_eq!("5.".parse::<Price>().unwrap(), Price::from_cents(500));
        assert_eq!(".25".parse::<Price>().unwrap(), Price::from_cents(25));
        assert_eq!("-0.5".parse::<Price>().unwrap(), Price::from_cents(-50));
    }

    #[test]
    fn rejects_malformed_prices() {
        for raw in ["", ".", "-", "abc", "1.234", "1,50", "1.2.3", "+-1"] {
            match raw.parse::<Price>() {
                Err(DomainError::InvalidPrice(_)) => {}
                other => panic!("Expected InvalidPrice for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn sub_cent_and_plus_signed_text_fail_to_parse() {
        for raw in ["-0.001", "0.005", "+1", "+0.50"] {
            assert!(
                matches!(raw.parse::<Price>(), Err(DomainError::InvalidPrice(_))),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn displays_two_fractional_digits() {
        assert_eq!(Price::from_cents(1999).to_string(), "19.99");
        assert_eq!(Price::from_cents(500).to_string(), "5.00");
        assert_eq!(Price::from_cents(-7).to_string(), "-0.07");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn negative_price_is_representable() {
        let price = Price::from_cents(-1);
        assert!(price.is_negative());
        assert!(!Price::ZERO.is_negative());
    }

    proptest! {
        /// Property: Display output parses back to the same amount.
        #[test]
        fn display_parses_back(cents in -1_000_000_000i64..1_000_000_000i64) {
            let price = Price::from_cents(cents);
            let parsed: Price = price.to_string().parse().unwrap();
            prop_assert_eq!(parsed, price);
        }
    }
}
