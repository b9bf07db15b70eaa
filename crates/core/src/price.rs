//! Prices in smallest currency unit (cents).
//!
//! Floating-point money is avoided everywhere except the final tax
//! computation, which rounds back to a whole cent immediately.

use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Non-negative amount in minor currency units (e.g. cents).
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Scale by a line quantity.
    pub fn times(self, quantity: u32) -> Price {
        Price(self.0 * u64::from(quantity))
    }

    /// Percentage of this amount, rounded to the nearest cent (half up).
    pub fn percent(self, numerator: u64, denominator: u64) -> Price {
        Price((self.0 * numerator + denominator / 2) / denominator)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    /// Parse a decimal amount such as `"24.99"`, `"5"` or `"7.5"`.
    ///
    /// At most two fractional digits; negative amounts are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.starts_with('-') {
            return Err(DomainError::validation("price cannot be negative"));
        }
        if frac.len() > 2 {
            return Err(DomainError::validation(format!(
                "price has more than two fractional digits: {s:?}"
            )));
        }
        let dollars: u64 = whole
            .parse()
            .map_err(|_| DomainError::validation(format!("malformed price: {s:?}")))?;
        let cents: u64 = if frac.is_empty() {
            0
        } else {
            let padded = format!("{frac:0<2}");
            padded
                .parse()
                .map_err(|_| DomainError::validation(format!("malformed price: {s:?}")))?
        };
        Ok(Price(dollars * 100 + cents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dollar_and_cent_forms() {
        assert_eq!("24.99".parse::<Price>().unwrap(), Price::from_cents(2499));
        assert_eq!("5".parse::<Price>().unwrap(), Price::from_cents(500));
        assert_eq!("7.5".parse::<Price>().unwrap(), Price::from_cents(750));
        assert_eq!("0.07".parse::<Price>().unwrap(), Price::from_cents(7));
    }

    #[test]
    fn rejects_negative_and_malformed_amounts() {
        assert!("-1.00".parse::<Price>().is_err());
        assert!("1.999".parse::<Price>().is_err());
        assert!("abc".parse::<Price>().is_err());
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(Price::from_cents(2499).to_string(), "24.99");
        assert_eq!(Price::from_cents(500).to_string(), "5.00");
        assert_eq!(Price::from_cents(7).to_string(), "0.07");
    }

    #[test]
    fn percent_rounds_half_up_to_the_nearest_cent() {
        // 7% of $12.99 = 90.93 cents -> 91.
        assert_eq!(
            Price::from_cents(1299).percent(7, 100),
            Price::from_cents(91)
        );
        // 7% of $0.50 = 3.5 cents -> 4.
        assert_eq!(Price::from_cents(50).percent(7, 100), Price::from_cents(4));
    }

    #[test]
    fn times_and_sum_accumulate_cents() {
        let lines = [Price::from_cents(1000).times(1), Price::from_cents(500).times(1)];
        let subtotal: Price = lines.into_iter().sum();
        assert_eq!(subtotal, Price::from_cents(1500));
        assert_eq!(Price::from_cents(499).times(3), Price::from_cents(1497));
    }
}
