//! Converted-amount preview values and their display formatting.

use crate::constants::{PREVIEW_DECIMAL_PRECISION, REFERENCE_CURRENCY};
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display-only conversion of a draft amount into the reference currency.
///
/// Holds the exact product of amount and rate; rounding happens only at
/// render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedAmount {
    value: Decimal,
}

impl ConvertedAmount {
    /// Builds the preview product. `None` when the multiplication
    /// overflows the decimal range, in which case no preview is shown.
    pub fn new(amount: Decimal, rate: Decimal) -> Option<Self> {
        amount.checked_mul(rate).map(|value| Self { value })
    }

    /// The exact, unrounded product.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// The product rounded half-up to whole reference-currency units.
    pub fn rounded(&self) -> Decimal {
        self.value.round_dp_with_strategy(
            PREVIEW_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        )
    }

    /// Renders the preview as a comma-grouped whole number followed by the
    /// reference currency code, e.g. `16,875 KRW`.
    pub fn formatted(&self) -> String {
        let rounded = self.rounded();
        let grouped = rounded
            .to_i128()
            .map(group_thousands)
            .unwrap_or_else(|| rounded.to_string());
        format!("{} {}", grouped, REFERENCE_CURRENCY)
    }
}

impl fmt::Display for ConvertedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// Comma-groups an integer: 1234567 -> "1,234,567".
fn group_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn converted(amount: Decimal, rate: Decimal) -> ConvertedAmount {
        ConvertedAmount::new(amount, rate).unwrap()
    }

    #[test]
    fn test_keeps_exact_product() {
        let preview = converted(dec!(12.5), dec!(1350));
        assert_eq!(preview.value(), dec!(16875));
        assert_eq!(preview.formatted(), "16,875 KRW");
    }

    #[test]
    fn test_rounds_half_up_for_display() {
        assert_eq!(converted(dec!(0.5), dec!(1)).rounded(), dec!(1));
        assert_eq!(converted(dec!(1.5), dec!(1)).rounded(), dec!(2));
        assert_eq!(converted(dec!(2.4), dec!(1)).rounded(), dec!(2));
        assert_eq!(converted(dec!(1234.567), dec!(1)).formatted(), "1,235 KRW");
    }

    #[test]
    fn test_overflowing_product_yields_no_preview() {
        let amount = dec!(79000000000000000000000000);
        assert!(ConvertedAmount::new(amount, dec!(1000000000)).is_none());
    }

    #[test]
    fn test_groups_thousands_with_commas() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(123456789), "123,456,789");
        assert_eq!(group_thousands(-16875), "-16,875");
    }

    #[test]
    fn test_display_matches_formatted() {
        let preview = converted(dec!(100), dec!(1.5));
        assert_eq!(preview.to_string(), "150 KRW");
    }
}
