//! Exchange-rate snapshot consulted for converted-amount previews.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exchange rates keyed by currency code.
///
/// Each rate is the number of reference-currency units one unit of the
/// keyed currency buys. The table is a caller-supplied snapshot: the form
/// never fetches or refreshes rates, and a stale or incomplete table only
/// degrades the preview, never a submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the rate for a currency code.
    pub fn insert(&mut self, code: impl Into<String>, rate: Decimal) {
        self.rates.insert(code.into(), rate);
    }

    /// Raw rate for a currency code, if the snapshot has one.
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    /// Rate usable for a preview: present and strictly positive.
    /// Zero and negative rates are treated as missing data.
    pub fn preview_rate(&self, code: &str) -> Option<Decimal> {
        self.rate(code).filter(|rate| *rate > Decimal::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }
}

impl From<HashMap<String, Decimal>> for RateTable {
    fn from(rates: HashMap<String, Decimal>) -> Self {
        Self { rates }
    }
}

impl<S: Into<String>> FromIterator<(S, Decimal)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (S, Decimal)>>(iter: I) -> Self {
        Self {
            rates: iter
                .into_iter()
                .map(|(code, rate)| (code.into(), rate))
                .collect(),
        }
    }
}
