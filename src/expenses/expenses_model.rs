//! Expense domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parses user-typed amount text into a Decimal.
///
/// Mirrors what numeric text inputs accept: surrounding whitespace is
/// ignored and scientific notation is tolerated. Returns `None` for
/// anything else; the caller decides whether absence is a validation
/// error or just "no preview".
pub fn parse_amount_text(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// How an expense was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    #[default]
    Card,
    Cash,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Card => "CARD",
            PaymentType::Cash => "CASH",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "CARD" => Ok(PaymentType::Card),
            "CASH" => Ok(PaymentType::Cash),
            _ => Err(format!("Unknown payment type: {}", s)),
        }
    }
}

/// Domain model representing a stored expense entry.
///
/// This is the record as the store hands it to the form when editing.
/// The form reads initial values from it once and never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseEntry {
    pub amount: Decimal,
    pub title: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub category: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub payment_type: PaymentType,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

/// Input model for creating a new expense from the entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub amount: Decimal,
    pub title: String,
    pub detail: String,
    pub category: String,
    pub currency: String,
    pub payment_type: PaymentType,
    #[serde(with = "timestamp_format")]
    pub time: DateTime<Utc>,
}

/// Input model for updating an existing expense.
///
/// Exactly the six fields the edit form may change. `category` is
/// deliberately absent: edits never recategorize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub amount: Decimal,
    pub title: String,
    pub detail: String,
    pub payment_type: PaymentType,
    pub currency: String,
    #[serde(with = "timestamp_format")]
    pub time: DateTime<Utc>,
}

impl ExpenseUpdate {
    /// The patch as a JSON object carrying exactly the six updatable keys,
    /// in the shape the document store applies field-wise.
    pub fn to_patch_value(&self) -> std::result::Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

// Custom serialization for timestamps to ensure consistent ISO 8601 formatting
mod timestamp_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Always serialize in ISO 8601 format with UTC timezone
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| {
                serde::de::Error::custom(format!(
                    "Invalid timestamp format: {}. Expected ISO 8601/RFC3339",
                    s
                ))
            })
    }
}
