//! Expense entry form - draft state, preview derivation, and submission.

use crate::expenses::expenses_constants::{DEFAULT_CATEGORY, FALLBACK_CURRENCY};
use crate::expenses::expenses_errors::{ExpenseFormError, Result};
use crate::expenses::expenses_model::{
    parse_amount_text, ExpenseEntry, ExpenseUpdate, NewExpense, PaymentType,
};
use crate::fx::{ConvertedAmount, RateTable};
use crate::utils::time_utils::{compose_local_instant, local_time_now};
use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use rust_decimal::Decimal;

/// Whether the form creates a new expense or edits a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Outcome of a successful submit.
///
/// Create mode yields the complete record to insert; edit mode yields the
/// patch to apply. The caller persists exactly one record per value and
/// then drops the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormSubmission {
    Create(NewExpense),
    Update(ExpenseUpdate),
}

/// Draft state of the expense-entry form.
///
/// The form is pinned to one calendar date decided before it opens (the
/// trip day being filled in). The presentation layer edits the public
/// fields freely; nothing is validated until [`ExpenseForm::submit`], and
/// a failed submit leaves every field untouched. The draft is ephemeral:
/// dropping the form discards it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    /// Raw amount text exactly as typed.
    pub amount_text: String,
    /// Expense title. Required at submit.
    pub title: String,
    /// Free-form detail text. Optional; submitted even when empty.
    pub detail: String,
    /// Selected payment type.
    pub payment_type: PaymentType,
    /// Selected time of day on the fixed date.
    pub time_of_day: NaiveTime,
    /// Currency code the amount is denominated in.
    pub currency: String,

    fixed_date: NaiveDate,
    currency_options: Vec<String>,
    rates: RateTable,
    zone: Tz,
    mode: FormMode,
}

impl ExpenseForm {
    /// Opens the form in create mode for the given trip day.
    ///
    /// `fixed_date` must be an ISO calendar date. A date that does not
    /// parse is a caller contract violation: the `Err` is the signal to
    /// dismiss without ever showing the form.
    pub fn create(
        fixed_date: &str,
        currency_options: Vec<String>,
        rates: RateTable,
        zone: Tz,
    ) -> Result<Self> {
        let date = parse_fixed_date(fixed_date)?;
        let currency = currency_options.first().cloned().unwrap_or_default();
        Ok(Self {
            amount_text: String::new(),
            title: String::new(),
            detail: String::new(),
            payment_type: PaymentType::default(),
            time_of_day: local_time_now(zone),
            currency,
            fixed_date: date,
            currency_options,
            rates,
            zone,
            mode: FormMode::Create,
        })
    }

    /// Opens the form in edit mode, seeded from a stored entry.
    ///
    /// The entry is read once for initial values and never mutated. The
    /// date guard is the same as [`ExpenseForm::create`]: validated here,
    /// not again at submit.
    pub fn edit(
        fixed_date: &str,
        entry: &ExpenseEntry,
        currency_options: Vec<String>,
        rates: RateTable,
        zone: Tz,
    ) -> Result<Self> {
        let date = parse_fixed_date(fixed_date)?;
        let currency = entry
            .currency
            .clone()
            .or_else(|| currency_options.first().cloned())
            .unwrap_or_else(|| FALLBACK_CURRENCY.to_string());
        let time_of_day = entry
            .time
            .map(|instant| instant.with_timezone(&zone).time())
            .unwrap_or_else(|| local_time_now(zone));
        Ok(Self {
            amount_text: entry.amount.to_string(),
            title: entry.title.clone(),
            detail: entry.detail.clone().unwrap_or_default(),
            payment_type: entry.payment_type,
            time_of_day,
            currency,
            fixed_date: date,
            currency_options,
            rates,
            zone,
            mode: FormMode::Edit,
        })
    }

    /// The calendar date this form is pinned to.
    pub fn fixed_date(&self) -> NaiveDate {
        self.fixed_date
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Currency codes offered by the picker, in presentation order.
    pub fn currency_options(&self) -> &[String] {
        &self.currency_options
    }

    /// The timezone wall-clock selections resolve in.
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// HH:MM label for the selected time of day.
    pub fn time_label(&self) -> String {
        self.time_of_day.format("%H:%M").to_string()
    }

    /// Converted-amount preview for the current draft, if one can be shown.
    ///
    /// Derived from the live fields on every call. `None` whenever the
    /// amount does not parse to a positive number, the selected currency
    /// has no usable rate, or the product overflows the decimal range; a
    /// missing preview is not an error.
    pub fn converted_preview(&self) -> Option<ConvertedAmount> {
        let amount = parse_amount_text(&self.amount_text)?;
        if amount <= Decimal::ZERO {
            return None;
        }
        let rate = self.rates.preview_rate(&self.currency)?;
        ConvertedAmount::new(amount, rate)
    }

    /// Validates the draft and produces the record to persist.
    ///
    /// Checks run in order and the first failure wins: the amount must
    /// parse to a strictly positive number, then the title must be
    /// non-blank. On `Err` the draft is left exactly as it was. On `Ok`
    /// the selected time of day is composed with the fixed date in the
    /// configured zone, and the caller persists the returned value exactly
    /// once before dropping the form.
    pub fn submit(&self) -> Result<FormSubmission> {
        let amount = parse_amount_text(&self.amount_text)
            .filter(|amount| *amount > Decimal::ZERO)
            .ok_or(ExpenseFormError::InvalidAmount)?;
        if self.title.trim().is_empty() {
            return Err(ExpenseFormError::MissingTitle);
        }

        let time = compose_local_instant(self.fixed_date, self.time_of_day, self.zone);
        log::debug!(
            "Submitting {:?} expense of {} {} for {} at {}",
            self.mode,
            amount,
            self.currency,
            self.fixed_date,
            time
        );

        Ok(match self.mode {
            FormMode::Create => FormSubmission::Create(NewExpense {
                amount,
                title: self.title.clone(),
                detail: self.detail.clone(),
                category: DEFAULT_CATEGORY.to_string(),
                currency: self.currency.clone(),
                payment_type: self.payment_type,
                time,
            }),
            FormMode::Edit => FormSubmission::Update(ExpenseUpdate {
                amount,
                title: self.title.clone(),
                detail: self.detail.clone(),
                payment_type: self.payment_type,
                currency: self.currency.clone(),
                time,
            }),
        })
    }
}

fn parse_fixed_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|err| {
        log::warn!("Rejecting expense form open: invalid date '{}': {}", raw, err);
        ExpenseFormError::InvalidDate(raw.to_string())
    })
}
