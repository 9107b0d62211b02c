//! Expense form error types.

use thiserror::Error;

/// Type alias for Result using our ExpenseFormError type.
pub type Result<T> = std::result::Result<T, ExpenseFormError>;

/// Errors surfaced by the expense-entry form.
///
/// `InvalidDate` is raised while opening the form and signals a caller
/// contract violation: the form never opens. The remaining variants are
/// user-input failures raised by `submit`; the draft stays editable and
/// the presentation layer renders the `Display` message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpenseFormError {
    /// The calendar date handed to the form is not a valid ISO date.
    #[error("Invalid expense date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The amount text is empty, unparsable, or not strictly positive.
    #[error("Please enter a valid amount")]
    InvalidAmount,

    /// The title is empty or whitespace-only.
    #[error("Please enter a title")]
    MissingTitle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_user_facing() {
        let err = ExpenseFormError::InvalidDate("2024-13-45".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid expense date '2024-13-45'. Expected YYYY-MM-DD"
        );
        assert_eq!(
            ExpenseFormError::InvalidAmount.to_string(),
            "Please enter a valid amount"
        );
        assert_eq!(
            ExpenseFormError::MissingTitle.to_string(),
            "Please enter a title"
        );
    }
}
