//! Expenses module - domain models and the expense-entry form.

mod expenses_constants;
mod expenses_errors;
mod expenses_form;
mod expenses_model;



pub use expenses_constants::*;
pub use expenses_errors::{ExpenseFormError, Result};
pub use expenses_form::{ExpenseForm, FormMode, FormSubmission};
pub use expenses_model::{parse_amount_text, ExpenseEntry, ExpenseUpdate, NewExpense, PaymentType};
