//! FX module - preview-only currency conversion for expense entry.

mod preview;
mod rate_table;

pub use preview::ConvertedAmount;
pub use rate_table::RateTable;
