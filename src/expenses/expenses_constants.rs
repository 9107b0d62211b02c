//! Expense-related constants.

/// Category assigned to every expense created from the entry form.
/// The form does not expose category selection; recategorization is a
/// separate flow.
pub const DEFAULT_CATEGORY: &str = "general";

/// Currency assumed in edit mode when neither the stored entry nor the
/// trip's currency options provide one.
pub const FALLBACK_CURRENCY: &str = "USD";
