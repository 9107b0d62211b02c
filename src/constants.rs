/// Reference currency for converted-amount previews
pub const REFERENCE_CURRENCY: &str = "KRW";

/// Decimal precision for converted-amount preview display
pub const PREVIEW_DECIMAL_PRECISION: u32 = 0;
