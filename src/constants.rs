use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for derived position values
pub const DECIMAL_PRECISION: u32 = 8;

/// Decimal precision for percentage figures
pub const PERCENT_PRECISION: u32 = 4;

/// Day-count basis for the money-weighted return (simple day count, not actual/actual)
pub const DAYS_PER_YEAR: Decimal = dec!(365);

/// Asset-type bucket used when the injected metadata has no entry for an asset
pub const UNKNOWN_ASSET_TYPE: &str = "UNKNOWN";
