use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Consolidated position of a single asset, derived by replaying its full
/// event history. Never persisted or mutated incrementally: identical input
/// always yields an identical `Position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub asset_id: String,
    /// Units currently held. Clamped at zero; negative holdings are not modeled.
    pub quantity: Decimal,
    /// Weighted-average unit cost. Zero whenever `quantity` is zero.
    pub average_cost: Decimal,
    /// `quantity * average_cost`.
    pub invested_value: Decimal,
    /// Cumulative cash dividends and interest-on-capital payouts.
    pub distributions_received: Decimal,
    pub first_buy_at: Option<DateTime<Utc>>,
    pub last_event_at: Option<DateTime<Utc>>,
}

impl Position {
    pub fn new(asset_id: String) -> Self {
        Position {
            asset_id,
            quantity: Decimal::ZERO,
            average_cost: Decimal::ZERO,
            invested_value: Decimal::ZERO,
            distributions_received: Decimal::ZERO,
            first_buy_at: None,
            last_event_at: None,
        }
    }

    /// Open positions are the only ones reported at portfolio granularity.
    pub fn is_open(&self) -> bool {
        self.quantity > Decimal::ZERO
    }
}
