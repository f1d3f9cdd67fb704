use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::constants::DECIMAL_PRECISION;
use crate::positions::Position;

/// Running fold state while replaying one asset's events.
/// Visible only within the calculator module.
#[derive(Debug, Default)]
pub(super) struct PositionState {
    pub(super) quantity: Decimal,
    pub(super) average_cost: Decimal,
    pub(super) distributions: Decimal,
    pub(super) first_buy_at: Option<DateTime<Utc>>,
    pub(super) last_event_at: Option<DateTime<Utc>>,
}

impl PositionState {
    /// Consumes the state and produces the finalized `Position`,
    /// rounding the derived values.
    pub(super) fn finalize(self, asset_id: String) -> Position {
        let invested_value = self.quantity * self.average_cost;

        Position {
            asset_id,
            quantity: self.quantity.round_dp(DECIMAL_PRECISION),
            average_cost: self.average_cost.round_dp(DECIMAL_PRECISION),
            invested_value: invested_value.round_dp(DECIMAL_PRECISION),
            distributions_received: self.distributions.round_dp(DECIMAL_PRECISION),
            first_buy_at: self.first_buy_at,
            last_event_at: self.last_event_at,
        }
    }
}
