use super::state::PositionState;
use crate::events::Event;

use log::warn;
use rust_decimal::Decimal;

/// Weighted-average cost update for a purchase. The entire cost basis of the
/// existing holding plus the new lot is spread across the combined quantity.
pub(super) fn apply_buy(event: &Event, state: &mut PositionState) {
    if state.first_buy_at.is_none() {
        state.first_buy_at = Some(event.occurred_at);
    }

    let new_quantity = state.quantity + event.quantity;
    if new_quantity > Decimal::ZERO {
        state.average_cost = (state.quantity * state.average_cost
            + event.quantity * event.unit_price)
            / new_quantity;
    } else {
        // A zero-quantity buy must not divide by zero.
        state.average_cost = event.unit_price;
    }
    state.quantity = new_quantity;
}

/// Sells reduce quantity but never alter the average cost. A position that
/// round-trips to zero forgets its cost basis entirely.
pub(super) fn apply_sell(event: &Event, state: &mut PositionState) {
    state.quantity -= event.quantity.abs();

    if state.quantity <= Decimal::ZERO {
        state.quantity = Decimal::ZERO;
        state.average_cost = Decimal::ZERO;
    }
}

/// Cash dividends and interest on capital accumulate as distributions;
/// `quantity` here is the number of units that earned the payout.
pub(super) fn apply_distribution(event: &Event, state: &mut PositionState) {
    state.distributions += event.unit_price * event.quantity.abs();
}

/// Bonus shares add units at no cost: the unchanged cost basis is spread
/// across the enlarged unit count, lowering the average cost.
pub(super) fn apply_stock_bonus(event: &Event, state: &mut PositionState) {
    let previous_quantity = state.quantity;
    state.quantity += event.quantity;

    if state.quantity > Decimal::ZERO {
        state.average_cost = (previous_quantity * state.average_cost) / state.quantity;
    } else {
        state.average_cost = Decimal::ZERO;
    }
}

/// Split: `quantity` carries the multiplication factor (2 for a 2-for-1
/// split). Invested value is unchanged by construction.
pub(super) fn apply_split(event: &Event, state: &mut PositionState) {
    let factor = event.quantity;
    if factor <= Decimal::ZERO {
        warn!(
            "Skipping SPLIT with non-positive factor {} for asset {} on {}",
            factor, event.asset_id, event.occurred_at
        );
        return;
    }

    state.quantity *= factor;
    state.average_cost /= factor;
}

/// Reverse split: `quantity` carries the division factor (10 for a 10-to-1
/// consolidation).
pub(super) fn apply_reverse_split(event: &Event, state: &mut PositionState) {
    let factor = event.quantity;
    if factor <= Decimal::ZERO {
        warn!(
            "Skipping REVERSE_SPLIT with non-positive factor {} for asset {} on {}",
            factor, event.asset_id, event.occurred_at
        );
        return;
    }

    state.quantity /= factor;
    state.average_cost *= factor;
}
