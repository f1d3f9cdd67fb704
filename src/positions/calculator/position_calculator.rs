use super::event_handlers::*;
use super::state::PositionState;

use crate::events::{Event, EventKind};
use crate::positions::Position;

use log::debug;

/// Replays the time-ordered event history of a single asset into a
/// consolidated `Position`.
///
/// The fold is strictly sequential: each step's output is the next step's
/// input, so events of one asset are never processed in parallel. The
/// function is pure and total; no input sequence, including the empty one,
/// produces an error.
#[derive(Default, Debug, Clone)]
pub struct PositionCalculator {}

impl PositionCalculator {
    pub fn new() -> Self {
        PositionCalculator {}
    }

    /// Folds `events` into a `Position`.
    ///
    /// Takes ownership of the vector so it can be sorted defensively by
    /// `occurred_at`; the sort is stable, so events sharing a timestamp keep
    /// their insertion order.
    pub fn reduce(&self, mut events: Vec<Event>) -> Position {
        let asset_id = events
            .first()
            .map(|e| e.asset_id.clone())
            .unwrap_or_default();
        debug!(
            "Reducing {} events for asset '{}'",
            events.len(),
            asset_id
        );

        events.sort_by_key(|e| e.occurred_at);

        let mut state = PositionState::default();
        for event in &events {
            state.last_event_at = Some(event.occurred_at);

            match event.kind {
                EventKind::Buy => apply_buy(event, &mut state),
                EventKind::Sell => apply_sell(event, &mut state),
                EventKind::CashDividend | EventKind::InterestOnCapital => {
                    apply_distribution(event, &mut state)
                }
                EventKind::StockBonus => apply_stock_bonus(event, &mut state),
                EventKind::Split => apply_split(event, &mut state),
                EventKind::ReverseSplit => apply_reverse_split(event, &mut state),
            }
        }

        state.finalize(asset_id)
    }
}
