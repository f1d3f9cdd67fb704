use std::collections::HashMap;

use chrono::Utc;
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{PERCENT_PRECISION, UNKNOWN_ASSET_TYPE};
use crate::events::Event;
use crate::portfolio::{PortfolioPosition, TypeAllocation};
use crate::positions::{Position, PositionCalculator};

/// Rolls per-asset event histories up into a `PortfolioPosition`.
///
/// Each asset group is reduced independently, so the map step could run in
/// parallel; the sequential loop is kept for simplicity. No shared state, no
/// side effects: safe to call concurrently for different portfolios.
#[derive(Default, Debug, Clone)]
pub struct PortfolioAggregator {}

impl PortfolioAggregator {
    pub fn new() -> Self {
        PortfolioAggregator {}
    }

    /// Reduces every asset group and rolls the results up.
    ///
    /// `asset_types` is the injected asset -> type-label mapping used for the
    /// allocation breakdown; assets without an entry bucket under
    /// [`UNKNOWN_ASSET_TYPE`].
    pub fn aggregate(
        &self,
        events_by_asset: HashMap<String, Vec<Event>>,
        asset_types: &HashMap<String, String>,
    ) -> PortfolioPosition {
        debug!(
            "Aggregating portfolio across {} asset groups",
            events_by_asset.len()
        );

        let calculator = PositionCalculator::new();
        let mut positions: Vec<Position> = Vec::new();
        let mut total_distributions = Decimal::ZERO;

        for (asset_id, events) in events_by_asset {
            if events.is_empty() {
                continue;
            }
            let position = calculator.reduce(events);

            // Distributions count even when the position later closed.
            total_distributions += position.distributions_received;

            if position.is_open() {
                positions.push(position);
            } else {
                debug!("Discarding closed position for asset '{}'", asset_id);
            }
        }

        // Deterministic output ordering regardless of map iteration order.
        positions.sort_by(|a, b| a.asset_id.cmp(&b.asset_id));

        let total_invested: Decimal = positions.iter().map(|p| p.invested_value).sum();
        let allocation = Self::allocation_by_type(&positions, asset_types, total_invested);

        PortfolioPosition {
            positions,
            total_invested,
            total_distributions,
            allocation,
            computed_at: Utc::now(),
        }
    }

    fn allocation_by_type(
        positions: &[Position],
        asset_types: &HashMap<String, String>,
        total_invested: Decimal,
    ) -> Vec<TypeAllocation> {
        if positions.is_empty() {
            return Vec::new();
        }

        let mut buckets: HashMap<String, (Decimal, usize)> = HashMap::new();
        for position in positions {
            let asset_type = match asset_types.get(&position.asset_id) {
                Some(label) => label.clone(),
                None => {
                    warn!(
                        "No asset type metadata for '{}', bucketing under {}",
                        position.asset_id, UNKNOWN_ASSET_TYPE
                    );
                    UNKNOWN_ASSET_TYPE.to_string()
                }
            };
            let bucket = buckets.entry(asset_type).or_insert((Decimal::ZERO, 0));
            bucket.0 += position.invested_value;
            bucket.1 += 1;
        }

        let mut allocation: Vec<TypeAllocation> = buckets
            .into_iter()
            .map(|(asset_type, (invested_value, asset_count))| {
                let percentage = if total_invested.is_zero() {
                    Decimal::ZERO
                } else {
                    ((invested_value / total_invested) * dec!(100)).round_dp(PERCENT_PRECISION)
                };
                TypeAllocation {
                    asset_type,
                    invested_value,
                    percentage,
                    asset_count,
                }
            })
            .collect();

        allocation.sort_by(|a, b| {
            b.invested_value
                .cmp(&a.invested_value)
                .then_with(|| a.asset_type.cmp(&b.asset_type))
        });

        allocation
    }
}
