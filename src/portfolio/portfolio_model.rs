use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::positions::Position;

/// Consolidated view of a whole portfolio: the open positions, their totals
/// and the allocation breakdown by asset type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPosition {
    /// Open positions only, sorted by asset id. Closed positions are not
    /// reported at portfolio granularity.
    pub positions: Vec<Position>,
    pub total_invested: Decimal,
    /// Distributions across the full history, closed positions included.
    pub total_distributions: Decimal,
    pub allocation: Vec<TypeAllocation>,
    pub computed_at: DateTime<Utc>,
}

/// Share of the invested total held in one asset-type bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAllocation {
    pub asset_type: String,
    pub invested_value: Decimal,
    pub percentage: Decimal,
    pub asset_count: usize,
}
