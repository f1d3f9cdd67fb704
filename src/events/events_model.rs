use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;

/// Domain model representing one ownership-affecting event on an asset.
///
/// The meaning of `quantity` and `unit_price` depends on `kind`:
/// - `Buy` / `StockBonus`: units added, at `unit_price` (ignored for bonus shares).
/// - `Sell`: units removed (the reducer takes the absolute value).
/// - `CashDividend` / `InterestOnCapital`: units that earned the payout,
///   multiplied by the per-unit `unit_price`.
/// - `Split` / `ReverseSplit`: `quantity` is the multiplication/division
///   factor; `unit_price` is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub asset_id: String,
    pub kind: EventKind,
    pub occurred_at: DateTime<Utc>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl Event {
    pub fn new(
        asset_id: impl Into<String>,
        kind: EventKind,
        occurred_at: DateTime<Utc>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Event {
            asset_id: asset_id.into(),
            kind,
            occurred_at,
            quantity,
            unit_price,
        }
    }
}

/// Closed set of event kinds. Adding a kind forces a decision in every
/// reducer match arm at compile time; there is no runtime "unknown kind"
/// branch inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Buy,
    Sell,
    CashDividend,
    InterestOnCapital,
    StockBonus,
    Split,
    ReverseSplit,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        use crate::events::events_constants::*;
        match self {
            EventKind::Buy => EVENT_KIND_BUY,
            EventKind::Sell => EVENT_KIND_SELL,
            EventKind::CashDividend => EVENT_KIND_CASH_DIVIDEND,
            EventKind::InterestOnCapital => EVENT_KIND_INTEREST_ON_CAPITAL,
            EventKind::StockBonus => EVENT_KIND_STOCK_BONUS,
            EventKind::Split => EVENT_KIND_SPLIT,
            EventKind::ReverseSplit => EVENT_KIND_REVERSE_SPLIT,
        }
    }
}

impl FromStr for EventKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use crate::events::events_constants::*;
        match s {
            s if s == EVENT_KIND_BUY => Ok(EventKind::Buy),
            s if s == EVENT_KIND_SELL => Ok(EventKind::Sell),
            s if s == EVENT_KIND_CASH_DIVIDEND => Ok(EventKind::CashDividend),
            s if s == EVENT_KIND_INTEREST_ON_CAPITAL => Ok(EventKind::InterestOnCapital),
            s if s == EVENT_KIND_STOCK_BONUS => Ok(EventKind::StockBonus),
            s if s == EVENT_KIND_SPLIT => Ok(EventKind::Split),
            s if s == EVENT_KIND_REVERSE_SPLIT => Ok(EventKind::ReverseSplit),
            _ => Err(ValidationError::UnsupportedEventKind(s.to_string())),
        }
    }
}
