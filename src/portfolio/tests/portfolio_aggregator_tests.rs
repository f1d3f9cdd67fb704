use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::events::{Event, EventKind};
use crate::portfolio::PortfolioAggregator;

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, day, 10, 0, 0).unwrap()
}

fn event(asset_id: &str, kind: EventKind, day: u32, quantity: Decimal, unit_price: Decimal) -> Event {
    Event::new(asset_id, kind, at(day), quantity, unit_price)
}

fn types_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(asset, kind)| (asset.to_string(), kind.to_string()))
        .collect()
}

#[test]
fn test_closed_positions_are_discarded() {
    let mut events_by_asset = HashMap::new();
    events_by_asset.insert(
        "OPEN1".to_string(),
        vec![event("OPEN1", EventKind::Buy, 1, dec!(100), dec!(10))],
    );
    events_by_asset.insert(
        "CLOSED1".to_string(),
        vec![
            event("CLOSED1", EventKind::Buy, 1, dec!(50), dec!(20)),
            event("CLOSED1", EventKind::Sell, 2, dec!(50), dec!(25)),
        ],
    );

    let portfolio = PortfolioAggregator::new().aggregate(events_by_asset, &HashMap::new());

    assert_eq!(portfolio.positions.len(), 1);
    assert_eq!(portfolio.positions[0].asset_id, "OPEN1");
    assert_eq!(portfolio.total_invested, dec!(1000));
}

#[test]
fn test_distributions_of_closed_positions_still_count() {
    let mut events_by_asset = HashMap::new();
    events_by_asset.insert(
        "CLOSED1".to_string(),
        vec![
            event("CLOSED1", EventKind::Buy, 1, dec!(100), dec!(10)),
            event("CLOSED1", EventKind::CashDividend, 2, dec!(100), dec!(0.50)),
            event("CLOSED1", EventKind::Sell, 3, dec!(100), dec!(12)),
        ],
    );

    let portfolio = PortfolioAggregator::new().aggregate(events_by_asset, &HashMap::new());

    assert!(portfolio.positions.is_empty());
    assert_eq!(portfolio.total_invested, Decimal::ZERO);
    assert_eq!(portfolio.total_distributions, dec!(50));
}

#[test]
fn test_allocation_percentages_by_asset_type() {
    let mut events_by_asset = HashMap::new();
    events_by_asset.insert(
        "STOCK1".to_string(),
        vec![event("STOCK1", EventKind::Buy, 1, dec!(60), dec!(10))],
    );
    events_by_asset.insert(
        "FUND1".to_string(),
        vec![event("FUND1", EventKind::Buy, 1, dec!(40), dec!(10))],
    );
    let asset_types = types_of(&[("STOCK1", "STOCK"), ("FUND1", "REIT")]);

    let portfolio = PortfolioAggregator::new().aggregate(events_by_asset, &asset_types);

    assert_eq!(portfolio.total_invested, dec!(1000));
    assert_eq!(portfolio.allocation.len(), 2);

    // Sorted by invested value, descending.
    assert_eq!(portfolio.allocation[0].asset_type, "STOCK");
    assert_eq!(portfolio.allocation[0].invested_value, dec!(600));
    assert_eq!(portfolio.allocation[0].percentage, dec!(60));
    assert_eq!(portfolio.allocation[0].asset_count, 1);

    assert_eq!(portfolio.allocation[1].asset_type, "REIT");
    assert_eq!(portfolio.allocation[1].percentage, dec!(40));
}

#[test]
fn test_assets_without_metadata_bucket_as_unknown() {
    let mut events_by_asset = HashMap::new();
    events_by_asset.insert(
        "MYSTERY1".to_string(),
        vec![event("MYSTERY1", EventKind::Buy, 1, dec!(10), dec!(10))],
    );

    let portfolio = PortfolioAggregator::new().aggregate(events_by_asset, &HashMap::new());

    assert_eq!(portfolio.allocation.len(), 1);
    assert_eq!(portfolio.allocation[0].asset_type, "UNKNOWN");
    assert_eq!(portfolio.allocation[0].percentage, dec!(100));
}

#[test]
fn test_zero_invested_total_never_divides_by_zero() {
    let mut events_by_asset = HashMap::new();
    // A free allotment: open quantity, zero cost basis.
    events_by_asset.insert(
        "FREE1".to_string(),
        vec![event("FREE1", EventKind::Buy, 1, dec!(100), Decimal::ZERO)],
    );

    let portfolio = PortfolioAggregator::new().aggregate(events_by_asset, &HashMap::new());

    assert_eq!(portfolio.total_invested, Decimal::ZERO);
    assert_eq!(portfolio.allocation.len(), 1);
    assert_eq!(portfolio.allocation[0].percentage, Decimal::ZERO);
}

#[test]
fn test_empty_portfolio_aggregates_to_empty_result() {
    let portfolio = PortfolioAggregator::new().aggregate(HashMap::new(), &HashMap::new());

    assert!(portfolio.positions.is_empty());
    assert!(portfolio.allocation.is_empty());
    assert_eq!(portfolio.total_invested, Decimal::ZERO);
    assert_eq!(portfolio.total_distributions, Decimal::ZERO);
}

#[test]
fn test_positions_are_sorted_by_asset_id() {
    let mut events_by_asset = HashMap::new();
    for asset in ["ZZZ4", "AAA3", "MMM11"] {
        events_by_asset.insert(
            asset.to_string(),
            vec![event(asset, EventKind::Buy, 1, dec!(10), dec!(10))],
        );
    }

    let portfolio = PortfolioAggregator::new().aggregate(events_by_asset, &HashMap::new());

    let ids: Vec<&str> = portfolio.positions.iter().map(|p| p.asset_id.as_str()).collect();
    assert_eq!(ids, vec!["AAA3", "MMM11", "ZZZ4"]);
}
