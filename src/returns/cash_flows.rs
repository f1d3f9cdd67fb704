//! Thin adapter deriving return-calculator inputs from an event list.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::events::{Event, EventKind};
use crate::returns::CashFlow;

/// Aggregate money movement of an event list, from the investor's pocket:
/// deposits are purchase costs, withdrawals are sale proceeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowTotals {
    pub deposits: Decimal,
    pub withdrawals: Decimal,
    pub distributions: Decimal,
}

/// Maps ownership events to the signed cash-flow series consumed by the
/// money-weighted return calculator: purchases flow out (negative), sale
/// proceeds and distributions flow in (positive). A positive
/// `terminal_value` is appended at `terminal_date` as the closing inflow.
///
/// Corporate actions move no cash and produce no flow.
pub fn cash_flows_from_events(
    events: &[Event],
    terminal_value: Decimal,
    terminal_date: NaiveDate,
) -> Vec<CashFlow> {
    let mut flows = Vec::with_capacity(events.len() + 1);

    for event in events {
        let date = event.occurred_at.date_naive();
        match event.kind {
            EventKind::Buy => {
                flows.push(CashFlow::new(date, -(event.quantity * event.unit_price)));
            }
            EventKind::Sell => {
                flows.push(CashFlow::new(date, event.quantity.abs() * event.unit_price));
            }
            EventKind::CashDividend | EventKind::InterestOnCapital => {
                flows.push(CashFlow::new(date, event.unit_price * event.quantity.abs()));
            }
            EventKind::StockBonus | EventKind::Split | EventKind::ReverseSplit => {}
        }
    }

    if terminal_value > Decimal::ZERO {
        flows.push(CashFlow::new(terminal_date, terminal_value));
    }

    flows
}

/// Sums purchase costs, sale proceeds and distribution payouts of an event list.
pub fn flow_totals(events: &[Event]) -> FlowTotals {
    let mut totals = FlowTotals::default();

    for event in events {
        match event.kind {
            EventKind::Buy => totals.deposits += event.quantity * event.unit_price,
            EventKind::Sell => totals.withdrawals += event.quantity.abs() * event.unit_price,
            EventKind::CashDividend | EventKind::InterestOnCapital => {
                totals.distributions += event.unit_price * event.quantity.abs()
            }
            EventKind::StockBonus | EventKind::Split | EventKind::ReverseSplit => {}
        }
    }

    totals
}
