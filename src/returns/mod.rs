pub mod cash_flows;
pub mod irr_calculator;
pub mod returns_model;
pub mod twr_calculator;

pub use cash_flows::{cash_flows_from_events, flow_totals, FlowTotals};
pub use irr_calculator::{IrrCalculator, IrrParams};
pub use returns_model::{CashFlow, ExternalFlow};
pub use twr_calculator::TwrCalculator;

#[cfg(test)]
pub(crate) mod tests;
