pub mod portfolio_aggregator;
pub mod portfolio_model;

pub use portfolio_aggregator::PortfolioAggregator;
pub use portfolio_model::{PortfolioPosition, TypeAllocation};

#[cfg(test)]
pub(crate) mod tests;
