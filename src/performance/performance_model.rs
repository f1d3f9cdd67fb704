use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Profitability summary of a portfolio (or single asset) over a period,
/// computed purely from its event history and a caller-supplied terminal
/// valuation.
///
/// Each return metric is `None` when its inputs are degenerate or the search
/// did not converge; consumers render that as "not available", never as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodPerformance {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub begin_value: Decimal,
    pub end_value: Decimal,
    pub deposits: Decimal,
    pub withdrawals: Decimal,
    pub distributions: Decimal,
    /// Annualized money-weighted return, percent.
    pub money_weighted_return: Option<Decimal>,
    /// Aggregate time-weighted return, percent.
    pub time_weighted_return: Option<Decimal>,
    /// `((end - begin + distributions) / begin) * 100`.
    pub simple_return: Option<Decimal>,
    pub monthly_invested: Vec<MonthlyInvestment>,
}

/// Amount invested through purchases in one calendar month of the period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyInvestment {
    /// `YYYY-MM`.
    pub month: String,
    pub invested: Decimal,
}
