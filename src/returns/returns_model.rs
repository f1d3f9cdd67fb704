use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dated, signed cash movement as seen from the investor's pocket:
/// outflows (purchases) are negative, inflows (sale proceeds, distributions,
/// the terminal valuation) are positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl CashFlow {
    pub fn new(date: NaiveDate, amount: Decimal) -> Self {
        CashFlow { date, amount }
    }
}

/// Aggregate external deposits and withdrawals observed on one date, used by
/// the time-weighted return chaining.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalFlow {
    pub date: NaiveDate,
    pub deposits: Decimal,
    pub withdrawals: Decimal,
}

impl ExternalFlow {
    pub fn new(date: NaiveDate, deposits: Decimal, withdrawals: Decimal) -> Self {
        ExternalFlow {
            date,
            deposits,
            withdrawals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deposits.is_zero() && self.withdrawals.is_zero()
    }
}
