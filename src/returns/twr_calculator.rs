use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::returns::ExternalFlow;

/// Time-weighted return: removes the distorting effect of the timing and
/// size of external deposits and withdrawals by chaining sub-period returns.
#[derive(Default, Debug, Clone)]
pub struct TwrCalculator {}

impl TwrCalculator {
    pub fn new() -> Self {
        TwrCalculator {}
    }

    /// Chains sub-period linking factors across `flows` and the final stretch
    /// to `end_value`, returning the period return as a percentage.
    ///
    /// This approximates textbook TWR: sub-periods are valued from aggregate
    /// deposit/withdrawal totals at each flow date instead of independent
    /// valuations taken immediately before each flow. Consumers of the metric
    /// should surface it as an approximation.
    ///
    /// Returns `None` when `begin_value` is not positive or the running
    /// balance is exhausted mid-period. With no effective flows the result is
    /// the simple percentage change.
    pub fn calculate(
        &self,
        begin_value: Decimal,
        end_value: Decimal,
        flows: &[ExternalFlow],
    ) -> Option<Decimal> {
        if begin_value <= Decimal::ZERO {
            return None;
        }

        let mut ordered: Vec<&ExternalFlow> = flows.iter().filter(|f| !f.is_empty()).collect();
        if ordered.is_empty() {
            return Some((end_value - begin_value) / begin_value * dec!(100));
        }
        ordered.sort_by_key(|f| f.date);

        let mut product = Decimal::ONE;
        let mut balance = begin_value;

        for flow in ordered {
            if balance <= Decimal::ZERO {
                return None;
            }

            let balance_after = balance + flow.deposits - flow.withdrawals;

            if flow.deposits > Decimal::ZERO {
                // Deposit sub-period: growth relative to the topped-up balance.
                product *= balance_after / (balance + flow.deposits);
            } else if flow.withdrawals > Decimal::ZERO {
                // Withdrawal sub-period: add the withdrawal back before comparing.
                product *= (balance_after + flow.withdrawals) / balance;
            }

            balance = balance_after;
        }

        if balance <= Decimal::ZERO {
            return None;
        }
        product *= end_value / balance;

        Some((product - Decimal::ONE) * dec!(100))
    }

    /// Aggregate-only variant for when no flow-by-flow timeline is available:
    /// `((end + withdrawals - deposits - begin) / begin) * 100`.
    pub fn calculate_simple(
        &self,
        begin_value: Decimal,
        end_value: Decimal,
        total_deposits: Decimal,
        total_withdrawals: Decimal,
    ) -> Option<Decimal> {
        if begin_value <= Decimal::ZERO {
            return None;
        }

        let ret = (end_value + total_withdrawals - total_deposits - begin_value) / begin_value;
        Some(ret * dec!(100))
    }
}
