use log::debug;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::constants::DAYS_PER_YEAR;
use crate::returns::CashFlow;

/// Tuning knobs for the Newton-Raphson money-weighted return search.
///
/// The iteration cap and the rate bounds act as a circuit breaker, not a
/// convergence proof: series the search cannot settle on yield `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct IrrParams {
    pub max_iterations: u32,
    /// Step-size threshold under which the search is considered converged.
    pub tolerance: Decimal,
    /// Slopes flatter than this abort the search (non-convergent region).
    pub derivative_floor: Decimal,
    pub initial_guess: Decimal,
    /// Rates below this are rejected as runaway divergence.
    pub min_rate: Decimal,
    /// Rates above this are rejected as runaway divergence.
    pub max_rate: Decimal,
}

impl Default for IrrParams {
    fn default() -> Self {
        IrrParams {
            max_iterations: 100,
            tolerance: dec!(0.0001),
            derivative_floor: dec!(0.00001),
            initial_guess: dec!(0.10),
            min_rate: dec!(-0.99),
            max_rate: dec!(10),
        }
    }
}

/// Money-weighted (internal) rate of return via Newton-Raphson root finding
/// on the net-present-value function.
#[derive(Default, Debug, Clone)]
pub struct IrrCalculator {
    params: IrrParams,
}

impl IrrCalculator {
    pub fn new() -> Self {
        IrrCalculator {
            params: IrrParams::default(),
        }
    }

    pub fn with_params(params: IrrParams) -> Self {
        IrrCalculator { params }
    }

    /// Finds the annualized rate that zeroes
    /// `NPV(r) = sum(flow_i / (1 + r)^years_i)`, where `years_i` counts days
    /// from the earliest flow divided by 365.
    ///
    /// Returns the rate as a percentage (`10.0` for 10%), or `None` when the
    /// series has fewer than two flows, is single-signed, or the search does
    /// not converge within the configured bounds.
    pub fn calculate(&self, flows: &[CashFlow]) -> Option<Decimal> {
        if flows.len() < 2 {
            return None;
        }

        let mut ordered = flows.to_vec();
        ordered.sort_by_key(|f| f.date);
        let start_date = ordered.first()?.date;

        // A single-signed series has no meaningful internal rate of return.
        let has_inflow = ordered.iter().any(|f| f.amount > Decimal::ZERO);
        let has_outflow = ordered.iter().any(|f| f.amount < Decimal::ZERO);
        if !has_inflow || !has_outflow {
            return None;
        }

        let years: Vec<Decimal> = ordered
            .iter()
            .map(|f| Decimal::from((f.date - start_date).num_days()) / DAYS_PER_YEAR)
            .collect();

        let mut rate = self.params.initial_guess;

        for iteration in 0..self.params.max_iterations {
            let npv = Self::net_present_value(&ordered, &years, rate)?;
            let derivative = Self::npv_derivative(&ordered, &years, rate)?;

            if derivative.abs() < self.params.derivative_floor {
                debug!(
                    "IRR search aborted on flat slope at iteration {} (rate {})",
                    iteration, rate
                );
                return None;
            }

            let next_rate = rate - npv / derivative;

            if (next_rate - rate).abs() < self.params.tolerance {
                return Some(next_rate * dec!(100));
            }

            if next_rate < self.params.min_rate || next_rate > self.params.max_rate {
                debug!(
                    "IRR search diverged to {} at iteration {}",
                    next_rate, iteration
                );
                return None;
            }

            rate = next_rate;
        }

        None
    }

    /// `NPV(r) = sum(flow_i / (1 + r)^years_i)`.
    /// `None` on Decimal overflow, which only happens deep in divergent territory.
    fn net_present_value(flows: &[CashFlow], years: &[Decimal], rate: Decimal) -> Option<Decimal> {
        let mut npv = Decimal::ZERO;
        for (flow, flow_years) in flows.iter().zip(years) {
            let factor = (Decimal::ONE + rate).checked_powd(*flow_years)?;
            if factor.is_zero() {
                return None;
            }
            npv += flow.amount / factor;
        }
        Some(npv)
    }

    /// `dNPV/dr = sum(-years_i * flow_i / (1 + r)^(years_i + 1))`.
    fn npv_derivative(flows: &[CashFlow], years: &[Decimal], rate: Decimal) -> Option<Decimal> {
        let mut derivative = Decimal::ZERO;
        for (flow, flow_years) in flows.iter().zip(years) {
            let factor = (Decimal::ONE + rate).checked_powd(*flow_years + Decimal::ONE)?;
            if factor.is_zero() {
                return None;
            }
            derivative += -*flow_years * flow.amount / factor;
        }
        Some(derivative)
    }
}
