use chrono::{Datelike, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::{Result, ValidationError};
use crate::events::{Event, EventKind};
use crate::performance::{MonthlyInvestment, PeriodPerformance};
use crate::returns::{cash_flows_from_events, flow_totals, IrrCalculator, TwrCalculator};

/// Computes the profitability summary of an event history over a period.
///
/// The beginning value is derived from the terminal valuation minus the
/// period's net flows rather than observed independently; valuation history
/// is an external collaborator and out of scope here.
#[derive(Default, Debug, Clone)]
pub struct PeriodPerformanceCalculator {
    irr: IrrCalculator,
    twr: TwrCalculator,
}

impl PeriodPerformanceCalculator {
    pub fn new() -> Self {
        PeriodPerformanceCalculator {
            irr: IrrCalculator::new(),
            twr: TwrCalculator::new(),
        }
    }

    /// Summarizes the events falling inside `[period_start, period_end]`.
    ///
    /// `end_value` is the caller-supplied valuation at `period_end` (for an
    /// engine without market data, typically the invested value of the
    /// aggregated position).
    pub fn calculate(
        &self,
        events: &[Event],
        period_start: NaiveDate,
        period_end: NaiveDate,
        end_value: Decimal,
    ) -> Result<PeriodPerformance> {
        if period_start > period_end {
            return Err(ValidationError::InvalidInput(
                "Period start date must be before end date".to_string(),
            )
            .into());
        }

        let mut in_period: Vec<Event> = events
            .iter()
            .filter(|e| {
                let date = e.occurred_at.date_naive();
                date >= period_start && date <= period_end
            })
            .cloned()
            .collect();
        in_period.sort_by_key(|e| e.occurred_at);
        debug!(
            "Period performance over {} events between {} and {}",
            in_period.len(),
            period_start,
            period_end
        );

        let totals = flow_totals(&in_period);

        // Begin value reconstructed from the net flows of the period.
        let mut begin_value =
            end_value - totals.deposits + totals.withdrawals - totals.distributions;
        if begin_value < Decimal::ZERO {
            begin_value = Decimal::ZERO;
        }

        let flows = cash_flows_from_events(&in_period, end_value, period_end);
        let money_weighted_return = if flows.len() >= 2 {
            self.irr.calculate(&flows)
        } else {
            None
        };

        let time_weighted_return =
            self.twr
                .calculate_simple(begin_value, end_value, totals.deposits, totals.withdrawals);

        let simple_return = if begin_value > Decimal::ZERO {
            Some((end_value - begin_value + totals.distributions) / begin_value * dec!(100))
        } else {
            None
        };

        let monthly_invested = Self::monthly_invested(&in_period, period_start, period_end);

        Ok(PeriodPerformance {
            period_start,
            period_end,
            begin_value,
            end_value,
            deposits: totals.deposits,
            withdrawals: totals.withdrawals,
            distributions: totals.distributions,
            money_weighted_return,
            time_weighted_return,
            simple_return,
            monthly_invested,
        })
    }

    /// Purchase totals per calendar month covered by the period.
    fn monthly_invested(
        events: &[Event],
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Vec<MonthlyInvestment> {
        let mut months = Vec::new();
        let mut cursor = first_of_month(period_start);
        let last = first_of_month(period_end);

        while cursor <= last {
            let next = match next_month(cursor) {
                Some(date) => date,
                None => break,
            };

            let invested = events
                .iter()
                .filter(|e| e.kind == EventKind::Buy)
                .filter(|e| {
                    let date = e.occurred_at.date_naive();
                    date >= cursor && date < next
                })
                .map(|e| e.quantity * e.unit_price)
                .sum();

            months.push(MonthlyInvestment {
                month: cursor.format("%Y-%m").to_string(),
                invested,
            });
            cursor = next;
        }

        months
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}
