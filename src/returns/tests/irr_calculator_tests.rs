use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::returns::{CashFlow, IrrCalculator, IrrParams};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_fewer_than_two_flows_returns_none() {
    let calculator = IrrCalculator::new();
    assert_eq!(calculator.calculate(&[]), None);
    assert_eq!(
        calculator.calculate(&[CashFlow::new(date(2024, 1, 1), dec!(-1000))]),
        None
    );
}

#[test]
fn test_single_signed_series_returns_none() {
    let calculator = IrrCalculator::new();

    let all_negative = [
        CashFlow::new(date(2024, 1, 1), dec!(-1000)),
        CashFlow::new(date(2024, 6, 1), dec!(-500)),
    ];
    assert_eq!(calculator.calculate(&all_negative), None);

    let all_positive = [
        CashFlow::new(date(2024, 1, 1), dec!(1000)),
        CashFlow::new(date(2024, 6, 1), dec!(500)),
    ];
    assert_eq!(calculator.calculate(&all_positive), None);
}

#[test]
fn test_one_year_round_trip_converges_to_ten_percent() {
    let calculator = IrrCalculator::new();
    let flows = [
        CashFlow::new(date(2023, 1, 1), dec!(-1000)),
        CashFlow::new(date(2024, 1, 1), dec!(1100)),
    ];

    let irr = calculator.calculate(&flows).unwrap();
    assert!((irr - dec!(10)).abs() < dec!(0.1), "got {}", irr);
}

#[test]
fn test_multi_flow_series_converges() {
    let calculator = IrrCalculator::new();
    let flows = [
        CashFlow::new(date(2022, 1, 1), dec!(-1000)),
        CashFlow::new(date(2023, 1, 1), dec!(500)),
        CashFlow::new(date(2024, 1, 1), dec!(700)),
    ];

    // Root of -1000 + 500/(1+r) + 700/(1+r)^2 is close to 12.3% a year.
    let irr = calculator.calculate(&flows).unwrap();
    assert!(irr > dec!(12) && irr < dec!(13), "got {}", irr);
}

#[test]
fn test_unsorted_flows_are_ordered_by_date() {
    let calculator = IrrCalculator::new();
    let sorted = [
        CashFlow::new(date(2023, 1, 1), dec!(-1000)),
        CashFlow::new(date(2024, 1, 1), dec!(1100)),
    ];
    let reversed = [sorted[1], sorted[0]];

    assert_eq!(calculator.calculate(&reversed), calculator.calculate(&sorted));
}

#[test]
fn test_runaway_rate_is_rejected() {
    let calculator = IrrCalculator::new();
    // Implied rate of 99900% a year, far beyond the divergence bound.
    let flows = [
        CashFlow::new(date(2023, 1, 1), dec!(-1)),
        CashFlow::new(date(2024, 1, 1), dec!(1000)),
    ];

    assert_eq!(calculator.calculate(&flows), None);
}

#[test]
fn test_iteration_cap_is_honored() {
    let starved = IrrCalculator::with_params(IrrParams {
        max_iterations: 1,
        ..IrrParams::default()
    });
    let flows = [
        CashFlow::new(date(2022, 1, 1), dec!(-1000)),
        CashFlow::new(date(2023, 1, 1), dec!(500)),
        CashFlow::new(date(2024, 1, 1), dec!(700)),
    ];

    // One Newton step is not enough to move within tolerance here.
    assert_eq!(starved.calculate(&flows), None);
    assert!(IrrCalculator::new().calculate(&flows).is_some());
}
