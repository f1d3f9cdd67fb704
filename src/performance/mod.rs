pub mod performance_model;
pub mod period_performance;

pub use performance_model::{MonthlyInvestment, PeriodPerformance};
pub use period_performance::PeriodPerformanceCalculator;
