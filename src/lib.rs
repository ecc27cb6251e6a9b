//! Fixed-rate loan amortization.
//!
//! Computes the constant monthly payment for a fixed-rate loan and the full
//! period-by-period repayment schedule that pays it down to zero.
//!
//! ```rust
//! use amortization_rs::{generate_schedule, Money};
//! use rust_decimal_macros::dec;
//!
//! let schedule = generate_schedule(Money::from_major(100_000), dec!(5.0), 30).unwrap();
//! assert_eq!(schedule.len(), 360);
//! assert_eq!(schedule.monthly_payment().round_dp(2).to_string(), "536.82");
//! ```

pub mod config;
pub mod decimal;
pub mod errors;
pub mod payments;
pub mod serialization;
pub mod session;

// re-export key types
pub use config::{LoanTerms, LoanTermsBuilder, MAX_TERM_YEARS, PERIODS_PER_YEAR};
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use payments::{
    compute_monthly_payment, generate_schedule, periodic_payment, BalancePoint,
    ContributionPoint, LoanSummary, RepaymentSchedule, ScheduleEntry,
};
pub use serialization::{ChartView, ScheduleView, SummaryView};
pub use session::{CalculatorSession, SessionState};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
