pub mod calculator;
pub mod schedule;

pub use calculator::{compute_monthly_payment, periodic_payment};
pub use schedule::{
    generate_schedule, BalancePoint, ContributionPoint, LoanSummary, RepaymentSchedule,
    ScheduleEntry,
};
