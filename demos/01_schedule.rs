//! schedule - full repayment schedule with totals
use amortization_rs::{LoanTerms, Money, RepaymentSchedule};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== repayment schedule ===\n");

    let terms = LoanTerms::builder()
        .amount(Money::from_major(25_000))
        .rate_percent(dec!(6.9))
        .term_years(5)
        .build()?;

    let schedule = RepaymentSchedule::generate(terms)?;

    println!("{:>6} {:>12} {:>12} {:>12} {:>14}", "period", "payment", "principal", "interest", "balance");
    for entry in &schedule {
        println!(
            "{:>6} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            entry.period,
            entry.payment.as_decimal(),
            entry.principal_portion.as_decimal(),
            entry.interest_portion.as_decimal(),
            entry.remaining_balance.as_decimal(),
        );
    }

    let summary = schedule.summary();
    println!("\nmonthly payment: ${:.2}", summary.monthly_payment);
    println!("total payment:   ${:.2}", summary.total_payment);
    println!("total interest:  ${:.2}", summary.total_interest);

    Ok(())
}
