//! quick start - monthly payment for a 30 year mortgage
use amortization_rs::{compute_monthly_payment, Money};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let payment = compute_monthly_payment(Money::from_major(100_000), dec!(5.0), 30)?;
    println!("monthly payment: ${:.2}", payment);

    Ok(())
}
