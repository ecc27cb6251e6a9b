//! zero rate - interest free loans amortize in equal principal steps
use amortization_rs::{generate_schedule, Decimal, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== interest free loan ===\n");

    let schedule = generate_schedule(Money::from_major(12_000), Decimal::ZERO, 1)?;
    println!("monthly payment: ${:.2}", schedule.monthly_payment());

    for point in schedule.balance_series() {
        println!("month {:>2}: balance ${:.2}", point.period, point.remaining_balance);
    }

    Ok(())
}
