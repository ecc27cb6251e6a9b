//! session - calculate first, plot once a result is ready
use amortization_rs::CalculatorSession;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== calculator session ===\n");

    let mut session = CalculatorSession::new();
    println!("can plot before input: {}", session.can_plot());

    // bad input is rejected and nothing is kept
    if let Err(e) = session.submit("100k", "5", "30") {
        println!("input error: {}", e);
    }

    let summary = *session.submit("100000", "5.0", "30")?;
    println!("monthly payment: ${:.2}", summary.monthly_payment);
    println!("total payment:   ${:.2}", summary.total_payment);
    println!("total interest:  ${:.2}", summary.total_interest);

    if session.can_plot() {
        let schedule = session.schedule()?;
        let contributions = schedule.principal_interest_series();
        for point in contributions.iter().step_by(60) {
            println!(
                "month {:>3}: principal ${:.2}, interest ${:.2}",
                point.period, point.principal, point.interest
            );
        }
    }

    Ok(())
}
