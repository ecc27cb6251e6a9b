//! json state - terms in, schedule views out
use amortization_rs::{ChartView, LoanTerms, RepaymentSchedule, SummaryView};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== json views ===\n");

    let terms = LoanTerms::from_json(
        r#"{"principal":"180000","annual_rate_percent":"4.25","term_years":15}"#,
    )?;
    let schedule = RepaymentSchedule::generate(terms)?;

    println!("summary:");
    println!("--------");
    println!("{}\n", SummaryView::from_schedule(&schedule).to_json_pretty()?);

    let chart = ChartView::from_schedule(&schedule);
    println!("chart series: {} balance points, {} contribution points", chart.balance.len(), chart.contributions.len());

    // first year of rows only
    let json = schedule.json();
    let value: serde_json::Value = serde_json::from_str(&json)?;
    if let Some(rows) = value["entries"].as_array() {
        for row in rows.iter().take(12) {
            println!("{}", row);
        }
    }

    Ok(())
}
