use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, info};

use crate::config::LoanTerms;
use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::payments::{LoanSummary, RepaymentSchedule};

/// calculator state
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// no valid terms submitted yet
    AwaitingInput,
    /// schedule computed, charts may be drawn
    ResultReady {
        summary: LoanSummary,
        schedule: RepaymentSchedule,
    },
}

/// two-step calculator flow: submit terms, then read the summary or plot
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    state: SessionState,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::AwaitingInput,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// submit raw text fields as typed by a user
    pub fn submit(&mut self, principal: &str, annual_rate: &str, years: &str) -> Result<&LoanSummary> {
        let parsed = parse_fields(principal, annual_rate, years);
        match parsed {
            Ok(terms) => self.submit_terms(terms),
            Err(e) => {
                self.state = SessionState::AwaitingInput;
                Err(e)
            }
        }
    }

    /// submit already typed terms
    pub fn submit_terms(&mut self, terms: LoanTerms) -> Result<&LoanSummary> {
        // a failed submission never leaves a stale result behind
        self.state = SessionState::AwaitingInput;

        let schedule = RepaymentSchedule::generate(terms)?;
        let summary = schedule.summary();

        info!(
            monthly_payment = %summary.monthly_payment.round_dp(2),
            total_payment = %summary.total_payment.round_dp(2),
            total_interest = %summary.total_interest.round_dp(2),
            "loan calculated"
        );

        self.state = SessionState::ResultReady { summary, schedule };
        self.summary()
    }

    pub fn summary(&self) -> Result<&LoanSummary> {
        match &self.state {
            SessionState::ResultReady { summary, .. } => Ok(summary),
            SessionState::AwaitingInput => Err(LoanError::NoResult),
        }
    }

    pub fn schedule(&self) -> Result<&RepaymentSchedule> {
        match &self.state {
            SessionState::ResultReady { schedule, .. } => Ok(schedule),
            SessionState::AwaitingInput => Err(LoanError::NoResult),
        }
    }

    /// plotting is only possible once a result exists
    pub fn can_plot(&self) -> bool {
        matches!(self.state, SessionState::ResultReady { .. })
    }

    pub fn reset(&mut self) {
        debug!("calculator reset");
        self.state = SessionState::AwaitingInput;
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_fields(principal: &str, annual_rate: &str, years: &str) -> Result<LoanTerms> {
    let principal = Money::from_str_exact(principal)
        .map_err(|_| LoanError::invalid("principal", format!("is not a number: {:?}", principal)))?;
    let annual_rate_percent = Decimal::from_str(annual_rate.trim())
        .map_err(|_| LoanError::invalid("annual_rate_percent", format!("is not a number: {:?}", annual_rate)))?;
    let term_years = years
        .trim()
        .parse::<u32>()
        .map_err(|_| LoanError::invalid("term_years", format!("is not a whole number of years: {:?}", years)))?;

    LoanTerms::new(principal, annual_rate_percent, term_years)
}
