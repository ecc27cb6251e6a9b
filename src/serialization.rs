//! serializable views of a repayment schedule for display and charting
use serde::{Deserialize, Serialize};

use crate::config::LoanTerms;
use crate::errors::Result;
use crate::payments::{BalancePoint, ContributionPoint, LoanSummary, RepaymentSchedule, ScheduleEntry};

/// full schedule view: inputs, headline figures and every period
#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleView {
    pub terms: LoanTerms,
    pub summary: LoanSummary,
    pub entries: Vec<ScheduleEntry>,
}

impl ScheduleView {
    pub fn from_schedule(schedule: &RepaymentSchedule) -> Self {
        ScheduleView {
            terms: *schedule.terms(),
            summary: schedule.summary(),
            entries: schedule.entries().to_vec(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// summary-only view, without the per-period rows
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryView {
    pub terms: LoanTerms,
    pub summary: LoanSummary,
}

impl SummaryView {
    pub fn from_schedule(schedule: &RepaymentSchedule) -> Self {
        SummaryView {
            terms: *schedule.terms(),
            summary: schedule.summary(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// series consumed by a charting layer
#[derive(Debug, Serialize, Deserialize)]
pub struct ChartView {
    pub balance: Vec<BalancePoint>,
    pub contributions: Vec<ContributionPoint>,
}

impl ChartView {
    pub fn from_schedule(schedule: &RepaymentSchedule) -> Self {
        ChartView {
            balance: schedule.balance_series(),
            contributions: schedule.principal_interest_series(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl RepaymentSchedule {
    /// get json representation of the whole schedule
    pub fn to_json_pretty(&self) -> String {
        ScheduleView::from_schedule(self)
            .to_json_pretty()
            .unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}
