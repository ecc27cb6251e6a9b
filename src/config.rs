use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

/// payment periods per year; the engine only models monthly payments
pub const PERIODS_PER_YEAR: u32 = 12;

/// longest accepted loan term
pub const MAX_TERM_YEARS: u32 = 100;

/// fixed-rate loan terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    /// nominal annual rate as a percentage (5.0 means 5%)
    pub annual_rate_percent: Decimal,
    pub term_years: u32,
}

impl LoanTerms {
    /// create validated loan terms
    pub fn new(principal: Money, annual_rate_percent: Decimal, term_years: u32) -> Result<Self> {
        let terms = Self {
            principal,
            annual_rate_percent,
            term_years,
        };
        terms.validate()?;
        Ok(terms)
    }

    /// builder for loan terms
    pub fn builder() -> LoanTermsBuilder {
        LoanTermsBuilder::new()
    }

    /// 30 year mortgage
    pub fn mortgage(amount: Money, annual_rate_percent: Decimal) -> Result<Self> {
        Self::new(amount, annual_rate_percent, 30)
    }

    /// 5 year personal loan
    pub fn personal_loan(amount: Money, annual_rate_percent: Decimal) -> Result<Self> {
        Self::new(amount, annual_rate_percent, 5)
    }

    /// 6 year auto loan
    pub fn auto_loan(amount: Money, annual_rate_percent: Decimal) -> Result<Self> {
        Self::new(amount, annual_rate_percent, 6)
    }

    /// check domain constraints on every field
    pub fn validate(&self) -> Result<()> {
        let result = if !self.principal.is_positive() {
            Err(LoanError::invalid(
                "principal",
                format!("must be greater than zero, got {}", self.principal),
            ))
        } else if self.annual_rate_percent < Decimal::ZERO {
            Err(LoanError::invalid(
                "annual_rate_percent",
                format!("must not be negative, got {}", self.annual_rate_percent),
            ))
        } else if self.term_years == 0 {
            Err(LoanError::invalid("term_years", "must be at least one year"))
        } else if self.term_years > MAX_TERM_YEARS {
            Err(LoanError::invalid(
                "term_years",
                format!("must be at most {} years, got {}", MAX_TERM_YEARS, self.term_years),
            ))
        } else {
            Ok(())
        };

        if let Err(ref e) = result {
            warn!(error = %e, "rejected loan terms");
        }
        result
    }

    /// number of monthly payments
    pub fn periods(&self) -> u32 {
        self.term_years * PERIODS_PER_YEAR
    }

    pub fn annual_rate(&self) -> Rate {
        Rate::from_percentage(self.annual_rate_percent)
    }

    /// periodic rate: annual percentage / 12 / 100
    pub fn monthly_rate(&self) -> Rate {
        Rate::from_decimal(self.annual_rate_percent / Decimal::from(PERIODS_PER_YEAR) / dec!(100))
    }

    /// parse and validate terms from json
    pub fn from_json(json: &str) -> Result<Self> {
        let terms: LoanTerms = serde_json::from_str(json)?;
        terms.validate()?;
        Ok(terms)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// builder for loan terms
pub struct LoanTermsBuilder {
    principal: Option<Money>,
    annual_rate_percent: Decimal,
    term_years: u32,
}

impl LoanTermsBuilder {
    pub fn new() -> Self {
        Self {
            principal: None,
            annual_rate_percent: dec!(5.0),
            term_years: 30,
        }
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.principal = Some(amount);
        self
    }

    pub fn rate(mut self, rate: Rate) -> Self {
        self.annual_rate_percent = rate.as_percentage();
        self
    }

    pub fn rate_percent(mut self, percent: Decimal) -> Self {
        self.annual_rate_percent = percent;
        self
    }

    pub fn term_years(mut self, years: u32) -> Self {
        self.term_years = years;
        self
    }

    pub fn build(self) -> Result<LoanTerms> {
        let principal = self
            .principal
            .ok_or_else(|| LoanError::invalid("principal", "is required"))?;

        LoanTerms::new(principal, self.annual_rate_percent, self.term_years)
    }
}

impl Default for LoanTermsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
