use rust_decimal::Decimal;
use tracing::debug;

use crate::config::LoanTerms;
use crate::decimal::Money;
use crate::errors::{LoanError, Result};

/// constant periodic payment for validated terms, before rounding to money precision
///
/// `payment = P * r * (1 + r)^n / ((1 + r)^n - 1)` for a monthly rate `r > 0`,
/// `payment = P / n` when the rate is zero. The zero-rate branch is checked
/// before the annuity formula so its denominator can never be zero.
pub(crate) fn exact_payment(terms: &LoanTerms) -> Result<Decimal> {
    let principal = terms.principal.as_decimal();
    let rate = terms.monthly_rate();
    let periods = Decimal::from(terms.periods());

    if rate.is_zero() {
        return Ok(principal / periods);
    }

    let compound = rate
        .compound_factor(terms.periods())
        .ok_or_else(|| overflow(terms, "(1 + r)^n"))?;
    let denominator = compound - Decimal::ONE;

    // a rate too small to move (1 + r)^n at 28 digits behaves like zero
    if denominator.is_zero() {
        return Ok(principal / periods);
    }

    let numerator = principal
        .checked_mul(rate.as_decimal())
        .and_then(|x| x.checked_mul(compound))
        .ok_or_else(|| overflow(terms, "P * r * (1 + r)^n"))?;

    numerator
        .checked_div(denominator)
        .ok_or_else(|| overflow(terms, "payment"))
}

fn overflow(terms: &LoanTerms, step: &str) -> LoanError {
    LoanError::CalculationOverflow {
        message: format!(
            "{} out of decimal range for {} years at {}%",
            step, terms.term_years, terms.annual_rate_percent
        ),
    }
}

/// periodic payment for a set of loan terms
///
/// Terms are checked again here since their fields are public and may come
/// straight from deserialization.
pub fn periodic_payment(terms: &LoanTerms) -> Result<Money> {
    terms.validate()?;
    let payment = Money::from_decimal(exact_payment(terms)?);

    debug!(
        principal = %terms.principal,
        annual_rate = %terms.annual_rate_percent,
        term_years = terms.term_years,
        periods = terms.periods(),
        payment = %payment,
        "computed periodic payment"
    );

    Ok(payment)
}

/// monthly payment that fully amortizes `principal` over `term_years`
///
/// Fails with [`LoanError::InvalidInput`] when `principal <= 0`,
/// `annual_rate_percent < 0` or `term_years == 0`.
pub fn compute_monthly_payment(
    principal: Money,
    annual_rate_percent: Decimal,
    term_years: u32,
) -> Result<Money> {
    let terms = LoanTerms::new(principal, annual_rate_percent, term_years)?;
    periodic_payment(&terms)
}
