use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LoanTerms;
use crate::decimal::Money;
use crate::errors::Result;
use crate::payments::calculator::exact_payment;

/// one period of a repayment schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based period index
    pub period: u32,
    pub payment: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    /// balance after this payment, never negative
    pub remaining_balance: Money,
}

/// remaining balance after a period, for balance-over-time charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub period: u32,
    pub remaining_balance: Money,
}

/// principal and interest paid in a period, for contribution charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionPoint {
    pub period: u32,
    pub principal: Money,
    pub interest: Money,
}

/// headline figures for a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub monthly_payment: Money,
    pub periods: u32,
    /// monthly payment times the number of periods
    pub total_payment: Money,
    /// total payment less the principal
    pub total_interest: Money,
}

/// full period-by-period repayment schedule for a fixed-rate loan
///
/// Built in one pass by [`RepaymentSchedule::generate`] and read-only
/// afterwards. Entries are ordered by period, one per month of the term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepaymentSchedule {
    terms: LoanTerms,
    monthly_payment: Money,
    entries: Vec<ScheduleEntry>,
}

impl RepaymentSchedule {
    /// generate the schedule for validated terms
    pub fn generate(terms: LoanTerms) -> Result<Self> {
        terms.validate()?;

        let rate = terms.monthly_rate().as_decimal();
        let periods = terms.periods();
        let exact = exact_payment(&terms)?;
        let payment = Money::from_decimal(exact);

        // the running balance keeps full decimal precision; only the
        // recorded fields are rounded to money precision
        let mut balance = terms.principal.as_decimal();
        let mut entries = Vec::with_capacity(periods as usize);

        for period in 1..=periods {
            let interest = balance * rate;
            balance -= exact - interest;

            let interest_portion = Money::from_decimal(interest);
            entries.push(ScheduleEntry {
                period,
                payment,
                principal_portion: payment - interest_portion,
                interest_portion,
                remaining_balance: Money::from_decimal(balance.max(Decimal::ZERO)),
            });
        }

        debug!(
            principal = %terms.principal,
            annual_rate = %terms.annual_rate_percent,
            term_years = terms.term_years,
            periods,
            payment = %payment,
            residual = %balance,
            "generated repayment schedule"
        );

        Ok(Self {
            terms,
            monthly_payment: payment,
            entries,
        })
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    pub fn monthly_payment(&self) -> Money {
        self.monthly_payment
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// entry for a 1-based period
    pub fn entry(&self, period: u32) -> Option<&ScheduleEntry> {
        period
            .checked_sub(1)
            .and_then(|i| self.entries.get(i as usize))
    }

    /// remaining balance after the last payment
    pub fn final_balance(&self) -> Money {
        self.entries
            .last()
            .map(|e| e.remaining_balance)
            .unwrap_or(self.terms.principal)
    }

    pub fn total_interest(&self) -> Money {
        self.entries.iter().map(|e| e.interest_portion).sum()
    }

    pub fn total_principal(&self) -> Money {
        self.entries.iter().map(|e| e.principal_portion).sum()
    }

    pub fn total_payment(&self) -> Money {
        self.entries.iter().map(|e| e.payment).sum()
    }

    /// payment, total paid and total interest over the term
    pub fn summary(&self) -> LoanSummary {
        let periods = self.terms.periods();
        let total_payment = self.monthly_payment * Decimal::from(periods);

        LoanSummary {
            monthly_payment: self.monthly_payment,
            periods,
            total_payment,
            total_interest: total_payment - self.terms.principal,
        }
    }

    pub fn balance_series(&self) -> Vec<BalancePoint> {
        self.entries
            .iter()
            .map(|e| BalancePoint {
                period: e.period,
                remaining_balance: e.remaining_balance,
            })
            .collect()
    }

    pub fn principal_interest_series(&self) -> Vec<ContributionPoint> {
        self.entries
            .iter()
            .map(|e| ContributionPoint {
                period: e.period,
                principal: e.principal_portion,
                interest: e.interest_portion,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a RepaymentSchedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// repayment schedule for `principal` at `annual_rate_percent` over `term_years`
///
/// Validation happens once, before the first period is computed; invalid
/// terms fail with [`crate::LoanError::InvalidInput`] and yield no entries.
pub fn generate_schedule(
    principal: Money,
    annual_rate_percent: Decimal,
    term_years: u32,
) -> Result<RepaymentSchedule> {
    let terms = LoanTerms::new(principal, annual_rate_percent, term_years)?;
    RepaymentSchedule::generate(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LoanError;
    use crate::payments::compute_monthly_payment;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn tolerance(principal: Money) -> Money {
        Money::from_decimal(principal.as_decimal() * dec!(0.000001))
    }

    #[test]
    fn test_thirty_year_mortgage() {
        let schedule = generate_schedule(Money::from_major(100_000), dec!(5.0), 30).unwrap();

        assert_eq!(schedule.len(), 360);
        assert_eq!(schedule.monthly_payment().round_dp(2).as_decimal(), dec!(536.82));

        let first = schedule.entry(1).unwrap();
        assert_eq!(first.period, 1);
        assert_eq!(first.interest_portion.round_dp(2).as_decimal(), dec!(416.67));
        assert_eq!(first.principal_portion.round_dp(2).as_decimal(), dec!(120.15));
        assert_eq!(first.remaining_balance.round_dp(2).as_decimal(), dec!(99879.85));

        let last = schedule.entry(360).unwrap();
        assert!(last.remaining_balance.approx_eq(Money::ZERO, tolerance(Money::from_major(100_000))));
        assert!(schedule.entry(361).is_none());
        assert!(schedule.entry(0).is_none());
    }

    #[test]
    fn test_zero_rate_schedule() {
        let schedule = generate_schedule(Money::from_major(12_000), Decimal::ZERO, 1).unwrap();

        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule.monthly_payment(), Money::from_major(1_000));

        let mut previous = Money::from_major(12_000);
        for entry in &schedule {
            assert_eq!(entry.interest_portion, Money::ZERO);
            assert_eq!(entry.principal_portion, Money::from_major(1_000));
            assert_eq!(entry.payment, Money::from_major(1_000));
            assert_eq!(previous - entry.remaining_balance, Money::from_major(1_000));
            previous = entry.remaining_balance;
        }
        assert_eq!(schedule.final_balance(), Money::ZERO);
    }

    #[test]
    fn test_zero_rate_uneven_division() {
        let principal = Money::from_major(10_000);
        let schedule = generate_schedule(principal, Decimal::ZERO, 3).unwrap();

        for entry in &schedule {
            assert!(entry.interest_portion.is_zero());
            assert_eq!(entry.principal_portion, entry.payment);
        }
        assert!(schedule.final_balance().approx_eq(Money::ZERO, tolerance(principal)));
        assert!(schedule.total_principal().approx_eq(principal, tolerance(principal)));
    }

    #[test]
    fn test_schedule_reuses_calculator_payment() {
        let principal = Money::from_major(250_000);
        let payment = compute_monthly_payment(principal, dec!(6.5), 30).unwrap();
        let schedule = generate_schedule(principal, dec!(6.5), 30).unwrap();

        assert_eq!(schedule.monthly_payment(), payment);
        assert!(schedule.iter().all(|e| e.payment == payment));
    }

    #[test]
    fn test_interest_declines_and_principal_grows() {
        let schedule = generate_schedule(Money::from_major(50_000), dec!(8), 10).unwrap();
        let entries = schedule.entries();

        for pair in entries.windows(2) {
            assert!(pair[1].interest_portion <= pair[0].interest_portion);
            assert!(pair[1].principal_portion >= pair[0].principal_portion);
        }
    }

    #[test]
    fn test_summary() {
        let schedule = generate_schedule(Money::from_major(100_000), dec!(5.0), 30).unwrap();
        let summary = schedule.summary();

        assert_eq!(summary.periods, 360);
        assert_eq!(summary.total_payment.round_dp(2).as_decimal(), dec!(193255.78));
        assert_eq!(summary.total_interest.round_dp(2).as_decimal(), dec!(93255.78));
        assert!(summary.total_interest.approx_eq(schedule.total_interest(), Money::from_decimal(dec!(0.01))));
        assert_eq!(schedule.total_payment(), summary.total_payment);
    }

    #[test]
    fn test_chart_series() {
        let schedule = generate_schedule(Money::from_major(12_000), dec!(12), 1).unwrap();

        let balances = schedule.balance_series();
        assert_eq!(balances.len(), 12);
        assert_eq!(balances[0].period, 1);
        assert_eq!(balances[11].remaining_balance, schedule.final_balance());

        let contributions = schedule.principal_interest_series();
        assert_eq!(contributions.len(), 12);
        for (point, entry) in contributions.iter().zip(schedule.iter()) {
            assert_eq!(point.period, entry.period);
            assert_eq!(point.principal, entry.principal_portion);
            assert_eq!(point.interest, entry.interest_portion);
        }
    }

    #[test]
    fn test_invalid_terms_produce_no_schedule() {
        let cases = [
            (Money::ZERO, dec!(5), 30),
            (Money::from_major(10_000), dec!(-1), 30),
            (Money::from_major(10_000), dec!(5), 0),
        ];

        for (principal, rate, years) in cases {
            let result = generate_schedule(principal, rate, years);
            assert!(matches!(result, Err(LoanError::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_generate_rejects_unvalidated_terms() {
        let terms = LoanTerms {
            principal: Money::from_major(1_000),
            annual_rate_percent: dec!(5),
            term_years: 0,
        };
        assert!(RepaymentSchedule::generate(terms).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_generate_rejects_unbounded_term() {
        let terms = LoanTerms {
            principal: Money::from_major(1_000),
            annual_rate_percent: Decimal::ZERO,
            term_years: u32::MAX / 12,
        };
        assert!(RepaymentSchedule::generate(terms).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_longest_term_zero_rate() {
        let principal = Money::from_major(120_000);
        let schedule = generate_schedule(principal, Decimal::ZERO, crate::config::MAX_TERM_YEARS).unwrap();

        assert_eq!(schedule.len(), 1_200);
        assert_eq!(schedule.monthly_payment(), Money::from_major(100));
        assert_eq!(schedule.final_balance(), Money::ZERO);
    }

    fn principal_strategy() -> impl Strategy<Value = Money> {
        (1_000i64..5_000_000i64).prop_map(Money::from_major)
    }

    fn rate_strategy() -> impl Strategy<Value = Decimal> {
        // 0.00% to 25.00% in basis point steps
        (0u32..=2_500u32).prop_map(|bps| Decimal::from(bps) / dec!(100))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_schedule_invariants(
            principal in principal_strategy(),
            rate in rate_strategy(),
            years in 1u32..=40u32,
        ) {
            let schedule = generate_schedule(principal, rate, years).unwrap();
            let tol = tolerance(principal);

            prop_assert_eq!(schedule.len(), (years * 12) as usize);

            let mut previous_balance = principal;
            for (i, entry) in schedule.iter().enumerate() {
                prop_assert_eq!(entry.period, i as u32 + 1);
                prop_assert_eq!(entry.principal_portion + entry.interest_portion, entry.payment);
                prop_assert!(entry.remaining_balance <= previous_balance);
                prop_assert!(!entry.remaining_balance.is_negative());
                previous_balance = entry.remaining_balance;
            }

            prop_assert!(schedule.final_balance().approx_eq(Money::ZERO, tol));
            prop_assert!(schedule.total_principal().approx_eq(principal, tol));
        }

        #[test]
        fn test_zero_rate_invariants(
            principal in principal_strategy(),
            years in 1u32..=40u32,
        ) {
            let schedule = generate_schedule(principal, Decimal::ZERO, years).unwrap();
            let expected = principal / Decimal::from(years * 12);

            for entry in &schedule {
                prop_assert!(entry.interest_portion.is_zero());
                prop_assert_eq!(entry.principal_portion, expected);
                prop_assert_eq!(entry.payment, expected);
            }
        }
    }
}
