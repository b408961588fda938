//! Fixed-rate level-payment mortgage amortization

/// Amortization term in months, independent of the projection horizon
pub const MORTGAGE_TERM_MONTHS: u32 = 360;

/// Level monthly payment: P * r(1+r)^n / ((1+r)^n - 1).
///
/// `annual_rate_pct` is on the 0-100 scale. A zero rate amortizes
/// straight-line.
pub fn monthly_payment(loan_amount: f64, annual_rate_pct: f64, term_months: u32) -> f64 {
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return loan_amount / term_months as f64;
    }

    let compound = (1.0 + monthly_rate).powi(term_months as i32);
    loan_amount * monthly_rate * compound / (compound - 1.0)
}

/// One month of amortization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationStep {
    pub interest: f64,
    pub principal: f64,
    /// Interest plus principal actually paid this month
    pub payment: f64,
    pub balance: f64,
}

/// Advance the loan by one month.
///
/// Principal never exceeds the outstanding balance, so once the loan is
/// retired both interest and principal stay at zero.
pub fn amortize(balance: f64, monthly_rate: f64, payment: f64) -> AmortizationStep {
    let interest = balance * monthly_rate;
    let principal = balance.min(payment - interest);
    let balance = balance - principal;

    AmortizationStep {
        interest,
        principal,
        payment: interest + principal,
        balance,
    }
}
