//! Internal rate of return on the owner's equity position

use crate::config::CapitalStructure;
use crate::projection::ProjectionRow;

const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: usize = 1000;
const MIN_PERIODIC_RATE: f64 = -0.99;
const MAX_PERIODIC_RATE: f64 = 10.0;

/// Annualised IRR of a periodic cash-flow series.
///
/// Newton-Raphson on the periodic rate, falling back to bisection when the
/// derivative vanishes or iteration does not settle. Returns `None` when the
/// series never changes sign or no root lies in the search bracket.
pub fn calculate_irr(cashflows: &[f64], periods_per_year: u32) -> Option<f64> {
    if cashflows.is_empty() {
        return None;
    }
    if cashflows.iter().all(|cf| cf.abs() < TOLERANCE) {
        return Some(0.0);
    }

    let has_inflow = cashflows.iter().any(|&cf| cf > TOLERANCE);
    let has_outflow = cashflows.iter().any(|&cf| cf < -TOLERANCE);
    if !has_inflow || !has_outflow {
        return None;
    }

    let annualise = |rate: f64| (1.0 + rate).powi(periods_per_year as i32) - 1.0;

    let mut rate = 0.08 / periods_per_year as f64;
    for _ in 0..MAX_ITERATIONS {
        let (npv, slope) = npv_with_slope(cashflows, rate);
        if slope.abs() < 1e-20 {
            break;
        }

        let next = (rate - npv / slope).clamp(MIN_PERIODIC_RATE, MAX_PERIODIC_RATE);
        if (next - rate).abs() < TOLERANCE {
            return Some(annualise(next));
        }
        rate = next;
    }

    bisect(cashflows).map(annualise)
}

fn npv_with_slope(cashflows: &[f64], rate: f64) -> (f64, f64) {
    cashflows
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(npv, slope), (t, &cf)| {
            let discount = (1.0 + rate).powi(t as i32);
            (
                npv + cf / discount,
                slope - t as f64 * cf / (discount * (1.0 + rate)),
            )
        })
}

fn npv(cashflows: &[f64], rate: f64) -> f64 {
    npv_with_slope(cashflows, rate).0
}

fn bisect(cashflows: &[f64]) -> Option<f64> {
    let mut low = MIN_PERIODIC_RATE;
    let mut high = MAX_PERIODIC_RATE;
    let mut npv_low = npv(cashflows, low);

    if npv_low * npv(cashflows, high) > 0.0 {
        return None;
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = npv(cashflows, mid);
        if npv_mid.abs() < TOLERANCE || (high - low) / 2.0 < TOLERANCE {
            return Some(mid);
        }
        if npv_mid * npv_low < 0.0 {
            high = mid;
        } else {
            low = mid;
            npv_low = npv_mid;
        }
    }

    None
}

/// Owner's monthly equity cash flows: cash invested up front, monthly
/// distributions, and the equity left in the property at the horizon
pub fn equity_cashflows(rows: &[ProjectionRow], capital: &CapitalStructure) -> Vec<f64> {
    let mut flows = Vec::with_capacity(rows.len() + 1);
    flows.push(-capital.cash_portion);
    flows.extend(rows.iter().map(|r| r.net_cash_to_owner));

    if let (Some(exit), Some(last)) = (flows.last_mut(), rows.last()) {
        *exit += last.equity();
    }
    flows
}

/// Annualised equity IRR over the projected horizon
pub fn equity_irr(rows: &[ProjectionRow], capital: &CapitalStructure) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    calculate_irr(&equity_cashflows(rows, capital), 12)
}
