//! Break-even queries over the monthly sequence

use serde::{Deserialize, Serialize};

use crate::config::CapitalStructure;
use crate::projection::ProjectionRow;

/// First month index where cumulative owner cash is non-negative
pub fn cash_flow_break_even_month(rows: &[ProjectionRow]) -> Option<usize> {
    rows.iter().position(|r| r.cumulative_net_cash >= 0.0)
}

/// First month index where the HELOC is fully repaid
pub fn heloc_payoff_month(rows: &[ProjectionRow]) -> Option<usize> {
    rows.iter().position(|r| r.heloc_balance <= 0.0)
}

/// First month index where distributions have returned the cash invested
pub fn payback_month(rows: &[ProjectionRow], cash_portion: f64) -> Option<usize> {
    rows.iter().position(|r| r.cumulative_net_cash >= cash_portion)
}

/// Break-even points used to annotate charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEven {
    pub cash_flow_month: Option<usize>,
    /// Only tracked when part of the entry was financed with the HELOC
    pub heloc_payoff_month: Option<usize>,
    pub payback_month: Option<usize>,
    pub has_heloc: bool,
}

impl BreakEven {
    pub fn analyze(rows: &[ProjectionRow], capital: &CapitalStructure) -> Self {
        let has_heloc = capital.has_heloc();
        Self {
            cash_flow_month: cash_flow_break_even_month(rows),
            heloc_payoff_month: if has_heloc { heloc_payoff_month(rows) } else { None },
            payback_month: payback_month(rows, capital.cash_portion),
            has_heloc,
        }
    }

    /// HELOC payoff when the entry was HELOC-financed, cash-flow break-even otherwise
    pub fn effective_month(&self) -> Option<usize> {
        if self.has_heloc {
            self.heloc_payoff_month
        } else {
            self.cash_flow_month
        }
    }
}
