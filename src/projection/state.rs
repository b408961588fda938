//! State carried from one projected month to the next

use crate::config::DealConfig;

/// Mutable balances threaded through the monthly recurrence.
///
/// Lives only for the duration of one projection run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    /// 0-based simulated month
    pub month: u32,

    /// Outstanding mortgage principal
    pub mortgage_balance: f64,

    /// Outstanding HELOC balance
    pub heloc_balance: f64,

    /// Running total of cash distributed to the owner
    pub cumulative_net_cash: f64,

    /// Running total of NOI less interest (principal excluded)
    pub cumulative_cash_flow_after_debt: f64,
}

impl ProjectionState {
    /// Opening state: full loan outstanding and the HELOC drawn for its
    /// share of the upfront capital
    pub fn from_deal(deal: &DealConfig) -> Self {
        let capital = deal.capital_structure();
        Self {
            month: 0,
            mortgage_balance: capital.loan_amount,
            heloc_balance: capital.heloc_portion,
            cumulative_net_cash: 0.0,
            cumulative_cash_flow_after_debt: 0.0,
        }
    }

    /// Simulated year (0-based)
    pub fn year_index(&self) -> u32 {
        self.month / 12
    }

    /// Calendar month (0 = January)
    pub fn month_index(&self) -> usize {
        (self.month % 12) as usize
    }

    pub fn advance_month(&mut self) {
        self.month += 1;
    }
}
