//! Projection output rows and run results

use serde::{Deserialize, Serialize};

use super::aggregation::aggregate_yearly;
use super::strategy::Strategy;
use crate::config::DealConfig;

/// One row of projection output.
///
/// Monthly rows cover a single month. Yearly rows share the same shape:
/// flow fields are summed, `occupancy` and `adr` are averaged, and the
/// balance fields are taken from the last month of the block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// "Jan 2026" for months, "Year 1" for yearly blocks
    pub label: String,
    /// 1-based month or year number
    pub period: u32,
    /// Number of months this row covers
    pub months: u32,

    // Revenue and operating expenses
    pub revenue: f64,
    pub cleaning_income: f64,
    pub cleaning_expense: f64,
    pub mgmt_fee: f64,
    pub maintenance: f64,
    pub opex: f64,
    pub property_tax: f64,
    pub hoa: f64,
    pub host_fee: f64,

    // Applied operating assumptions
    pub occupancy: f64,
    pub adr: f64,
    pub turns: f64,

    // Net operating income
    pub noi_pre_platform: f64,
    pub noi_after_platform: f64,

    // Mortgage
    pub mortgage_payment: f64,
    pub mortgage_interest: f64,
    pub mortgage_principal: f64,
    pub mortgage_balance: f64,

    // HELOC; a negative paydown is a draw that covered a deficit
    pub heloc_interest: f64,
    pub heloc_principal_paydown: f64,
    pub heloc_balance: f64,

    // Owner cash flow
    /// NOI after mortgage payment and HELOC interest
    pub cash_flow_after_debt: f64,
    /// Cash actually distributed after the HELOC paydown election
    pub net_cash_to_owner: f64,
    pub cumulative_net_cash: f64,
    /// Running NOI less mortgage and HELOC interest; principal is equity, not expense
    pub cumulative_cash_flow_after_debt: f64,

    pub property_value: f64,
}

impl ProjectionRow {
    /// Empty row with all amounts at zero
    pub fn new(label: String, period: u32) -> Self {
        Self {
            label,
            period,
            months: 1,
            revenue: 0.0,
            cleaning_income: 0.0,
            cleaning_expense: 0.0,
            mgmt_fee: 0.0,
            maintenance: 0.0,
            opex: 0.0,
            property_tax: 0.0,
            hoa: 0.0,
            host_fee: 0.0,
            occupancy: 0.0,
            adr: 0.0,
            turns: 0.0,
            noi_pre_platform: 0.0,
            noi_after_platform: 0.0,
            mortgage_payment: 0.0,
            mortgage_interest: 0.0,
            mortgage_principal: 0.0,
            mortgage_balance: 0.0,
            heloc_interest: 0.0,
            heloc_principal_paydown: 0.0,
            heloc_balance: 0.0,
            cash_flow_after_debt: 0.0,
            net_cash_to_owner: 0.0,
            cumulative_net_cash: 0.0,
            cumulative_cash_flow_after_debt: 0.0,
            property_value: 0.0,
        }
    }

    /// Operating expenses including the platform fee
    pub fn operating_expenses(&self) -> f64 {
        self.cleaning_expense
            + self.mgmt_fee
            + self.maintenance
            + self.opex
            + self.property_tax
            + self.hoa
            + self.host_fee
    }

    /// Mortgage payment plus HELOC interest
    pub fn total_debt_service(&self) -> f64 {
        self.mortgage_payment + self.heloc_interest
    }

    /// Property value less both loan balances
    pub fn equity(&self) -> f64 {
        self.property_value - self.mortgage_balance - self.heloc_balance
    }
}

/// Complete projection for one deal and strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub strategy: Strategy,

    /// Deal the projection ran on, after any amenity adjustments
    pub deal: DealConfig,

    /// Monthly rows, index 0 = first simulated month
    pub monthly: Vec<ProjectionRow>,
}

impl ProjectionResult {
    pub fn new(strategy: Strategy, deal: DealConfig) -> Self {
        Self {
            strategy,
            deal,
            monthly: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: ProjectionRow) {
        self.monthly.push(row);
    }

    /// Fiscal-year rows built from the monthly sequence
    pub fn yearly(&self) -> Vec<ProjectionRow> {
        aggregate_yearly(&self.monthly)
    }

    /// Totals over the full horizon
    pub fn summary(&self) -> ProjectionSummary {
        let total = |f: fn(&ProjectionRow) -> f64| self.monthly.iter().map(f).sum::<f64>();
        let last = self.monthly.last();

        ProjectionSummary {
            total_months: self.monthly.len() as u32,
            total_revenue: total(|r| r.revenue),
            total_operating_expenses: total(ProjectionRow::operating_expenses),
            total_noi: total(|r| r.noi_after_platform),
            total_mortgage_payments: total(|r| r.mortgage_payment),
            total_heloc_interest: total(|r| r.heloc_interest),
            total_net_cash: total(|r| r.net_cash_to_owner),
            final_mortgage_balance: last.map(|r| r.mortgage_balance).unwrap_or(0.0),
            final_heloc_balance: last.map(|r| r.heloc_balance).unwrap_or(0.0),
            final_property_value: last.map(|r| r.property_value).unwrap_or(0.0),
            final_equity: last.map(ProjectionRow::equity).unwrap_or(0.0),
        }
    }
}

/// Horizon totals for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub total_revenue: f64,
    pub total_operating_expenses: f64,
    pub total_noi: f64,
    pub total_mortgage_payments: f64,
    pub total_heloc_interest: f64,
    pub total_net_cash: f64,
    pub final_mortgage_balance: f64,
    pub final_heloc_balance: f64,
    pub final_property_value: f64,
    pub final_equity: f64,
}
