//! Core projection engine for monthly rental cash flows
//!
//! One call simulates the full horizon from month 0. Nothing is cached
//! between calls; any input change means a fresh run.

use chrono::{Datelike, NaiveDate};

use super::cashflows::{ProjectionResult, ProjectionRow};
use super::mortgage::{self, MORTGAGE_TERM_MONTHS};
use super::state::ProjectionState;
use super::strategy::Strategy;
use crate::config::DealConfig;

/// Default projection horizon in years
pub const DEFAULT_HORIZON_YEARS: u32 = 20;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Number of months to project
    pub projection_months: u32,

    /// Which revenue model to run
    pub strategy: Strategy,

    /// Calendar year of the first simulated January (labels only)
    pub start_year: i32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            projection_months: DEFAULT_HORIZON_YEARS * 12,
            strategy: Strategy::ShortTerm,
            start_year: chrono::Local::now().year(),
        }
    }
}

impl ProjectionConfig {
    pub fn new(strategy: Strategy, years: u32) -> Self {
        Self {
            projection_months: years.saturating_mul(12),
            strategy,
            ..Default::default()
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the monthly projection for one deal.
    ///
    /// Inputs are not validated: a zero price or negative rate flows
    /// through as NaN/Infinity in the rows rather than failing.
    pub fn project(&self, deal: &DealConfig) -> ProjectionResult {
        let mut result = ProjectionResult::new(self.config.strategy, deal.clone());
        let mut state = ProjectionState::from_deal(deal);

        // Level payment is fixed at origination and never re-amortized
        let payment = mortgage::monthly_payment(
            state.mortgage_balance,
            deal.mortgage_rate,
            MORTGAGE_TERM_MONTHS,
        );

        log::debug!(
            "Projecting {} for {} months: loan ${:.0}, payment ${:.2}, HELOC ${:.0}",
            self.config.strategy,
            self.config.projection_months,
            state.mortgage_balance,
            payment,
            state.heloc_balance
        );
        if self.config.projection_months < 12 {
            log::warn!(
                "Projection horizon of {} months is shorter than one year",
                self.config.projection_months
            );
        }

        result.monthly.reserve(self.config.projection_months as usize);
        for _ in 0..self.config.projection_months {
            let row = self.calculate_month(deal, payment, &mut state);
            result.add_row(row);
            state.advance_month();
        }

        result
    }

    /// Calculate one month and roll the carried balances forward
    fn calculate_month(
        &self,
        deal: &DealConfig,
        payment: f64,
        state: &mut ProjectionState,
    ) -> ProjectionRow {
        let mut row = ProjectionRow::new(self.month_label(state), state.month + 1);

        // Growth compounds once per simulated year
        let year_index = state.year_index() as i32;
        let rent_growth = (1.0 + deal.annual_rent_growth_rate / 100.0).powi(year_index);
        let expense_growth = (1.0 + deal.annual_expense_inflation_rate / 100.0).powi(year_index);

        let model = self.config.strategy.revenue_model(
            deal,
            state.month_index(),
            rent_growth,
            expense_growth,
        );

        row.revenue = model.revenue;
        row.occupancy = model.occupancy;
        row.adr = model.rate;
        row.turns = model.turns;
        row.cleaning_income = model.cleaning_income;
        row.cleaning_expense = model.cleaning_expense;
        row.opex = model.opex;

        self.calculate_operating(deal, expense_growth, model.mgmt_pct, model.host_fee_pct, &mut row);
        self.calculate_debt_service(deal, payment, state, &mut row);

        row.property_value =
            deal.price * (1.0 + deal.annual_appreciation_rate / 100.0 / 12.0).powi(state.month as i32);

        row
    }

    /// Common expense lines and NOI
    fn calculate_operating(
        &self,
        deal: &DealConfig,
        expense_growth: f64,
        mgmt_pct: f64,
        host_fee_pct: f64,
        row: &mut ProjectionRow,
    ) {
        row.mgmt_fee = row.revenue * mgmt_pct / 100.0;
        row.maintenance = row.revenue * deal.maintenance_percent / 100.0;
        row.host_fee = row.revenue * host_fee_pct / 100.0;

        // Rate-based floor keeps a stale manual tax entry from understating tax
        let rate_based_tax = deal.price * deal.annual_property_tax_rate / 100.0 / 12.0;
        row.property_tax = deal.property_tax_monthly.max(rate_based_tax) * expense_growth;
        row.hoa = deal.hoa_monthly * expense_growth;

        row.noi_pre_platform = row.revenue + row.cleaning_income
            - row.cleaning_expense
            - row.mgmt_fee
            - row.maintenance
            - row.opex
            - row.property_tax
            - row.hoa;
        row.noi_after_platform = row.noi_pre_platform - row.host_fee;
    }

    /// Mortgage amortization, HELOC interest and the owner/HELOC split
    fn calculate_debt_service(
        &self,
        deal: &DealConfig,
        payment: f64,
        state: &mut ProjectionState,
        row: &mut ProjectionRow,
    ) {
        let step = mortgage::amortize(state.mortgage_balance, deal.mortgage_rate / 100.0 / 12.0, payment);
        state.mortgage_balance = step.balance;

        row.mortgage_payment = step.payment;
        row.mortgage_interest = step.interest;
        row.mortgage_principal = step.principal;
        row.mortgage_balance = step.balance;

        row.heloc_interest = state.heloc_balance * deal.heloc_rate / 100.0 / 12.0;
        row.cash_flow_after_debt = row.noi_after_platform - row.mortgage_payment - row.heloc_interest;

        if row.cash_flow_after_debt < 0.0 {
            // Deficit is drawn on the HELOC; the owner never funds a shortfall
            state.heloc_balance += -row.cash_flow_after_debt;
            row.heloc_principal_paydown = row.cash_flow_after_debt;
            row.net_cash_to_owner = 0.0;
        } else {
            let available = state.heloc_balance.min(row.cash_flow_after_debt);
            row.heloc_principal_paydown = available * (deal.heloc_paydown_percent / 100.0);
            state.heloc_balance -= row.heloc_principal_paydown;
            row.net_cash_to_owner = row.cash_flow_after_debt - row.heloc_principal_paydown;
        }
        row.heloc_balance = state.heloc_balance;

        state.cumulative_net_cash += row.net_cash_to_owner;
        state.cumulative_cash_flow_after_debt +=
            row.noi_after_platform - row.mortgage_interest - row.heloc_interest;
        row.cumulative_net_cash = state.cumulative_net_cash;
        row.cumulative_cash_flow_after_debt = state.cumulative_cash_flow_after_debt;
    }

    fn month_label(&self, state: &ProjectionState) -> String {
        let year = self.config.start_year + state.year_index() as i32;
        NaiveDate::from_ymd_opt(year, state.month_index() as u32 + 1, 1)
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| format!("Month {}", state.month + 1))
    }
}

/// Project `years` of monthly rows for one strategy
pub fn calculate_monthly_projections(
    deal: &DealConfig,
    years: u32,
    strategy: Strategy,
) -> Vec<ProjectionRow> {
    ProjectionEngine::new(ProjectionConfig::new(strategy, years))
        .project(deal)
        .monthly
}
