//! Investment KPIs over one projected year
//!
//! The ratio functions are raw arithmetic: a zero denominator gives
//! Infinity or NaN. [`KpiSummary`] is the guarded view meant for display,
//! where an undefined ratio becomes `None`.

use serde::{Deserialize, Serialize};

use crate::config::{CapitalStructure, DealConfig};
use crate::projection::{ProjectionResult, ProjectionRow};

/// Cash-on-cash is not meaningful below this much cash invested
pub const MIN_CASH_PORTION_FOR_COC: f64 = 1000.0;

/// Annual NOI over price (%)
pub fn cap_rate(annual_noi: f64, price: f64) -> f64 {
    annual_noi / price * 100.0
}

/// Annual gross revenue over price (%)
pub fn gross_yield(annual_revenue: f64, price: f64) -> f64 {
    annual_revenue / price * 100.0
}

/// Annual owner cash flow over cash invested (%)
pub fn cash_on_cash(annual_owner_cash_flow: f64, cash_portion: f64) -> f64 {
    annual_owner_cash_flow / cash_portion * 100.0
}

/// NOI over mortgage debt service
pub fn dscr(annual_noi: f64, mortgage_debt_service: f64) -> f64 {
    annual_noi / mortgage_debt_service
}

/// NOI over mortgage debt service plus HELOC interest
pub fn total_dscr(annual_noi: f64, mortgage_debt_service: f64, heloc_interest: f64) -> f64 {
    annual_noi / (mortgage_debt_service + heloc_interest)
}

/// Year-level investment metrics, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub label: String,
    pub annual_revenue: f64,
    pub annual_noi: f64,
    pub annual_mortgage_debt_service: f64,
    pub annual_heloc_interest: f64,
    pub annual_owner_cash_flow: f64,
    pub cash_portion: f64,
    pub cap_rate: Option<f64>,
    pub gross_yield: Option<f64>,
    pub cash_on_cash: Option<f64>,
    pub dscr: Option<f64>,
    pub total_dscr: Option<f64>,
}

impl KpiSummary {
    /// Metrics for one yearly row
    pub fn from_year(year: &ProjectionRow, deal: &DealConfig) -> Self {
        Self::with_capital(year, deal.price, &deal.capital_structure())
    }

    pub fn with_capital(year: &ProjectionRow, price: f64, capital: &CapitalStructure) -> Self {
        let annual_noi = year.noi_after_platform;
        let debt_service = year.mortgage_payment;
        let all_debt = debt_service + year.heloc_interest;
        let priced = price > 0.0;

        Self {
            label: year.label.clone(),
            annual_revenue: year.revenue,
            annual_noi,
            annual_mortgage_debt_service: debt_service,
            annual_heloc_interest: year.heloc_interest,
            annual_owner_cash_flow: year.cash_flow_after_debt,
            cash_portion: capital.cash_portion,
            cap_rate: priced.then(|| cap_rate(annual_noi, price)),
            gross_yield: priced.then(|| gross_yield(year.revenue, price)),
            cash_on_cash: (capital.cash_portion >= MIN_CASH_PORTION_FOR_COC)
                .then(|| cash_on_cash(year.cash_flow_after_debt, capital.cash_portion)),
            dscr: (debt_service > 0.0).then(|| dscr(annual_noi, debt_service)),
            total_dscr: (all_debt > 0.0)
                .then(|| total_dscr(annual_noi, debt_service, year.heloc_interest)),
        }
    }
}

impl ProjectionResult {
    /// KPIs for a 1-based projection year, if the horizon reaches it
    pub fn kpis(&self, year: usize) -> Option<KpiSummary> {
        let yearly = self.yearly();
        let row = yearly.get(year.checked_sub(1)?)?;
        Some(KpiSummary::from_year(row, &self.deal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{ProjectionConfig, ProjectionEngine, Strategy};
    use approx::assert_relative_eq;

    #[test]
    fn test_ratio_formulas() {
        assert_relative_eq!(cap_rate(35_000.0, 500_000.0), 7.0, epsilon = 1e-9);
        assert_relative_eq!(gross_yield(60_000.0, 500_000.0), 12.0, epsilon = 1e-9);
        assert_relative_eq!(cash_on_cash(8_000.0, 100_000.0), 8.0, epsilon = 1e-9);
        assert_relative_eq!(dscr(36_000.0, 30_000.0), 1.2, epsilon = 1e-9);
        assert_relative_eq!(total_dscr(36_000.0, 30_000.0, 6_000.0), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_raw_ratios_do_not_guard() {
        assert!(dscr(10_000.0, 0.0).is_infinite());
        assert!(cash_on_cash(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_summary_from_projection() {
        let deal = DealConfig { ltr_monthly_rent: 3500.0, ..Default::default() };
        let engine = ProjectionEngine::new(ProjectionConfig::new(Strategy::LongTerm, 5));
        let result = engine.project(&deal);
        let kpis = result.kpis(1).unwrap();
        let year1 = &result.yearly()[0];

        assert_eq!(kpis.label, "Year 1");
        assert_relative_eq!(kpis.cap_rate.unwrap(), year1.noi_after_platform / 500_000.0 * 100.0, epsilon = 1e-9);
        assert_relative_eq!(kpis.gross_yield.unwrap(), 42_000.0 / 500_000.0 * 100.0, epsilon = 1e-9);
        assert_relative_eq!(
            kpis.cash_on_cash.unwrap(),
            year1.cash_flow_after_debt / 100_000.0 * 100.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(kpis.dscr.unwrap(), year1.noi_after_platform / year1.mortgage_payment, epsilon = 1e-9);
        // No HELOC: both DSCR views agree
        assert_relative_eq!(kpis.total_dscr.unwrap(), kpis.dscr.unwrap(), epsilon = 1e-12);

        assert!(result.kpis(0).is_none());
        assert!(result.kpis(6).is_none());
    }

    #[test]
    fn test_cash_on_cash_undefined_when_fully_financed() {
        let deal = DealConfig {
            heloc_rate: 8.0,
            heloc_funding_percent: 100.0,
            ..Default::default()
        };
        let result = ProjectionEngine::new(ProjectionConfig::new(Strategy::ShortTerm, 1)).project(&deal);
        let kpis = result.kpis(1).unwrap();

        assert!(kpis.cash_on_cash.is_none());
        assert!(kpis.total_dscr.unwrap() < kpis.dscr.unwrap());
    }

    #[test]
    fn test_cash_on_cash_threshold() {
        let year = ProjectionRow::new("Year 1".to_string(), 1);
        let mut capital = DealConfig::default().capital_structure();

        capital.cash_portion = 999.0;
        assert!(KpiSummary::with_capital(&year, 500_000.0, &capital).cash_on_cash.is_none());

        capital.cash_portion = 1000.0;
        assert!(KpiSummary::with_capital(&year, 500_000.0, &capital).cash_on_cash.is_some());
    }

    #[test]
    fn test_no_debt_means_no_dscr() {
        let deal = DealConfig { down_payment_percent: 100.0, ltr_monthly_rent: 3000.0, ..Default::default() };
        let result = ProjectionEngine::new(ProjectionConfig::new(Strategy::LongTerm, 1)).project(&deal);
        let kpis = result.kpis(1).unwrap();

        assert!(kpis.dscr.is_none());
        assert!(kpis.total_dscr.is_none());
        assert!(kpis.cap_rate.is_some());
    }
}
