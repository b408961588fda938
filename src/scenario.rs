//! Scenario runner for strategy comparisons and batch projections
//!
//! Every projection is an independent pure run, so batches fan out across
//! threads with rayon and come back in input order.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::{effective_config, Amenity, DealConfig};
use crate::metrics::{equity_irr, BreakEven, KpiSummary};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, Strategy};

/// Headline numbers for one strategy on one deal
#[derive(Debug, Clone, Serialize)]
pub struct StrategyComparison {
    pub strategy: Strategy,
    pub year_one: Option<KpiSummary>,
    pub break_even: BreakEven,
    pub equity_irr: Option<f64>,
    pub total_net_cash: f64,
    pub final_equity: f64,
}

impl StrategyComparison {
    pub fn from_result(result: &ProjectionResult) -> Self {
        let capital = result.deal.capital_structure();
        let summary = result.summary();

        Self {
            strategy: result.strategy,
            year_one: result.kpis(1),
            break_even: BreakEven::analyze(&result.monthly, &capital),
            equity_irr: equity_irr(&result.monthly, &capital),
            total_net_cash: summary.total_net_cash,
            final_equity: summary.final_equity,
        }
    }
}

/// Runs projections over a fixed horizon
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    projection_months: u32,
    start_year: i32,
}

impl ScenarioRunner {
    pub fn new(years: u32) -> Self {
        let defaults = ProjectionConfig::default();
        Self {
            projection_months: years.saturating_mul(12),
            start_year: defaults.start_year,
        }
    }

    pub fn with_start_year(mut self, start_year: i32) -> Self {
        self.start_year = start_year;
        self
    }

    fn config(&self, strategy: Strategy) -> ProjectionConfig {
        ProjectionConfig {
            projection_months: self.projection_months,
            strategy,
            start_year: self.start_year,
        }
    }

    /// Single projection after folding in amenity effects
    pub fn run(&self, deal: &DealConfig, amenities: &[Amenity], strategy: Strategy) -> ProjectionResult {
        let effective = effective_config(deal, amenities);
        ProjectionEngine::new(self.config(strategy)).project(&effective)
    }

    /// STR, MTR and LTR side by side for the same deal
    pub fn compare_strategies(&self, deal: &DealConfig, amenities: &[Amenity]) -> Vec<StrategyComparison> {
        let effective = effective_config(deal, amenities);
        Strategy::ALL
            .par_iter()
            .map(|&strategy| {
                let result = ProjectionEngine::new(self.config(strategy)).project(&effective);
                StrategyComparison::from_result(&result)
            })
            .collect()
    }

    /// Same strategy across many deals
    pub fn run_batch(&self, deals: &[DealConfig], strategy: Strategy) -> Vec<ProjectionResult> {
        log::info!("Running {} deals as {} over {} months", deals.len(), strategy, self.projection_months);
        let engine = ProjectionEngine::new(self.config(strategy));
        deals.par_iter().map(|deal| engine.project(deal)).collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(crate::projection::DEFAULT_HORIZON_YEARS)
    }
}
