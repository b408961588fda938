//! Rental Underwriter - cash-flow projection engine for rental property deals
//!
//! This library provides:
//! - Month-by-month projections for short, medium and long-term rentals
//! - Mortgage amortization and a HELOC that funds entry and absorbs deficits
//! - Fiscal-year aggregation of monthly rows
//! - Investment KPIs (cap rate, cash-on-cash, DSCR, break-even, equity IRR)
//! - Strategy comparison and batch runs

pub mod config;
pub mod error;
pub mod metrics;
pub mod output;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use config::{effective_config, Amenity, CapitalStructure, DealConfig};
pub use error::UnderwritingError;
pub use metrics::{BreakEven, KpiSummary};
pub use projection::{
    aggregate_yearly, calculate_monthly_projections, ProjectionConfig, ProjectionEngine,
    ProjectionResult, ProjectionRow, Strategy,
};
pub use scenario::ScenarioRunner;
