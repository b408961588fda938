//! Monthly projection engine and yearly aggregation

pub mod aggregation;
mod cashflows;
mod engine;
pub mod mortgage;
pub mod seasonality;
mod state;
pub mod strategy;

pub use aggregation::aggregate_yearly;
pub use cashflows::{ProjectionResult, ProjectionRow, ProjectionSummary};
pub use engine::{calculate_monthly_projections, ProjectionConfig, ProjectionEngine, DEFAULT_HORIZON_YEARS};
pub use state::ProjectionState;
pub use strategy::{MonthlyRevenue, Strategy};
