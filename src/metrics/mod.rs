//! Investment metrics derived from projection rows

pub mod break_even;
pub mod irr;
pub mod kpi;

pub use break_even::BreakEven;
pub use irr::{calculate_irr, equity_irr};
pub use kpi::{KpiSummary, MIN_CASH_PORTION_FOR_COC};
