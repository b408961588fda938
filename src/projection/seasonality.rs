//! Calendar-month seasonality curves for short-term rentals
//!
//! Index 0 is January. Both curves multiply the base value.

/// Nightly rate multiplier by calendar month
pub const SEASONAL_ADR_MULTIPLIER: [f64; 12] = [
    1.00, 1.00, 1.05, 1.05, 1.10, 1.20, 1.25, 1.25, 1.10, 1.05, 0.95, 1.10,
];

/// Occupancy multiplier by calendar month
pub const SEASONAL_OCC_MULTIPLIER: [f64; 12] = [
    0.95, 0.95, 1.00, 1.00, 1.05, 1.15, 1.20, 1.20, 1.05, 1.00, 0.85, 0.95,
];

pub fn adr_multiplier(month_index: usize) -> f64 {
    SEASONAL_ADR_MULTIPLIER[month_index % 12]
}

pub fn occupancy_multiplier(month_index: usize) -> f64 {
    SEASONAL_OCC_MULTIPLIER[month_index % 12]
}
