//! Rental strategies and their revenue models
//!
//! Each strategy only decides how revenue, occupancy, turnovers and a few
//! fee percentages are derived for a month. Everything downstream (common
//! expenses, debt service, HELOC policy) is shared by the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::seasonality;
use crate::config::DealConfig;

/// Average days per month used to turn occupancy into booked nights
pub const DAYS_PER_MONTH: f64 = 30.42;

/// STR occupancy ceiling after seasonality
pub const STR_MAX_OCCUPANCY: f64 = 0.98;
/// Average STR stay length in nights
pub const STR_AVG_STAY_NIGHTS: f64 = 3.8;

pub const MTR_OCCUPANCY: f64 = 0.90;
pub const MTR_MGMT_FEE_CAP: f64 = 15.0;
pub const MTR_PLATFORM_FEE: f64 = 3.0;
/// Roughly one turnover every three months
pub const MTR_TURNS_PER_MONTH: f64 = 0.33;
pub const MTR_CLEANING_COST: f64 = 200.0;

pub const LTR_OCCUPANCY: f64 = 0.95;
pub const LTR_MGMT_FEE_CAP: f64 = 10.0;
pub const LTR_TURNS_PER_MONTH: f64 = 0.08;
pub const LTR_FIXED_OPEX: f64 = 100.0;

/// Rental strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Short-term (nightly) rental
    #[default]
    #[serde(rename = "STR")]
    ShortTerm,
    /// Medium-term (furnished, monthly) rental
    #[serde(rename = "MTR")]
    MediumTerm,
    /// Long-term (unfurnished lease) rental
    #[serde(rename = "LTR")]
    LongTerm,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::ShortTerm, Strategy::MediumTerm, Strategy::LongTerm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::ShortTerm => "STR",
            Strategy::MediumTerm => "MTR",
            Strategy::LongTerm => "LTR",
        }
    }

    /// Derive the strategy-specific part of one month.
    ///
    /// `month_index` is the calendar month (0 = January). Growth factors are
    /// the compounded annual factors for the current simulated year.
    pub fn revenue_model(
        &self,
        deal: &DealConfig,
        month_index: usize,
        rent_growth: f64,
        expense_growth: f64,
    ) -> MonthlyRevenue {
        match self {
            Strategy::ShortTerm => {
                let occupancy = (deal.occupancy_fraction()
                    * seasonality::occupancy_multiplier(month_index))
                .min(STR_MAX_OCCUPANCY);
                let rate = deal.adr * rent_growth * seasonality::adr_multiplier(month_index);
                let nights = DAYS_PER_MONTH * occupancy;
                let turns = nights / STR_AVG_STAY_NIGHTS;

                MonthlyRevenue {
                    occupancy,
                    rate,
                    turns,
                    revenue: rate * nights,
                    cleaning_income: deal.cleaning_fee_income * turns,
                    cleaning_expense: deal.cleaning_expense * turns,
                    mgmt_pct: deal.mgmt_fee_percent,
                    host_fee_pct: deal.host_fee_percent,
                    opex: deal.fixed_opex_monthly * expense_growth,
                }
            }
            Strategy::MediumTerm => {
                let revenue = deal.mtr_monthly_rent * rent_growth;
                MonthlyRevenue {
                    occupancy: MTR_OCCUPANCY,
                    // Display only; revenue comes straight from rent
                    rate: revenue / (DAYS_PER_MONTH * MTR_OCCUPANCY),
                    turns: MTR_TURNS_PER_MONTH,
                    revenue,
                    cleaning_income: 0.0,
                    cleaning_expense: MTR_CLEANING_COST * MTR_TURNS_PER_MONTH,
                    mgmt_pct: deal.mgmt_fee_percent.min(MTR_MGMT_FEE_CAP),
                    host_fee_pct: MTR_PLATFORM_FEE,
                    opex: deal.fixed_opex_monthly * expense_growth,
                }
            }
            Strategy::LongTerm => {
                let revenue = deal.ltr_monthly_rent * rent_growth;
                MonthlyRevenue {
                    occupancy: LTR_OCCUPANCY,
                    rate: revenue / (DAYS_PER_MONTH * LTR_OCCUPANCY),
                    turns: LTR_TURNS_PER_MONTH,
                    revenue,
                    cleaning_income: 0.0,
                    cleaning_expense: 0.0,
                    mgmt_pct: deal.mgmt_fee_percent.min(LTR_MGMT_FEE_CAP),
                    host_fee_pct: 0.0,
                    opex: LTR_FIXED_OPEX * expense_growth,
                }
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "STR" => Ok(Strategy::ShortTerm),
            "MTR" => Ok(Strategy::MediumTerm),
            "LTR" => Ok(Strategy::LongTerm),
            other => Err(format!("Unknown strategy: {} (expected STR, MTR or LTR)", other)),
        }
    }
}

/// Strategy-specific intermediate values for one month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyRevenue {
    /// Occupancy fraction actually applied
    pub occupancy: f64,
    /// Nightly rate actually applied (back-derived for MTR/LTR)
    pub rate: f64,
    /// Estimated guest turnovers
    pub turns: f64,
    pub revenue: f64,
    pub cleaning_income: f64,
    pub cleaning_expense: f64,
    /// Effective management fee (%)
    pub mgmt_pct: f64,
    /// Effective platform/host fee (%)
    pub host_fee_pct: f64,
    pub opex: f64,
}
