//! Deal inputs: acquisition, debt, revenue, operating costs and growth assumptions

use serde::{Deserialize, Serialize};

use crate::error::{Result, UnderwritingError};

/// Full input record for one simulation run.
///
/// Percent fields are expressed on a 0-100 scale. Occupancy is the one
/// exception that accepts either scale; see [`DealConfig::occupancy_fraction`].
/// Field names serialize in camelCase so UI payloads load directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealConfig {
    // Acquisition
    pub price: f64,
    pub down_payment_percent: f64,
    pub loan_costs: f64,
    pub upgrade_cost: f64,
    pub furnishings_cost: f64,

    // Debt
    /// Annual mortgage rate (%)
    pub mortgage_rate: f64,
    /// Annual HELOC rate (%)
    pub heloc_rate: f64,
    /// Share of total upfront capital financed with the HELOC (%)
    pub heloc_funding_percent: f64,
    /// Share of each month's surplus applied to HELOC principal (%)
    pub heloc_paydown_percent: f64,

    // Revenue
    pub adr: f64,
    pub occupancy_percent: f64,
    pub mtr_monthly_rent: f64,
    pub ltr_monthly_rent: f64,

    // Operating costs
    pub mgmt_fee_percent: f64,
    pub maintenance_percent: f64,
    pub host_fee_percent: f64,
    /// Cleaning fee collected per guest turnover
    pub cleaning_fee_income: f64,
    /// Cleaning cost paid per guest turnover
    pub cleaning_expense: f64,
    pub property_tax_monthly: f64,
    pub annual_property_tax_rate: f64,
    pub fixed_opex_monthly: f64,
    pub hoa_monthly: f64,

    // Growth
    pub annual_appreciation_rate: f64,
    pub annual_rent_growth_rate: f64,
    pub annual_expense_inflation_rate: f64,
}

impl Default for DealConfig {
    /// Baseline short-term rental deal: $500k, 20% down, no HELOC.
    fn default() -> Self {
        Self {
            price: 500_000.0,
            down_payment_percent: 20.0,
            loan_costs: 0.0,
            upgrade_cost: 0.0,
            furnishings_cost: 0.0,
            mortgage_rate: 6.5,
            heloc_rate: 0.0,
            heloc_funding_percent: 0.0,
            heloc_paydown_percent: 0.0,
            adr: 300.0,
            occupancy_percent: 70.0,
            mtr_monthly_rent: 0.0,
            ltr_monthly_rent: 0.0,
            mgmt_fee_percent: 20.0,
            maintenance_percent: 5.0,
            host_fee_percent: 15.5,
            cleaning_fee_income: 1200.0,
            cleaning_expense: 1100.0,
            property_tax_monthly: 400.0,
            annual_property_tax_rate: 0.0,
            fixed_opex_monthly: 250.0,
            hoa_monthly: 0.0,
            annual_appreciation_rate: 3.0,
            annual_rent_growth_rate: 3.0,
            annual_expense_inflation_rate: 2.0,
        }
    }
}

impl DealConfig {
    /// Base occupancy as a fraction. Values above 1 are read as percentages.
    pub fn occupancy_fraction(&self) -> f64 {
        if self.occupancy_percent > 1.0 {
            self.occupancy_percent / 100.0
        } else {
            self.occupancy_percent
        }
    }

    pub fn capital_structure(&self) -> CapitalStructure {
        CapitalStructure::from_deal(self)
    }

    /// Caller-side sanity checks. The engine runs on anything; this is
    /// what a UI or batch job calls before handing a deal to it.
    pub fn validate(&self) -> Result<()> {
        if !(self.price > 0.0) {
            return Err(UnderwritingError::invalid("price", "must be greater than zero"));
        }
        if !(0.0..=100.0).contains(&self.down_payment_percent) {
            return Err(UnderwritingError::invalid(
                "downPaymentPercent",
                "must be between 0 and 100",
            ));
        }

        let percents = [
            ("helocFundingPercent", self.heloc_funding_percent),
            ("helocPaydownPercent", self.heloc_paydown_percent),
            ("occupancyPercent", self.occupancy_percent),
            ("mgmtFeePercent", self.mgmt_fee_percent),
            ("maintenancePercent", self.maintenance_percent),
            ("hostFeePercent", self.host_fee_percent),
        ];
        for (field, value) in percents {
            if !(0.0..=100.0).contains(&value) {
                return Err(UnderwritingError::invalid(field, "must be between 0 and 100"));
            }
        }

        let non_negative = [
            ("loanCosts", self.loan_costs),
            ("upgradeCost", self.upgrade_cost),
            ("furnishingsCost", self.furnishings_cost),
            ("mortgageRate", self.mortgage_rate),
            ("helocRate", self.heloc_rate),
            ("adr", self.adr),
            ("mtrMonthlyRent", self.mtr_monthly_rent),
            ("ltrMonthlyRent", self.ltr_monthly_rent),
            ("cleaningFeeIncome", self.cleaning_fee_income),
            ("cleaningExpense", self.cleaning_expense),
            ("propertyTaxMonthly", self.property_tax_monthly),
            ("annualPropertyTaxRate", self.annual_property_tax_rate),
            ("fixedOpexMonthly", self.fixed_opex_monthly),
            ("hoaMonthly", self.hoa_monthly),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(UnderwritingError::invalid(field, "must not be negative"));
            }
        }

        // Growth rates may be negative (declining markets) but must be finite
        let growth = [
            ("annualAppreciationRate", self.annual_appreciation_rate),
            ("annualRentGrowthRate", self.annual_rent_growth_rate),
            ("annualExpenseInflationRate", self.annual_expense_inflation_rate),
        ];
        for (field, value) in growth {
            if !value.is_finite() || value <= -100.0 {
                return Err(UnderwritingError::invalid(field, "must be a finite rate above -100"));
            }
        }

        Ok(())
    }
}

/// How the acquisition is funded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapitalStructure {
    pub down_payment: f64,
    pub loan_amount: f64,
    /// Down payment plus loan costs, upgrades and furnishings
    pub total_upfront: f64,
    /// Part of the upfront capital drawn on the HELOC
    pub heloc_portion: f64,
    /// Part of the upfront capital paid in cash
    pub cash_portion: f64,
}

impl CapitalStructure {
    pub fn from_deal(deal: &DealConfig) -> Self {
        let down_payment = deal.price * deal.down_payment_percent / 100.0;
        let total_upfront =
            down_payment + deal.upgrade_cost + deal.loan_costs + deal.furnishings_cost;
        let heloc_portion = total_upfront * deal.heloc_funding_percent / 100.0;

        Self {
            down_payment,
            loan_amount: deal.price - down_payment,
            total_upfront,
            heloc_portion,
            cash_portion: total_upfront - heloc_portion,
        }
    }

    pub fn has_heloc(&self) -> bool {
        self.heloc_portion > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_occupancy_accepts_both_scales() {
        let mut deal = DealConfig::default();
        deal.occupancy_percent = 70.0;
        assert_relative_eq!(deal.occupancy_fraction(), 0.70, epsilon = 1e-9);

        deal.occupancy_percent = 0.7;
        assert_relative_eq!(deal.occupancy_fraction(), 0.7, epsilon = 1e-9);
    }

    #[test]
    fn test_capital_structure_splits_heloc_and_cash() {
        let deal = DealConfig {
            price: 400_000.0,
            down_payment_percent: 25.0,
            loan_costs: 8_000.0,
            upgrade_cost: 12_000.0,
            furnishings_cost: 20_000.0,
            heloc_funding_percent: 50.0,
            ..Default::default()
        };
        let capital = deal.capital_structure();

        assert_relative_eq!(capital.down_payment, 100_000.0, epsilon = 1e-9);
        assert_relative_eq!(capital.loan_amount, 300_000.0, epsilon = 1e-9);
        assert_relative_eq!(capital.total_upfront, 140_000.0, epsilon = 1e-9);
        assert_relative_eq!(capital.heloc_portion, 70_000.0, epsilon = 1e-9);
        assert_relative_eq!(capital.cash_portion, 70_000.0, epsilon = 1e-9);
        assert!(capital.has_heloc());
    }

    #[test]
    fn test_validate_rejects_bad_price_and_down_payment() {
        let deal = DealConfig { price: 0.0, ..Default::default() };
        assert!(matches!(
            deal.validate(),
            Err(UnderwritingError::InvalidInput { ref field, .. }) if field == "price"
        ));

        let deal = DealConfig { down_payment_percent: 120.0, ..Default::default() };
        assert!(deal.validate().is_err());

        let deal = DealConfig { price: f64::NAN, ..Default::default() };
        assert!(deal.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_costs() {
        let deal = DealConfig { hoa_monthly: -50.0, ..Default::default() };
        let err = deal.validate().unwrap_err();
        assert!(err.to_string().contains("hoaMonthly"));
    }

    #[test]
    fn test_default_deal_is_valid() {
        assert!(DealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_deserializes_camel_case_with_defaults() {
        let json = r#"{ "price": 350000, "downPaymentPercent": 10, "ltrMonthlyRent": 2400 }"#;
        let deal: DealConfig = serde_json::from_str(json).unwrap();
        assert_relative_eq!(deal.price, 350_000.0, epsilon = 1e-9);
        assert_relative_eq!(deal.down_payment_percent, 10.0, epsilon = 1e-9);
        assert_relative_eq!(deal.ltr_monthly_rent, 2400.0, epsilon = 1e-9);
        assert_relative_eq!(deal.mortgage_rate, DealConfig::default().mortgage_rate, epsilon = 1e-9);
    }
}
