//! Amenity effects folded into a working copy of the deal before projection

use serde::{Deserialize, Serialize};

use super::DealConfig;

/// Occupancy ceiling after amenity boosts (percent)
pub const MAX_BOOSTED_OCCUPANCY_PERCENT: f64 = 95.0;

/// Additive revenue effect of one selected amenity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Amenity {
    pub name: String,
    /// Added to the nightly rate
    pub adr_boost: f64,
    /// Percentage points added to occupancy
    pub occ_boost: f64,
    pub mtr_rent_boost: f64,
    pub ltr_rent_boost: f64,
}

/// Build the deal the engine actually runs on.
///
/// Occupancy is normalised to the percent scale before boosting and the
/// boosted value is capped at 95%. With no amenities the deal is returned
/// unchanged.
pub fn effective_config(base: &DealConfig, amenities: &[Amenity]) -> DealConfig {
    let mut deal = base.clone();
    if amenities.is_empty() {
        return deal;
    }

    let occ_boost: f64 = amenities.iter().map(|a| a.occ_boost).sum();
    let base_occupancy = deal.occupancy_fraction() * 100.0;

    deal.adr += amenities.iter().map(|a| a.adr_boost).sum::<f64>();
    deal.mtr_monthly_rent += amenities.iter().map(|a| a.mtr_rent_boost).sum::<f64>();
    deal.ltr_monthly_rent += amenities.iter().map(|a| a.ltr_rent_boost).sum::<f64>();
    deal.occupancy_percent = (base_occupancy + occ_boost).min(MAX_BOOSTED_OCCUPANCY_PERCENT);

    log::debug!(
        "Applied {} amenities: adr {:.2} -> {:.2}, occupancy {:.1}% -> {:.1}%",
        amenities.len(),
        base.adr,
        deal.adr,
        base_occupancy,
        deal.occupancy_percent
    );

    deal
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hot_tub() -> Amenity {
        Amenity {
            name: "Hot tub".to_string(),
            adr_boost: 25.0,
            occ_boost: 4.0,
            mtr_rent_boost: 150.0,
            ltr_rent_boost: 50.0,
        }
    }

    #[test]
    fn test_boosts_are_additive() {
        let base = DealConfig {
            adr: 200.0,
            occupancy_percent: 60.0,
            mtr_monthly_rent: 3000.0,
            ltr_monthly_rent: 2000.0,
            ..Default::default()
        };
        let game_room = Amenity {
            name: "Game room".to_string(),
            adr_boost: 10.0,
            occ_boost: 2.0,
            ..Default::default()
        };

        let deal = effective_config(&base, &[hot_tub(), game_room]);

        assert_relative_eq!(deal.adr, 235.0, epsilon = 1e-9);
        assert_relative_eq!(deal.occupancy_percent, 66.0, epsilon = 1e-9);
        assert_relative_eq!(deal.mtr_monthly_rent, 3150.0, epsilon = 1e-9);
        assert_relative_eq!(deal.ltr_monthly_rent, 2050.0, epsilon = 1e-9);
        // Base deal is untouched
        assert_relative_eq!(base.adr, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_occupancy_capped_at_95() {
        let base = DealConfig { occupancy_percent: 0.93, ..Default::default() };
        let deal = effective_config(&base, &[hot_tub()]);
        assert_relative_eq!(deal.occupancy_percent, 95.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_amenities_is_identity() {
        let base = DealConfig::default();
        assert_eq!(effective_config(&base, &[]), base);
    }
}
