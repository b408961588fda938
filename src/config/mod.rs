//! Deal inputs, capital structure and the amenity pre-step

mod amenity;
mod deal;
pub mod loader;

pub use amenity::{effective_config, Amenity, MAX_BOOSTED_OCCUPANCY_PERCENT};
pub use deal::{CapitalStructure, DealConfig};
pub use loader::{load_deal, load_deal_from_reader, load_deals, DealFile};
