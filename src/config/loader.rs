//! Load deal inputs from JSON
//!
//! A deal file is either a single object or an array of objects, each in
//! the camelCase shape the UI settings layer produces.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::{Amenity, DealConfig};
use crate::error::Result;

/// Deal file contents: the deal plus any selected amenities
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealFile {
    #[serde(flatten)]
    pub deal: DealConfig,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<DealFile>),
    One(Box<DealFile>),
}

/// Load a single deal (with amenities) from a JSON file
pub fn load_deal<P: AsRef<Path>>(path: P) -> Result<DealFile> {
    let file = File::open(path.as_ref())?;
    let deal = load_deal_from_reader(BufReader::new(file))?;
    log::info!("Loaded deal from {} (price ${:.0})", path.as_ref().display(), deal.deal.price);
    Ok(deal)
}

pub fn load_deal_from_reader<R: Read>(reader: R) -> Result<DealFile> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load every deal in a JSON file; a lone object yields one deal
pub fn load_deals<P: AsRef<Path>>(path: P) -> Result<Vec<DealFile>> {
    let file = File::open(path.as_ref())?;
    let parsed: OneOrMany = serde_json::from_reader(BufReader::new(file))?;
    let deals = match parsed {
        OneOrMany::Many(deals) => deals,
        OneOrMany::One(deal) => vec![*deal],
    };
    log::info!("Loaded {} deals from {}", deals.len(), path.as_ref().display());
    Ok(deals)
}
