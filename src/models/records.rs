use serde::{Deserialize, Serialize};

/// Raw neighbourhood row as read from the crime-rates CSV
///
/// Numeric cells are already parsed; range validation happens in the
/// assembler, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRecord {
    pub name: String,
    #[serde(rename = "assaultRate")]
    pub assault_rate: f64,
    #[serde(rename = "homicideRate")]
    pub homicide_rate: f64,
    #[serde(rename = "robberyRate")]
    pub robbery_rate: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw listing row as read from the rental-prices CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub address: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
}
