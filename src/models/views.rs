use serde::{Deserialize, Serialize};

use crate::models::domain::Coordinate;

/// Area node snapshot for downstream rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaView {
    pub name: String,
    pub coord: Coordinate,
    #[serde(rename = "crimeScore")]
    pub crime_score: f64,
    /// Mean price of assigned listings, 0.0 when none are assigned
    #[serde(rename = "averagePrice")]
    pub average_price: f64,
    #[serde(rename = "listingCount")]
    pub listing_count: usize,
}

/// Listing node snapshot for downstream rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingView {
    pub address: String,
    pub coord: Coordinate,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(rename = "pricePerBed")]
    pub price_per_bed: f64,
}

/// Listing-to-area edge with the matching distance attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeView {
    #[serde(rename = "listingAddress")]
    pub listing_address: String,
    #[serde(rename = "areaName")]
    pub area_name: String,
    pub distance: f64,
}

/// Summary counts over the assembled graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSummary {
    #[serde(rename = "areaCount")]
    pub area_count: usize,
    #[serde(rename = "listingCount")]
    pub listing_count: usize,
    #[serde(rename = "edgeCount")]
    pub edge_count: usize,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Full serializable snapshot of an assembled graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphExport {
    pub summary: GraphSummary,
    pub areas: Vec<AreaView>,
    pub listings: Vec<ListingView>,
    pub edges: Vec<EdgeView>,
}
