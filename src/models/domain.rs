use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by derived-value accessors on domain entities
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("listing {address:?} has no bedrooms, price per bed is undefined")]
    ZeroBedrooms { address: String },
}

/// A geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both components are finite and within range
    /// (latitude -90..=90, longitude -180..=180)
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Handle to an area owned by a [`Graph`](crate::core::Graph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaId(pub(crate) usize);

/// Handle to a listing owned by a [`Graph`](crate::core::Graph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub(crate) usize);

impl AreaId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl ListingId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A neighbourhood area with crime statistics and a geographic anchor point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
    #[serde(rename = "assaultRate")]
    pub assault_rate: f64,
    #[serde(rename = "homicideRate")]
    pub homicide_rate: f64,
    #[serde(rename = "robberyRate")]
    pub robbery_rate: f64,
    /// Composite score in [0, 1], written exactly once by the normalizer
    /// after the full area set is loaded
    #[serde(rename = "crimeScore", default)]
    pub crime_score: f64,
    pub coord: Coordinate,
    /// Listings assigned to this area, appended only during edge insertion
    #[serde(default, skip_serializing)]
    pub listings: Vec<ListingId>,
}

impl Area {
    pub fn new(
        name: impl Into<String>,
        assault_rate: f64,
        homicide_rate: f64,
        robbery_rate: f64,
        coord: Coordinate,
    ) -> Self {
        Self {
            name: name.into(),
            assault_rate,
            homicide_rate,
            robbery_rate,
            crime_score: 0.0,
            coord,
            listings: Vec::new(),
        }
    }
}

/// A rental listing with price data and a geographic anchor point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub address: String,
    pub price: f64,
    pub coord: Coordinate,
    /// Nearest area, written exactly once during edge insertion
    #[serde(default, skip_serializing)]
    pub area: Option<AreaId>,
}

impl Listing {
    pub fn new(
        bedrooms: u32,
        bathrooms: u32,
        address: impl Into<String>,
        price: f64,
        coord: Coordinate,
    ) -> Self {
        Self {
            bedrooms,
            bathrooms,
            address: address.into(),
            price,
            coord,
            area: None,
        }
    }

    /// Price divided by bedroom count
    ///
    /// Guarded: a zero-bedroom listing yields [`DomainError::ZeroBedrooms`]
    /// instead of dividing.
    pub fn price_per_bed(&self) -> Result<f64, DomainError> {
        if self.bedrooms == 0 {
            return Err(DomainError::ZeroBedrooms {
                address: self.address.clone(),
            });
        }
        Ok(self.price / self.bedrooms as f64)
    }
}

/// Optional constraints a listing must satisfy before admission to the graph
///
/// `None` components are unconstrained and always pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPreferences {
    #[serde(default)]
    pub beds: Option<u32>,
    #[serde(default)]
    pub baths: Option<u32>,
    #[serde(rename = "maxPricePerBed", alias = "max_price_per_bed", default)]
    pub max_price_per_bed: Option<f64>,
}

/// Weights for the composite crime score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrimeWeights {
    pub assault: f64,
    pub robbery: f64,
    pub homicide: f64,
}

impl Default for CrimeWeights {
    fn default() -> Self {
        Self {
            assault: 0.5,
            robbery: 0.3,
            homicide: 0.2,
        }
    }
}
