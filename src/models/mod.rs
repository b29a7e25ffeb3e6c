// Model exports
pub mod domain;
pub mod records;
pub mod views;

pub use domain::{
    Area, AreaId, Coordinate, CrimeWeights, DomainError, Listing, ListingId, ListingPreferences,
};
pub use records::{AreaRecord, ListingRecord};
pub use views::{AreaView, EdgeView, GraphExport, GraphSummary, ListingView};
