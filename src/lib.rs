//! NestMap - Crime-aware rental graph engine
//!
//! This library builds an annotated bipartite graph connecting rental
//! listings to their nearest neighbourhood areas. Areas carry a composite
//! crime score derived from normalized rate statistics, listings carry a
//! price-per-bedroom metric, and the edge set is a star forest: each
//! admitted listing has exactly one edge to its closest area.

pub mod config;
pub mod core;
pub mod ingest;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    AssemblyOutcome, DistanceMetric, Graph, GraphAssembler, MatchError, NearestAreaMatcher,
};
pub use crate::models::{
    Area, AreaRecord, Coordinate, CrimeWeights, Listing, ListingPreferences, ListingRecord,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = NearestAreaMatcher::new(DistanceMetric::Euclidean);
        let err = matcher
            .nearest(Coordinate::new(43.65, -79.38), &[])
            .unwrap_err();
        assert_eq!(err, MatchError::NoAreasAvailable);
    }
}
