// Core engine exports
pub mod assembler;
pub mod distance;
pub mod filters;
pub mod graph;
pub mod matcher;
pub mod scoring;

pub use assembler::{validate_area, validate_listing, AssembleError, AssemblyOutcome, GraphAssembler, RowDefect};
pub use distance::{euclidean_distance, haversine_distance, DistanceMetric};
pub use filters::matches_preferences;
pub use graph::{Edge, Graph, GraphError};
pub use matcher::{MatchError, NearestArea, NearestAreaMatcher};
pub use scoring::{apply_crime_scores, ScoringError};
