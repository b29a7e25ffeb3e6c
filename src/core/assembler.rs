use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::distance::DistanceMetric;
use crate::core::filters::matches_preferences;
use crate::core::graph::{Graph, GraphError};
use crate::core::matcher::{MatchError, NearestAreaMatcher};
use crate::core::scoring::{apply_crime_scores, ScoringError};
use crate::models::{
    Area, AreaRecord, Coordinate, CrimeWeights, Listing, ListingPreferences, ListingRecord,
};

/// Per-row validation failures
///
/// Recoverable by design: a defective row is skipped with a diagnostic and
/// never aborts the batch.
#[derive(Debug, Error, PartialEq)]
pub enum RowDefect {
    #[error("coordinate ({latitude}, {longitude}) is out of range")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("name is empty")]
    EmptyName,

    #[error("address is empty")]
    EmptyAddress,

    #[error("{field} rate is negative: {value}")]
    NegativeRate { field: &'static str, value: f64 },

    #[error("price must be positive, got {0}")]
    NonPositivePrice(f64),

    #[error("bedroom count must be positive")]
    NoBedrooms,
}

/// Fatal assembly failures
///
/// Row defects never appear here; they are logged and counted in the
/// [`AssemblyOutcome`] instead.
#[derive(Debug, Error)]
pub enum AssembleError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Matching(#[from] MatchError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result of graph assembly: the graph plus skip diagnostics
#[derive(Debug)]
pub struct AssemblyOutcome {
    pub graph: Graph,
    /// Area rows dropped by validation
    pub areas_skipped: usize,
    /// Listing rows dropped by validation
    pub listings_skipped: usize,
    /// Valid listings rejected by the preference filter
    pub listings_rejected: usize,
    /// Valid, accepted listings that could not be matched because no area
    /// survived validation
    pub listings_unmatched: usize,
}

/// Validate a raw area row into an [`Area`]
///
/// Pure function over the record; the derived crime score stays 0.0 until
/// normalization runs.
pub fn validate_area(record: &AreaRecord) -> Result<Area, RowDefect> {
    if record.name.trim().is_empty() {
        return Err(RowDefect::EmptyName);
    }
    let coord = Coordinate::new(record.latitude, record.longitude);
    if !coord.is_valid() {
        return Err(RowDefect::InvalidCoordinate {
            latitude: record.latitude,
            longitude: record.longitude,
        });
    }
    for (field, value) in [
        ("assault", record.assault_rate),
        ("homicide", record.homicide_rate),
        ("robbery", record.robbery_rate),
    ] {
        if !(value >= 0.0) {
            return Err(RowDefect::NegativeRate { field, value });
        }
    }

    Ok(Area::new(
        record.name.trim(),
        record.assault_rate,
        record.homicide_rate,
        record.robbery_rate,
        coord,
    ))
}

/// Validate a raw listing row into a [`Listing`]
pub fn validate_listing(record: &ListingRecord) -> Result<Listing, RowDefect> {
    if record.address.trim().is_empty() {
        return Err(RowDefect::EmptyAddress);
    }
    let coord = Coordinate::new(record.latitude, record.longitude);
    if !coord.is_valid() {
        return Err(RowDefect::InvalidCoordinate {
            latitude: record.latitude,
            longitude: record.longitude,
        });
    }
    if record.bedrooms == 0 {
        return Err(RowDefect::NoBedrooms);
    }
    if !(record.price > 0.0) {
        return Err(RowDefect::NonPositivePrice(record.price));
    }

    Ok(Listing::new(
        record.bedrooms,
        record.bathrooms,
        record.address.trim(),
        record.price,
        coord,
    ))
}

/// Single-pass graph construction pipeline
///
/// # Pipeline Stages
/// 1. Validate area rows (defects skipped with a diagnostic)
/// 2. Normalize crime scores over the full area set
/// 3. Validate and preference-filter listing rows
/// 4. Match each surviving listing to its nearest area and record the edge
#[derive(Debug, Clone, Default)]
pub struct GraphAssembler {
    preferences: ListingPreferences,
    weights: CrimeWeights,
    matcher: NearestAreaMatcher,
}

impl GraphAssembler {
    pub fn new(
        preferences: ListingPreferences,
        weights: CrimeWeights,
        metric: DistanceMetric,
    ) -> Self {
        Self {
            preferences,
            weights,
            matcher: NearestAreaMatcher::new(metric),
        }
    }

    /// Build the annotated listing→area graph from raw rows
    ///
    /// A pure in-memory batch transform: defective rows are skipped and
    /// counted, degenerate datasets (no valid areas) leave the surviving
    /// listings unmatched, and only contract violations or an impossible
    /// normalization abort the run.
    pub fn assemble(
        &self,
        area_records: &[AreaRecord],
        listing_records: &[ListingRecord],
    ) -> Result<AssemblyOutcome, AssembleError> {
        let mut graph = Graph::new();
        let mut areas_skipped = 0;

        // Stage 1: areas
        let mut areas: Vec<Area> = Vec::with_capacity(area_records.len());
        for record in area_records {
            match validate_area(record) {
                Ok(area) => areas.push(area),
                Err(defect) => {
                    warn!(name = %record.name, %defect, "skipping area row");
                    areas_skipped += 1;
                }
            }
        }

        // Stage 2: normalization needs the whole set's min/max, so it runs
        // once, here, and never per-area.
        if areas.is_empty() {
            warn!("no valid areas loaded; listings cannot be matched");
        } else {
            apply_crime_scores(&mut areas, &self.weights)?;
        }

        let have_areas = !areas.is_empty();
        for area in areas {
            graph.add_area(area);
        }
        debug!(
            areas = graph.area_count(),
            skipped = areas_skipped,
            "area nodes loaded"
        );

        // Stages 3 & 4: listings
        let mut listings_skipped = 0;
        let mut listings_rejected = 0;
        let mut listings_unmatched = 0;

        for record in listing_records {
            let listing = match validate_listing(record) {
                Ok(listing) => listing,
                Err(defect) => {
                    warn!(address = %record.address, %defect, "skipping listing row");
                    listings_skipped += 1;
                    continue;
                }
            };

            if !matches_preferences(&listing, &self.preferences) {
                listings_rejected += 1;
                continue;
            }

            if !have_areas {
                // NoAreasAvailable: the listing is never admitted.
                listings_unmatched += 1;
                continue;
            }

            let matched = self.matcher.nearest(listing.coord, graph.areas())?;
            let listing_id = graph.add_listing(listing);
            graph.add_edge(listing_id, matched.area, matched.distance)?;
        }

        info!(
            areas = graph.area_count(),
            listings = graph.listing_count(),
            edges = graph.edge_count(),
            areas_skipped,
            listings_skipped,
            listings_rejected,
            listings_unmatched,
            "graph assembled"
        );

        Ok(AssemblyOutcome {
            graph,
            areas_skipped,
            listings_skipped,
            listings_rejected,
            listings_unmatched,
        })
    }
}
