use thiserror::Error;

use crate::core::distance::DistanceMetric;
use crate::models::{Area, AreaId, Coordinate};

/// Errors raised by nearest-area matching
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("no areas available to match against")]
    NoAreasAvailable,
}

/// A matched area with the distance that won the comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestArea {
    pub area: AreaId,
    pub distance: f64,
}

/// Assigns each listing coordinate to the geographically closest area
///
/// A linear scan over the area set, O(areas) per lookup. The metric is
/// fixed at construction so every comparison in a run uses the same
/// strategy; a spatial index could replace the scan as long as it keeps the
/// same tie-break.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestAreaMatcher {
    metric: DistanceMetric,
}

impl NearestAreaMatcher {
    pub fn new(metric: DistanceMetric) -> Self {
        Self { metric }
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Find the area closest to `point`
    ///
    /// Ties break to the first area in slice order: only a strictly smaller
    /// distance replaces the current best, which keeps the result
    /// deterministic for equidistant areas.
    pub fn nearest(&self, point: Coordinate, areas: &[Area]) -> Result<NearestArea, MatchError> {
        let mut best: Option<NearestArea> = None;

        for (index, area) in areas.iter().enumerate() {
            let distance = self.metric.distance(point, area.coord);
            let closer = match &best {
                Some(current) => distance < current.distance,
                None => true,
            };
            if closer {
                best = Some(NearestArea {
                    area: AreaId(index),
                    distance,
                });
            }
        }

        best.ok_or(MatchError::NoAreasAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_at(name: &str, latitude: f64, longitude: f64) -> Area {
        Area::new(name, 0.0, 0.0, 0.0, Coordinate::new(latitude, longitude))
    }

    #[test]
    fn test_nearest_picks_minimum() {
        let matcher = NearestAreaMatcher::default();
        let areas = vec![
            area_at("far", 10.0, 10.0),
            area_at("near", 0.2, 0.2),
            area_at("mid", 3.0, 3.0),
        ];

        let result = matcher.nearest(Coordinate::new(0.0, 0.0), &areas).unwrap();

        assert_eq!(result.area.index(), 1);
        assert!((result.distance - (0.08f64).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_returned_distance_is_minimal() {
        let matcher = NearestAreaMatcher::default();
        let areas = vec![
            area_at("a", 1.0, 1.0),
            area_at("b", -2.0, 0.5),
            area_at("c", 0.3, -0.4),
        ];
        let point = Coordinate::new(0.1, 0.1);

        let result = matcher.nearest(point, &areas).unwrap();

        for area in &areas {
            assert!(result.distance <= matcher.metric().distance(point, area.coord));
        }
    }

    #[test]
    fn test_tie_breaks_to_first_area() {
        let matcher = NearestAreaMatcher::default();
        // Exactly equidistant from the origin
        let areas = vec![area_at("first", 1.0, 0.0), area_at("second", 0.0, 1.0)];

        let result = matcher.nearest(Coordinate::new(0.0, 0.0), &areas).unwrap();

        assert_eq!(result.area.index(), 0);
    }

    #[test]
    fn test_tie_break_is_reproducible() {
        let matcher = NearestAreaMatcher::default();
        let areas = vec![area_at("first", 1.0, 0.0), area_at("second", 0.0, 1.0)];
        let point = Coordinate::new(0.0, 0.0);

        let first = matcher.nearest(point, &areas).unwrap();
        for _ in 0..10 {
            assert_eq!(matcher.nearest(point, &areas).unwrap(), first);
        }
    }

    #[test]
    fn test_empty_area_set() {
        let matcher = NearestAreaMatcher::default();
        let err = matcher.nearest(Coordinate::new(0.0, 0.0), &[]).unwrap_err();
        assert_eq!(err, MatchError::NoAreasAvailable);
    }

    #[test]
    fn test_haversine_metric_agrees_on_ranking() {
        let matcher = NearestAreaMatcher::new(DistanceMetric::Haversine);
        let areas = vec![area_at("far", 10.0, 10.0), area_at("near", 0.2, 0.2)];

        let result = matcher.nearest(Coordinate::new(0.0, 0.0), &areas).unwrap();

        assert_eq!(result.area.index(), 1);
    }
}
