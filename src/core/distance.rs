use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance strategy used for nearest-area comparisons
///
/// Either metric is acceptable at city scale; what matters is that one
/// metric is used consistently for every comparison in a run, so the
/// matcher takes the strategy once and applies it everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Planar Euclidean distance on (latitude, longitude) pairs, in degrees
    #[default]
    Euclidean,
    /// Great-circle distance, in kilometers
    Haversine,
}

impl DistanceMetric {
    #[inline]
    pub fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            DistanceMetric::Euclidean => euclidean_distance(a, b),
            DistanceMetric::Haversine => {
                haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
            }
        }
    }
}

/// Planar Euclidean distance between two coordinates, in degrees
///
/// A city-scale approximation: fine for ranking nearby candidates, not a
/// physical distance.
#[inline]
pub fn euclidean_distance(a: Coordinate, b: Coordinate) -> f64 {
    let dlat = a.latitude - b.latitude;
    let dlon = a.longitude - b.longitude;
    (dlat * dlat + dlon * dlon).sqrt()
}

/// Calculate the Haversine distance between two points in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance_zero() {
        let p = Coordinate::new(43.65, -79.38);
        assert_eq!(euclidean_distance(p, p), 0.0);
    }

    #[test]
    fn test_euclidean_distance() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert!((euclidean_distance(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_euclidean_is_symmetric() {
        let a = Coordinate::new(43.65, -79.38);
        let b = Coordinate::new(43.70, -79.42);
        assert_eq!(euclidean_distance(a, b), euclidean_distance(b, a));
    }

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let distance = haversine_distance(51.5074, -0.1278, 48.8566, 2.3522);
        assert!(
            (distance - 344.0).abs() < 10.0,
            "Distance should be ~344km, got {}",
            distance
        );
    }

    #[test]
    fn test_metric_dispatch() {
        let a = Coordinate::new(43.65, -79.38);
        let b = Coordinate::new(43.70, -79.42);

        assert_eq!(
            DistanceMetric::Euclidean.distance(a, b),
            euclidean_distance(a, b)
        );
        assert_eq!(
            DistanceMetric::Haversine.distance(a, b),
            haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
        );
    }

    #[test]
    fn test_default_metric_is_euclidean() {
        assert_eq!(DistanceMetric::default(), DistanceMetric::Euclidean);
    }
}
