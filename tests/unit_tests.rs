// Unit tests for NestMap

use nestmap::core::{
    apply_crime_scores,
    distance::{euclidean_distance, haversine_distance, DistanceMetric},
    matches_preferences, validate_area, validate_listing, MatchError, NearestAreaMatcher,
    RowDefect,
};
use nestmap::models::{
    Area, AreaRecord, Coordinate, CrimeWeights, Listing, ListingPreferences, ListingRecord,
};

fn area_at(name: &str, latitude: f64, longitude: f64) -> Area {
    Area::new(name, 0.0, 0.0, 0.0, Coordinate::new(latitude, longitude))
}

#[test]
fn test_euclidean_distance_zero() {
    let p = Coordinate::new(43.6532, -79.3832);
    assert_eq!(euclidean_distance(p, p), 0.0);
}

#[test]
fn test_euclidean_right_triangle() {
    let a = Coordinate::new(0.0, 0.0);
    let b = Coordinate::new(0.3, 0.4);
    assert!((euclidean_distance(a, b) - 0.5).abs() < 1e-12);
}

#[test]
fn test_haversine_downtown_to_scarborough() {
    // Downtown Toronto to Scarborough is roughly 20 km
    let distance = haversine_distance(43.6532, -79.3832, 43.7764, -79.2318);
    assert!(distance > 15.0 && distance < 25.0, "got {}", distance);
}

#[test]
fn test_matcher_total_over_nonempty_set() {
    let matcher = NearestAreaMatcher::new(DistanceMetric::Euclidean);
    let areas = vec![
        area_at("a", 43.65, -79.38),
        area_at("b", 43.70, -79.42),
        area_at("c", 43.60, -79.50),
    ];

    // Wherever the listing is, some area must come back with minimal distance.
    for point in [
        Coordinate::new(43.64, -79.37),
        Coordinate::new(0.0, 0.0),
        Coordinate::new(-43.0, 100.0),
    ] {
        let result = matcher.nearest(point, &areas).unwrap();
        for area in &areas {
            assert!(result.distance <= euclidean_distance(point, area.coord));
        }
    }
}

#[test]
fn test_matcher_empty_set_fails() {
    let matcher = NearestAreaMatcher::new(DistanceMetric::Euclidean);
    let err = matcher
        .nearest(Coordinate::new(43.65, -79.38), &[])
        .unwrap_err();
    assert_eq!(err, MatchError::NoAreasAvailable);
}

#[test]
fn test_normalization_bounds_hold() {
    let mut areas: Vec<Area> = (0..10)
        .map(|i| {
            Area::new(
                format!("area-{}", i),
                (i * 13 % 7) as f64,
                (i * 5 % 3) as f64,
                (i * 11 % 9) as f64,
                Coordinate::new(43.6 + i as f64 * 0.01, -79.4),
            )
        })
        .collect();

    apply_crime_scores(&mut areas, &CrimeWeights::default()).unwrap();

    for area in &areas {
        assert!((0.0..=1.0).contains(&area.crime_score));
    }
}

#[test]
fn test_filter_is_pure() {
    let listing = Listing::new(2, 1, "1 Main St", 1500.0, Coordinate::new(43.65, -79.38));
    let preferences = ListingPreferences {
        beds: Some(2),
        baths: Some(1),
        max_price_per_bed: Some(800.0),
    };

    let results: Vec<bool> = (0..5)
        .map(|_| matches_preferences(&listing, &preferences))
        .collect();
    assert!(results.iter().all(|&r| r == results[0]));
}

#[test]
fn test_validate_area_rejects_bad_coordinate() {
    let record = AreaRecord {
        name: "Lost".to_string(),
        assault_rate: 1.0,
        homicide_rate: 0.0,
        robbery_rate: 0.5,
        latitude: 120.0,
        longitude: -79.4,
    };
    assert!(matches!(
        validate_area(&record),
        Err(RowDefect::InvalidCoordinate { .. })
    ));
}

#[test]
fn test_validate_listing_rejects_zero_bedrooms() {
    let record = ListingRecord {
        bedrooms: 0,
        bathrooms: 1,
        address: "1 Main St".to_string(),
        price: 900.0,
        latitude: 43.65,
        longitude: -79.38,
    };
    assert!(matches!(
        validate_listing(&record),
        Err(RowDefect::NoBedrooms)
    ));
}

#[test]
fn test_validate_listing_accepts_valid_row() {
    let record = ListingRecord {
        bedrooms: 2,
        bathrooms: 1,
        address: "  1 Main St  ".to_string(),
        price: 1800.0,
        latitude: 43.65,
        longitude: -79.38,
    };
    let listing = validate_listing(&record).unwrap();
    assert_eq!(listing.address, "1 Main St");
    assert_eq!(listing.price_per_bed().unwrap(), 900.0);
    assert_eq!(listing.area, None);
}
