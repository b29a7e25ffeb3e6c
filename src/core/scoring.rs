use thiserror::Error;

use crate::models::{Area, CrimeWeights};

/// Errors raised by crime-score normalization
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("cannot normalize crime scores over an empty area set")]
    NoAreas,
}

/// Compute and store the composite crime score for every area
///
/// Each of the three rate fields is min-max normalized to [0, 1] across the
/// full area set, then blended with the configured weights:
///
/// ```text
/// score = assault_w * assault_norm + robbery_w * robbery_norm + homicide_w * homicide_norm
/// ```
///
/// This is a batch operation: it needs the whole set's min/max, so it must
/// run after every area is loaded and it mutates each `crime_score` exactly
/// once. A field whose min equals its max carries no signal and normalizes
/// to 0.0 for every area.
pub fn apply_crime_scores(areas: &mut [Area], weights: &CrimeWeights) -> Result<(), ScoringError> {
    if areas.is_empty() {
        return Err(ScoringError::NoAreas);
    }

    let assault_range = field_range(areas, |a| a.assault_rate);
    let robbery_range = field_range(areas, |a| a.robbery_rate);
    let homicide_range = field_range(areas, |a| a.homicide_rate);

    for area in areas.iter_mut() {
        let assault_norm = normalize(area.assault_rate, assault_range);
        let robbery_norm = normalize(area.robbery_rate, robbery_range);
        let homicide_norm = normalize(area.homicide_rate, homicide_range);

        area.crime_score = weights.assault * assault_norm
            + weights.robbery * robbery_norm
            + weights.homicide * homicide_norm;
    }

    Ok(())
}

fn field_range(areas: &[Area], field: impl Fn(&Area) -> f64) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for area in areas {
        let value = field(area);
        min = min.min(value);
        max = max.max(value);
    }
    (min, max)
}

/// Min-max normalize a value to [0, 1]
///
/// A degenerate range (max == min) maps to 0.0 by explicit decision rather
/// than dividing by zero.
#[inline]
fn normalize(value: f64, (min, max): (f64, f64)) -> f64 {
    if max == min {
        return 0.0;
    }
    (value - min) / (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn area(name: &str, assault: f64, homicide: f64, robbery: f64) -> Area {
        Area::new(name, assault, homicide, robbery, Coordinate::new(43.65, -79.38))
    }

    #[test]
    fn test_scores_bounded() {
        let mut areas = vec![
            area("a", 120.0, 2.0, 40.0),
            area("b", 80.0, 1.0, 55.0),
            area("c", 200.0, 0.0, 10.0),
        ];

        apply_crime_scores(&mut areas, &CrimeWeights::default()).unwrap();

        for area in &areas {
            assert!(
                (0.0..=1.0).contains(&area.crime_score),
                "score out of range: {}",
                area.crime_score
            );
        }
    }

    #[test]
    fn test_extremes_map_to_bounds() {
        let mut areas = vec![area("worst", 10.0, 10.0, 10.0), area("best", 0.0, 0.0, 0.0)];

        apply_crime_scores(&mut areas, &CrimeWeights::default()).unwrap();

        assert_eq!(areas[0].crime_score, 1.0);
        assert_eq!(areas[1].crime_score, 0.0);
    }

    #[test]
    fn test_max_raw_composite_scores_highest() {
        let mut areas = vec![
            area("low", 10.0, 0.0, 5.0),
            area("mid", 50.0, 1.0, 20.0),
            area("high", 90.0, 3.0, 60.0),
        ];

        apply_crime_scores(&mut areas, &CrimeWeights::default()).unwrap();

        assert!(areas[2].crime_score > areas[1].crime_score);
        assert!(areas[1].crime_score > areas[0].crime_score);
    }

    #[test]
    fn test_degenerate_field_normalizes_to_zero() {
        // Homicide rate identical everywhere: that term must contribute 0,
        // not divide by a zero range.
        let mut areas = vec![area("a", 10.0, 2.0, 5.0), area("b", 20.0, 2.0, 15.0)];

        apply_crime_scores(&mut areas, &CrimeWeights::default()).unwrap();

        assert_eq!(areas[0].crime_score, 0.0);
        assert_eq!(areas[1].crime_score, 0.5 + 0.3);
    }

    #[test]
    fn test_empty_set_is_an_error() {
        let mut areas: Vec<Area> = vec![];
        assert_eq!(
            apply_crime_scores(&mut areas, &CrimeWeights::default()),
            Err(ScoringError::NoAreas)
        );
    }
}
