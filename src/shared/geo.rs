use serde::{Deserialize, Serialize};

pub(crate) const LATITUDE_MAXIMUM_RANGE: f64 = 180.0;
pub(crate) const LONGITUDE_MAXIMUM_RANGE: f64 = 360.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<(f64, f64)> for Coordinate {
    fn from(value: (f64, f64)) -> Self {
        Self {
            latitude: value.0,
            longitude: value.1,
        }
    }
}

/// Optional geographic hints parsed once per query from the raw
/// latitude/longitude strings. An axis that does not parse stays neutral and
/// never eliminates a candidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoHint {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl GeoHint {
    pub fn parse(latitude: &str, longitude: &str) -> Self {
        Self {
            latitude: latitude.parse().ok(),
            longitude: longitude.parse().ok(),
        }
    }

    /// Product of both axis weights against a record coordinate.
    pub fn weight(&self, coordinate: &Coordinate) -> f64 {
        self.latitude_weight(coordinate) * self.longitude_weight(coordinate)
    }

    fn latitude_weight(&self, coordinate: &Coordinate) -> f64 {
        match self.latitude {
            Some(latitude) => {
                1.0 - (latitude - coordinate.latitude).abs() / LATITUDE_MAXIMUM_RANGE
            }
            None => 1.0,
        }
    }

    fn longitude_weight(&self, coordinate: &Coordinate) -> f64 {
        match self.longitude {
            Some(longitude) => {
                1.0 - (longitude - coordinate.longitude).abs() / LONGITUDE_MAXIMUM_RANGE
            }
            None => 1.0,
        }
    }
}

#[test]
fn geo_hint_absent_is_neutral() {
    let hint = GeoHint::parse("", "");
    let coordinate = Coordinate::from((48.8566, 2.3522));
    assert_eq!(hint.weight(&coordinate), 1.0);
}

#[test]
fn geo_hint_unparsable_is_neutral() {
    let hint = GeoHint::parse("not-a-number", "12,5");
    let coordinate = Coordinate::from((48.8566, 2.3522));
    assert_eq!(hint.weight(&coordinate), 1.0);
}

#[test]
fn geo_hint_exact_position_is_one() {
    let hint = GeoHint::parse("48.8566", "2.3522");
    let coordinate = Coordinate::from((48.8566, 2.3522));
    assert_eq!(hint.weight(&coordinate), 1.0);
}

#[test]
fn geo_hint_latitude_scales_by_half_range() {
    let hint = GeoHint::parse("45", "");
    let coordinate = Coordinate::from((-45.0, 0.0));
    assert_eq!(hint.weight(&coordinate), 1.0 - 90.0 / 180.0);
}

#[test]
fn geo_hint_longitude_scales_by_full_range() {
    let hint = GeoHint::parse("", "90");
    let coordinate = Coordinate::from((0.0, 0.0));
    assert_eq!(hint.weight(&coordinate), 1.0 - 90.0 / 360.0);
}

#[test]
fn geo_hint_one_axis_unparsable_keeps_other() {
    let hint = GeoHint::parse("junk", "90");
    let coordinate = Coordinate::from((89.0, 0.0));
    assert_eq!(hint.weight(&coordinate), 1.0 - 90.0 / 360.0);
}

#[test]
fn geo_hint_pathological_longitude_goes_negative() {
    // No antimeridian wrap: a spread wider than the normalization range is
    // allowed to push the weight below zero.
    let hint = GeoHint::parse("", "170");
    let coordinate = Coordinate::from((0.0, -200.5));
    assert!(hint.weight(&coordinate) < 0.0);
}
