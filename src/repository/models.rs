use std::sync::Arc;

use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::shared::geo::Coordinate;

// GeoNames column layout. Rows may fall short of any of these.
const NAME_INDEX: usize = 1;
const ASCII_NAME_INDEX: usize = 2;
const ALTERNATE_NAMES_INDEX: usize = 3;
const LATITUDE_INDEX: usize = 4;
const LONGITUDE_INDEX: usize = 5;
const COUNTRY_CODE_INDEX: usize = 8;
const ADMIN1_CODE_INDEX: usize = 10;

const MISSING_FIELD: &str = "-";

/// One gazetteer record, parsed once at load time. Missing string fields
/// default to "-" and missing or unparsable coordinates to 0.0, so every
/// field is total no matter how short the source row was. The normalized
/// variants are the lowercased name fields the matcher runs against.
#[derive(Debug, Default, Clone)]
pub struct City {
    pub name: Arc<str>,
    pub ascii_name: Arc<str>,
    pub alternate_names: Arc<str>,
    pub normalized_name: Arc<str>,
    pub normalized_ascii_name: Arc<str>,
    pub normalized_alternate_names: Arc<str>,
    pub coordinate: Coordinate,
    pub country_code: Arc<str>,
    pub admin1_code: Arc<str>,
}

impl From<&StringRecord> for City {
    fn from(record: &StringRecord) -> Self {
        let name = field(record, NAME_INDEX);
        let ascii_name = field(record, ASCII_NAME_INDEX);
        let alternate_names = field(record, ALTERNATE_NAMES_INDEX);
        Self {
            normalized_name: name.to_lowercase().into(),
            normalized_ascii_name: ascii_name.to_lowercase().into(),
            normalized_alternate_names: alternate_names.to_lowercase().into(),
            name: name.into(),
            ascii_name: ascii_name.into(),
            alternate_names: alternate_names.into(),
            coordinate: Coordinate {
                latitude: coordinate_field(record, LATITUDE_INDEX),
                longitude: coordinate_field(record, LONGITUDE_INDEX),
            },
            country_code: field(record, COUNTRY_CODE_INDEX).into(),
            admin1_code: field(record, ADMIN1_CODE_INDEX).into(),
        }
    }
}

fn field<'a>(record: &'a StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or(MISSING_FIELD)
}

fn coordinate_field(record: &StringRecord, index: usize) -> f64 {
    record
        .get(index)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// Raw suggestion query as the transport hands it over. Latitude and
/// longitude stay textual; parsing them is the engine's concern and a value
/// that does not parse only neutralizes its weight factor.
#[derive(Debug, Default, Clone)]
pub struct CityQuery {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub score: f32,
}
