mod models;
pub use models::*;

use tracing::debug;

use crate::{
    geonames::{self, Geonames},
    shared::{geo::GeoHint, scoring},
};

/// Immutable store of gazetteer records, built once at startup. Reads never
/// take a lock; every query works on its own local result list.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    cities: Box<[City]>,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Streams gazetteer rows into typed records. Depending on the size of
    /// the dataset this can be a long blocking call.
    pub fn with_geonames(mut self, geonames: Geonames) -> Result<Self, geonames::Error> {
        let mut cities: Vec<City> = Vec::new();
        geonames.stream_cities(|(_, record)| {
            cities.push(City::from(&record));
        })?;
        debug!("loaded {} city records", cities.len());
        self.cities = cities.into();
        Ok(self)
    }

    /// Builds the store from records already in memory, for synthetic
    /// datasets and tests.
    pub fn with_cities(mut self, cities: Vec<City>) -> Self {
        self.cities = cities.into();
        self
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Scans every record, scores the ones whose names contain the query
    /// name and returns them ranked by descending relevance. Tied scores
    /// keep their record-scan order. An empty query name returns an empty
    /// list without scanning.
    pub fn find_ranked_suggestions(&self, query: &CityQuery) -> Vec<Suggestion> {
        let needle = query.name.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let hint = GeoHint::parse(&query.latitude, &query.longitude);

        let mut suggestions: Vec<Suggestion> = self
            .cities
            .iter()
            .filter_map(|city| {
                let word = matched_word(city, &needle)?;
                let score = scoring::char_weight(&needle, &word) * hint.weight(&city.coordinate);
                Some(Suggestion {
                    name: format!("{}, {}, {}", city.name, city.admin1_code, city.country_code),
                    latitude: city.coordinate.latitude,
                    longitude: city.coordinate.longitude,
                    score: score as f32,
                })
            })
            .collect();

        suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
        suggestions
    }
}

/// The first name field containing the needle decides the scoring word;
/// later fields are not consulted once one matches. A hit in the alternate
/// names is narrowed to the single comma-delimited alias containing it.
fn matched_word(city: &City, needle: &str) -> Option<String> {
    if city.normalized_name.contains(needle) {
        Some(city.name.to_string())
    } else if city.normalized_ascii_name.contains(needle) {
        Some(city.ascii_name.to_string())
    } else if city.normalized_alternate_names.contains(needle) {
        Some(scoring::matching_alternate_token(
            &city.alternate_names,
            &city.normalized_alternate_names,
            needle,
        ))
    } else {
        None
    }
}
