use gazetteer::repository::Suggestion;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionDto {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub score: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsDto {
    pub suggestions: Vec<SuggestionDto>,
}

impl SuggestionDto {
    pub fn from(suggestion: Suggestion) -> Self {
        Self {
            name: suggestion.name,
            latitude: suggestion.latitude,
            longitude: suggestion.longitude,
            score: suggestion.score,
        }
    }
}

impl SuggestionsDto {
    pub fn from(suggestions: Vec<Suggestion>) -> Self {
        Self {
            suggestions: suggestions.into_iter().map(SuggestionDto::from).collect(),
        }
    }
}
