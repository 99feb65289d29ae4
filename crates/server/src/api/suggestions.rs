use crate::{dto::SuggestionsDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use gazetteer::repository::CityQuery;
use std::{collections::HashMap, sync::Arc};

/// `GET /suggestions?q=<name>&latitude=<lat>&longitude=<lon>`
///
/// Absent parameters pass through as empty strings; the engine degrades an
/// empty name to an empty list and unparsable coordinates to neutral
/// weights, so this never rejects a request.
pub async fn suggestions(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let query = CityQuery {
        name: params.get("q").cloned().unwrap_or_default(),
        latitude: params.get("latitude").cloned().unwrap_or_default(),
        longitude: params.get("longitude").cloned().unwrap_or_default(),
    };
    let repository = state.repository.read().await;
    let suggestions = repository.find_ranked_suggestions(&query);
    Json(SuggestionsDto::from(suggestions)).into_response()
}
