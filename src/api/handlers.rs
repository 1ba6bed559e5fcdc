use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    services::{
        moods,
        recommend::{run_recommendation, Outcome, RecommendationQuery},
    },
};

use super::AppState;

/// Warning shown when the catalog matches nothing.
pub const NO_MATCHES_WARNING: &str =
    "No movies found for your criteria. Try adjusting your filters.";

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub mood: String,
    pub decade: i32,
    pub min_rating: f64,
    pub country: String,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    3
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// The canonical mood choices, for clients building a selection form.
pub async fn list_moods() -> Json<Value> {
    Json(json!({ "moods": moods::MOODS }))
}

/// Runs one recommendation cycle and renders its terminal state: a warning
/// when nothing matched, the composed text otherwise. Failures map through
/// `AppError::into_response`.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Value>> {
    if !(1..=10).contains(&request.count) {
        return Err(AppError::InvalidInput(
            "count must be between 1 and 10".to_string(),
        ));
    }
    if !(0.0..=10.0).contains(&request.min_rating) {
        return Err(AppError::InvalidInput(
            "min_rating must be between 0.0 and 10.0".to_string(),
        ));
    }

    let query = RecommendationQuery {
        mood: request.mood,
        decade: request.decade,
        min_rating: request.min_rating,
        country: request.country,
        count: request.count,
    };

    let outcome =
        run_recommendation(state.catalog.as_ref(), state.generator.as_ref(), &query).await?;

    let body = match outcome {
        Outcome::NoMatches => json!({ "warning": NO_MATCHES_WARNING }),
        Outcome::Recommendation(text) => json!({ "recommendation": text }),
    };

    Ok(Json(body))
}
