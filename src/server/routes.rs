use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::models::{LinearClassifier, TfidfVectorizer};
use crate::pipelines::sentiment_analysis::{SentimentAnalysisPipeline, SentimentResult};

/// The pipeline instantiation this service ships.
pub type ServicePipeline = SentimentAnalysisPipeline<TfidfVectorizer, LinearClassifier>;

/// Shared per-process state: the pipeline built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ServicePipeline>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/predict", post(predict))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub review: String,
}

/// Run the pipeline on the request's review text.
///
/// Bodies that are missing `review` or carry a non-string value are
/// rejected by the `Json` extractor before this handler runs. Inference
/// errors surface as 500 with an opaque payload.
async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<SentimentResult>, ApiError> {
    let result = state.pipeline.predict(&request.review)?;
    Ok(Json(result))
}
