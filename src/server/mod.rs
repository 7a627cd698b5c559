//! HTTP surface for the sentiment service.
//!
//! Two endpoints: `GET /health` (static liveness probe, never touches the
//! pipeline) and `POST /predict` (runs the sentiment pipeline on the request
//! body's `review` field). The pipeline is injected into the router as
//! shared state; there are no process globals.

pub mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::{create_router, AppState, ServicePipeline};
