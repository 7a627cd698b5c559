use std::sync::Arc;

use imdb_sentiment::server::{create_router, AppState};
use imdb_sentiment::{SentimentAnalysisPipelineBuilder, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config_path = std::env::var("IMDB_SENTIMENT_CONFIG")
        .unwrap_or_else(|_| "configs/config.yaml".to_string());
    let config = ServiceConfig::from_file(&config_path)?;
    tracing::info!(
        vectorizer = %config.inference.vectorizer_path.display(),
        classifier = %config.inference.classifier_path.display(),
        "loaded configuration from {config_path}"
    );

    // Fail fast: if either artifact is missing or incompatible, the process
    // never reaches the listener and /health stays unreachable.
    let pipeline = SentimentAnalysisPipelineBuilder::new(config.inference.clone()).build()?;
    tracing::info!("sentiment pipeline ready");

    let state = AppState {
        pipeline: Arc::new(pipeline),
    };
    let app = create_router(state);

    let addr = config.server.bind_addr();
    tracing::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
