//! HTTP transport
//!
//! A thin axum wrapper around the classifier:
//! - GET /health: liveness probe
//! - POST /classify: classify one section
//! - POST /analyze: chunk a document, classify it, evaluate user rules

pub mod handlers;
pub mod router;
pub mod state;

use crate::classifier::PracticeClassifier;
use crate::config::ScanConfig;
use crate::error::{Result, ScanError};

/// Start the HTTP server with the given configuration.
pub async fn start(config: ScanConfig) -> Result<()> {
    config.validate()?;

    // Compile the catalog up front so a bad pattern fails startup, not a request
    let classifier = PracticeClassifier::builtin()?;
    tracing::info!(
        practices = classifier.catalog().practices().len(),
        "Compiled practice catalog"
    );

    let bind_addr = config.bind_address();
    let app_state = state::AppState::new(classifier, config);
    let app = router::build(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ScanError::Config(format!("Failed to bind to {bind_addr}: {e}")))?;

    tracing::info!("Server listening on {bind_addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| ScanError::Internal(format!("Server error: {e}")))?;

    Ok(())
}
