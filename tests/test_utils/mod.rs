//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use study_buddy::api::{AppState, app};
use study_buddy::core::AppConfig;

/// Creates a test application router pointed at a fake completion
/// endpoint (usually a mockito server URL). Each call builds a fresh
/// session so tests don't share transcript state.
pub fn test_app(completion_endpoint: &str) -> Router {
    let app_config = AppConfig {
        azure_api_endpoint: completion_endpoint.to_string(),
        azure_api_key: String::from("test-api-key"),
        azure_deployment: String::from("gpt-4o"),
        system_message: String::from("You are a helpful study assistant for exam preparation."),
        temperature: 0.7,
        max_tokens: 800,
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not utf-8")
}
