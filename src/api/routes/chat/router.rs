//! Router for the chat API

use axum::{Router, extract::State, response::Json, routing::get};

use super::public;
use crate::api::state::SharedState;

/// Get the transcript of the current session as JSON for rendering
/// collaborators that aren't the built-in page
async fn chat_transcript(
    State(state): State<SharedState>,
) -> Result<Json<public::ChatTranscriptResponse>, crate::api::public::ApiError> {
    let shared_state = state.read().expect("Unable to read shared state");
    let transcript = shared_state.session.transcript.all_turns().to_vec();

    Ok(Json(public::ChatTranscriptResponse { transcript }))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/transcript", get(chat_transcript))
}
