//! Public types for the chat API
use serde::Serialize;

use crate::chat::Turn;

#[derive(Serialize)]
pub struct ChatTranscriptResponse {
    pub transcript: Vec<Turn>,
}
