//! Public types for the chat page
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ChatForm {
    pub message: String,
}

#[derive(Deserialize)]
pub struct PageParams {
    // Display-only error message from a failed completion call,
    // carried across the redirect. Never stored in the transcript.
    pub error: Option<String>,
}
