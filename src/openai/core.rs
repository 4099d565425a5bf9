//! Client for the Azure OpenAI chat completion API. The transcript is
//! projected into wire `Message`s by the chat models and sent here as
//! a single synchronous request. There is no retry policy and no
//! streaming; a failed call is abandoned for that turn.
use std::fmt;
use std::time::Duration;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Azure OpenAI API version sent with every request.
pub const API_VERSION: &str = "2024-02-01-preview";

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// The single failure kind for the completion call. Network errors,
/// auth errors, quota errors, and malformed responses all collapse
/// into this; callers branch on the `Result` and display the message.
pub struct CompletionError(anyhow::Error);

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// Enables using `?` on fallible calls inside `completion` to turn
/// their errors into a `CompletionError`
impl<E> From<E> for CompletionError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Requests the next reply for a conversation from an Azure OpenAI
/// deployment. `messages` must already include the system instruction
/// and the full turn history in order.
pub async fn completion(
    messages: &[Message],
    temperature: f32,
    max_tokens: u32,
    api_endpoint: &str,
    api_key: &str,
    deployment: &str,
) -> Result<String, CompletionError> {
    let payload = json!({
        "messages": messages,
        "temperature": temperature,
        "max_tokens": max_tokens,
    });
    let url = format!(
        "{}/openai/deployments/{}/chat/completions?api-version={}",
        api_endpoint.trim_end_matches("/"),
        deployment,
        API_VERSION
    );
    let response: Value = reqwest::Client::new()
        .post(url)
        .header("api-key", api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60))
        .json(&payload)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let reply = response["choices"][0]["message"]["content"]
        .as_str()
        .ok_or(anyhow!("No message content in response: {}", response))?;

    Ok(reply.to_string())
}
