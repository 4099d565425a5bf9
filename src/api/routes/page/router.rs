//! Router for the server-rendered chat page

use axum::{
    Form, Router,
    extract::{Query, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use chrono::Local;
use serde_json::{Value, json};

use super::public;
use super::template::Template;
use crate::api::state::SharedState;
use crate::core::AppConfig;
use crate::openai::{Role, completion};

/// Render the chat page: every turn of the session transcript as a
/// message bubble, plus the input form and an optional error banner
/// carried over from a failed completion call
async fn chat_page(
    State(state): State<SharedState>,
    Query(params): Query<public::PageParams>,
) -> Result<Html<String>, crate::api::public::ApiError> {
    let shared_state = state.read().expect("Unable to read shared state");

    let turns: Vec<Value> = shared_state
        .session
        .transcript
        .all_turns()
        .iter()
        .map(|turn| {
            let css_class = match turn.role {
                Role::User => "user-message",
                _ => "assistant-message",
            };
            json!({
                "css_class": css_class,
                "content": turn.content,
                "time": turn.time,
            })
        })
        .collect();

    let html = shared_state.templates.render(
        &Template::ChatPage.to_string(),
        &json!({
            "turns": turns,
            "error": params.error,
        }),
    )?;

    Ok(Html(html))
}

/// Handle a chat form submission: append the user's turn, request the
/// next completion with the full turn history, and append the reply as
/// an assistant turn. When the completion call fails the user's turn
/// stays in the transcript and the error is shown as a banner on the
/// next page load rather than stored as a turn.
async fn send_message(
    State(state): State<SharedState>,
    Form(form): Form<public::ChatForm>,
) -> Redirect {
    let message = form.message.trim().to_string();

    // Blank submissions are filtered before they reach the transcript
    if message.is_empty() {
        return Redirect::to("/");
    }

    // Append the user's turn and snapshot the prompt so the lock isn't
    // held across the completion request
    let (prompt_messages, config) = {
        let mut shared_state = state.write().expect("Unable to write shared state");
        shared_state
            .session
            .transcript
            .append_user(&message, Local::now());
        let prompt = shared_state
            .session
            .transcript
            .to_prompt_messages(&shared_state.config.system_message);
        (prompt, shared_state.config.clone())
    };

    let AppConfig {
        azure_api_endpoint,
        azure_api_key,
        azure_deployment,
        temperature,
        max_tokens,
        ..
    } = config;

    match completion(
        &prompt_messages,
        temperature,
        max_tokens,
        &azure_api_endpoint,
        &azure_api_key,
        &azure_deployment,
    )
    .await
    {
        Ok(reply) => {
            let mut shared_state = state.write().expect("Unable to write shared state");
            shared_state
                .session
                .transcript
                .append_assistant(&reply, Local::now());
            Redirect::to("/")
        }
        Err(err) => {
            tracing::error!("Completion request failed: {}", err);

            let banner = format!("Error connecting to Azure OpenAI: {}", err);
            Redirect::to(&format!("/?error={}", urlencoding::encode(&banner)))
        }
    }
}

/// Create the page router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(chat_page))
        .route("/chat", post(send_message))
}
