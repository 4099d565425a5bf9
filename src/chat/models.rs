//! The core models for managing a stateful chat with an LLM.
//!
//! A `Transcript` is the ordered, append-only turn history for one
//! session. Turns are stored verbatim with a display timestamp; the
//! prompt sent to the completion service is derived fresh on every
//! request by prefixing the system instruction, so the transcript
//! itself never stores a system turn.
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::openai::{Message, Role};

/// One exchange unit in the transcript. `time` is wall-clock HH:MM,
/// local to the process, used for display only. Ordering is by append
/// sequence, never by timestamp.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub time: String,
}

#[derive(Default)]
pub struct Transcript(Vec<Turn>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    fn append(&mut self, role: Role, content: &str, now: DateTime<Local>) -> &Turn {
        self.0.push(Turn {
            role,
            content: content.to_string(),
            time: now.format("%H:%M").to_string(),
        });
        self.0.last().expect("Transcript can't be empty after push")
    }

    /// Appends a user turn. Content is stored verbatim, including the
    /// empty string; callers are expected to filter blank submissions.
    pub fn append_user(&mut self, content: &str, now: DateTime<Local>) -> &Turn {
        self.append(Role::User, content, now)
    }

    /// Appends an assistant turn. Called only after a successful
    /// completion response. When the completion call fails the user
    /// turn stays in place and no assistant turn is appended.
    pub fn append_assistant(&mut self, content: &str, now: DateTime<Local>) -> &Turn {
        self.append(Role::Assistant, content, now)
    }

    /// Read-only snapshot in exact append order, for rendering.
    pub fn all_turns(&self) -> &[Turn] {
        &self.0
    }

    /// Derives the message sequence for the next completion request:
    /// the system instruction followed by every turn in order, with
    /// timestamps dropped. Built fresh on every call; no side effects.
    pub fn to_prompt_messages(&self, system_instruction: &str) -> Vec<Message> {
        let mut messages = vec![Message::new(Role::System, system_instruction)];
        for turn in &self.0 {
            messages.push(Message::new(turn.role, &turn.content));
        }
        messages
    }
}

/// One interactive chat session. Owns its transcript exclusively;
/// created at session start and discarded at session end, never shared
/// across sessions.
#[derive(Default)]
pub struct Session {
    pub transcript: Transcript,
}

impl Session {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session() {
        let transcript = Transcript::new();
        assert!(transcript.all_turns().is_empty());

        let messages = transcript.to_prompt_messages("sys");
        assert_eq!(messages, vec![Message::new(Role::System, "sys")]);
    }

    #[test]
    fn test_turns_are_returned_in_append_order() {
        let now = Local::now();
        let mut transcript = Transcript::new();
        transcript.append_user("first", now);
        transcript.append_assistant("second", now);
        transcript.append_user("third", now);
        transcript.append_user("fourth", now);

        let contents: Vec<&str> = transcript
            .all_turns()
            .iter()
            .map(|t| t.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn test_prompt_messages_prefix_system_instruction() {
        let now = Local::now();
        let mut transcript = Transcript::new();
        transcript.append_user("What is 2+2?", now);
        transcript.append_assistant("4", now);

        let messages = transcript.to_prompt_messages("sys");
        assert_eq!(
            messages,
            vec![
                Message::new(Role::System, "sys"),
                Message::new(Role::User, "What is 2+2?"),
                Message::new(Role::Assistant, "4"),
            ]
        );
    }

    #[test]
    fn test_prompt_messages_are_idempotent() {
        let now = Local::now();
        let mut transcript = Transcript::new();
        transcript.append_user("hello", now);

        let first = transcript.to_prompt_messages("sys");
        let second = transcript.to_prompt_messages("sys");
        assert_eq!(first, second);
    }

    #[test]
    fn test_failed_completion_keeps_user_turn() {
        let now = Local::now();
        let mut transcript = Transcript::new();
        transcript.append_user("Q", now);
        // Completion failed so no assistant turn is appended
        assert_eq!(transcript.all_turns().len(), 1);
        assert_eq!(transcript.all_turns()[0].role, Role::User);
        assert_eq!(transcript.all_turns()[0].content, "Q");
    }

    #[test]
    fn test_successful_completion_appends_assistant_turn() {
        let now = Local::now();
        let mut transcript = Transcript::new();
        transcript.append_user("What is 2+2?", now);
        transcript.append_assistant("4", now);

        let turns = transcript.all_turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[0].content, "What is 2+2?");
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[1].content, "4");
        assert_eq!(transcript.to_prompt_messages("sys").len(), 3);
    }

    #[test]
    fn test_content_is_stored_verbatim() {
        let now = Local::now();
        let mut transcript = Transcript::new();
        transcript.append_user("<b>unescaped & raw</b>", now);
        assert_eq!(transcript.all_turns()[0].content, "<b>unescaped & raw</b>");
    }

    #[test]
    fn test_turn_timestamp_format() {
        let now = Local::now();
        let mut transcript = Transcript::new();
        let turn = transcript.append_user("hello", now);
        assert_eq!(turn.time, now.format("%H:%M").to_string());
    }
}
