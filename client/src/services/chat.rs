//! Chat assistant session
//!
//! Append-only transcript. Sending appends the user message synchronously
//! plus a single typing placeholder; resolving removes the placeholder and
//! appends the reply or an error message. Messages render in local append
//! order, never reordered.

use shared::{ChatMessage, ChatRequest};

use crate::error::{AppError, AppResult};

const OFFLINE_REPLY: &str =
    "Sorry, I could not reach the advisory service. Please try again in a moment.";

/// One conversation with the farming assistant
#[derive(Debug, Clone)]
pub struct ChatSession {
    location: String,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Open a session, seeding the transcript with the assistant greeting.
    /// Location and crop personalize the greeting when known.
    pub fn new(location: &str, crop: Option<&str>) -> Self {
        let context = match (location.is_empty(), crop) {
            (false, Some(crop)) => format!(" for your {} cultivation in {}", crop, location),
            _ => String::new(),
        };
        let greeting = format!(
            "Hello! I'm your AI farming assistant. I can help you with crop management, \
             weather insights, and farming best practices{}. How can I assist you today?",
            context
        );

        Self {
            location: location.to_string(),
            messages: vec![ChatMessage::bot(greeting)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a typing placeholder is waiting for a reply
    pub fn has_pending_reply(&self) -> bool {
        self.messages.iter().any(|m| m.is_typing)
    }

    /// Append the user's message and a typing placeholder, returning the
    /// request to send. Blank input is rejected with no transcript change.
    pub fn push_user(&mut self, content: &str) -> AppResult<ChatRequest> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::validation("message", "Message cannot be blank"));
        }
        if self.has_pending_reply() {
            return Err(AppError::InvalidStateTransition(
                "a reply is already pending".to_string(),
            ));
        }

        self.messages.push(ChatMessage::user(content));
        self.messages.push(ChatMessage::typing_placeholder());

        Ok(ChatRequest {
            message: content.to_string(),
            location: self.location.clone(),
        })
    }

    /// Replace the typing placeholder with the reply, or with a fixed error
    /// message when the fetch failed. The placeholder never survives a
    /// terminal response.
    pub fn resolve_reply(&mut self, result: AppResult<String>) {
        self.messages.retain(|m| !m.is_typing);
        match result {
            Ok(reply) => self.messages.push(ChatMessage::bot(reply)),
            Err(err) => {
                tracing::warn!(error = %err, "chat reply failed");
                self.messages.push(ChatMessage::bot(OFFLINE_REPLY));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Sender;

    fn senders(session: &ChatSession) -> Vec<Sender> {
        session.messages().iter().map(|m| m.sender).collect()
    }

    #[test]
    fn test_greeting_personalized_with_location_and_crop() {
        let session = ChatSession::new("Cuttack, Odisha", Some("Rice"));
        let greeting = &session.messages()[0];
        assert_eq!(greeting.sender, Sender::Bot);
        assert!(greeting
            .content
            .contains("for your Rice cultivation in Cuttack, Odisha"));

        let bare = ChatSession::new("", None);
        assert!(!bare.messages()[0].content.contains("cultivation"));
    }

    #[test]
    fn test_send_appends_user_message_and_placeholder() {
        let mut session = ChatSession::new("Cuttack", Some("Rice"));
        let request = session.push_user("  When should I irrigate?  ").unwrap();

        assert_eq!(request.message, "When should I irrigate?");
        assert_eq!(request.location, "Cuttack");
        assert_eq!(senders(&session), [Sender::Bot, Sender::User, Sender::Bot]);
        assert!(session.has_pending_reply());
        assert!(session.messages().last().unwrap().is_typing);
    }

    #[test]
    fn test_reply_replaces_placeholder() {
        let mut session = ChatSession::new("Cuttack", Some("Rice"));
        session.push_user("When should I irrigate?").unwrap();

        session.resolve_reply(Ok("Early morning or late evening.".to_string()));
        assert!(!session.has_pending_reply());

        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.content, "Early morning or late evening.");
        assert!(!last.is_typing);
    }

    #[test]
    fn test_error_replaces_placeholder_with_error_message() {
        let mut session = ChatSession::new("Cuttack", Some("Rice"));
        session.push_user("hello").unwrap();
        session.resolve_reply(Err(AppError::Network("timeout".into())));

        assert!(!session.has_pending_reply());
        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.content.contains("could not reach"));
    }

    #[test]
    fn test_blank_message_rejected_without_transcript_change() {
        let mut session = ChatSession::new("Cuttack", Some("Rice"));
        let before = session.messages().len();

        assert!(session.push_user("   ").is_err());
        assert_eq!(session.messages().len(), before);
    }

    #[test]
    fn test_messages_stay_in_append_order() {
        let mut session = ChatSession::new("Cuttack", Some("Rice"));
        session.push_user("first").unwrap();
        session.resolve_reply(Ok("reply one".to_string()));
        session.push_user("second").unwrap();
        session.resolve_reply(Ok("reply two".to_string()));

        let contents: Vec<&str> = session
            .messages()
            .iter()
            .skip(1)
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, ["first", "reply one", "second", "reply two"]);
    }
}
