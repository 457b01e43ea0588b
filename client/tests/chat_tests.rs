//! Chat session integration tests
//!
//! The transcript is append-only: a sent message appears synchronously,
//! a typing placeholder follows until a terminal response, and the
//! placeholder never survives one.

use cropweather_client::error::AppError;
use cropweather_client::services::ChatSession;
use shared::Sender;

#[test]
fn test_placeholder_lifecycle_across_mixed_outcomes() {
    let mut session = ChatSession::new("Cuttack, Odisha", Some("Rice"));

    // Round 1: successful reply
    session.push_user("How much water does rice need?").unwrap();
    assert!(session.has_pending_reply());
    session.resolve_reply(Ok("About 1200mm over the season.".to_string()));
    assert!(!session.has_pending_reply());

    // Round 2: the service fails; the placeholder is still replaced
    session.push_user("And for wheat?").unwrap();
    assert!(session.has_pending_reply());
    session.resolve_reply(Err(AppError::Network("timeout".into())));
    assert!(!session.has_pending_reply());

    // No typing placeholder anywhere in the final transcript
    assert!(session.messages().iter().all(|m| !m.is_typing));

    // Order: greeting, user, reply, user, error notice
    let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
    assert_eq!(
        senders,
        [
            Sender::Bot,
            Sender::User,
            Sender::Bot,
            Sender::User,
            Sender::Bot
        ]
    );
}

#[test]
fn test_message_ids_are_unique() {
    let mut session = ChatSession::new("Cuttack", Some("Rice"));
    session.push_user("one").unwrap();
    session.resolve_reply(Ok("reply".to_string()));
    session.push_user("two").unwrap();
    session.resolve_reply(Ok("reply".to_string()));

    let ids: std::collections::HashSet<uuid::Uuid> =
        session.messages().iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), session.messages().len());
}

#[test]
fn test_second_send_blocked_while_reply_pending() {
    let mut session = ChatSession::new("Cuttack", Some("Rice"));
    session.push_user("first question").unwrap();

    let err = session.push_user("second question").unwrap_err();
    assert!(matches!(err, AppError::InvalidStateTransition(_)));

    // The blocked send left the transcript untouched
    assert_eq!(
        session
            .messages()
            .iter()
            .filter(|m| m.sender == Sender::User)
            .count(),
        1
    );
}
