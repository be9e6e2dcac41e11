use super::*;

// =============================================================================
// Message
// =============================================================================

#[test]
fn message_trims_text() {
    let msg = Message::user("  hello there \n").unwrap();
    assert_eq!(msg.text(), "hello there");
    assert_eq!(msg.role(), Role::User);
}

#[test]
fn message_rejects_empty_text() {
    assert_eq!(Message::user(""), Err(TranscriptError::EmptyText));
}

#[test]
fn message_rejects_whitespace_only_text() {
    assert_eq!(Message::assistant(" \t\n "), Err(TranscriptError::EmptyText));
}

#[test]
fn message_ids_are_unique() {
    let a = Message::user("same").unwrap();
    let b = Message::user("same").unwrap();
    assert_ne!(a.id(), b.id());
}

#[test]
fn message_timestamp_is_positive() {
    let msg = Message::assistant("hi").unwrap();
    assert!(msg.timestamp() > 0.0);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
}

// =============================================================================
// Transcript
// =============================================================================

#[test]
fn new_transcript_is_empty() {
    let transcript = Transcript::new();
    assert!(transcript.is_empty());
    assert_eq!(transcript.len(), 0);
    assert!(transcript.last().is_none());
}

#[test]
fn seeded_transcript_holds_greeting() {
    let transcript = Transcript::seeded("Welcome!").unwrap();
    assert_eq!(transcript.len(), 1);
    let first = &transcript.messages()[0];
    assert_eq!(first.role(), Role::Assistant);
    assert_eq!(first.text(), "Welcome!");
}

#[test]
fn seeded_rejects_blank_greeting() {
    assert!(Transcript::seeded("   ").is_err());
}

#[test]
fn append_returns_updated_sequence() {
    let mut transcript = Transcript::new();
    let after = transcript.append(Message::user("one").unwrap());
    assert_eq!(after.len(), 1);
    let after = transcript.append(Message::assistant("two").unwrap());
    assert_eq!(after.len(), 2);
    assert_eq!(after[1].text(), "two");
}

#[test]
fn append_preserves_insertion_order() {
    let mut transcript = Transcript::new();
    for text in ["a", "b", "c", "d"] {
        transcript.append(Message::user(text).unwrap());
    }
    let texts: Vec<&str> = transcript.iter().map(Message::text).collect();
    assert_eq!(texts, vec!["a", "b", "c", "d"]);
    assert_eq!(transcript.last().map(Message::text), Some("d"));
}

#[test]
fn read_queries_do_not_mutate() {
    let transcript = Transcript::seeded("hi").unwrap();
    let before = transcript.messages().to_vec();
    let _ = transcript.len();
    let _ = transcript.is_empty();
    let _ = transcript.last();
    assert_eq!(transcript.messages(), before.as_slice());
}

#[test]
fn to_json_exports_roles_and_text() {
    let mut transcript = Transcript::seeded("hello").unwrap();
    transcript.append(Message::user("is it safe?").unwrap());

    let json: serde_json::Value = serde_json::from_str(&transcript.to_json().unwrap()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["role"], "assistant");
    assert_eq!(entries[1]["role"], "user");
    assert_eq!(entries[1]["text"], "is it safe?");
    assert!(entries[1]["id"].is_string());
}
