use super::*;

#[test]
fn header_uses_title() {
    assert_eq!(header(), "=== SoftSell Assistant ===");
}

#[test]
fn role_display_labels_are_distinct() {
    assert_ne!(role_display(Role::User).label, role_display(Role::Assistant).label);
    assert_eq!(role_display(Role::Assistant).indent, 0);
    assert!(role_display(Role::User).indent > 0);
}

#[test]
fn message_line_assistant_flush_left() {
    let msg = Message::assistant("hello").unwrap();
    assert_eq!(message_line(&msg), "assistant> hello");
}

#[test]
fn message_line_user_indented() {
    let msg = Message::user("hi").unwrap();
    assert_eq!(message_line(&msg), "        you> hi");
}

#[test]
fn transcript_one_line_per_message() {
    let msgs = [Message::assistant("a").unwrap(), Message::user("b").unwrap()];
    let out = transcript(&msgs);
    assert_eq!(out.lines().count(), 2);
    assert!(out.lines().next().unwrap().ends_with("a"));
}

#[test]
fn suggestions_empty_when_hidden() {
    assert_eq!(suggestions(&[]), "");
}

#[test]
fn suggestions_numbered_from_one() {
    let out = suggestions(&QuickReply::ALL);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "  /1 How do I sell my license?");
    assert_eq!(lines[4], "  /4 Is it secure?");
}
