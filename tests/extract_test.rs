use contact_extract::*;

const SIGNATURE_BODY: &str = "Hello, I would like a quote.\r\n\r\n\
    Jane Doe\r\n123 Main St\r\nSpringfield, IL 62701\r\n555-123-4567";

fn message(subject: &str, body: &str) -> RawMessage {
    RawMessage::new("jane@example.com", subject, body)
}

#[test]
fn test_full_extraction() {
    let record = extract(&message("Website email from Jane Doe", SIGNATURE_BODY));

    assert_eq!(
        record,
        ContactRecord {
            sender_email_address: "jane@example.com".into(),
            sender_first_name: "Jane".into(),
            sender_last_name: "Doe".into(),
            sender_street: "123 Main St".into(),
            sender_city: "Springfield".into(),
            sender_state: "IL".into(),
            sender_zip: "62701".into(),
            sender_phone: "555-123-4567".into(),
        }
    );
}

#[test]
fn test_trailing_line_break() {
    let body = format!("{SIGNATURE_BODY}\r\n");
    let record = extract(&message("Website email from Jane Doe", &body));

    assert_eq!(record.sender_street, "123 Main St");
    assert_eq!(record.sender_zip, "62701");
    assert_eq!(record.sender_phone, "555-123-4567");
}

#[test]
fn test_marker_may_follow_prefix() {
    let record = extract(&message("Fwd: Website email from Jane Doe", SIGNATURE_BODY));
    assert_eq!(record.sender_first_name, "Jane");
    assert_eq!(record.sender_city, "Springfield");
}

#[test]
fn test_subject_without_marker() {
    let record = extract(&message("Question about pricing", SIGNATURE_BODY));

    assert_eq!(record.sender_email_address, "jane@example.com");
    assert_eq!(record.sender_first_name, "");
    assert_eq!(record.sender_last_name, "");
    assert_eq!(record.sender_city, "");
    assert_eq!(record.sender_state, "");
    assert_eq!(record.sender_zip, "");
}

#[test]
fn test_three_name_tokens_leave_names_empty() {
    let record = extract(&message("Website email from Mary Ann Smith", SIGNATURE_BODY));
    assert_eq!(record.sender_first_name, "");
    assert_eq!(record.sender_last_name, "");
}

#[test]
fn test_single_name_token_leaves_names_empty() {
    let record = extract(&message("Website email from Cher", SIGNATURE_BODY));
    assert_eq!(record.sender_first_name, "");
    assert_eq!(record.sender_last_name, "");
}

#[test]
fn test_name_without_address_block() {
    let record = extract(&message(
        "Website email from Jane Doe",
        "Please call me back.",
    ));

    assert_eq!(record.sender_first_name, "Jane");
    assert_eq!(record.sender_last_name, "Doe");
    assert_eq!(record.sender_street, "");
    assert_eq!(record.sender_phone, "");
}

#[test]
fn test_phone_kept_when_city_line_does_not_match() {
    let body = "Jane Doe\r\n123 Main St\r\nSomewhere far away\r\n555-123-4567";
    let record = extract(&message("Website email from Jane Doe", body));

    assert_eq!(record.sender_phone, "555-123-4567");
    assert_eq!(record.sender_street, "123 Main St");
    assert_eq!(record.sender_city, "");
    assert_eq!(record.sender_state, "");
    assert_eq!(record.sender_zip, "");
}

#[test]
fn test_single_line_block_only_sets_phone() {
    let body = "Jane Doe\r\n555-123-4567";
    let record = extract(&message("Website email from Jane Doe", body));

    assert_eq!(record.sender_phone, "555-123-4567");
    assert_eq!(record.sender_street, "");
    assert_eq!(record.sender_city, "");
}

#[test]
fn test_bare_line_feeds_do_not_match() {
    let body = "Jane Doe\n123 Main St\nSpringfield, IL 62701\n555-123-4567";
    let record = extract(&message("Website email from Jane Doe", body));

    assert_eq!(record.sender_first_name, "Jane");
    assert_eq!(record.sender_phone, "");
    assert_eq!(record.sender_street, "");
}

#[test]
fn test_name_with_regex_characters() {
    let body = "J.R. O'Neil+\r\n1 Elm Rd\r\nDover, DE 19901\r\n302-555-0100";
    let record = extract(&message("Website email from J.R. O'Neil+", body));

    assert_eq!(record.sender_first_name, "J.R.");
    assert_eq!(record.sender_last_name, "O'Neil+");
    assert_eq!(record.sender_state, "DE");
}

#[test]
fn test_empty_message() {
    let record = extract(&RawMessage::default());
    assert_eq!(record, ContactRecord::default());
}

#[test]
fn test_extraction_is_idempotent() {
    let msg = message("Website email from Jane Doe", SIGNATURE_BODY);
    assert_eq!(extract(&msg), extract(&msg));
}
