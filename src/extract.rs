//! Contact field extraction from website lead emails
//!
//! Lead notifications carry the visitor's name in the subject
//! (`Website email from Jane Doe`) and close the body with a signature block
//! made of the same name followed by street, `City, ST 12345` and phone lines.
//! Each step is best-effort: whatever fails to match stays empty, and fields
//! already filled by an earlier step are kept.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ContactRecord, RawMessage};

static SUBJECT_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Website email from ([^\r\n\u{2028}\u{2029}]*)$").unwrap());

static CITY_STATE_ZIP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^\r\n\u{2028}\u{2029}]*), ([0-9A-Za-z_]{2}) ([0-9]{5})").unwrap()
});

const LINE_BREAK: &str = "\r\n";

/// Derive a contact record from one message; never fails
#[must_use]
pub fn extract(message: &RawMessage) -> ContactRecord {
    let mut record = ContactRecord {
        sender_email_address: message.sender_email_address.clone(),
        ..ContactRecord::default()
    };

    if let Some((first, last)) = subject_name(&message.subject) {
        record.sender_first_name = first.to_string();
        record.sender_last_name = last.to_string();
    }

    let signature = format!("{} {}", record.sender_first_name, record.sender_last_name);
    if let Some(block) = trailing_block(&message.body, &signature) {
        fill_address(&mut record, block);
    }

    record
}

/// First and last name from the subject marker, only when exactly two tokens
fn subject_name(subject: &str) -> Option<(&str, &str)> {
    let name = SUBJECT_NAME_REGEX.captures(subject)?.get(1)?.as_str();

    let mut tokens = name.split(' ');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(first), Some(last), None) => Some((first, last)),
        _ => None,
    }
}

/// Text following `signature` when it is followed only by CRLF lines to the end
fn trailing_block<'a>(body: &'a str, signature: &str) -> Option<&'a str> {
    let pattern = format!(
        r"{}((?:[^\r\n\u{{2028}}\u{{2029}}]*\r\n)+[^\r\n\u{{2028}}\u{{2029}}]*)$",
        regex::escape(signature)
    );
    let regex = Regex::new(&pattern).ok()?;

    Some(regex.captures(body)?.get(1)?.as_str())
}

fn fill_address(record: &mut ContactRecord, block: &str) {
    let mut lines: Vec<&str> = block.trim().split(LINE_BREAK).collect();

    let Some(phone) = lines.pop() else {
        return;
    };
    record.sender_phone = phone.to_string();

    let mut remaining = lines.into_iter();
    let Some(street) = remaining.next() else {
        return;
    };
    record.sender_street = street.to_string();

    let Some(caps) = remaining
        .next()
        .and_then(|line| CITY_STATE_ZIP_REGEX.captures(line))
    else {
        return;
    };
    record.sender_city = caps[1].to_string();
    record.sender_state = caps[2].to_string();
    record.sender_zip = caps[3].to_string();
}
