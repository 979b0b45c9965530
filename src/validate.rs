//! Email address syntax check

use std::sync::LazyLock;

use regex::Regex;

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

static ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?",
        r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    ))
    .unwrap()
});

/// Whether `address` is a syntactically valid dot-atom mailbox
///
/// Quoted local parts (`"a b"@example.com`) and domain literals
/// (`a@[127.0.0.1]`) are rejected even though RFC 5322 allows them.
#[must_use]
pub fn is_valid_syntax(address: &str) -> bool {
    if address.len() > MAX_ADDRESS_LEN {
        return false;
    }

    address
        .split_once('@')
        .is_some_and(|(local, _)| local.len() <= MAX_LOCAL_PART_LEN)
        && ADDRESS_REGEX.is_match(address)
}
