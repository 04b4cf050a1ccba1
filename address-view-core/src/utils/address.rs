//! Address display helpers

/// Addresses shorter than this are displayed verbatim.
const MAX_LENGTH: usize = 10;
const LEFT_SLICE: usize = 5;
const RIGHT_SLICE: usize = 5;

/// Shorten an address for use as a page title, e.g. `0xb6E04...dA6C6`.
///
/// Works on characters rather than bytes so that non-ASCII input never
/// splits a code point.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < MAX_LENGTH {
        return address.to_string();
    }

    let head: String = chars[..LEFT_SLICE].iter().collect();
    let tail: String = chars[chars.len() - RIGHT_SLICE..].iter().collect();
    format!("{head}...{tail}")
}
