//! Request models for the object cache API
//!
//! Query parameters and key validation for `/object/{key}`.

use tracing::warn;

use crate::cache::Ttl;

/// Query string accepted by PUT/POST `/object/{key}`.
///
/// `ttl` is kept as raw text so that an empty or malformed value degrades to
/// the default TTL instead of failing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutParams {
    pub ttl: Option<String>,
}

impl PutParams {
    /// Builds params from decoded query pairs. The first `ttl` wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let ttl = pairs
            .into_iter()
            .find(|(name, _)| name == "ttl")
            .map(|(_, value)| value);
        Self { ttl }
    }

    /// Resolves the requested TTL.
    ///
    /// The value is read as a leading signed integer, so `ttl=5abc` means 5
    /// seconds. `ttl=0` is the explicit "never expires" request. A missing
    /// value, or one with no leading digits, falls back to the default TTL.
    pub fn ttl(&self) -> Ttl {
        let Some(raw) = self.ttl.as_deref() else {
            return Ttl::Default;
        };

        match parse_int_prefix(raw) {
            Some(secs) => Ttl::Seconds(secs),
            None => {
                if !raw.trim().is_empty() {
                    warn!("Ignoring non-numeric ttl '{}', using default", raw);
                }
                Ttl::Default
            }
        }
    }
}

/// Parses an optional sign and the digits that follow it, ignoring leading
/// whitespace and anything after the last digit. A `0x` prefix switches to
/// hex. Out-of-range values saturate.
fn parse_int_prefix(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for digit in rest.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        let digit = i64::from(digit);
        value = value.saturating_mul(i64::from(radix));
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }

    seen.then_some(value)
}

/// Returns true if `key` is a valid object key: one or more ASCII letters,
/// digits or underscores.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
