//! Best-effort bearer-token expiry decoding.
//!
//! The client never verifies signatures; it only reads the `exp` claim to
//! log users out proactively. Every malformed input degrades to `None`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;

/// Millisecond epoch timestamp of the token's expiry, or `None` when the
/// token is not three dot-separated segments, the payload is not valid
/// base64url or JSON, or `exp` is missing or non-numeric.
pub fn token_exp_ms(token: &str) -> Option<i64> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let payload = decode_base64url(parts[1])?;
    let claims: Value = serde_json::from_slice(&payload).ok()?;
    let exp = claims.get("exp")?.as_f64()?;
    Some((exp * 1000.0) as i64)
}

fn decode_base64url(segment: &str) -> Option<Vec<u8>> {
    let normalized = segment.replace('-', "+").replace('_', "/");
    let padded = match normalized.len() % 4 {
        0 => normalized,
        2 => format!("{normalized}=="),
        3 => format!("{normalized}="),
        _ => return None,
    };
    STANDARD.decode(padded).ok()
}
