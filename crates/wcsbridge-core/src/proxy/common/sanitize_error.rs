//! Upstream error sanitization.
//!
//! Pattern: log the raw upstream error server-side, return only an opaque
//! message to the caller.

/// Body sent to the caller for every bridged failure.
pub const GENERIC_FAILURE_BODY: &str = "Internal Server Error";

/// Maximum number of bytes of an upstream error body kept for logging.
pub const MAX_LOGGED_BODY_BYTES: usize = 512;

/// Trim an upstream error body for logging, respecting char boundaries.
pub fn body_preview(raw_text: &str, max_bytes: usize) -> String {
    let trimmed = raw_text.trim();
    if trimmed.len() <= max_bytes {
        return trimmed.to_string();
    }

    let mut end = max_bytes;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes total)", &trimmed[..end], trimmed.len())
}
