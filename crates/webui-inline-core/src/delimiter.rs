//! Raw string delimiter selection.
//!
//! A C++ raw string `R"TOKEN( ... )TOKEN"` ends at the first `)TOKEN"`. The
//! payload is embedded verbatim, so the chosen token must not appear in it
//! directly after a `)`. Candidates are probed in a fixed order so the same
//! payload always yields the same token.

use crate::error::{EmbedError, Result};

/// Default number of candidates tried: the base token plus `_1` to `_999`.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Pick the lowest-indexed delimiter whose closing sequence is absent.
///
/// Tries `base` first, then `base_1`, `base_2`, ... for a total of
/// `max_attempts` candidates.
pub fn choose_delimiter(payload: &str, base: &str, max_attempts: usize) -> Result<String> {
    for candidate in candidates(base).take(max_attempts) {
        if is_safe(payload, &candidate) {
            if candidate != base {
                tracing::debug!(base, chosen = %candidate, "payload contains base delimiter");
            }
            return Ok(candidate);
        }
    }

    Err(EmbedError::DelimiterExhausted {
        base: base.to_string(),
        attempts: max_attempts,
    })
}

/// Whether `delimiter` can close a raw string around `payload` unambiguously.
pub fn is_safe(payload: &str, delimiter: &str) -> bool {
    !payload.contains(&format!("){delimiter}"))
}

fn candidates(base: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(base.to_string()).chain((1..).map(move |i| format!("{base}_{i}")))
}
