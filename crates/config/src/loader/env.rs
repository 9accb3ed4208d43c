//! Environment variable helpers shared by the loader and the test harness.
//!
//! Invariants:
//! - Credentials are read with [`env_var_verbatim`]: a set variable is
//!   returned byte for byte, even when empty.
//! - Harness flags are read with [`env_var_or_none`]: empty or
//!   whitespace-only values are treated as unset and values are trimmed.

/// Read an environment variable exactly as set.
///
/// Returns `None` only if the variable is unset (or not valid unicode).
pub fn env_var_verbatim(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// True if the variable is set to `1` or `true` (case-insensitive).
pub fn env_var_is_truthy(key: &str) -> bool {
    env_var_or_none(key).is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}
