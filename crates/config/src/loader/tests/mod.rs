//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Every test sets or unsets all credential variables it depends on, so
//!   the developer's own `AS_*` variables never leak into assertions.


use crate::constants::{
    ACCOUNT_HOST_KEY_ALIAS_ENV, ACCOUNT_HOST_KEY_ENV, API_ENDPOINT_ENV, API_KEY_ALIAS_ENV,
    API_KEY_ENV,
};

/// Build a full variable list where every credential variable not named in
/// `set` is explicitly unset.
pub fn credential_vars(
    set: &[(&'static str, &'static str)],
) -> Vec<(&'static str, Option<&'static str>)> {
    [
        API_KEY_ENV,
        API_KEY_ALIAS_ENV,
        ACCOUNT_HOST_KEY_ENV,
        ACCOUNT_HOST_KEY_ALIAS_ENV,
        API_ENDPOINT_ENV,
    ]
    .into_iter()
    .map(|name| {
        let value = set.iter().find(|(k, _)| *k == name).map(|(_, v)| *v);
        (name, value)
    })
    .collect()
}
