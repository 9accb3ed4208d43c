//! Process-wide enforcement of HTTP interception.
//!
//! Once an intercepting [`Harness`](super::Harness) is bootstrapped, every
//! client built in the process must target a live
//! [`InterceptedServer`](super::InterceptedServer), however it was built.
//! Servers register their origin on start and deregister on drop.
//!
//! Invariants:
//! - Enforcement is never switched off once on.
//! - A refused client is never built, so it cannot send anything.

use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use url::Url;

use crate::error::ClientError;

static ENFORCED: AtomicBool = AtomicBool::new(false);
static REGISTERED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

pub(crate) fn enforce() {
    ENFORCED.store(true, Ordering::SeqCst);
}

/// True once an intercepting harness has been bootstrapped in this process.
pub fn interception_enforced() -> bool {
    ENFORCED.load(Ordering::SeqCst)
}

/// `scheme://host:port` of `url`, the key servers are registered under.
fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}

pub(crate) fn register(uri: &str) {
    if let Ok(url) = Url::parse(uri) {
        registered().insert(origin_of(&url));
    }
}

pub(crate) fn deregister(uri: &str) {
    if let Ok(url) = Url::parse(uri) {
        registered().remove(&origin_of(&url));
    }
}

fn registered() -> std::sync::MutexGuard<'static, BTreeSet<String>> {
    REGISTERED
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Refuse `base_url` unless interception is off or it names a registered server.
pub(crate) fn check_base_url(base_url: &Url) -> Result<(), ClientError> {
    if !interception_enforced() || registered().contains(&origin_of(base_url)) {
        return Ok(());
    }
    tracing::error!(
        base_url = %base_url,
        "Client targets an endpoint outside HTTP interception"
    );
    Err(ClientError::UninterceptedEndpoint(base_url.to_string()))
}
