//! URL encoding utilities for constructing safe API paths.
//!
//! Engine names are interpolated into request paths, so they are
//! percent-encoded to keep a name like `a/b` from becoming a nested path.
//!
//! # Example
//!
//! ```
//! use app_search_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("national/parks"), "national%2Fparks");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments (RFC 3986 section 3.3).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
