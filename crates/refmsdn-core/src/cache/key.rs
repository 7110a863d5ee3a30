//! URL to cache file name derivation.

use sha2::{Digest, Sha256};

use crate::config::CacheKeyScheme;

/// Characters that cannot appear in a cache file name on common filesystems.
const UNSAFE_CHARS: [char; 10] = ['/', '>', '<', '?', ':', '"', '\\', '*', '|', ';'];

/// Replaces every filesystem-unsafe character in `url` with `_`.
///
/// No collapsing, trimming or length limit: distinct URLs that differ only in
/// an unsafe character map to the same name.
pub fn sanitize_url(url: &str) -> String {
    url.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Lowercase hex SHA-256 of the URL string.
pub fn hash_url(url: &str) -> String {
    hex::encode(Sha256::digest(url.as_bytes()))
}

/// File name for `url` under the given scheme.
pub fn file_name_for(url: &str, scheme: CacheKeyScheme) -> String {
    match scheme {
        CacheKeyScheme::Sanitized => sanitize_url(url),
        CacheKeyScheme::Sha256 => hash_url(url),
    }
}
