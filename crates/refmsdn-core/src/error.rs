//! Error types for the fetch/parse pipeline.
//!
//! Every `FetchError` is fatal for a run: the drill-down stops and the CLI
//! reports it. Cache write failures are not represented here; they are logged
//! and swallowed by the fetcher.

use std::io;
use thiserror::Error;

/// Failure of the HTTP transport for a single GET.
#[derive(Debug, Error)]
pub enum TransportError {
    /// libcurl reported an error (DNS, connect, TLS, timeout, ...).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// The response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

/// Failure to turn a URL into a parsed document, or to navigate it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read cached page for {url}: {source}")]
    CacheRead {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },

    #[error("cannot resolve link {link:?} against {base}")]
    InvalidLink {
        base: String,
        link: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid selector {selector:?}: {message}")]
    Selector { selector: String, message: String },
}
