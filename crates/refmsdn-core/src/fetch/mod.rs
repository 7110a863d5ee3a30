//! Cache-aware page fetching.
//!
//! A URL is served from the cache store when an entry is readable, otherwise
//! fetched over HTTP, parsed, and written back to the cache as re-serialized
//! markup.

#[cfg(test)]
pub(crate) mod fake;
mod transport;

pub use transport::{CurlTransport, Transport};

use scraper::Html;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::cache::CacheStore;
use crate::config::BrowseConfig;
use crate::error::FetchError;

pub struct PageFetcher<T> {
    cache: CacheStore,
    transport: T,
    user_agent: String,
    /// URLs already written to the cache during this run.
    persisted: RefCell<HashSet<String>>,
}

impl PageFetcher<CurlTransport> {
    /// Fetcher backed by libcurl, configured from `cfg`.
    pub fn from_config(cfg: &BrowseConfig) -> Self {
        Self::new(
            CacheStore::from_config(cfg),
            CurlTransport::new(cfg.timeout),
            cfg.user_agent.clone(),
        )
    }
}

impl<T: Transport> PageFetcher<T> {
    pub fn new(cache: CacheStore, transport: T, user_agent: impl Into<String>) -> Self {
        Self {
            cache,
            transport,
            user_agent: user_agent.into(),
            persisted: RefCell::new(HashSet::new()),
        }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Resolve `url` to a parsed document.
    ///
    /// A cached entry that cannot be read is an error; there is no fallback to
    /// the network. Bytes that are not valid UTF-8 are decoded lossily.
    pub fn fetch(&self, url: &str) -> Result<Html, FetchError> {
        if self.cache.exists(url) {
            tracing::debug!(url, path = %self.cache.path_for(url).display(), "cache hit");
            let bytes = self.cache.read(url).map_err(|source| FetchError::CacheRead {
                url: url.to_string(),
                source,
            })?;
            return Ok(parse(&bytes));
        }

        tracing::info!(url, "fetching");
        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), self.user_agent.clone());
        let bytes = self
            .transport
            .get(url, &headers)
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;
        let doc = parse(&bytes);
        self.persist(url, &doc);
        Ok(doc)
    }

    fn persist(&self, url: &str, doc: &Html) {
        if !self.persisted.borrow_mut().insert(url.to_string()) {
            return;
        }
        if let Err(e) = self.cache.write(url, doc.html().as_bytes()) {
            tracing::warn!(
                url,
                path = %self.cache.path_for(url).display(),
                "cache write failed: {}",
                e
            );
        }
    }
}

// Pages are not always UTF-8 (legacy code pages, stray bytes); invalid
// sequences become U+FFFD instead of failing the run.
fn parse(bytes: &[u8]) -> Html {
    Html::parse_document(&String::from_utf8_lossy(bytes))
}
