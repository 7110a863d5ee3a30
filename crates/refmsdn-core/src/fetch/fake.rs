//! In-memory transport for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use super::Transport;
use crate::error::TransportError;

/// Serves fixed bodies by URL; unknown URLs answer HTTP 404. Records every request.
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    pages: HashMap<String, Vec<u8>>,
    pub(crate) requests: RefCell<Vec<(String, Option<String>)>>,
}

impl FakeTransport {
    pub(crate) fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.as_bytes().to_vec());
        self
    }

    pub(crate) fn with_bytes(mut self, url: &str, body: &[u8]) -> Self {
        self.pages.insert(url.to_string(), body.to_vec());
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub(crate) fn calls_for(&self, url: &str) -> usize {
        self.requests.borrow().iter().filter(|(u, _)| u == url).count()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, headers: &HashMap<String, String>) -> Result<Vec<u8>, TransportError> {
        self.requests
            .borrow_mut()
            .push((url.to_string(), headers.get("User-Agent").cloned()));
        self.pages.get(url).cloned().ok_or(TransportError::Http(404))
    }
}
