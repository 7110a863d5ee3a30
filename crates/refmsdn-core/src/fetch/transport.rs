//! Blocking HTTP GET transport.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::TransportError;

/// Fetches the body of a URL. Implemented by libcurl in production and by
/// in-memory fakes in tests.
pub trait Transport {
    fn get(&self, url: &str, headers: &HashMap<String, String>) -> Result<Vec<u8>, TransportError>;
}

/// libcurl easy-handle transport. Follows redirects; no timeout unless configured.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    timeout: Option<Duration>,
}

impl CurlTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &str, headers: &HashMap<String, String>) -> Result<Vec<u8>, TransportError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        if let Some(timeout) = self.timeout {
            easy.timeout(timeout)?;
        }

        let mut list = curl::easy::List::new();
        for (k, v) in headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !headers.is_empty() {
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(TransportError::Http(code));
        }
        Ok(body)
    }
}
