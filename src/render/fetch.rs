//! Image fetching collaborator.
//!
//! The renderer never talks to the network itself; it asks an
//! [`ImageFetcher`] for bytes. The default [`NullFetcher`] fails every
//! request, which keeps text-only rendering dependency-free; enable the
//! `fetch` cargo feature for the HTTP-backed implementation.
use bytes::Bytes;

use super::error::FetchError;

/// Resolves an image URL to raw image bytes.
///
/// Implementations decide transport, caching, and timeouts; the renderer
/// only requires that a call either yields non-empty bytes or fails with a
/// [`FetchError`].
pub trait ImageFetcher {
    /// Fetch the image at `url`.
    fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;
}

/// A fetcher that rejects every request.
///
/// Used when no fetcher is configured: image fields then degrade to
/// recorded fetch failures, and the placeholder shapes stay in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFetcher;

impl ImageFetcher for NullFetcher {
    fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        Err(FetchError::NoFetcher {
            url: url.to_string(),
        })
    }
}

/// HTTP image fetcher backed by a blocking `reqwest` client.
#[cfg(feature = "fetch")]
#[derive(Debug)]
pub struct HttpImageFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "fetch")]
impl HttpImageFetcher {
    /// Create a fetcher with a default client.
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Create a fetcher around an existing client (for custom timeouts,
    /// proxies, or headers).
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "fetch")]
impl Default for HttpImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "fetch")]
impl ImageFetcher for HttpImageFetcher {
    fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|e| FetchError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody {
                url: url.to_string(),
            });
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_fetcher_always_fails() {
        let err = NullFetcher.fetch("https://example.com/a.png").unwrap_err();
        assert!(matches!(err, FetchError::NoFetcher { .. }));
    }
}
