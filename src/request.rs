//! Request targets accepted by the transport.

use url::Url;

/// What a single GET request points at.
///
/// The API hands out absolute URLs for cross-references (a character's
/// episodes, a location's residents), so the transport accepts both a path
/// relative to the configured base URL and a full URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTarget {
    /// A path appended to the base URL, e.g. `character/1` or `episode/?page=2`.
    Method(String),

    /// An absolute URL used as-is.
    Url(String),
}

impl RequestTarget {
    /// Creates a target relative to the base URL.
    pub fn method(path: impl Into<String>) -> Self {
        RequestTarget::Method(path.into())
    }

    /// Creates a target from an absolute URL.
    pub fn url(url: impl Into<String>) -> Self {
        RequestTarget::Url(url.into())
    }

    /// Resolves this target against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidRequest`] if the result is not a valid URL.
    pub fn resolve(&self, base: &Url) -> crate::Result<Url> {
        let url = match self {
            RequestTarget::Method(path) => base.join(path.trim_start_matches('/'))?,
            RequestTarget::Url(url) => Url::parse(url)?,
        };
        Ok(url)
    }
}

impl From<&str> for RequestTarget {
    fn from(path: &str) -> Self {
        RequestTarget::method(path)
    }
}

impl From<String> for RequestTarget {
    fn from(path: String) -> Self {
        RequestTarget::Method(path)
    }
}
