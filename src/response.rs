//! Response wrapper that keeps the decoded payload next to the HTTP details.
//!
//! Endpoint operations return plain entities. The lower-level
//! [`Client::fetch`](crate::Client::fetch) and
//! [`Client::get_json`](crate::Client::get_json) calls return a [`Response`]
//! so callers can look at status, headers, latency and the raw body.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A successful (2xx) HTTP response.
///
/// # Examples
///
/// ```no_run
/// use rickmorty::{Client, RequestTarget};
///
/// # async fn example() -> Result<(), rickmorty::Error> {
/// let client = Client::new()?;
///
/// let response = client.fetch(RequestTarget::method("character/1")).await?;
/// println!("{} bytes in {:?}", response.data.len(), response.latency);
/// println!("Content-Type: {:?}", response.header("content-type"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The response payload.
    pub data: T,

    /// The raw response body as a string.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from sending the request to receiving the full body.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Consumes the response and returns the payload.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Returns a header value by name, if present and valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rickmorty::Response;
    /// # use http::{HeaderMap, HeaderValue, StatusCode};
    /// # use std::time::Duration;
    /// let mut headers = HeaderMap::new();
    /// headers.insert("content-type", HeaderValue::from_static("application/json"));
    ///
    /// let response = Response::new((), String::new(), StatusCode::OK, headers, Duration::ZERO);
    ///
    /// assert_eq!(response.header("content-type"), Some("application/json"));
    /// assert_eq!(response.header("etag"), None);
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}
