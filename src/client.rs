//! HTTP transport for the Rick and Morty API.
//!
//! The [`Client`] type is the main entry point. It issues GET requests,
//! validates status codes and hands out typed [`Endpoint`]s for each
//! resource. Use [`ClientBuilder`] to point it at another origin or to add
//! headers.

use crate::{
    character::Character,
    decode,
    endpoint::Endpoint,
    episode::Episode,
    location::Location,
    resource::Entity,
    Error, RequestTarget, Response, Result,
};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::{de::DeserializeOwned, Deserialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Origin of the public Rick and Morty API.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api/";

/// Body the API sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// A client for the Rick and Morty API.
///
/// The client is cheap to clone and designed to be reused: all clones share
/// one connection pool, which is what concurrent page fetches run over.
///
/// # Examples
///
/// ```no_run
/// use rickmorty::Client;
///
/// # async fn example() -> Result<(), rickmorty::Error> {
/// let client = Client::new()?;
///
/// let rick = client.character().get_by_id(1).await?;
/// println!("{} ({})", rick.name, rick.species);
///
/// let episodes = client.episode().get_all().await?;
/// println!("{} episodes", episodes.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client for the public API with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Creates a new `ClientBuilder` for configuring a client.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rickmorty::Client;
    ///
    /// # fn example() -> Result<(), rickmorty::Error> {
    /// let client = Client::builder()
    ///     .base_url("http://localhost:8080/api")?
    ///     .user_agent("portal-gun/1.0")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the base URL relative method paths are joined to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Character endpoint.
    pub fn character(&self) -> Endpoint<Character> {
        self.endpoint()
    }

    /// Episode endpoint.
    pub fn episode(&self) -> Endpoint<Episode> {
        self.endpoint()
    }

    /// Location endpoint.
    pub fn location(&self) -> Endpoint<Location> {
        self.endpoint()
    }

    /// Endpoint for any entity type.
    pub fn endpoint<E: Entity>(&self) -> Endpoint<E> {
        Endpoint::new(self.clone())
    }

    /// Issues one GET request and returns the raw body.
    ///
    /// No retries are made. A non-2xx status becomes [`Error::Http`] when the
    /// body is an `{"error": ...}` envelope, [`Error::UnknownHttp`] otherwise.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidRequest`] if the target does not resolve to a valid URL
    /// * [`Error::Unreachable`] on network failure
    /// * [`Error::Http`] / [`Error::UnknownHttp`] on non-2xx statuses
    pub async fn fetch(&self, target: impl Into<RequestTarget>) -> Result<Response<Vec<u8>>> {
        let url = target.into().resolve(&self.inner.base_url)?;
        let start_time = Instant::now();

        tracing::debug!(url = %url, "Executing HTTP request");

        let mut request = self.inner.http_client.get(url.clone());

        for (name, value) in &self.inner.default_headers {
            request = request.header(name, value);
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        let latency = start_time.elapsed();
        let raw_body = String::from_utf8_lossy(&body).into_owned();

        tracing::info!(
            url = %url,
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            "Received HTTP response"
        );

        if !status.is_success() {
            if status.is_client_error() {
                tracing::error!(
                    status = status.as_u16(),
                    response = %raw_body,
                    "Client error (4xx)"
                );
            } else if status.is_server_error() {
                tracing::warn!(
                    status = status.as_u16(),
                    response = %raw_body,
                    "Server error (5xx)"
                );
            }

            return Err(match serde_json::from_slice::<ErrorEnvelope>(&body) {
                Ok(envelope) => Error::Http {
                    status,
                    message: envelope.error,
                    raw_response: raw_body,
                },
                Err(_) => Error::UnknownHttp {
                    status,
                    raw_response: raw_body,
                },
            });
        }

        Ok(Response::new(body, raw_body, status, headers, latency))
    }

    /// Issues one GET request and decodes the body as `T`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rickmorty::{Client, Page, Character};
    ///
    /// # async fn example() -> Result<(), rickmorty::Error> {
    /// let client = Client::new()?;
    ///
    /// let page = client.get_json::<Page<Character>>("character/?page=3").await?;
    /// println!("page 3 of {}", page.data.info.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_json<T>(&self, target: impl Into<RequestTarget>) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let response = self.fetch(target).await?;
        decode::decode_response(response)
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use rickmorty::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), rickmorty::Error> {
/// let client = ClientBuilder::new()
///     .timeout(Duration::from_secs(10))
///     .default_header("Accept-Language", "en")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: Option<Url>,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` targeting [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: HeaderMap::new(),
            timeout: None,
        }
    }

    /// Sets the base URL for all relative requests.
    ///
    /// A trailing `/` is added if missing so that method paths such as
    /// `character/1` land beneath it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        let mut raw = url.as_ref().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        self.base_url = Some(Url::parse(&raw)?);
        Ok(self)
    }

    /// Adds a default header that will be included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the `User-Agent` header.
    pub fn user_agent(self, value: impl AsRef<str>) -> Result<Self> {
        self.default_header(http::header::USER_AGENT.as_str(), value)
    }

    /// Sets a per-request timeout.
    ///
    /// Unset by default, in which case the HTTP stack's own default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let http_client = reqwest::Client::builder().build().map_err(|e| {
            Error::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                default_headers: self.default_headers,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
