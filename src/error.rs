//! Error types for Rick and Morty API calls.
//!
//! Every failure a call can produce is one variant of [`Error`]. Variants that
//! come from an HTTP response keep the raw body so the exact server reply can
//! be inspected when something goes wrong.

use http::StatusCode;

/// The error type for all client operations.
///
/// # Examples
///
/// ```no_run
/// use rickmorty::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new()?;
///
/// match client.character().get_by_id(12345).await {
///     Ok(character) => println!("Found {}", character.name),
///     Err(Error::Http { status, message, .. }) => {
///         eprintln!("API said {}: {}", status, message);
///     }
///     Err(Error::Decoding { serde_error, .. }) => {
///         eprintln!("Unexpected payload: {}", serde_error);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request URL could not be built.
    ///
    /// Raised before any network traffic, either because the base URL plus the
    /// method path is malformed or because a caller-supplied absolute URL does
    /// not parse.
    #[error("Invalid request URL: {0}")]
    InvalidRequest(#[from] url::ParseError),

    /// The server answered with a non-2xx status and an `{"error": ...}` body.
    ///
    /// # Fields
    ///
    /// * `status` - The HTTP status code
    /// * `message` - The `error` field of the response envelope
    /// * `raw_response` - The raw response body
    #[error("HTTP error {status}: {message}")]
    Http {
        /// The HTTP status code
        status: StatusCode,
        /// The message reported by the API
        message: String,
        /// The raw response body
        raw_response: String,
    },

    /// The server answered with a non-2xx status and a body that is not an
    /// error envelope.
    #[error("Unknown HTTP error {status}")]
    UnknownHttp {
        /// The HTTP status code
        status: StatusCode,
        /// The raw response body
        raw_response: String,
    },

    /// A 2xx response body did not match the expected shape.
    ///
    /// Malformed JSON, type mismatches and missing fields all end up here.
    #[error("Failed to decode response (status {status}): {serde_error}")]
    Decoding {
        /// The raw response body that failed to decode
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// The server could not be reached (DNS failure, refused connection, timeout).
    #[error("Server unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    /// Invalid client configuration, such as a bad header name.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Returns the HTTP status code if this error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http { status, .. }
            | Error::UnknownHttp { status, .. }
            | Error::Decoding { status, .. } => Some(*status),
            Error::Unreachable(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Http { raw_response, .. }
            | Error::UnknownHttp { raw_response, .. }
            | Error::Decoding { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns the API-reported error message, if the server sent one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rickmorty::Error;
    /// use http::StatusCode;
    ///
    /// let err = Error::Http {
    ///     status: StatusCode::NOT_FOUND,
    ///     message: "Character not found".to_string(),
    ///     raw_response: r#"{"error":"Character not found"}"#.to_string(),
    /// };
    ///
    /// assert_eq!(err.message(), Some("Character not found"));
    /// assert!(err.is_not_found());
    /// ```
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::Http { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Returns `true` if the server answered 404.
    ///
    /// The API uses 404 both for unknown ids and for page numbers past the
    /// last page.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Http { status, .. } | Error::UnknownHttp { status, .. }
                if *status == StatusCode::NOT_FOUND
        )
    }
}

/// A specialized `Result` type for Rick and Morty API calls.
pub type Result<T> = std::result::Result<T, Error>;
