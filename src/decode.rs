//! JSON decoding of response bodies.
//!
//! Decoding is strict about shape: unknown fields are ignored, missing or
//! mistyped fields fail. There is no partial decoding; every failure becomes
//! [`Error::Decoding`].

use crate::{Error, Response, Result};
use http::StatusCode;
use serde::de::DeserializeOwned;

/// Decodes a raw body into `T`.
///
/// # Examples
///
/// ```
/// use rickmorty::{decode, Error, PageInfo};
///
/// let info: PageInfo = decode::decode(br#"{"count":51,"pages":3,"next":null,"prev":null}"#).unwrap();
/// assert_eq!(info.total_pages, 3);
///
/// let truncated = decode::decode::<PageInfo>(b"{");
/// assert!(matches!(truncated, Err(Error::Decoding { .. })));
/// ```
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    decode_with_status(body, StatusCode::OK)
}

/// Decodes the payload of a transport response, keeping its metadata.
pub fn decode_response<T: DeserializeOwned>(response: Response<Vec<u8>>) -> Result<Response<T>> {
    let data = decode_with_status(&response.data, response.status)?;
    Ok(Response::new(
        data,
        response.raw_body,
        response.status,
        response.headers,
        response.latency,
    ))
}

fn decode_with_status<T: DeserializeOwned>(body: &[u8], status: StatusCode) -> Result<T> {
    serde_json::from_slice::<T>(body).map_err(|e| {
        let raw_response = String::from_utf8_lossy(body).into_owned();

        tracing::error!(
            error = %e,
            raw_response = %raw_response,
            "Failed to decode response"
        );

        Error::Decoding {
            raw_response,
            serde_error: e.to_string(),
            status,
        }
    })
}
