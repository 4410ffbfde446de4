//! Server-side filters for collection requests.

use crate::resource::Resource;
use url::form_urlencoded;

/// An immutable set of query constraints for one resource.
///
/// Only non-empty values are kept. The derived query has the form
/// `<resource>/?key=value&key=value&`, each pair terminated by `&`. Callers
/// must not depend on the order of the pairs.
///
/// Filters are usually built through the resource-specific `create_filter`
/// on an [`Endpoint`](crate::Endpoint), e.g. `client.episode().create_filter(..)`.
///
/// # Examples
///
/// ```
/// use rickmorty::{Filter, Resource};
///
/// let filter = Filter::new(
///     Resource::Episode,
///     [("name", Some("Pilot")), ("episode", Some("S01E01"))],
/// );
/// assert_eq!(filter.query(), "episode/?name=Pilot&episode=S01E01&");
/// assert_eq!(filter.get("episode"), Some("S01E01"));
///
/// let empty = Filter::new(Resource::Episode, [("name", None::<&str>), ("episode", Some(""))]);
/// assert_eq!(empty.query(), "episode/?");
/// assert!(empty.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    resource: Resource,
    params: Vec<(&'static str, String)>,
    query: String,
}

impl Filter {
    /// Builds a filter from `(key, value)` pairs, dropping absent and empty values.
    pub fn new<I, V>(resource: Resource, params: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Option<V>)>,
        V: Into<String>,
    {
        let params: Vec<(&'static str, String)> = params
            .into_iter()
            .filter_map(|(key, value)| {
                let value = value?.into();
                (!value.is_empty()).then_some((key, value))
            })
            .collect();

        let mut query = format!("{}/?", resource.path());
        for (key, value) in &params {
            query.push_str(key);
            query.push('=');
            query.extend(form_urlencoded::byte_serialize(value.as_bytes()));
            query.push('&');
        }

        Self {
            resource,
            params,
            query,
        }
    }

    /// The resource this filter applies to.
    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// The method path sent to the API.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the value of `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over the set parameters.
    pub fn params(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.params.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Returns `true` if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
