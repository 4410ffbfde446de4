//! Resource kinds and the trait that binds an entity type to its endpoint.

use serde::de::DeserializeOwned;
use std::fmt;

/// One of the three top-level collections served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// `character`
    Character,
    /// `episode`
    Episode,
    /// `location`
    Location,
}

impl Resource {
    /// The path segment of this resource under the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Character => "character",
            Resource::Episode => "episode",
            Resource::Location => "location",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A record served by one of the API's resources.
///
/// Implemented by [`Character`](crate::Character), [`Episode`](crate::Episode)
/// and [`Location`](crate::Location). The id is unique within a resource and
/// is the sort key for [`fetch_all`](crate::fetcher::fetch_all).
pub trait Entity: DeserializeOwned + Send + Sync + 'static {
    /// The resource this entity is served from.
    const RESOURCE: Resource;

    /// The entity's id.
    fn id(&self) -> u32;
}
