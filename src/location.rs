//! Locations and location filters.

use crate::{
    endpoint::Endpoint,
    filter::Filter,
    resource::{Entity, Resource},
};
use serde::{Deserialize, Serialize};

/// A location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// The id of the location.
    pub id: u32,
    /// The name of the location.
    pub name: String,
    /// The type of the location, e.g. `Planet`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The dimension the location is in.
    pub dimension: String,
    /// Links to the characters last seen here.
    pub residents: Vec<String>,
    /// Link to the location's own endpoint.
    pub url: String,
    /// Time at which the location was created in the database.
    pub created: String,
}

impl Entity for Location {
    const RESOURCE: Resource = Resource::Location;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Endpoint<Location> {
    /// Creates a location filter by name, type and dimension.
    pub fn create_filter(
        &self,
        name: Option<&str>,
        kind: Option<&str>,
        dimension: Option<&str>,
    ) -> Filter {
        Filter::new(
            Resource::Location,
            [("name", name), ("type", kind), ("dimension", dimension)],
        )
    }
}
