//! Episodes and episode filters.

use crate::{
    endpoint::Endpoint,
    filter::Filter,
    resource::{Entity, Resource},
};
use serde::{Deserialize, Serialize};

/// An episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// The id of the episode.
    pub id: u32,
    /// The name of the episode.
    pub name: String,
    /// The air date of the episode, e.g. `December 2, 2013`.
    pub air_date: String,
    /// The episode code, e.g. `S01E01`.
    pub episode: String,
    /// Links to the characters seen in the episode.
    pub characters: Vec<String>,
    /// Link to the episode's own endpoint.
    pub url: String,
    /// Time at which the episode was created in the database.
    pub created: String,
}

impl Entity for Episode {
    const RESOURCE: Resource = Resource::Episode;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Endpoint<Episode> {
    /// Creates an episode filter by name and episode code.
    pub fn create_filter(&self, name: Option<&str>, episode: Option<&str>) -> Filter {
        Filter::new(Resource::Episode, [("name", name), ("episode", episode)])
    }
}
