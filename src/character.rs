//! Characters and character filters.

use crate::{
    endpoint::Endpoint,
    filter::Filter,
    resource::{Entity, Resource},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// The id of the character.
    pub id: u32,
    /// The name of the character.
    pub name: String,
    /// `Alive`, `Dead` or `unknown`.
    pub status: String,
    /// The species of the character.
    pub species: String,
    /// The type or subspecies of the character.
    #[serde(rename = "type")]
    pub kind: String,
    /// `Female`, `Male`, `Genderless` or `unknown`.
    pub gender: String,
    /// The character's origin location.
    pub origin: LocationRef,
    /// The character's last known location.
    pub location: LocationRef,
    /// Link to the character's 300x300 avatar.
    pub image: String,
    /// Links to the episodes the character appears in.
    pub episode: Vec<String>,
    /// Link to the character's own endpoint.
    pub url: String,
    /// Time at which the character was created in the database.
    pub created: String,
}

impl Entity for Character {
    const RESOURCE: Resource = Resource::Character;

    fn id(&self) -> u32 {
        self.id
    }
}

/// Name and link of a location a character refers to.
///
/// `url` is empty when the location is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    /// The location's name, or `unknown`.
    pub name: String,
    /// Link to the location's endpoint.
    pub url: String,
}

/// Character status filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// `alive`
    Alive,
    /// `dead`
    Dead,
    /// `unknown`
    Unknown,
}

impl Status {
    /// The value sent in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Alive => "alive",
            Status::Dead => "dead",
            Status::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character gender filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// `female`
    Female,
    /// `male`
    Male,
    /// `genderless`
    Genderless,
    /// `unknown`
    Unknown,
}

impl Gender {
    /// The value sent in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Genderless => "genderless",
            Gender::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Endpoint<Character> {
    /// Creates a character filter from the given constraints.
    ///
    /// `None` and empty strings are left out of the query.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rickmorty::{Client, Status};
    ///
    /// # async fn example() -> Result<(), rickmorty::Error> {
    /// let characters = Client::new()?.character();
    /// let filter = characters.create_filter(Some("rick"), Some(Status::Alive), None, None, None);
    /// let alive_ricks = characters.get_by_filter(&filter).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn create_filter(
        &self,
        name: Option<&str>,
        status: Option<Status>,
        species: Option<&str>,
        kind: Option<&str>,
        gender: Option<Gender>,
    ) -> Filter {
        Filter::new(
            Resource::Character,
            [
                ("name", name),
                ("status", status.map(|s| s.as_str())),
                ("species", species),
                ("type", kind),
                ("gender", gender.map(|g| g.as_str())),
            ],
        )
    }
}
