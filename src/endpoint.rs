//! Typed operations on one resource.

use crate::{
    fetcher,
    filter::Filter,
    page::Page,
    pager::Pager,
    resource::{Entity, Resource},
    Client, Error, RequestTarget, Result,
};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

/// The API answers a one-element id list with a bare object.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<E> {
    Many(Vec<E>),
    One(E),
}

impl<E> From<OneOrMany<E>> for Vec<E> {
    fn from(value: OneOrMany<E>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Operations on the resource that serves `E`.
///
/// Obtained from [`Client::character`], [`Client::episode`],
/// [`Client::location`] or [`Client::endpoint`]. Cheap to clone.
///
/// Cross-reference fields on entities (a character's `episode` list, an
/// episode's `characters`) are plain URLs. Follow them with
/// [`get_by_url`](Self::get_by_url).
pub struct Endpoint<E> {
    client: Client,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Endpoint<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> fmt::Debug for Endpoint<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("entity", &std::any::type_name::<E>())
            .field("client", &self.client)
            .finish()
    }
}

impl<E: Entity> Endpoint<E> {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    /// The client requests are issued through.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The resource this endpoint serves.
    pub fn resource(&self) -> Resource {
        E::RESOURCE
    }

    /// Fetches one entity by id.
    ///
    /// Ids are not validated locally; an unknown id surfaces as the server's
    /// 404 [`Error::Http`].
    pub async fn get_by_id(&self, id: u32) -> Result<E> {
        let path = format!("{}/{}", E::RESOURCE, id);
        Ok(self.client.get_json::<E>(path).await?.into_data())
    }

    /// Fetches one entity from an absolute URL, such as a cross-reference.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rickmorty::Client;
    ///
    /// # async fn example() -> Result<(), rickmorty::Error> {
    /// let client = Client::new()?;
    /// let rick = client.character().get_by_id(1).await?;
    /// let origin = client.location().get_by_url(&rick.origin.url).await?;
    /// println!("{} is from {}", rick.name, origin.dimension);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_by_url(&self, url: &str) -> Result<E> {
        Ok(self
            .client
            .get_json::<E>(RequestTarget::url(url))
            .await?
            .into_data())
    }

    /// Fetches several entities in one request.
    ///
    /// The result follows the server's order, not necessarily the order of
    /// `ids`. An empty slice returns an empty list without a request.
    pub async fn get_by_ids(&self, ids: &[u32]) -> Result<Vec<E>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = ids
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let path = format!("{}/{}", E::RESOURCE, joined);

        let items = self.client.get_json::<OneOrMany<E>>(path).await?.into_data();
        Ok(items.into())
    }

    /// Fetches one full page, pagination metadata included.
    ///
    /// A page past the last one surfaces as the server's 404 [`Error::Http`].
    pub async fn get_page(&self, page_number: u32) -> Result<Page<E>> {
        let path = format!("{}/?page={}", E::RESOURCE, page_number);
        Ok(self.client.get_json::<Page<E>>(path).await?.into_data())
    }

    /// Fetches the entities on one page.
    pub async fn get_by_page(&self, page_number: u32) -> Result<Vec<E>> {
        Ok(self.get_page(page_number).await?.into_results())
    }

    /// Fetches the unpaginated collection path, which is page 1.
    pub(crate) async fn get_first_page(&self) -> Result<Page<E>> {
        Ok(self
            .client
            .get_json::<Page<E>>(E::RESOURCE.path())
            .await?
            .into_data())
    }

    /// Fetches the first page of results matching `filter`.
    ///
    /// Filtered results are not paginated further: this issues exactly one
    /// request and returns at most one page of matches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the filter was built for another
    /// resource.
    pub async fn get_by_filter(&self, filter: &Filter) -> Result<Vec<E>> {
        if filter.resource() != E::RESOURCE {
            return Err(Error::Configuration(format!(
                "Filter for {} used on {} endpoint",
                filter.resource(),
                E::RESOURCE
            )));
        }

        let page = self
            .client
            .get_json::<Page<E>>(filter.query())
            .await?
            .into_data();
        Ok(page.into_results())
    }

    /// Fetches every entity of the resource, sorted ascending by id.
    ///
    /// See [`fetcher::fetch_all`].
    pub async fn get_all(&self) -> Result<Vec<E>> {
        fetcher::fetch_all(self).await
    }

    /// Creates an incremental pager starting at page 1.
    pub fn pager(&self) -> Pager<E> {
        Pager::new(self.clone())
    }
}
