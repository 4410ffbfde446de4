//! Full-collection fetching.
//!
//! The API does not report the page count without a first round trip, so
//! fetching a whole collection takes two phases: one request for page 1,
//! then a concurrent fan-out over pages `2..=total_pages`. Pages complete in
//! any order; the merged result is sorted by id before it is returned.

use crate::{endpoint::Endpoint, resource::Entity, Result};
use futures_util::future::try_join_all;

/// Fetches every page of `endpoint`'s resource and merges them.
///
/// Every page is requested exactly once. The first failing page aborts the
/// whole call: in-flight sibling requests are dropped and no partial result is
/// returned. The output is sorted ascending by id with duplicate ids removed,
/// so it does not depend on which page arrived first.
///
/// # Examples
///
/// ```no_run
/// use rickmorty::{fetcher, Client};
///
/// # async fn example() -> Result<(), rickmorty::Error> {
/// let client = Client::new()?;
/// let locations = fetcher::fetch_all(&client.location()).await?;
/// assert!(locations.windows(2).all(|w| w[0].id < w[1].id));
/// # Ok(())
/// # }
/// ```
pub async fn fetch_all<E: Entity>(endpoint: &Endpoint<E>) -> Result<Vec<E>> {
    let first = endpoint.get_first_page().await?;
    let total_pages = first.info.total_pages;
    let mut items = first.results;

    tracing::debug!(
        resource = %endpoint.resource(),
        total_pages = total_pages,
        count = first.info.count,
        "Fetched first page"
    );

    if total_pages <= 1 {
        return Ok(items);
    }

    let pages = try_join_all((2..=total_pages).map(|page| endpoint.get_by_page(page))).await?;

    items.extend(pages.into_iter().flatten());
    items.sort_by_key(E::id);
    items.dedup_by_key(|item| item.id());

    tracing::debug!(
        resource = %endpoint.resource(),
        fetched = items.len(),
        "Merged collection"
    );

    Ok(items)
}
