//! Sequential, page-at-a-time loading for list views.
//!
//! Unlike [`fetch_all`](crate::fetcher::fetch_all), a [`Pager`] requests one
//! page per call and accumulates the results, which suits "load more when the
//! user scrolls near the end" presentation code.

use crate::{endpoint::Endpoint, page::Page, resource::Entity, Result};

/// How close to the end of the loaded items a view may get before
/// [`Pager::load_more_if_needed`] fetches the next page.
pub const LOAD_MORE_THRESHOLD: usize = 5;

/// Where a [`Pager`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    /// Ready to request the next page.
    Idle,
    /// A page request is in flight.
    Loading,
    /// The last page has been loaded; no further requests are made.
    Exhausted,
}

/// Incremental loader over one resource.
///
/// Transitions:
///
/// * `Idle -> Loading` when a request starts
/// * `Loading -> Idle` on success, items appended and the cursor advanced
/// * `Loading -> Exhausted` on success of the last page, or on a 404
/// * `Loading -> Idle` on any other error, items left unchanged
/// * `Loading -> Idle` when the `load_next` future is dropped mid-request
///
/// # Examples
///
/// ```no_run
/// use rickmorty::Client;
///
/// # async fn example() -> Result<(), rickmorty::Error> {
/// let mut pager = Client::new()?.location().pager();
///
/// while pager.can_load_more() {
///     let batch = pager.load_next().await?;
///     println!("got {} more", batch.len());
/// }
/// println!("{} locations", pager.items().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Pager<E> {
    endpoint: Endpoint<E>,
    next_page: u32,
    items: Vec<E>,
    state: PagerState,
}

impl<E: Entity> Pager<E> {
    /// Creates a pager whose first request is page 1.
    pub fn new(endpoint: Endpoint<E>) -> Self {
        Self {
            endpoint,
            next_page: 1,
            items: Vec::new(),
            state: PagerState::Idle,
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Returns `true` while a page request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state == PagerState::Loading
    }

    /// Returns `true` until the last page has been loaded.
    pub fn can_load_more(&self) -> bool {
        self.state != PagerState::Exhausted
    }

    /// The page number the next request will ask for.
    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    /// Everything loaded so far, in load order.
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// Consumes the pager and returns everything loaded.
    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    /// Loads the next page and returns the newly added items.
    ///
    /// Returns an empty slice without a request once the pager is exhausted.
    /// If the returned future is dropped before it completes, the pager goes
    /// back to [`PagerState::Idle`] and the same page is requested next time.
    ///
    /// # Errors
    ///
    /// Any error other than a 404 is returned and the pager goes back to
    /// [`PagerState::Idle`], so the same page can be requested again.
    pub async fn load_next(&mut self) -> Result<&[E]> {
        if self.state == PagerState::Exhausted {
            return Ok(&[]);
        }

        tracing::debug!(
            resource = %self.endpoint.resource(),
            page = self.next_page,
            "Loading page"
        );

        let outcome = {
            let _loading = LoadingGuard::enter(&mut self.state);
            self.endpoint.get_page(self.next_page).await
        };
        self.apply(outcome)
    }

    /// Loads the next page if `current` is within [`LOAD_MORE_THRESHOLD`] of
    /// the end of the loaded items.
    ///
    /// `None` means no item is displayed yet and loads only if nothing has
    /// been loaded.
    pub async fn load_more_if_needed(&mut self, current: Option<usize>) -> Result<&[E]> {
        if !self.needs_more(current) {
            return Ok(&[]);
        }
        self.load_next().await
    }

    fn needs_more(&self, current: Option<usize>) -> bool {
        match current {
            None => self.items.is_empty(),
            Some(index) => index >= self.items.len().saturating_sub(LOAD_MORE_THRESHOLD),
        }
    }

    fn apply(&mut self, outcome: Result<Page<E>>) -> Result<&[E]> {
        match outcome {
            Ok(page) => {
                let start = self.items.len();
                let last = page.is_last();
                self.items.extend(page.results);
                self.next_page += 1;
                self.state = if last {
                    PagerState::Exhausted
                } else {
                    PagerState::Idle
                };
                tracing::debug!(loaded = self.items.len(), state = ?self.state, "Page loaded");
                Ok(&self.items[start..])
            }
            Err(e) if e.is_not_found() => {
                self.state = PagerState::Exhausted;
                tracing::debug!(loaded = self.items.len(), "Pager exhausted");
                Ok(&[])
            }
            Err(e) => {
                self.state = PagerState::Idle;
                Err(e)
            }
        }
    }
}

/// Holds a pager in [`PagerState::Loading`] for the duration of a request.
///
/// Dropping it while still loading, e.g. because the request future was
/// cancelled, puts the pager back to [`PagerState::Idle`].
struct LoadingGuard<'a> {
    state: &'a mut PagerState,
}

impl<'a> LoadingGuard<'a> {
    fn enter(state: &'a mut PagerState) -> Self {
        *state = PagerState::Loading;
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if *self.state == PagerState::Loading {
            *self.state = PagerState::Idle;
        }
    }
}
