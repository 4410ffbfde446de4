//! Pagination envelope of collection endpoints.
//!
//! Collection responses look like
//! `{"info": {"count", "pages", "next", "prev"}, "results": [...]}`.
//! Page numbers are 1-based.

use serde::{Deserialize, Serialize};

/// Pagination metadata of one collection response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of entities in the (possibly filtered) collection.
    pub count: u32,

    /// Number of pages the collection is split into.
    #[serde(rename = "pages")]
    pub total_pages: u32,

    /// Link to the next page, if there is one.
    #[serde(rename = "next")]
    pub next_url: Option<String>,

    /// Link to the previous page, if there is one.
    #[serde(rename = "prev")]
    pub prev_url: Option<String>,
}

impl PageInfo {
    /// Returns `true` if another page follows this one.
    pub fn has_next(&self) -> bool {
        self.next_url.is_some()
    }
}

/// One page of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Pagination metadata.
    pub info: PageInfo,

    /// Entities on this page, in server order.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Returns `true` if this is the last page.
    pub fn is_last(&self) -> bool {
        !self.info.has_next()
    }

    /// Consumes the page and returns its entities.
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}
