//! # rickmorty - An async client for the Rick and Morty API
//!
//! Typed access to the `character`, `episode` and `location` resources of
//! <https://rickandmortyapi.com>, built on `reqwest`, with a concurrent
//! full-collection fetcher.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rickmorty::{Client, Status};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), rickmorty::Error> {
//!     let client = Client::new()?;
//!
//!     // One entity
//!     let rick = client.character().get_by_id(1).await?;
//!     println!("{} lives at {}", rick.name, rick.location.name);
//!
//!     // Several entities in one request
//!     let family = client.character().get_by_ids(&[1, 2, 3, 4, 5]).await?;
//!     println!("{} family members", family.len());
//!
//!     // A filtered first page
//!     let characters = client.character();
//!     let filter = characters.create_filter(Some("morty"), Some(Status::Dead), None, None, None);
//!     let dead_mortys = characters.get_by_filter(&filter).await?;
//!     println!("{} dead Mortys on the first page", dead_mortys.len());
//!
//!     // Every episode, sorted by id
//!     let episodes = client.episode().get_all().await?;
//!     println!("{} episodes", episodes.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Fetching whole collections
//!
//! [`Endpoint::get_all`] requests page 1 to learn the page count, then
//! requests the remaining pages concurrently and merges them sorted by id.
//! The first failing page fails the whole call. See [`fetcher`].
//!
//! For list views that load as the user scrolls, [`Pager`] loads one page at
//! a time instead.
//!
//! ## Error Handling
//!
//! ```no_run
//! use rickmorty::{Client, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! let client = Client::new()?;
//!
//! match client.episode().get_page(99).await {
//!     Ok(page) => println!("{} episodes", page.results.len()),
//!     Err(Error::Http { status, message, .. }) => {
//!         eprintln!("HTTP {}: {}", status, message);
//!     }
//!     Err(Error::Unreachable(e)) => eprintln!("Network problem: {}", e),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Requests, responses and failures are reported through `tracing`. Install
//! a subscriber such as `tracing-subscriber` to see them.

mod character;
mod client;
pub mod decode;
mod endpoint;
mod episode;
mod error;
pub mod fetcher;
mod filter;
mod location;
mod page;
pub mod pager;
mod request;
mod resource;
mod response;

pub use character::{Character, Gender, LocationRef, Status};
pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use endpoint::Endpoint;
pub use episode::Episode;
pub use error::{Error, Result};
pub use filter::Filter;
pub use location::Location;
pub use page::{Page, PageInfo};
pub use pager::{Pager, PagerState};
pub use request::RequestTarget;
pub use resource::{Entity, Resource};
pub use response::Response;
