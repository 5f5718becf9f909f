//! # giphy-rs
//!
//! An easy-to-use library for the [Giphy](https://developers.giphy.com/) api, completely written
//! in Rust.
//!
//! Search and trending results are paginated. Instead of returning a single page, these endpoints
//! return a [`Pagination`] which fetches page after page in the background, waiting a short
//! (configurable, see [`Throttle`]) amount of time between two pages to not run into giphy's rate
//! limits.
//!
//! ```no_run
//! use futures_util::StreamExt;
//! use giphy_rs::{Giphy, Request};
//!
//! # async fn run() -> Result<(), giphy_rs::error::Error> {
//! let giphy = Giphy::from_env_or_default()?;
//!
//! let mut pagination = giphy.search(Request::new().query("Milly Rock").max_page_number(4));
//! while let Some(page) = pagination.next().await {
//!     for giph in page.into_result()? {
//!         println!("{} - {}", giph.id, giph.url)
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! - Full [Tokio](https://tokio.rs/) compatibility.
//! - The transport is replaceable with any [`tower_service::Service`], see
//!   [`GiphyBuilder::middleware`].

pub mod common;
pub mod error;
pub mod giphy;
pub mod language;
pub mod lookup;
pub mod media;
pub mod request;
pub mod search;

// internal
mod internal;
mod macros;

// internal
pub(crate) use error::Result;
pub(crate) use macros::enum_values;

pub use common::{Cancel, Page, Pagination};
pub use giphy::{Giphy, GiphyBuilder};
pub use language::Language;
pub use media::{Gif, Giph, Meta, PaginationMeta};
pub use request::{Format, Rating, Request, SortOrder, Throttle};
