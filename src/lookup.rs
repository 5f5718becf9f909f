//! Endpoints which return exactly one item.

use crate::error::{Error, ErrorContext};
use crate::giphy::routes;
use crate::request::WireParams;
use crate::{Giph, Giphy, Request, Result};

impl Giphy {
    /// A random gif, optionally filtered by [`Request::tag`] and [`Request::rating`]. All other
    /// fields of the request are ignored.
    pub async fn random_gif<R: Into<Option<Request>>>(&self, request: R) -> Result<Giph> {
        let request = request.into().unwrap_or_default();
        self.executor
            .fetch_single(routes::RANDOM_GIF, request.single_params())
            .await
    }

    /// A random sticker, filtered just like [`Giphy::random_gif`].
    pub async fn random_sticker<R: Into<Option<Request>>>(&self, request: R) -> Result<Giph> {
        let request = request.into().unwrap_or_default();
        self.executor
            .fetch_single(routes::RANDOM_STICKER, request.single_params())
            .await
    }

    /// Get a gif (or sticker) by its id.
    pub async fn gif_by_id<S: AsRef<str>>(&self, id: S) -> Result<Giph> {
        let id = id.as_ref().trim();
        if id.is_empty()
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::Input(
                ErrorContext::new("not a valid giphy id").with_value(id.as_bytes()),
            ));
        }

        self.executor
            .fetch_single(&format!("{}/{}", routes::GIFS, id), WireParams::default())
            .await
    }
}
