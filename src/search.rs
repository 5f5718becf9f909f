//! Trending and search endpoints. All of them return a [`Pagination`].

use crate::common::Pagination;
use crate::giphy::routes;
use crate::{Giphy, Request};

impl Giphy {
    /// Currently trending gifs. Passing [`None`] is the same as passing [`Request::default`].
    pub fn trending<R: Into<Option<Request>>>(&self, request: R) -> Pagination {
        self.paginate(routes::TRENDING_GIFS, request)
    }

    /// Currently trending stickers.
    pub fn trending_stickers<R: Into<Option<Request>>>(&self, request: R) -> Pagination {
        self.paginate(routes::TRENDING_STICKERS, request)
    }

    /// Search gifs by [`Request::query`].
    pub fn search<R: Into<Option<Request>>>(&self, request: R) -> Pagination {
        self.paginate(routes::SEARCH_GIFS, request)
    }

    /// Search stickers by [`Request::query`].
    pub fn search_stickers<R: Into<Option<Request>>>(&self, request: R) -> Pagination {
        self.paginate(routes::SEARCH_STICKERS, request)
    }

    fn paginate<R: Into<Option<Request>>>(&self, route: &'static str, request: R) -> Pagination {
        Pagination::start(
            self.executor.clone(),
            route,
            request.into().unwrap_or_default(),
        )
    }
}
