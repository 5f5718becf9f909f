//! Builder and access to the [`Giphy`] struct which is required to make any request.

use crate::error::{check_status, decode_body, redact_api_key, Error, ErrorContext};
use crate::internal::tower::Middleware;
use crate::media::{Giph, PageResponse, SingleResponse};
use crate::request::WireParams;
use crate::Result;
use reqwest::{Client, Response};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tower_service::Service;
use tracing::{debug, trace};

/// Default api root.
pub const BASE_URL: &str = "https://api.giphy.com/v1";
/// Public beta key giphy hands out for testing. It is heavily rate limited.
pub const PUBLIC_API_KEY: &str = "dc6zaTOxFJmzC";
/// Environment variable [`Giphy::from_env_or_default`] reads the api key from.
pub const API_KEY_ENV: &str = "GIPHY_API_KEY";

pub(crate) mod routes {
    pub(crate) const TRENDING_GIFS: &str = "/gifs/trending";
    pub(crate) const SEARCH_GIFS: &str = "/gifs/search";
    pub(crate) const RANDOM_GIF: &str = "/gifs/random";
    pub(crate) const GIFS: &str = "/gifs";

    pub(crate) const TRENDING_STICKERS: &str = "/stickers/trending";
    pub(crate) const SEARCH_STICKERS: &str = "/stickers/search";
    pub(crate) const RANDOM_STICKER: &str = "/stickers/random";
}

/// Starting point of this whole library.
#[derive(Clone, Debug)]
pub struct Giphy {
    pub(crate) executor: Arc<Executor>,
}

impl Giphy {
    pub fn builder() -> GiphyBuilder {
        GiphyBuilder::default()
    }

    /// Create a new instance with the given api key. Fails if the key is blank.
    pub fn new<S: AsRef<str>>(api_key: S) -> Result<Giphy> {
        Giphy::builder().api_key(api_key).build()
    }

    /// Create a new instance with the api key from the `GIPHY_API_KEY` environment variable or, if
    /// it is unset or blank, with [`PUBLIC_API_KEY`].
    pub fn from_env_or_default() -> Result<Giphy> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| PUBLIC_API_KEY.to_string());
        Giphy::new(api_key)
    }

    /// Return the (cloned) [`Client`] which is used if no middleware is set.
    pub fn client(&self) -> Client {
        self.executor.client.clone()
    }

    /// The api key which is sent with the next request.
    pub async fn api_key(&self) -> String {
        self.executor.config.read().await.api_key.clone()
    }

    /// Change the api key. Requests which are already in flight keep using the old one. A blank
    /// key is rejected the same way [`GiphyBuilder::build`] rejects it, the current key stays.
    pub async fn set_api_key<S: AsRef<str>>(&self, api_key: S) -> Result<()> {
        let api_key = non_blank_api_key(api_key.as_ref())?;
        self.executor.config.write().await.api_key = api_key;
        Ok(())
    }

    /// Replace the transport all following requests are sent through. See
    /// [`GiphyBuilder::middleware`].
    pub async fn set_middleware<F, S>(&self, service: S)
    where
        F: Future<Output = Result<Response, Error>> + Send + 'static,
        S: Service<reqwest::Request, Response = Response, Error = Error, Future = F>
            + Send
            + 'static,
    {
        self.executor.config.write().await.middleware =
            Some(Arc::new(Mutex::new(Middleware::new(service))));
    }

    /// Send all following requests through the default [`Client`] again.
    pub async fn clear_middleware(&self) {
        self.executor.config.write().await.middleware = None;
    }
}

/// The mutable part of the client configuration. It's cloned for every request so changing it
/// never affects a request which is already running.
#[derive(Clone, Debug)]
pub(crate) struct ExecutorConfig {
    pub(crate) api_key: String,
    pub(crate) middleware: Option<Arc<Mutex<Middleware>>>,
}

/// Internal struct to execute all request with.
#[derive(Debug)]
pub(crate) struct Executor {
    pub(crate) client: Client,
    pub(crate) base_url: String,

    pub(crate) config: RwLock<ExecutorConfig>,
}

impl Executor {
    async fn snapshot(&self) -> ExecutorConfig {
        self.config.read().await.clone()
    }

    /// Do a single `GET` request and return the raw body alongside the requested url.
    async fn get(&self, route: &str, params: WireParams) -> Result<(String, Vec<u8>)> {
        let config = self.snapshot().await;

        let mut query = params.into_query();
        query.push(("api_key", config.api_key));
        let url = format!(
            "{}{}?{}",
            self.base_url,
            route,
            serde_urlencoded::to_string(&query)?
        );

        let req = self.client.get(&url).build()?;
        debug!(url = %redact_api_key(&url), "GET");

        let resp = match &config.middleware {
            Some(middleware) => {
                let fut = middleware.lock().await.dispatch(req).await?;
                fut.await?
            }
            None => self.client.execute(req).await?,
        };

        let status = resp.status();
        trace!(route, %status, "received response");
        check_status(&url, status)?;

        let raw = resp.bytes().await?;
        Ok((url, raw.to_vec()))
    }

    /// Fetch one page of a paginated endpoint.
    pub(crate) async fn fetch_page(&self, route: &str, params: WireParams) -> Result<PageResponse> {
        let (url, raw) = self.get(route, params).await?;
        let page: PageResponse = decode_body(&url, &raw)?;

        if let Some(meta) = &page.meta {
            trace!(route, response_id = %meta.response_id, items = page.data.len(), "decoded page");
        }
        Ok(page)
    }

    /// Fetch an endpoint which returns exactly one item.
    pub(crate) async fn fetch_single(&self, route: &str, params: WireParams) -> Result<Giph> {
        let (url, raw) = self.get(route, params).await?;
        let response: SingleResponse = decode_body(&url, &raw)?;

        response.into_giph(&redact_api_key(&url))
    }
}

/// A builder to construct a new [`Giphy`] instance. To create it, call [`Giphy::builder`].
#[derive(smart_default::SmartDefault)]
pub struct GiphyBuilder {
    #[default(PUBLIC_API_KEY.to_string())]
    api_key: String,
    #[default(Client::new())]
    client: Client,
    #[default(BASE_URL.to_string())]
    base_url: String,
    middleware: Option<Middleware>,
}

impl GiphyBuilder {
    /// Set the api key which is sent with every request. Defaults to [`PUBLIC_API_KEY`].
    pub fn api_key<S: AsRef<str>>(mut self, api_key: S) -> GiphyBuilder {
        self.api_key = api_key.as_ref().trim().to_string();
        self
    }

    /// Set a custom client that will be used in all api requests.
    pub fn client(mut self, client: Client) -> GiphyBuilder {
        self.client = client;
        self
    }

    /// Set the api root all routes are appended to. Mostly useful to point the client at a local
    /// mock server.
    pub fn base_url<S: AsRef<str>>(mut self, base_url: S) -> GiphyBuilder {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    /// Send every request through the given [`Service`] instead of the [`Client`]. This can be
    /// used to add custom behavior (like logging or caching) or to replace the network entirely in
    /// tests. The service receives fully built requests, including the api key.
    pub fn middleware<F, S>(mut self, service: S) -> GiphyBuilder
    where
        F: Future<Output = Result<Response, Error>> + Send + 'static,
        S: Service<reqwest::Request, Response = Response, Error = Error, Future = F>
            + Send
            + 'static,
    {
        self.middleware = Some(Middleware::new(service));
        self
    }

    pub fn build(self) -> Result<Giphy> {
        let api_key = non_blank_api_key(&self.api_key)?;

        Ok(Giphy {
            executor: Arc::new(Executor {
                client: self.client,
                base_url: self.base_url,
                config: RwLock::new(ExecutorConfig {
                    api_key,
                    middleware: self.middleware.map(|m| Arc::new(Mutex::new(m))),
                }),
            }),
        })
    }
}

fn non_blank_api_key(api_key: &str) -> Result<String> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(Error::Input(ErrorContext::new(
            "expecting a non-blank API key",
        )));
    }
    Ok(api_key.to_string())
}
