use crate::error::Error;
use reqwest::{Request, Response};
use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower_service::Service;

pub(crate) type MiddlewareFuture = Pin<Box<dyn Future<Output = Result<Response, Error>> + Send>>;

/// Object safe view on a [`Service`] which sends giphy requests. Implemented for every fitting
/// service, the only difference is that the response future is boxed.
trait Transport: Send {
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Error>>;

    fn send(&mut self, req: Request) -> MiddlewareFuture;
}

impl<S> Transport for S
where
    S: Service<Request, Response = Response, Error = Error> + Send,
    S::Future: Send + 'static,
{
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Error>> {
        Service::poll_ready(self, cx)
    }

    fn send(&mut self, req: Request) -> MiddlewareFuture {
        Box::pin(self.call(req))
    }
}

/// Type erased transport which replaces the default [`reqwest::Client`].
pub(crate) struct Middleware(Box<dyn Transport>);

impl Middleware {
    pub(crate) fn new<S>(service: S) -> Self
    where
        S: Service<Request, Response = Response, Error = Error> + Send + 'static,
        S::Future: Send + 'static,
    {
        Self(Box::new(service))
    }

    /// Wait until the transport is ready and hand the request over. The returned future does not
    /// borrow the middleware, so a lock around it can be released before the response arrives.
    pub(crate) async fn dispatch(&mut self, req: Request) -> Result<MiddlewareFuture, Error> {
        std::future::poll_fn(|cx| self.0.poll_ready(cx)).await?;
        Ok(self.0.send(req))
    }
}

impl Debug for Middleware {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<middleware>")
    }
}
