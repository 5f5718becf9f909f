//! Lazily fetched, throttled and cancellable result pages.

use crate::error::Error;
use crate::giphy::Executor;
use crate::media::{Giph, PaginationMeta};
use crate::request::Request;
use crate::Result;
use futures_util::Stream;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::{mpsc, watch};
use tracing::{debug, trace};

/// One batch of results.
#[derive(Clone, Debug)]
pub struct Page {
    /// Position of this page in its [`Pagination`], starting at 0.
    pub page_number: u64,
    pub giphs: Vec<Giph>,
    /// Pagination metadata the server sent with this page, if any.
    pub pagination: Option<PaginationMeta>,
    /// Set if fetching this page failed. A page with an error is always the last page of its
    /// [`Pagination`].
    pub error: Option<Error>,
}

impl Page {
    fn failed(page_number: u64, error: Error) -> Self {
        Self {
            page_number,
            giphs: vec![],
            pagination: None,
            error: Some(error),
        }
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    pub fn into_result(self) -> Result<Vec<Giph>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.giphs),
        }
    }
}

/// Stops a [`Pagination`]. Can be cloned and moved to other tasks / threads.
#[derive(Clone, Debug)]
pub struct Cancel {
    inner: Arc<CancelInner>,
}

#[derive(Debug)]
struct CancelInner {
    closed: AtomicBool,
    signal: watch::Sender<bool>,
}

impl Cancel {
    fn new() -> (Self, watch::Receiver<bool>) {
        let (signal, receiver) = watch::channel(false);
        (
            Self {
                inner: Arc::new(CancelInner {
                    closed: AtomicBool::new(false),
                    signal,
                }),
            },
            receiver,
        )
    }

    /// Signal the pagination to stop before it fetches its next page. A page which is currently
    /// fetched or already queued is still delivered. Calling this more than once returns
    /// [`Error::AlreadyClosed`].
    pub fn cancel(&self) -> Result<()> {
        if self.inner.closed.swap(true, Ordering::AcqRel) {
            return Err(Error::AlreadyClosed);
        }
        self.inner.signal.send_replace(true);
        Ok(())
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }
}

/// A running search / trending query. Pages are fetched in the background, one page ahead of the
/// consumer, and can be received with [`Pagination::next_page`] or by using it as [`Stream`].
/// The stream ends when all results are consumed, the page limit is reached, a page failed or the
/// pagination was cancelled.
///
/// The background task is spawned with [`tokio::spawn`], so a pagination must be created inside a
/// tokio runtime. Dropping it stops the task at its next throttle checkpoint.
#[derive(Debug)]
pub struct Pagination {
    pages: mpsc::Receiver<Page>,
    cancel: Cancel,
}

impl Pagination {
    pub(crate) fn start(executor: Arc<Executor>, route: &'static str, request: Request) -> Self {
        let (sender, pages) = mpsc::channel(1);
        let (cancel, cancelled) = Cancel::new();

        tokio::spawn(async move {
            let outcome = produce(executor, route, request, sender, cancelled).await;
            debug!(route, ?outcome, "pagination finished");
        });

        Self { pages, cancel }
    }

    /// Receive the next page. Returns [`None`] once the pagination is done.
    pub async fn next_page(&mut self) -> Option<Page> {
        self.pages.recv().await
    }

    /// Shortcut for [`Cancel::cancel`].
    pub fn cancel(&self) -> Result<()> {
        self.cancel.cancel()
    }

    /// A handle to cancel this pagination from somewhere else.
    pub fn canceller(&self) -> Cancel {
        self.cancel.clone()
    }
}

impl Stream for Pagination {
    type Item = Page;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.pages.poll_recv(cx)
    }
}

/// Why a pagination stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Outcome {
    /// No more results or the page limit was reached.
    Exhausted,
    /// A page could not be fetched.
    Failed,
    /// Cancelled, or the receiving side was dropped.
    Cancelled,
}

async fn produce(
    executor: Arc<Executor>,
    route: &'static str,
    request: Request,
    pages: mpsc::Sender<Page>,
    mut cancelled: watch::Receiver<bool>,
) -> Outcome {
    let throttle = request.throttle.duration();
    let mut page_number = 0u64;
    let mut offset = 0u64;

    loop {
        let response = match executor
            .fetch_page(route, request.page_params(offset))
            .await
        {
            Ok(response) => response,
            Err(err) => {
                debug!(route, page_number, error = %err, "page failed");
                let _ = pages.send(Page::failed(page_number, err)).await;
                return Outcome::Failed;
            }
        };

        if response.data.is_empty() {
            return Outcome::Exhausted;
        }

        // without pagination metadata the offset stays where it is
        let count = response.pagination.as_ref().map_or(0, |p| p.count);
        trace!(route, page_number, offset, items = response.data.len(), "emitting page");
        let page = Page {
            page_number,
            giphs: response.data,
            pagination: response.pagination,
            error: None,
        };
        if pages.send(page).await.is_err() {
            return Outcome::Cancelled;
        }

        page_number += 1;
        if request.page_limit_reached(page_number) {
            return Outcome::Exhausted;
        }

        tokio::select! {
            biased;
            _ = wait_cancelled(&mut cancelled) => return Outcome::Cancelled,
            _ = tokio::time::sleep(throttle) => {}
        }

        // count is whatever the server sent
        offset = offset.saturating_add(count);
    }
}

/// Resolves once cancellation was requested or every [`Cancel`] handle is gone.
async fn wait_cancelled(cancelled: &mut watch::Receiver<bool>) {
    loop {
        if *cancelled.borrow_and_update() {
            return;
        }
        if cancelled.changed().await.is_err() {
            return;
        }
    }
}
