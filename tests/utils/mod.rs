#![allow(dead_code)]

use giphy_rs::error::Error;
use giphy_rs::Giphy;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TEST_API_KEY: &str = "test-api-key1";
pub const TEST_API_KEY_2: &str = "test-api-key2";

/// A request as the stub transport saw it.
#[derive(Clone, Debug)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
}

impl Seen {
    pub fn offset(&self) -> u64 {
        self.query
            .get("offset")
            .map(|offset| offset.parse().unwrap())
            .unwrap_or(0)
    }
}

/// Every request the stub transport received, in order.
#[derive(Clone, Default)]
pub struct Log(Arc<Mutex<Vec<Seen>>>);

impl Log {
    pub fn requests(&self) -> Vec<Seen> {
        self.0.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

/// Build a client whose transport is `handler` instead of the network.
pub fn stub<H>(handler: H) -> (Giphy, Log)
where
    H: Fn(&Seen) -> Result<http::Response<String>, Error> + Send + Sync + 'static,
{
    let log = Log::default();
    let giphy = Giphy::builder()
        .api_key(TEST_API_KEY)
        .middleware(stub_service(handler, log.clone()))
        .build()
        .unwrap();
    (giphy, log)
}

pub fn stub_service<H>(
    handler: H,
    log: Log,
) -> impl tower::Service<
    reqwest::Request,
    Response = reqwest::Response,
    Error = Error,
    Future = impl std::future::Future<Output = Result<reqwest::Response, Error>> + Send + 'static,
> + Send
       + 'static
where
    H: Fn(&Seen) -> Result<http::Response<String>, Error> + Send + Sync + 'static,
{
    let handler = Arc::new(handler);
    tower::service_fn(move |req: reqwest::Request| {
        let handler = handler.clone();
        let log = log.clone();
        async move {
            let seen = Seen {
                method: req.method().to_string(),
                path: req.url().path().to_string(),
                query: req.url().query_pairs().into_owned().collect(),
            };
            log.0.lock().unwrap().push(seen.clone());
            handler(&seen).map(reqwest::Response::from)
        }
    })
}

pub fn respond(status: u16, body: Value) -> Result<http::Response<String>, Error> {
    Ok(http::Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(body.to_string())
        .unwrap())
}

pub fn respond_raw(status: u16, body: &str) -> Result<http::Response<String>, Error> {
    Ok(http::Response::builder()
        .status(status)
        .body(body.to_string())
        .unwrap())
}

pub fn giph(id: &str) -> Value {
    json!({
        "type": "gif",
        "id": id,
        "slug": format!("milly-rock-{}", id),
        "url": format!("https://giphy.com/gifs/{}", id),
        "rating": "g",
        "import_datetime": "2016-06-20 19:52:59",
        "trending_datetime": "0000-00-00 00:00:00",
        "images": {
            "original": {
                "url": format!("https://media.giphy.com/media/{}/giphy.gif", id),
                "width": "480",
                "height": "270",
                "size": "1024",
                "frames": "10"
            },
            "fixed_height_small_still": {
                "url": format!("https://media.giphy.com/media/{}/100_s.gif", id),
                "width": "178",
                "height": "100"
            }
        }
    })
}

/// A page body with `count` items starting at `offset`.
pub fn page(offset: u64, count: u64, total_count: u64) -> Value {
    let data = (offset..offset + count)
        .map(|i| giph(&format!("giph{}", i)))
        .collect::<Vec<Value>>();
    json!({
        "data": data,
        "pagination": {
            "total_count": total_count,
            "offset": offset,
            "count": count
        },
        "meta": {
            "status": 200,
            "msg": "OK",
            "response_id": "59b8a8a1417751424d7a1b10"
        }
    })
}

/// Serves `total` items in pages of `per_page`, then empty pages.
pub fn paged(per_page: u64, total: u64) -> impl Fn(&Seen) -> Result<http::Response<String>, Error> {
    move |seen: &Seen| {
        let offset = seen.offset();
        let count = per_page.min(total.saturating_sub(offset));
        respond(200, page(offset, count, total))
    }
}
