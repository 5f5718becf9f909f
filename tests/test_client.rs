//! Requests through the default reqwest transport against a local mock server.

use crate::utils::{giph, page};
use giphy_rs::{Giphy, Language, Request, Throttle};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod utils;

async fn giphy(server: &MockServer) -> Giphy {
    Giphy::builder()
        .api_key("mock-key")
        .base_url(format!("{}/v1", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn search_stickers_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/stickers/search"))
        .and(query_param("api_key", "mock-key"))
        .and(query_param("q", "Gotham City"))
        .and(query_param("lang", "zh-TW"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0, 5, 7)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/stickers/search"))
        .and(query_param("offset", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(5, 2, 7)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/stickers/search"))
        .and(query_param("offset", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(7, 0, 7)))
        .expect(1)
        .mount(&server)
        .await;

    let mut pagination = giphy(&server).await.search_stickers(
        Request::new()
            .query("Gotham City")
            .language(Language::ChineseTraditional)
            .throttle(Throttle::Disabled),
    );

    let mut counts = vec![];
    while let Some(page) = pagination.next_page().await {
        let giphs = page.into_result().unwrap();
        counts.push(giphs.len());
    }
    assert_eq!(counts, vec![5, 2]);
}

#[tokio::test]
async fn rate_limited_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let mut pagination = giphy(&server).await.trending(None);

    let page = pagination.next_page().await.unwrap();
    let err = page.error.unwrap();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(429));
    assert!(!err.to_string().contains("mock-key"));
    assert!(pagination.next_page().await.is_none());
}

#[tokio::test]
async fn gif_by_id_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/3ohze2UfcItWPUFqbm"))
        .and(query_param("api_key", "mock-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": giph("3ohze2UfcItWPUFqbm")})),
        )
        .mount(&server)
        .await;

    let giph = giphy(&server)
        .await
        .gif_by_id("3ohze2UfcItWPUFqbm")
        .await
        .unwrap();

    assert_eq!(giph.id, "3ohze2UfcItWPUFqbm");
}

#[tokio::test]
async fn connection_refused() {
    let giphy = Giphy::builder()
        .api_key("mock-key")
        .base_url("http://127.0.0.1:1/v1")
        .build()
        .unwrap();

    let result = giphy.random_gif(None).await;

    assert!(matches!(
        result,
        Err(giphy_rs::error::Error::Request { status: None, .. })
    ));
}
