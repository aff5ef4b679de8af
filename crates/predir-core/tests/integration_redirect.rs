//! Integration test: serve a configured handler on a local port and drive it
//! over raw HTTP/1.1.

mod common;

use std::sync::Arc;

use predir_core::config::PredirConfig;
use predir_core::{from_fn, http, SchemeHandler};
use tokio::net::TcpListener;

async fn start(handler: SchemeHandler) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    tokio::spawn(http::serve(listener, Arc::new(handler)));
    addr
}

#[tokio::test]
async fn redirects_and_rejects_over_http() {
    let mut handler = SchemeHandler::default();
    handler
        .register("s3:", from_fn(|_: &str| Ok(Some("https://example.com".to_string()))))
        .unwrap();
    let addr = start(handler).await;

    let redirect = common::http_client::get(&addr, "/?url=s3%3A%2F%2Ftest").await;
    assert_eq!(redirect.status, 302);
    assert_eq!(redirect.header("location"), Some("https://example.com"));

    let unknown = common::http_client::get(&addr, "/?url=dummy%3A%2F%2Funknown").await;
    assert_eq!(unknown.status, 400);
    let body: serde_json::Value = serde_json::from_str(&unknown.body).unwrap();
    assert_eq!(body["error"]["name"], "UnknownProtocol");

    let relative = common::http_client::get(&addr, "/?url=%2F%2Fgoogle.com").await;
    assert_eq!(relative.status, 302);
    assert_eq!(relative.header("location"), Some("//google.com"));
}

#[tokio::test]
async fn configured_routes_are_served() {
    let toml = r#"
        param = "target"

        [[routes]]
        scheme = "ipfs://"
        target = "https://gw.example/ipfs/"
    "#;
    let cfg: PredirConfig = toml::from_str(toml).unwrap();
    let addr = start(cfg.build_handler().unwrap()).await;

    let resp = common::http_client::get(&addr, "/?target=ipfs%3A%2F%2FQm123").await;
    assert_eq!(resp.status, 302);
    assert_eq!(resp.header("location"), Some("https://gw.example/ipfs/Qm123"));

    let listing = common::http_client::get(&addr, "/schemes").await;
    assert_eq!(listing.status, 200);
    let body: serde_json::Value = serde_json::from_str(&listing.body).unwrap();
    assert_eq!(body["protocols"], serde_json::json!(["ipfs:"]));
}
