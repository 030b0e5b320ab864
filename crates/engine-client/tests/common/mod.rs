//! In-process mock backend for integration tests.

#![allow(dead_code)]

use axum::Router;
use engine_client::{AccessTokenAuthorization, Authorization, ClientConfig, EngineClient};
use tokio::net::TcpListener;

/// Serve `router` on a random local port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn config(base_url: &str) -> ClientConfig {
    ClientConfig::new(base_url, "arena", "srv-1", "en-US")
}

pub fn client(base_url: &str) -> EngineClient {
    client_with(base_url, AccessTokenAuthorization::new("tok123").unwrap())
}

pub fn client_with(base_url: &str, auth: impl Authorization + 'static) -> EngineClient {
    EngineClient::new(config(base_url), auth).unwrap()
}
