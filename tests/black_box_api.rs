use std::sync::Arc;

use chirpy::api::{self, ApiConfig};
use chirpy::config::Platform;
use chirpy::store::MemoryStore;
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
    _site: tempfile::TempDir,
}

impl TestServer {
    async fn spawn(platform: Platform) -> Self {
        let site = tempfile::tempdir().unwrap();
        std::fs::write(site.path().join("index.html"), "<h1>Welcome to Chirpy</h1>").unwrap();

        // Same router as prod, in-memory store, ephemeral port.
        let cfg = Arc::new(ApiConfig::new(Arc::new(MemoryStore::new()), platform));
        let app = api::router(cfg, site.path());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            chirpy::serve_listener(listener, app, std::future::pending())
                .await
                .unwrap();
        });

        Self { base_url, handle, _site: site }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_over_http() {
    let srv = TestServer::spawn(Platform::Production).await;
    let res = reqwest::get(srv.url("/api/healthz")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(res.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn user_and_chirp_lifecycle() {
    let srv = TestServer::spawn(Platform::Dev).await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/api/users"))
        .json(&json!({ "email": "walt@breakingbad.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let user: serde_json::Value = res.json().await.unwrap();
    let user_id = user["id"].as_str().unwrap().to_owned();

    let res = client
        .post(srv.url("/api/chirps"))
        .json(&json!({ "body": "I had something interesting for breakfast Fornax", "user_id": user_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let chirp: serde_json::Value = res.json().await.unwrap();
    assert_eq!(chirp["body"], "I had something interesting for breakfast ****");
    assert_eq!(chirp["user_id"], user_id.as_str());

    let res = client
        .get(srv.url(&format!("/api/chirps/{}", chirp["id"].as_str().unwrap())))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(srv.url("/api/chirps")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let all: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(all.len(), 1);

    let res = client.post(srv.url("/admin/reset")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(srv.url("/api/chirps")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn hits_are_counted_and_reset() {
    let srv = TestServer::spawn(Platform::Production).await;
    let client = reqwest::Client::new();

    for _ in 0..5 {
        let res = client.get(srv.url("/app/")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let page = client.get(srv.url("/admin/metrics")).send().await.unwrap().text().await.unwrap();
    assert!(page.contains("visited 5 times"), "{page}");

    let res = client.post(srv.url("/admin/reset")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["error"].is_string());

    let page = client.get(srv.url("/admin/metrics")).send().await.unwrap().text().await.unwrap();
    assert!(page.contains("visited 0 times"), "{page}");
}

#[tokio::test]
async fn bad_ids_and_unknown_routes() {
    let srv = TestServer::spawn(Platform::Production).await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/api/chirps/not-a-uuid")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .get(srv.url("/api/chirps/0190c1a4-3b8e-7000-8000-000000000000"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.get(srv.url("/nowhere")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
