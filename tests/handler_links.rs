mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── POST /links ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_generates_code() {
    let (server, _repo) = common::make_server();

    let response = server
        .post("/links")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["url"], "https://example.com");
    assert_eq!(body["clicks"], 0);
    assert!(body["last_clicked"].is_null());
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_link_with_custom_code() {
    let (server, repo) = common::make_server();

    let response = server
        .post("/links")
        .json(&json!({ "url": "https://example.com", "customCode": "abc" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["code"], "abc");
    assert!(repo.get("abc").is_some());
}

#[tokio::test]
async fn test_create_link_duplicate_custom_code() {
    let (server, _repo) = common::make_server();

    server
        .post("/links")
        .json(&json!({ "url": "https://example.com", "customCode": "abc" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/links")
        .json(&json!({ "url": "https://example.com", "customCode": "abc" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"], "Code exists");
}

#[tokio::test]
async fn test_create_link_code_too_long() {
    let (server, repo) = common::make_server();

    let response = server
        .post("/links")
        .json(&json!({ "url": "https://example.com", "customCode": "a".repeat(40) }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "Code too long");
    assert_eq!(repo.links_len(), 0);
}

#[tokio::test]
async fn test_create_link_code_of_max_length() {
    let (server, _repo) = common::make_server();

    let code = "b".repeat(32);
    let response = server
        .post("/links")
        .json(&json!({ "url": "https://example.com", "customCode": code }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["code"], code);
}

#[tokio::test]
async fn test_create_link_missing_url() {
    let (server, _repo) = common::make_server();

    let response = server
        .post("/links")
        .json(&json!({ "customCode": "abc" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "URL required");
}

#[tokio::test]
async fn test_create_link_empty_url() {
    let (server, _repo) = common::make_server();

    let response = server.post("/links").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "URL required");
}

#[tokio::test]
async fn test_create_link_invalid_url() {
    let (server, _repo) = common::make_server();

    let response = server
        .post("/links")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "Invalid URL format");
}

#[tokio::test]
async fn test_create_link_rejects_control_characters_in_url() {
    let (server, repo) = common::make_server();

    for url in [
        "https://example.com/a\nb",
        "https://example.com/a\rb",
        "https://example.com/\tx",
    ] {
        let response = server
            .post("/links")
            .json(&json!({ "url": url, "customCode": "ctl" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["error"], "Invalid URL format");
    }

    assert_eq!(repo.links_len(), 0);
    server.get("/r/ctl").await.assert_status_not_found();
}

#[tokio::test]
async fn test_create_link_rejects_control_characters_in_code() {
    let (server, repo) = common::make_server();

    let response = server
        .post("/links")
        .json(&json!({ "url": "https://example.com", "customCode": "a\u{0}b" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"],
        "Code contains control characters"
    );
    assert_eq!(repo.links_len(), 0);
}

#[tokio::test]
async fn test_create_link_malformed_body() {
    let (server, _repo) = common::make_server();

    let response = server
        .post("/links")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_create_link_preserves_url_exactly() {
    let (server, _repo) = common::make_server();

    let url = "https://Example.com:443/Some/Path?b=2&a=1#frag";
    let created = server
        .post("/links")
        .json(&json!({ "url": url, "customCode": "exact" }))
        .await;
    created.assert_status_ok();

    let fetched = server.get("/links/exact").await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>()["url"], url);
}

#[tokio::test]
async fn test_create_link_storage_failure() {
    let (server, repo) = common::make_server();
    repo.fail_all();

    let response = server
        .post("/links")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"], "Server error");
}

// ─── GET /links ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_links_newest_first() {
    let (server, _repo) = common::make_server();

    for code in ["first", "second", "third"] {
        server
            .post("/links")
            .json(&json!({ "url": "https://example.com", "customCode": code }))
            .await
            .assert_status_ok();
    }

    let response = server.get("/links").await;
    response.assert_status_ok();

    let body = response.json::<Vec<Value>>();
    let codes: Vec<_> = body.iter().map(|l| l["code"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_list_links_empty() {
    let (server, _repo) = common::make_server();

    let response = server.get("/links").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_links_storage_failure() {
    let (server, repo) = common::make_server();
    repo.fail_all();

    server
        .get("/links")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

// ─── GET /links/{code} ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_link() {
    let (server, repo) = common::make_server();
    repo.insert("abc", "https://example.com");

    let response = server.get("/links/abc").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["code"], "abc");
    assert_eq!(body["url"], "https://example.com");
    assert_eq!(body["clicks"], 0);
    assert!(body["last_clicked"].is_null());
}

#[tokio::test]
async fn test_get_link_not_found() {
    let (server, _repo) = common::make_server();

    let response = server.get("/links/nope").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "Not found");
}

#[tokio::test]
async fn test_get_link_is_idempotent() {
    let (server, repo) = common::make_server();
    repo.insert("abc", "https://example.com");

    server.get("/r/abc").await;

    let first = server.get("/links/abc").await.json::<Value>();
    let second = server.get("/links/abc").await.json::<Value>();

    assert_eq!(first["clicks"], second["clicks"]);
    assert_eq!(first["last_clicked"], second["last_clicked"]);
}

// ─── DELETE /links/{code} ────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link() {
    let (server, repo) = common::make_server();
    repo.insert("abc", "https://example.com");

    let response = server.delete("/links/abc").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "success": true }));

    server.get("/links/abc").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let (server, _repo) = common::make_server();

    let response = server.delete("/links/nope").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "Not found");
}

#[tokio::test]
async fn test_delete_link_twice() {
    let (server, repo) = common::make_server();
    repo.insert("abc", "https://example.com");

    server.delete("/links/abc").await.assert_status_ok();
    server.delete("/links/abc").await.assert_status_not_found();
}

#[tokio::test]
async fn test_deleted_code_can_be_reused() {
    let (server, repo) = common::make_server();
    repo.insert("abc", "https://old.example.com");

    server.delete("/links/abc").await.assert_status_ok();

    let response = server
        .post("/links")
        .json(&json!({ "url": "https://new.example.com", "customCode": "abc" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["url"], "https://new.example.com");
    assert_eq!(body["clicks"], 0);
}
