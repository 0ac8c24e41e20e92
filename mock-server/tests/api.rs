use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Content, ManageResult, CREATED, UPDATED};
use tower::ServiceExt;

const KEY: &str = "test-key";

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn authed(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, format!("Bearer {KEY}"))
        .body(String::new())
        .unwrap()
}

fn patch(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header(http::header::AUTHORIZATION, format!("Bearer {KEY}"))
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- auth ---

#[tokio::test]
async fn missing_token_returns_401() {
    let resp = app(KEY)
        .oneshot(Request::builder().method("POST").uri("/ping").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(resp).await, "missing or invalid bearer token");
}

#[tokio::test]
async fn wrong_token_returns_401() {
    let resp = app("other-key").oneshot(authed("GET", "/content")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- ping ---

#[tokio::test]
async fn ping_returns_ok() {
    let resp = app(KEY).oneshot(authed("POST", "/ping")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "pong");
}

// --- list ---

#[tokio::test]
async fn list_content_empty() {
    let resp = app(KEY).oneshot(authed("GET", "/content")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["library"], serde_json::json!([]));
}

#[tokio::test]
async fn list_content_huge_page_is_empty() {
    let resp = app(KEY)
        .oneshot(authed("GET", "/content?page=9223372036854775807&page_size=2"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["library"], serde_json::json!([]));
}

// --- get ---

#[tokio::test]
async fn get_content_not_found() {
    let resp = app(KEY).oneshot(authed("GET", "/content/missing")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "content missing not found");
}

// --- manage ---

#[tokio::test]
async fn manage_content_malformed_json_is_rejected() {
    let resp = app(KEY)
        .oneshot(patch("/content/c1", r#"{"title": 5}"#))
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

// --- full lifecycle ---

#[tokio::test]
async fn manage_lifecycle() {
    use tower::Service;

    let mut app = app(KEY).into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(patch(
            "/content/brand%2Facme",
            r#"{"id":"brand/acme","name":"Acme","type":"Brand Entity"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let result: ManageResult = body_json(resp).await;
    assert_eq!(result.id, "brand/acme");
    assert_eq!(result.status, CREATED);

    // update — partial: only title
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(patch("/content/brand%2Facme", r#"{"id":"brand/acme","title":"Acme Inc"}"#))
        .await
        .unwrap();
    let result: ManageResult = body_json(resp).await;
    assert_eq!(result.status, UPDATED);

    // get — escaped id decodes back to the stored key
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(authed("GET", "/content/brand%2Facme"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Content = body_json(resp).await;
    assert_eq!(fetched.name, "Acme"); // unchanged
    assert_eq!(fetched.title, "Acme Inc");
    assert_eq!(fetched.content_type, "Brand Entity");
    assert!(fetched.updated_at >= fetched.created_at);

    // second item so pagination has something to split
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(patch("/content/zeta", r#"{"id":"zeta","title":"Zeta"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // list page 2 of size 1 — sorted by id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(authed("GET", "/content?page=2&page_size=1"))
        .await
        .unwrap();
    let body: serde_json::Value = body_json(resp).await;
    let library = body["library"].as_array().unwrap();
    assert_eq!(library.len(), 1);
    assert_eq!(library[0]["id"], "zeta");

    // library envelope
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(authed("GET", "/content/library"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["data"]["library"].as_array().unwrap().len(), 2);
}
