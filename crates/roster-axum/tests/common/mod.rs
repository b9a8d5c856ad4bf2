//! Shared helpers for router-level tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use roster_axum::bootstrap::{AxumContext, CorsConfig};
use roster_axum::routes::create_router;
use roster_db::TestDb;

/// Router over a fresh in-memory database.
pub async fn test_app() -> Router {
    let db = TestDb::new().await.unwrap();
    create_router(AxumContext::new(db.employee_service()), &CorsConfig::AllowAll)
}

/// Send one request and collect the status and raw body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn parse(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}

/// Create an employee through the API and return its id.
pub async fn create_employee(app: &Router, name: &str, email: &str, role: &str) -> i64 {
    let (status, body) = send(
        app,
        json(
            "POST",
            "/api/employees",
            &serde_json::json!({ "name": name, "email": email, "role": role }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    parse(&body)["id"].as_i64().unwrap()
}
