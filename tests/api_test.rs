//! Black-box tests for the HTTP surface
//!
//! Requests go straight through the router with `oneshot`; no socket is bound.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use catalog_api::api::{create_default_router, create_router, AppState, StaticTokens};
use catalog_api::catalog::Catalog;
use catalog_api::types::Product;
use http_body_util::BodyExt;
use tower::ServiceExt; // for oneshot

const TOMATO_SOUP: &str = r#"{"id":1,"name":"Tomato Soup","category":"Groceries","price":1}"#;
const YO_YO: &str = r#"{"id":2,"name":"Yo-yo","category":"Toys","price":3.75}"#;
const HAMMER: &str = r#"{"id":3,"name":"Hammer","category":"Hardware","price":16.99}"#;

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Option<String>, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

fn authed_router() -> Router {
    let state = AppState::new(Arc::new(Catalog::seeded()))
        .with_authenticator(Arc::new(StaticTokens::new(["s3cret"])));
    create_router(state)
}

#[tokio::test]
async fn test_get_each_product_by_id() {
    let app = create_default_router();

    for (id, expected) in [(1, TOMATO_SOUP), (2, YO_YO), (3, HAMMER)] {
        let (status, content_type, body) = get(app.clone(), &format!("/api/products/{id}")).await;

        assert_eq!(status, StatusCode::OK, "id {id}");
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, expected);
    }
}

#[tokio::test]
async fn test_missing_product_returns_empty_404() {
    let app = create_default_router();

    for id in ["4", "0", "-1", "999999"] {
        let (status, _, body) = get(app.clone(), &format!("/api/products/{id}")).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "id {id}");
        assert!(body.is_empty(), "expected empty body for id {id}, got {body}");
    }
}

#[tokio::test]
async fn test_non_integer_id_is_client_error() {
    let app = create_default_router();

    for id in ["abc", "1.5", "99999999999"] {
        let (status, _, _) = get(app.clone(), &format!("/api/products/{id}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id {id}");
    }
}

#[tokio::test]
async fn test_list_products_in_catalog_order() {
    let app = create_default_router();

    let (status, content_type, body) = get(app.clone(), "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, format!("[{TOMATO_SOUP},{YO_YO},{HAMMER}]"));

    // Same answer every time
    let (_, _, again) = get(app, "/api/products").await;
    assert_eq!(again, body);
}

#[tokio::test]
async fn test_returned_products_match_catalog() {
    let app = create_default_router();
    let catalog = Catalog::seeded();

    let (_, _, body) = get(app.clone(), "/api/products").await;
    let listed: Vec<Product> = serde_json::from_str(&body).unwrap();
    assert_eq!(listed.as_slice(), catalog.all());

    for expected in catalog.all() {
        let (_, _, body) = get(app.clone(), &format!("/api/products/{}", expected.id)).await;
        let product: Product = serde_json::from_str(&body).unwrap();
        assert_eq!(&product, expected);
    }
}

#[tokio::test]
async fn test_write_methods_are_not_routed() {
    let app = create_default_router();

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header("content-type", "application/json")
        .body(Body::from(YO_YO))
        .unwrap();
    let (status, _, _) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/products/1")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(app, request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health() {
    let (status, _, body) = get(create_default_router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["products"], 3);
}

#[tokio::test]
async fn test_auth_gate_rejects_missing_or_bad_token() {
    let app = authed_router();

    let (status, _, body) = get(app.clone(), "/api/products").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.is_empty());

    let request = Request::builder()
        .uri("/api/products/1")
        .header(header::AUTHORIZATION, "Bearer wrong")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_gate_admits_valid_token() {
    let app = authed_router();

    let request = Request::builder()
        .uri("/api/products/2")
        .header(header::AUTHORIZATION, "Bearer s3cret")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, YO_YO);

    // Lookups still 404 once authenticated
    let request = Request::builder()
        .uri("/api/products/4")
        .header(header::AUTHORIZATION, "Bearer s3cret")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_stays_open_behind_auth() {
    let (status, _, _) = get(authed_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
}
