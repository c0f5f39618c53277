mod common;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use common::spawn_upstream;
use schema_service::{
    ApiMetadataProvider, ApiProviderConfig, MetadataProvider, ProviderKind, SchemaError,
    SchemaRequest, SchemaService, ServiceConfig,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

async fn metadata_api() -> std::net::SocketAddr {
    let app = Router::new()
        .route(
            "/meta",
            get(
                |headers: HeaderMap, Query(params): Query<HashMap<String, String>>| async move {
                    if headers.get("x-api-key").and_then(|v| v.to_str().ok()) != Some("secret") {
                        return (StatusCode::UNAUTHORIZED, Json(json!({ "status": "fail" })));
                    }
                    let target = params.get("url").cloned().unwrap_or_default();
                    (
                        StatusCode::OK,
                        Json(json!({
                            "status": "success",
                            "data": {
                                "title": format!("Title of {target}"),
                                "description": "From the API",
                                "image": { "url": "https://example.com/og.png" }
                            }
                        })),
                    )
                },
            ),
        )
        .route(
            "/token",
            get(|headers: HeaderMap| async move {
                match headers.get("authorization-token").and_then(|v| v.to_str().ok()) {
                    Some("secret") => (StatusCode::OK, Json(json!({ "title": "Authorized" }))),
                    _ => (StatusCode::FORBIDDEN, Json(json!({ "status": "fail" }))),
                }
            }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(json!({ "title": "Too late" }))
            }),
        )
        .route("/flat", get(|| async { Json(json!({ "title": "Flat" })) }))
        .route("/garbage", get(|| async { "<html>not json</html>" }));
    spawn_upstream(app).await
}

fn provider(endpoint: String, key: Option<&str>) -> ApiMetadataProvider {
    let mut config = ApiProviderConfig::new(endpoint);
    config.api_key = key.map(String::from);
    ApiMetadataProvider::new(config, Duration::from_secs(5)).unwrap()
}

fn provider_with_header(endpoint: String, header: &str) -> ApiMetadataProvider {
    let config = ApiProviderConfig::new(endpoint)
        .with_api_key("secret")
        .with_api_key_header(header);
    ApiMetadataProvider::new(config, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_api_provider_reads_nested_payload() {
    let addr = metadata_api().await;
    let provider = provider(format!("http://{addr}/meta"), Some("secret"));

    let metadata = provider
        .get_metadata("https://example.com/page?x=1")
        .await
        .unwrap();

    assert_eq!(
        metadata.title.as_deref(),
        Some("Title of https://example.com/page?x=1")
    );
    assert_eq!(metadata.description.as_deref(), Some("From the API"));
    assert_eq!(
        metadata.image_url.as_deref(),
        Some("https://example.com/og.png")
    );
    assert_eq!(metadata.icon_url, None);
    assert_eq!(metadata.domain, "https://example.com");
}

#[tokio::test]
async fn test_api_provider_rejection_is_bad_status() {
    let addr = metadata_api().await;
    let provider = provider(format!("http://{addr}/meta"), None);

    let result = provider.get_metadata("https://example.com").await;

    assert!(matches!(
        result,
        Err(SchemaError::BadStatus { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_api_provider_partial_payload() {
    let addr = metadata_api().await;
    let provider = provider(format!("http://{addr}/flat"), None);

    let metadata = provider.get_metadata("https://example.com").await.unwrap();

    assert_eq!(metadata.title.as_deref(), Some("Flat"));
    assert_eq!(metadata.description, None);
    assert!(metadata.social_links.is_empty());
}

#[tokio::test]
async fn test_api_provider_unparseable_body() {
    let addr = metadata_api().await;
    let provider = provider(format!("http://{addr}/garbage"), None);

    let result = provider.get_metadata("https://example.com").await;

    assert!(matches!(result, Err(SchemaError::ExtractError(_))));
}

#[tokio::test]
async fn test_api_provider_custom_key_header() {
    let addr = metadata_api().await;
    let config = ApiProviderConfig::new(format!("http://{addr}/token"))
        .with_api_key("secret")
        .with_api_key_header("authorization-token");
    let provider = ApiMetadataProvider::new(config, Duration::from_secs(5)).unwrap();

    let metadata = provider.get_metadata("https://example.com").await.unwrap();
    assert_eq!(metadata.title.as_deref(), Some("Authorized"));

    // The default header name is not what this endpoint reads.
    let provider = provider_with_header(format!("http://{addr}/token"), "x-api-key");
    let result = provider.get_metadata("https://example.com").await;
    assert!(matches!(
        result,
        Err(SchemaError::BadStatus { status: 403, .. })
    ));
}

#[tokio::test]
async fn test_api_provider_timeout() {
    let addr = metadata_api().await;
    let provider = ApiMetadataProvider::new(
        ApiProviderConfig::new(format!("http://{addr}/slow")),
        Duration::from_millis(200),
    )
    .unwrap();

    let result = provider.get_metadata("https://example.com").await;

    match result {
        Err(e @ SchemaError::Timeout(_)) => assert_eq!(e.status_code(), 504),
        other => panic!("Expected Timeout, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_service_with_api_provider() {
    let addr = metadata_api().await;
    let config = ServiceConfig::new()
        .with_provider(ProviderKind::Api)
        .with_api_config(ApiProviderConfig::new(format!("http://{addr}/meta")).with_api_key("secret"));
    let service = SchemaService::from_config(&config).unwrap();
    assert_eq!(service.provider_name(), "api");

    let schema = service
        .generate(&SchemaRequest::new("https://example.com", "ImageObject"))
        .await
        .unwrap();

    assert_eq!(schema["@type"], "ImageObject");
    assert_eq!(schema["contentUrl"], "https://example.com/og.png");
    assert_eq!(schema["description"], "From the API");
    assert_eq!(schema["name"], Value::from("Title of https://example.com"));
}
