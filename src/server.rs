//! HTTP surface: `GET /` liveness and `POST /generate-schema`.

use crate::{SchemaError, SchemaRequest, SchemaService};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

pub const LIVENESS_MESSAGE: &str = "Web Crawler API is running!";

pub fn router(service: SchemaService) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/generate-schema", post(generate_schema))
        .with_state(service)
}

pub async fn serve(service: SchemaService, addr: SocketAddr) -> Result<(), SchemaError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| SchemaError::ConfigError(format!("Failed to bind {addr}: {e}")))?;
    info!(addr = %addr, provider = service.provider_name(), "Schema service listening");

    axum::serve(listener, router(service))
        .await
        .map_err(|e| SchemaError::Unexpected(format!("Server error: {e}")))
}

async fn home() -> &'static str {
    LIVENESS_MESSAGE
}

async fn generate_schema(
    State(service): State<SchemaService>,
    body: Result<Json<SchemaRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let err = SchemaError::InvalidRequest(rejection.body_text());
            err.log();
            return err.into_response();
        }
    };

    match service.generate(&request).await {
        Ok(schema) => Json(schema).into_response(),
        Err(e) => e.into_response(),
    }
}

impl IntoResponse for SchemaError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
