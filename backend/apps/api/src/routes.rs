//! Top-level routes that belong to no feature crate

use axum::Json;
use axum::http::{Method, StatusCode, Uri};
use serde_json::{Value, json};

const API_VERSION: &str = "1.0.0";

/// GET /
pub async fn banner() -> Json<Value> {
    Json(json!({
        "message": "StroyStore API Server",
        "status": "Running",
        "version": API_VERSION,
    }))
}

/// Any unmatched route
pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<Value>) {
    tracing::debug!(%method, path = %uri.path(), "Route not found");
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "message": "route not found",
            "path": uri.path(),
            "method": method.as_str(),
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(banner))
            .nest("/api", Router::new().route("/ping", get(|| async { "pong" })))
            .fallback(not_found)
    }

    async fn call(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_banner() {
        let (status, body) = call(Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Running");
        assert_eq!(body["version"], "1.0.0");
    }

    #[tokio::test]
    async fn test_unknown_route_echoes_path_and_method() {
        let (status, body) = call(
            Request::delete("/api/nowhere")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "route not found");
        assert_eq!(body["path"], "/api/nowhere");
        assert_eq!(body["method"], "DELETE");
    }
}
