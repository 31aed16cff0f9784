use axum::{
    Json, Router,
    extract::OriginalUri,
    http::{HeaderMap, header::HOST},
    response::Redirect,
    routing::{any, get},
};
use domain_items::handlers::COLLECTION_PATH;
use serde_json::{Value, json};

pub const API_ROOT_PATH: &str = "/api/";

/// `GET /api/` listing the resource collections, plus `/api` → `/api/`.
/// Merged next to the router returned by `create_router`.
pub fn router() -> Router {
    Router::new()
        .route(API_ROOT_PATH, get(api_root))
        .route("/api", any(append_slash))
}

/// Slashless spellings of the API routes, relative to the `/api` prefix.
/// Each one redirects to the same path with a trailing slash.
pub fn slash_redirects() -> Router {
    Router::new()
        .route("/Item", any(append_slash))
        .route("/Item/{id}", any(append_slash))
        .route("/token", any(append_slash))
        .route("/token/refresh", any(append_slash))
}

async fn api_root(headers: HeaderMap) -> Json<Value> {
    let host = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");

    Json(json!({
        "Item": format!("{scheme}://{host}/api{COLLECTION_PATH}"),
    }))
}

/// 308 to the same path with a trailing slash; method and body are kept.
async fn append_slash(OriginalUri(uri): OriginalUri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("{}/?{query}", uri.path()),
        None => format!("{}/", uri.path()),
    };
    Redirect::permanent(&target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_api_root_lists_item_collection() {
        let request = Request::builder()
            .uri("/api/")
            .header(HOST, "todo.example:8080")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "Item": "http://todo.example:8080/api/Item/" }));
    }

    #[tokio::test]
    async fn test_api_without_slash_redirects() {
        let request = Request::builder().uri("/api").body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/api/");
    }
}
