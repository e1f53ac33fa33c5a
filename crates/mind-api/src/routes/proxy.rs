//! Same-origin `/api/*` passthrough to the backend, so the browser never
//! needs CORS or to know where the backend lives.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, HeaderName, Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::any,
    Router,
};
use serde::Serialize;
use thiserror::Error;

use crate::state::AppState;

/// Forwarded request headers. Cookies are never passed on.
const REQUEST_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

const RESPONSE_HEADERS: [HeaderName; 3] = [
    header::CONTENT_TYPE,
    header::CONTENT_DISPOSITION,
    header::CACHE_CONTROL,
];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("invalid upstream response: {0}")]
    Response(#[from] http::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: "backend unavailable".into(),
            }),
        )
            .into_response()
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/*rest", any(forward))
}

async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let pathAndQuery = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    match relay(&state, method.clone(), &pathAndQuery, &headers, body).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("proxy {method} {pathAndQuery} failed: {e}");
            e.into_response()
        }
    }
}

async fn relay(
    state: &AppState,
    method: Method,
    pathAndQuery: &str,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = state.upstream_url(pathAndQuery);
    let mut request = state.client.request(method, &url).body(body);

    for name in REQUEST_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    tracing::debug!("proxy {url} -> {status}");

    let mut builder = Response::builder().status(status);
    for name in RESPONSE_HEADERS {
        if let Some(value) = upstream.headers().get(&name) {
            builder = builder.header(name, value.clone());
        }
    }

    let bytes = upstream.bytes().await?;
    Ok(builder.body(Body::from(bytes))?)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{body::to_bytes, http::Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{api_router, AppState};

    async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if uri.path() == "/api/users/me/" && auth.is_none() {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "detail": "Authentication credentials were not provided." })),
            )
                .into_response();
        }

        if uri.path() == "/api/status/export_csv/" {
            return Response::builder()
                .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
                .header(header::CONTENT_DISPOSITION, "attachment; filename=\"x.csv\"")
                .body(Body::from("name,status\n"))
                .unwrap();
        }

        Json(json!({
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query(),
            "auth": auth,
            "cookie": headers.contains_key(header::COOKIE),
            "body": String::from_utf8_lossy(&body),
        }))
        .into_response()
    }

    async fn spawn_backend() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, Router::new().fallback(echo)).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn proxy_to(backendUrl: &str) -> Router {
        api_router(AppState::new(backendUrl, Duration::from_secs(5)).unwrap())
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn forwards_path_query_body_and_bearer() {
        let app = proxy_to(&spawn_backend().await);

        let response = app
            .oneshot(
                Request::post("/api/status/?page=2")
                    .header(header::AUTHORIZATION, "Bearer abc")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::COOKIE, "sessionid=xyz")
                    .body(Body::from(r#"{"status":"RED","comment":""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["method"], "POST");
        assert_eq!(body["path"], "/api/status/");
        assert_eq!(body["query"], "page=2");
        assert_eq!(body["auth"], "Bearer abc");
        assert_eq!(body["cookie"], false);
        assert_eq!(body["body"], r#"{"status":"RED","comment":""}"#);
    }

    #[tokio::test]
    async fn missing_authorization_stays_missing() {
        let app = proxy_to(&spawn_backend().await);

        let response = app
            .oneshot(Request::get("/api/users/me/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn relays_download_headers() {
        let app = proxy_to(&spawn_backend().await);

        let response = app
            .oneshot(
                Request::get("/api/status/export_csv/?status=RED")
                    .header(header::AUTHORIZATION, "Bearer abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"x.csv\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"name,status\n");
    }

    #[tokio::test]
    async fn unreachable_backend_is_bad_gateway() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let app = proxy_to(&format!("http://{addr}"));
        let response = app
            .oneshot(Request::get("/api/status/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["error"], "backend unavailable");
    }

    #[tokio::test]
    async fn health_check_does_not_touch_backend() {
        let app = proxy_to("http://127.0.0.1:9");
        let response = app
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
