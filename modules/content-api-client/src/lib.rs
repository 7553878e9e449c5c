pub mod analytics;
pub mod clients;
pub mod content;
pub mod dashboard;
pub mod error;
pub mod types;

pub use analytics::{InsightParams, PerformanceParams};
pub use clients::ClientListParams;
pub use content::{CalendarRange, ContentListParams, ReviewQueueParams};
pub use dashboard::CostParams;
pub use error::{ContentApiError, Result};
pub use types::*;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const DEFAULT_BASE_URL: &str = "https://aloha-content-api-production.up.railway.app";

/// Client for the content factory REST API.
///
/// Every call performs exactly one request and always yields an [`ApiResponse`];
/// network, status and decoding failures end up in its `error` field.
#[derive(Clone)]
pub struct ContentApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ContentApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        self.fetch(Method::GET, endpoint, |req| req).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResponse<T> {
        self.fetch(Method::POST, endpoint, |req| req.json(body)).await
    }

    /// POST without a request body (action endpoints such as approve/score).
    async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        self.fetch(Method::POST, endpoint, |req| req).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResponse<T> {
        self.fetch(Method::PATCH, endpoint, |req| req.json(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        self.fetch(Method::DELETE, endpoint, |req| req).await
    }

    async fn fetch<T, F>(&self, method: Method, endpoint: &str, build: F) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let req = build(
            self.client
                .request(method.clone(), &url)
                .header(CONTENT_TYPE, "application/json"),
        );

        match send(req).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(%method, endpoint, error = %e, "Content API request failed");
                ApiResponse::failure(e.to_string())
            }
        }
    }
}

async fn send<T: DeserializeOwned>(req: RequestBuilder) -> Result<ApiResponse<T>> {
    let resp = req.send().await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ContentApiError::api(status.as_u16(), body));
    }

    let body = resp.text().await?;
    let envelope: RawEnvelope<T> = serde_json::from_str(&body)?;
    Ok(envelope.into())
}

/// Append the pairs that are present as a URL-encoded query string.
pub(crate) fn with_query(path: &str, pairs: &[(&str, Option<String>)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        if let Some(value) = value {
            serializer.append_pair(key, value);
            any = true;
        }
    }
    if any {
        format!("{path}?{}", serializer.finish())
    } else {
        path.to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::serve;
    use super::*;
    use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};

    #[test]
    fn with_query_skips_missing_pairs() {
        let url = with_query(
            "/api/v1/clients",
            &[("active", None), ("industry", Some("spa_wellness".to_string()))],
        );
        assert_eq!(url, "/api/v1/clients?industry=spa_wellness");
    }

    #[test]
    fn with_query_leaves_bare_path_when_empty() {
        assert_eq!(with_query("/api/v1/clients", &[("active", None)]), "/api/v1/clients");
    }

    #[test]
    fn with_query_encodes_values() {
        let url = with_query("/x", &[("industry", Some("bar & grill".to_string()))]);
        assert_eq!(url, "/x?industry=bar+%26+grill");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ContentApiClient::new("http://localhost:4000/");
        assert_eq!(client.base_url(), "http://localhost:4000");
    }

    #[tokio::test]
    async fn non_2xx_becomes_error_string() {
        let router = Router::new().route(
            "/api/v1/clients",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") }),
        );
        let (base, _) = serve(router).await;
        let api = ContentApiClient::new(&base);

        let resp = api.get_clients(&ClientListParams::default()).await;
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.error.as_deref(), Some("database unavailable"));
    }

    #[tokio::test]
    async fn non_2xx_with_empty_body_reports_status() {
        let router = Router::new().route(
            "/api/v1/dashboard/overview",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let (base, _) = serve(router).await;
        let api = ContentApiClient::new(&base);

        let resp = api.get_dashboard_overview().await;
        assert_eq!(resp.error.as_deref(), Some("HTTP 503"));
    }

    #[tokio::test]
    async fn unparseable_body_becomes_error_string() {
        let router = Router::new().route("/api/v1/clients", get(|| async { "<html>oops</html>" }));
        let (base, _) = serve(router).await;
        let api = ContentApiClient::new(&base);

        let resp = api.get_clients(&ClientListParams::default()).await;
        assert!(!resp.success);
        assert!(resp.error.unwrap().starts_with("Invalid response"));
    }

    #[tokio::test]
    async fn unreachable_backend_becomes_error_string() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = ContentApiClient::new(&format!("http://{addr}"));
        let resp = api.get_pipelines().await;
        assert!(!resp.success);
        assert!(resp.error.is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn data_only_envelope_is_accepted() {
        let router = Router::new().route(
            "/api/v1/analytics/insights",
            get(|| async { Json(serde_json::json!({ "data": [] })) }),
        );
        let (base, _) = serve(router).await;
        let api = ContentApiClient::new(&base);

        let resp = api.get_insights(&InsightParams::default()).await;
        assert!(resp.is_success());
        assert_eq!(resp.data, Some(vec![]));
    }

    #[tokio::test]
    async fn requests_carry_json_content_type() {
        let router = Router::new().route(
            "/api/v1/dashboard/pipelines",
            get(|headers: axum::http::HeaderMap| async move {
                let ct = headers
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                if ct == "application/json" {
                    Json(serde_json::json!({ "success": true, "data": [] })).into_response()
                } else {
                    StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response()
                }
            }),
        );
        let (base, _) = serve(router).await;
        let api = ContentApiClient::new(&base);

        let resp = api.get_pipelines().await;
        assert!(resp.is_success(), "unexpected error: {:?}", resp.error);
    }
}
