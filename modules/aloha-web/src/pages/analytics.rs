use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use content_api_client::{InsightParams, PerformanceParams, RefreshRequest};
use serde::Deserialize;
use tracing::{info, warn};

use super::{active_clients, non_empty, pick_client, see_other};
use crate::components::{parse_days, render_analytics, AnalyticsData};
use crate::templates::href;
use crate::AppState;

/// Page query and refresh form share the same fields.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub client_id: Option<String>,
    pub days: Option<String>,
    pub notice: Option<String>,
}

async fn analytics_page(
    state: &Arc<AppState>,
    requested: Option<&str>,
    days: u32,
    notice: Option<String>,
    action_error: Option<String>,
) -> Html<String> {
    let clients = active_clients(state).await;
    let client = pick_client(&clients, requested).cloned();

    // Insights span every industry; each one is labelled with its own.
    let insight_params = InsightParams::default();
    let insights = state.api.get_insights(&insight_params);

    let (performance, insights, content_types, keywords) = match &client {
        Some(client) => {
            let params = PerformanceParams {
                days: Some(days),
                ..Default::default()
            };
            let (performance, insights, content_types, keywords) = tokio::join!(
                state.api.get_performance(&client.id, &params),
                insights,
                state.api.get_content_type_analytics(&client.id),
                state.api.get_keyword_analytics(&client.id),
            );
            (
                performance.into_result("Failed to load analytics").map(Some),
                insights,
                content_types.into_result("Failed to load content type breakdown"),
                keywords.into_result("Failed to load keyword breakdown"),
            )
        }
        None => (Ok(None), insights.await, Ok(Vec::new()), Ok(Vec::new())),
    };

    let insights = insights.into_result("Failed to load insights").unwrap_or_else(|error| {
        warn!(%error, "Insights unavailable");
        Vec::new()
    });
    let content_types = content_types.unwrap_or_else(|error| {
        warn!(%error, "Content type breakdown unavailable");
        Vec::new()
    });
    let keywords = keywords.unwrap_or_else(|error| {
        warn!(%error, "Keyword breakdown unavailable");
        Vec::new()
    });

    Html(render_analytics(AnalyticsData {
        client_id: client.map(|c| c.id),
        clients,
        days,
        performance,
        insights,
        content_types,
        keywords,
        notice,
        action_error,
    }))
}

pub async fn overview(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalyticsQuery>,
) -> impl IntoResponse {
    let days = parse_days(params.days.as_deref());
    analytics_page(&state, params.client_id.as_deref(), days, non_empty(params.notice), None).await
}

pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AnalyticsQuery>,
) -> Response {
    let days = parse_days(form.days.as_deref());
    let client_id = non_empty(form.client_id);
    let request = RefreshRequest {
        client_id: client_id.clone(),
        ..Default::default()
    };

    match state.api.refresh_analytics(&request).await.into_result("Failed to refresh analytics") {
        Ok(msg) => {
            info!(client_id = client_id.as_deref().unwrap_or("all"), "Analytics refresh requested");
            let days = days.to_string();
            see_other(&href(
                "/analytics",
                &[
                    ("client_id", client_id.as_deref().unwrap_or_default()),
                    ("days", &days),
                    ("notice", &msg.message),
                ],
            ))
        }
        Err(error) => analytics_page(&state, client_id.as_deref(), days, None, Some(error))
            .await
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::http::{StatusCode, Uri};
    use axum::routing::{get, post, MethodRouter};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use crate::pages::test_support::{app, fake_backend, get as get_page, post_form};

    fn backend(seen: Arc<Mutex<Vec<String>>>) -> Router {
        backend_with_insights(
            seen,
            get(|| async { Json(json!({"success": true, "data": []})) }),
        )
    }

    fn backend_with_insights(seen: Arc<Mutex<Vec<String>>>, insights: MethodRouter) -> Router {
        Router::new()
            .route(
                "/api/v1/clients",
                get(|| async {
                    Json(json!({"success": true, "data": [{
                        "id": "c1", "businessName": "Poke Shack", "industry": "restaurant",
                        "contactName": "", "contactEmail": "", "primaryAudience": "local",
                        "tier": "starter", "monthlyFee": 500, "status": "active",
                        "createdAt": "2026-10-01T00:00:00Z", "updatedAt": "2026-10-01T00:00:00Z"
                    }]}))
                }),
            )
            .route(
                "/api/v1/analytics/performance/{id}",
                get(move |uri: Uri| {
                    let seen = seen.clone();
                    async move {
                        seen.lock().unwrap().push(uri.to_string());
                        Json(json!({"success": true, "data": {
                            "totals": {"views": 12345, "likes": 100, "comments": 5, "shares": 7,
                                       "contentPieces": 3, "avgScore": "0.85"},
                            "byPlatform": [],
                            "topContent": []
                        }}))
                    }
                }),
            )
            .route("/api/v1/analytics/insights", insights)
            .route(
                "/api/v1/analytics/content-types/{id}",
                get(|| async { Json(json!({"success": true, "data": []})) }),
            )
            .route(
                "/api/v1/analytics/keywords/{id}",
                get(|| async { Json(json!({"success": false, "error": "not computed"})) }),
            )
    }

    #[tokio::test]
    async fn renders_totals_for_first_client() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let base = fake_backend(backend(seen.clone())).await;
        let (status, html) = get_page(app(&base), "/analytics?days=7").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("12,345"));
        assert!(html.contains("Best Posting Times"));
        assert_eq!(seen.lock().unwrap().as_slice(), ["/api/v1/analytics/performance/c1?days=7"]);
    }

    #[tokio::test]
    async fn insights_are_requested_for_all_industries() {
        let queries: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let log = queries.clone();
        let insights = get(move |uri: Uri| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(uri.query().unwrap_or_default().to_string());
                Json(json!({"success": true, "data": []}))
            }
        });
        let base = fake_backend(backend_with_insights(Arc::new(Mutex::new(Vec::new())), insights)).await;
        let (status, _) = get_page(app(&base), "/analytics?client_id=c1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(queries.lock().unwrap().as_slice(), [""]);
    }

    #[tokio::test]
    async fn unknown_period_uses_thirty_days() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let base = fake_backend(backend(seen.clone())).await;
        get_page(app(&base), "/analytics?days=365").await;
        assert_eq!(seen.lock().unwrap().as_slice(), ["/api/v1/analytics/performance/c1?days=30"]);
    }

    #[tokio::test]
    async fn refresh_redirects_with_notice() {
        let received: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let sink = received.clone();
        let backend = backend(Arc::new(Mutex::new(Vec::new()))).route(
            "/api/v1/analytics/refresh",
            post(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    *sink.lock().unwrap() = Some(body);
                    Json(json!({"success": true, "data": {"message": "Refresh queued"}}))
                }
            }),
        );
        let base = fake_backend(backend).await;
        let (status, location) = post_form(app(&base), "/analytics/refresh", "client_id=c1&days=90").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "/analytics?client_id=c1&days=90&notice=Refresh+queued");
        assert_eq!(received.lock().unwrap().clone().unwrap(), json!({"clientId": "c1"}));
    }

    #[tokio::test]
    async fn refresh_failure_is_shown_inline() {
        let backend = backend(Arc::new(Mutex::new(Vec::new()))).route(
            "/api/v1/analytics/refresh",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "Queue is down") }),
        );
        let base = fake_backend(backend).await;
        let (status, html) = post_form(app(&base), "/analytics/refresh", "client_id=c1&days=30").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Queue is down"));
        assert!(html.contains("Poke Shack"));
    }
}
