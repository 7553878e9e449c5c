use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use chrono::Utc;
use content_api_client::CostParams;
use tracing::warn;

use crate::components::{render_dashboard, DashboardData};
use crate::AppState;

const COST_WINDOW_DAYS: u32 = 30;

pub async fn home(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let costs = CostParams {
        days: Some(COST_WINDOW_DAYS),
        ..Default::default()
    };
    let (overview, pipelines, costs) = tokio::join!(
        state.api.get_dashboard_overview(),
        state.api.get_pipelines(),
        state.api.get_costs(&costs),
    );

    let pipelines = pipelines.into_result("Failed to load pipelines").unwrap_or_else(|error| {
        warn!(%error, "Pipelines unavailable");
        Vec::new()
    });
    let costs = match costs.into_result("Failed to load costs") {
        Ok(costs) => Some(costs),
        Err(error) => {
            warn!(%error, "Costs unavailable");
            None
        }
    };

    Html(render_dashboard(DashboardData {
        overview: overview.into_result("Failed to load dashboard"),
        pipelines,
        costs,
        now: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    use crate::pages::test_support::{app, fake_backend, get as get_page};

    fn backend(overview: serde_json::Value) -> Router {
        Router::new()
            .route(
                "/api/v1/dashboard/overview",
                get(move || {
                    let overview = overview.clone();
                    async move { Json(overview) }
                }),
            )
            .route("/api/v1/dashboard/pipelines", get(|| async { Json(json!({"success": true, "data": []})) }))
            .route(
                "/api/v1/dashboard/costs",
                get(|| async {
                    Json(json!({"success": true, "data": {"totalCost": "12.50", "byService": [], "daily": []}}))
                }),
            )
    }

    #[tokio::test]
    async fn renders_overview() {
        let base = fake_backend(backend(json!({
            "success": true,
            "data": {
                "clients": {"total": 3, "active": 2},
                "content": {"scripts": 10, "renders": 4, "published": 1, "pendingReview": 2},
                "thisMonth": {"scripts": 5, "renders": 2, "published": 1},
                "recentActivity": []
            }
        })))
        .await;
        let (status, html) = get_page(app(&base), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Active Clients"));
        assert!(html.contains("No recent activity"));
        assert!(html.contains("$12.50"));
    }

    #[tokio::test]
    async fn backend_failure_shows_connection_error() {
        let base = fake_backend(backend(json!({"success": false, "error": "Database unavailable"}))).await;
        let (status, html) = get_page(app(&base), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Connection Error"));
        assert!(html.contains("Database unavailable"));
        assert!(html.contains("Retry"));
    }
}
