use crate::types::{
    ApiResponse, ContentTypeData, IndustryInsight, KeywordData, Message, PerformanceData,
    RefreshRequest,
};
use crate::{with_query, ContentApiClient};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceParams {
    pub platform: Option<String>,
    pub days: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightParams {
    pub industry: Option<String>,
}

impl ContentApiClient {
    pub async fn get_performance(
        &self,
        client_id: &str,
        params: &PerformanceParams,
    ) -> ApiResponse<PerformanceData> {
        let endpoint = with_query(
            &format!("/api/v1/analytics/performance/{client_id}"),
            &[
                ("platform", params.platform.clone()),
                ("days", params.days.map(|d| d.to_string())),
            ],
        );
        self.get(&endpoint).await
    }

    pub async fn get_content_type_analytics(
        &self,
        client_id: &str,
    ) -> ApiResponse<Vec<ContentTypeData>> {
        self.get(&format!("/api/v1/analytics/content-types/{client_id}"))
            .await
    }

    pub async fn get_keyword_analytics(&self, client_id: &str) -> ApiResponse<Vec<KeywordData>> {
        self.get(&format!("/api/v1/analytics/keywords/{client_id}"))
            .await
    }

    pub async fn refresh_analytics(&self, request: &RefreshRequest) -> ApiResponse<Message> {
        self.post("/api/v1/analytics/refresh", request).await
    }

    pub async fn get_insights(&self, params: &InsightParams) -> ApiResponse<Vec<IndustryInsight>> {
        let endpoint = with_query(
            "/api/v1/analytics/insights",
            &[("industry", params.industry.clone())],
        );
        self.get(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve;
    use axum::{
        routing::{get, post},
        Json, Router,
    };
    use serde_json::json;

    #[tokio::test]
    async fn performance_decodes_totals_and_sends_period() {
        let router = Router::new().route(
            "/api/v1/analytics/performance/{id}",
            get(|| async {
                Json(json!({ "success": true, "data": {
                    "totals": {
                        "views": 12345, "likes": 800, "comments": 40, "shares": 12,
                        "contentPieces": 9, "avgScore": "0.82"
                    },
                    "byPlatform": [{
                        "platform": "tiktok", "views": 10000, "likes": 700, "comments": 30,
                        "shares": 10, "count": 6, "avgScore": "0.85"
                    }],
                    "topContent": []
                }}))
            }),
        );
        let (base, seen) = serve(router).await;
        let api = ContentApiClient::new(&base);

        let perf = api
            .get_performance(
                "c1",
                &PerformanceParams {
                    platform: None,
                    days: Some(90),
                },
            )
            .await
            .into_result("performance failed")
            .unwrap();
        assert_eq!(perf.totals.views, 12345);
        assert_eq!(perf.by_platform[0].platform, "tiktok");

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].path, "/api/v1/analytics/performance/c1");
        assert_eq!(seen[0].query.as_deref(), Some("days=90"));
    }

    #[tokio::test]
    async fn insights_read_effective_ctas() {
        let router = Router::new().route(
            "/api/v1/analytics/insights",
            get(|| async {
                Json(json!({ "success": true, "data": [{
                    "id": "i1", "industry": "restaurant",
                    "bestHookStyles": ["question"], "winningHashtags": ["#oahufood"],
                    "effectiveCTAs": ["Visit us today"],
                    "videosAnalyzed": 120, "updatedAt": "2026-10-01T00:00:00Z"
                }]}))
            }),
        );
        let (base, seen) = serve(router).await;
        let api = ContentApiClient::new(&base);

        let insights = api
            .get_insights(&InsightParams {
                industry: Some("restaurant".to_string()),
            })
            .await
            .ok()
            .unwrap_or_default();
        assert_eq!(insights[0].effective_ctas, vec!["Visit us today".to_string()]);
        assert_eq!(insights[0].videos_analyzed, 120);

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].query.as_deref(), Some("industry=restaurant"));
    }

    #[tokio::test]
    async fn refresh_and_breakdowns_hit_their_paths() {
        let router = Router::new()
            .route(
                "/api/v1/analytics/refresh",
                post(|| async { Json(json!({ "success": true, "data": { "message": "Refreshed 4 publications" } })) }),
            )
            .route(
                "/api/v1/analytics/content-types/{id}",
                get(|| async { Json(json!({ "success": true, "data": [] })) }),
            )
            .route(
                "/api/v1/analytics/keywords/{id}",
                get(|| async { Json(json!({ "success": true, "data": [] })) }),
            );
        let (base, seen) = serve(router).await;
        let api = ContentApiClient::new(&base);

        let msg = api
            .refresh_analytics(&RefreshRequest {
                render_id: None,
                client_id: Some("c1".to_string()),
            })
            .await;
        assert_eq!(msg.data.unwrap().message, "Refreshed 4 publications");
        assert!(api.get_content_type_analytics("c1").await.is_success());
        assert!(api.get_keyword_analytics("c1").await.is_success());

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].body, r#"{"clientId":"c1"}"#);
        assert_eq!(seen[1].path, "/api/v1/analytics/content-types/c1");
        assert_eq!(seen[2].path, "/api/v1/analytics/keywords/c1");
    }
}
