use crate::types::{
    ApiResponse, CalendarEntry, GenerateScriptData, Message, PublishRequest, QualityScore,
    RenderFull, ReviewRender, ScheduleConfirmation, ScheduleRequest, ScheduledContent, ScriptFull,
};
use crate::{with_query, ContentApiClient};

/// Filters shared by the script and render listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentListParams {
    pub client_id: Option<String>,
    pub status: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ContentListParams {
    fn query(&self, path: &str) -> String {
        with_query(
            path,
            &[
                ("clientId", self.client_id.clone()),
                ("status", self.status.clone()),
                ("limit", self.limit.map(|l| l.to_string())),
                ("offset", self.offset.map(|o| o.to_string())),
            ],
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewQueueParams {
    pub client_id: Option<String>,
}

/// Calendar window, as RFC 3339 instants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl ContentApiClient {
    // --- Scripts ---

    pub async fn get_scripts(&self, params: &ContentListParams) -> ApiResponse<Vec<ScriptFull>> {
        self.get(&params.query("/api/v1/content/scripts")).await
    }

    pub async fn get_script(&self, id: &str) -> ApiResponse<ScriptFull> {
        self.get(&format!("/api/v1/content/scripts/{id}")).await
    }

    pub async fn generate_script(&self, data: &GenerateScriptData) -> ApiResponse<ScriptFull> {
        self.post("/api/v1/content/scripts/generate", data).await
    }

    // --- Renders ---

    pub async fn get_renders(&self, params: &ContentListParams) -> ApiResponse<Vec<RenderFull>> {
        self.get(&params.query("/api/v1/content/renders")).await
    }

    pub async fn get_render(&self, id: &str) -> ApiResponse<RenderFull> {
        self.get(&format!("/api/v1/content/renders/{id}")).await
    }

    pub async fn score_render(&self, id: &str) -> ApiResponse<QualityScore> {
        self.post_empty(&format!("/api/v1/content/renders/{id}/score"))
            .await
    }

    pub async fn approve_render(&self, id: &str) -> ApiResponse<RenderFull> {
        self.post_empty(&format!("/api/v1/content/renders/{id}/approve"))
            .await
    }

    pub async fn schedule_render(
        &self,
        id: &str,
        request: &ScheduleRequest,
    ) -> ApiResponse<ScheduleConfirmation> {
        self.post(&format!("/api/v1/content/renders/{id}/schedule"), request)
            .await
    }

    /// Publish now. `None` sends `{}` and lets the backend pick the platforms.
    pub async fn publish_render(
        &self,
        id: &str,
        request: Option<&PublishRequest>,
    ) -> ApiResponse<Message> {
        let default = PublishRequest::default();
        let body = request.unwrap_or(&default);
        self.post(&format!("/api/v1/content/renders/{id}/publish"), body)
            .await
    }

    // --- Review & scheduling ---

    pub async fn get_review_queue(&self, params: &ReviewQueueParams) -> ApiResponse<Vec<ReviewRender>> {
        let endpoint = with_query(
            "/api/v1/content/review-queue",
            &[("clientId", params.client_id.clone())],
        );
        self.get(&endpoint).await
    }

    pub async fn get_scheduled(&self, client_id: &str) -> ApiResponse<Vec<ScheduledContent>> {
        let endpoint = with_query(
            "/api/v1/content/scheduled",
            &[("clientId", Some(client_id.to_string()))],
        );
        self.get(&endpoint).await
    }

    pub async fn get_calendar(
        &self,
        client_id: &str,
        range: &CalendarRange,
    ) -> ApiResponse<Vec<CalendarEntry>> {
        let endpoint = with_query(
            "/api/v1/content/calendar",
            &[
                ("clientId", Some(client_id.to_string())),
                ("start", range.start.clone()),
                ("end", range.end.clone()),
            ],
        );
        self.get(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve;
    use crate::types::{Platform, ScriptAudience};
    use axum::{
        routing::{get, post},
        Json, Router,
    };
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn ok_empty_list() -> Json<serde_json::Value> {
        Json(json!({ "success": true, "data": [] }))
    }

    #[tokio::test]
    async fn list_filters_are_sent_in_order() {
        let router = Router::new()
            .route("/api/v1/content/scripts", get(|| async { ok_empty_list() }))
            .route("/api/v1/content/renders", get(|| async { ok_empty_list() }));
        let (base, seen) = serve(router).await;
        let api = ContentApiClient::new(&base);

        let params = ContentListParams {
            client_id: Some("c1".to_string()),
            status: Some("completed".to_string()),
            limit: Some(20),
            offset: Some(40),
        };
        assert_eq!(api.get_scripts(&params).await.data, Some(vec![]));
        assert_eq!(api.get_renders(&ContentListParams::default()).await.data, Some(vec![]));

        let seen = seen.lock().unwrap();
        assert_eq!(
            seen[0].query.as_deref(),
            Some("clientId=c1&status=completed&limit=20&offset=40")
        );
        assert_eq!(seen[1].path, "/api/v1/content/renders");
        assert_eq!(seen[1].query, None);
    }

    #[tokio::test]
    async fn action_endpoints_post_without_body() {
        let router = Router::new()
            .route(
                "/api/v1/content/renders/{id}/score",
                post(|| async { Json(json!({ "success": true, "data": { "score": 0.91 } })) }),
            )
            .route(
                "/api/v1/content/renders/{id}/approve",
                post(|| async { Json(json!({ "success": false, "error": "Render not completed" })) }),
            );
        let (base, seen) = serve(router).await;
        let api = ContentApiClient::new(&base);

        let score = api.score_render("r1").await.into_result("score failed").unwrap();
        assert_eq!(score.score, 0.91);
        assert_eq!(score.details, serde_json::Value::Null);

        let approved = api.approve_render("r1").await;
        assert_eq!(approved.into_result("approve failed"), Err("Render not completed".to_string()));

        let seen = seen.lock().unwrap();
        assert!(seen.iter().all(|s| s.method == "POST" && s.body.is_empty()));
    }

    #[tokio::test]
    async fn publish_without_platforms_sends_empty_object() {
        let router = Router::new().route(
            "/api/v1/content/renders/{id}/publish",
            post(|| async { Json(json!({ "success": true, "data": { "message": "Queued" } })) }),
        );
        let (base, seen) = serve(router).await;
        let api = ContentApiClient::new(&base);

        api.publish_render("r1", None).await;
        api.publish_render(
            "r1",
            Some(&PublishRequest {
                platforms: Some(vec![Platform::Youtube]),
            }),
        )
        .await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].body, "{}");
        assert_eq!(seen[1].body, r#"{"platforms":["youtube"]}"#);
    }

    #[tokio::test]
    async fn schedule_sends_platforms_and_instant() {
        let router = Router::new().route(
            "/api/v1/content/renders/{id}/schedule",
            post(|| async {
                Json(json!({ "success": true, "data": { "scheduledFor": "2026-10-17T22:00:00Z" } }))
            }),
        );
        let (base, seen) = serve(router).await;
        let api = ContentApiClient::new(&base);

        let when = Utc.with_ymd_and_hms(2026, 10, 17, 22, 0, 0).unwrap();
        let resp = api
            .schedule_render(
                "r7",
                &ScheduleRequest {
                    platforms: vec![Platform::Tiktok, Platform::Instagram],
                    scheduled_for: Some(when),
                },
            )
            .await;
        assert_eq!(resp.data.unwrap().scheduled_for, when);

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].path, "/api/v1/content/renders/r7/schedule");
        assert_eq!(
            seen[0].body,
            r#"{"platforms":["tiktok","instagram"],"scheduledFor":"2026-10-17T22:00:00Z"}"#
        );
    }

    #[tokio::test]
    async fn calendar_puts_client_first() {
        let router = Router::new()
            .route("/api/v1/content/calendar", get(|| async { ok_empty_list() }))
            .route("/api/v1/content/scheduled", get(|| async { ok_empty_list() }))
            .route("/api/v1/content/review-queue", get(|| async { ok_empty_list() }));
        let (base, seen) = serve(router).await;
        let api = ContentApiClient::new(&base);

        let range = CalendarRange {
            start: Some("2026-10-01T00:00:00Z".to_string()),
            end: None,
        };
        api.get_calendar("c1", &range).await;
        api.get_scheduled("c1").await;
        api.get_review_queue(&ReviewQueueParams::default()).await;

        let seen = seen.lock().unwrap();
        assert_eq!(
            seen[0].query.as_deref(),
            Some("clientId=c1&start=2026-10-01T00%3A00%3A00Z")
        );
        assert_eq!(seen[1].query.as_deref(), Some("clientId=c1"));
        assert_eq!(seen[2].query, None);
    }

    #[tokio::test]
    async fn generate_sends_optional_fields_only_when_set() {
        let router = Router::new().route(
            "/api/v1/content/scripts/generate",
            post(|| async { Json(json!({ "success": false, "error": "Client not found" })) }),
        );
        let (base, seen) = serve(router).await;
        let api = ContentApiClient::new(&base);

        let data = GenerateScriptData {
            client_id: "c1".to_string(),
            keyword: "sunset cruise".to_string(),
            content_type: None,
            audience_type: Some(ScriptAudience::Tourist),
            angle: None,
            queue_voiceover: Some(true),
        };
        let resp = api.generate_script(&data).await;
        assert!(!resp.is_success());

        let seen = seen.lock().unwrap();
        let body: serde_json::Value = serde_json::from_str(&seen[0].body).unwrap();
        assert_eq!(body["clientId"], "c1");
        assert_eq!(body["audienceType"], "tourist");
        assert_eq!(body["queueVoiceover"], true);
        assert!(body.get("contentType").is_none());
    }
}
