use std::sync::Arc;

use aloha_common::format::percent;
use aloha_common::forms::GenerateForm;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use content_api_client::ContentListParams;
use serde::Deserialize;
use tracing::info;

use super::{active_clients, non_empty, see_other};
use crate::components::{
    render_content, render_script_detail, ContentData, ContentFilters, ContentModal, ContentTab,
    ScriptDetailData,
};
use crate::AppState;

/// Tab and filter fields, present both in the page query and in the hidden
/// inputs of the preview actions.
#[derive(Debug, Default, Deserialize)]
pub struct FilterFields {
    pub tab: Option<String>,
    pub client_id: Option<String>,
    pub status: Option<String>,
}

impl FilterFields {
    fn into_filters(self) -> ContentFilters {
        ContentFilters {
            tab: ContentTab::parse(self.tab.as_deref().unwrap_or_default()),
            client_id: self.client_id.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentQuery {
    #[serde(flatten)]
    pub filters: FilterFields,
    pub modal: Option<String>,
    pub preview: Option<String>,
    pub notice: Option<String>,
}

enum Overlay {
    None,
    Generate { form: GenerateForm, error: Option<String> },
    Preview { id: String, notice: Option<String>, error: Option<String> },
}

async fn content_page(state: &Arc<AppState>, filters: ContentFilters, overlay: Overlay) -> Html<String> {
    let params = ContentListParams {
        client_id: Some(filters.client_id.clone()).filter(|id| !id.is_empty()),
        status: Some(filters.status.clone()).filter(|s| !s.is_empty()),
        ..Default::default()
    };
    let preview_id = match &overlay {
        Overlay::Preview { id, .. } => Some(id.as_str()),
        _ => None,
    };

    let (clients, renders, scripts, preview) = tokio::join!(
        active_clients(state),
        state.api.get_renders(&params),
        state.api.get_scripts(&params),
        async {
            match preview_id {
                Some(id) => Some(state.api.get_render(id).await),
                None => None,
            }
        },
    );

    let modal = match overlay {
        Overlay::None => ContentModal::Closed,
        Overlay::Generate { form, error } => ContentModal::Generate { form, error },
        Overlay::Preview { notice, error, .. } => match preview {
            Some(render) => ContentModal::Preview {
                render: render.into_result("Failed to load video"),
                notice,
                error,
            },
            None => ContentModal::Closed,
        },
    };

    Html(render_content(ContentData {
        filters,
        clients,
        renders: renders.into_result("Failed to load videos"),
        scripts: scripts.into_result("Failed to load scripts"),
        modal,
        tz: state.config.display_offset,
    }))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ContentQuery>,
) -> impl IntoResponse {
    let filters = params.filters.into_filters();
    let overlay = match (non_empty(params.preview), params.modal.as_deref()) {
        (Some(id), _) => Overlay::Preview {
            id,
            notice: non_empty(params.notice),
            error: None,
        },
        (None, Some("generate")) => Overlay::Generate {
            form: GenerateForm::for_client(Some(filters.client_id.as_str())),
            error: None,
        },
        _ => Overlay::None,
    };
    content_page(&state, filters, overlay).await
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GenerateForm>,
) -> Response {
    let result = match form.validate() {
        Ok(data) => state
            .api
            .generate_script(&data)
            .await
            .into_result("Failed to generate script"),
        Err(e) => Err(e.to_string()),
    };

    match result {
        Ok(script) => {
            info!(script_id = %script.id, client_id = %script.client_id, "Script generated");
            see_other("/content?tab=scripts")
        }
        Err(error) => {
            let filters = ContentFilters {
                tab: ContentTab::Scripts,
                ..Default::default()
            };
            content_page(&state, filters, Overlay::Generate { form, error: Some(error) })
                .await
                .into_response()
        }
    }
}

/// Redirect back to the open preview with `notice`, or re-render it with the error.
async fn finish_preview_action(
    state: &Arc<AppState>,
    id: String,
    fields: FilterFields,
    result: Result<String, String>,
) -> Response {
    let filters = fields.into_filters();
    match result {
        Ok(notice) => see_other(&filters.href(&[("preview", &id), ("notice", &notice)])),
        Err(error) => content_page(
            state,
            filters,
            Overlay::Preview {
                id,
                notice: None,
                error: Some(error),
            },
        )
        .await
        .into_response(),
    }
}

pub async fn score(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(fields): Form<FilterFields>,
) -> Response {
    let result = state
        .api
        .score_render(&id)
        .await
        .into_result("Failed to score video")
        .map(|scored| {
            info!(render_id = %id, score = scored.score, "Render scored");
            format!("Quality score: {}", percent(Some(scored.score)))
        });
    finish_preview_action(&state, id, fields, result).await
}

pub async fn publish(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(fields): Form<FilterFields>,
) -> Response {
    let result = state
        .api
        .publish_render(&id, None)
        .await
        .into_result("Failed to publish video")
        .map(|msg| {
            info!(render_id = %id, "Render published");
            msg.message
        });
    finish_preview_action(&state, id, fields, result).await
}

pub async fn script_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let script = state.api.get_script(&id).await.into_result("Failed to load script");
    Html(render_script_detail(ScriptDetailData {
        id,
        script,
        tz: state.config.display_offset,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use crate::pages::test_support::{app, fake_backend, get as get_page, post_form};

    fn render_json(id: &str) -> Value {
        json!({
            "id": id, "scriptId": "s1", "clientId": "c1", "status": "completed",
            "videoUrl": "https://cdn.example.com/v.mp4", "durationSeconds": 30.0,
            "qualityScore": 0.8, "createdAt": "2026-10-05T20:00:00Z",
            "script": {"id": "s1", "keyword": "poke bowls", "hookText": "Hungry?"},
            "client": {"id": "c1", "businessName": "Poke Shack"}
        })
    }

    fn backend() -> Router {
        backend_with_renders(get(|| async { Json(json!({"success": true, "data": []})) }))
    }

    fn backend_with_renders(renders: axum::routing::MethodRouter) -> Router {
        Router::new()
            .route("/api/v1/clients", get(|| async { Json(json!({"success": true, "data": []})) }))
            .route("/api/v1/content/renders", renders)
            .route("/api/v1/content/scripts", get(|| async { Json(json!({"success": true, "data": []})) }))
            .route(
                "/api/v1/content/renders/{id}",
                get(|| async { Json(json!({"success": true, "data": render_json("r1")})) }),
            )
    }

    #[tokio::test]
    async fn empty_tabs_show_empty_states() {
        let base = fake_backend(backend()).await;
        let (status, html) = get_page(app(&base), "/content").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("No videos yet"));

        let (_, html) = get_page(app(&base), "/content?tab=scripts").await;
        assert!(html.contains("No scripts yet"));
    }

    #[tokio::test]
    async fn filters_are_forwarded_as_query() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();
        let backend = backend_with_renders(get(move |uri: axum::http::Uri| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(uri.query().unwrap_or_default().to_string());
                Json(json!({"success": true, "data": [render_json("r1")]}))
            }
        }));
        let base = fake_backend(backend).await;
        let (_, html) = get_page(app(&base), "/content?client_id=c1&status=completed").await;
        assert!(html.contains("poke bowls"));
        assert_eq!(seen.lock().unwrap().as_slice(), ["clientId=c1&status=completed"]);
    }

    #[tokio::test]
    async fn preview_shows_notice() {
        let base = fake_backend(backend()).await;
        let (_, html) = get_page(app(&base), "/content?preview=r1&notice=Quality+score%3A+80%25").await;
        assert!(html.contains("Score Quality"));
        assert!(html.contains("Quality score: 80%"));
    }

    #[tokio::test]
    async fn generate_redirects_to_scripts_tab() {
        let received: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let sink = received.clone();
        let backend = backend().route(
            "/api/v1/content/scripts/generate",
            post(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    *sink.lock().unwrap() = Some(body);
                    Json(json!({"success": true, "data": {
                        "id": "s9", "clientId": "c1", "keyword": "shave ice",
                        "hookText": "", "bodyText": "", "ctaText": "", "fullScript": "",
                        "wordCount": 0, "estimatedDuration": 0.0, "status": "draft",
                        "createdAt": "2026-10-05T20:00:00Z"
                    }}))
                }
            }),
        );
        let base = fake_backend(backend).await;
        let (status, location) = post_form(
            app(&base),
            "/content/generate",
            "client_id=c1&keyword=shave+ice&content_type=promotional&audience_type=tourist",
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "/content?tab=scripts");

        let body = received.lock().unwrap().clone().unwrap();
        assert_eq!(body["keyword"], "shave ice");
        assert_eq!(body["audienceType"], "tourist");
        assert_eq!(body["queueVoiceover"], false);
    }

    #[tokio::test]
    async fn ticked_voiceover_box_is_requested() {
        let received: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let sink = received.clone();
        let backend = backend().route(
            "/api/v1/content/scripts/generate",
            post(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    *sink.lock().unwrap() = Some(body);
                    Json(json!({"success": true, "data": {
                        "id": "s10", "clientId": "c1", "keyword": "poke",
                        "hookText": "", "bodyText": "", "ctaText": "", "fullScript": "",
                        "wordCount": 0, "estimatedDuration": 0.0, "status": "draft",
                        "createdAt": "2026-10-05T20:00:00Z"
                    }}))
                }
            }),
        );
        let base = fake_backend(backend).await;
        let (status, _) = post_form(
            app(&base),
            "/content/generate",
            "client_id=c1&keyword=poke&queue_voiceover=on",
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        let body = received.lock().unwrap().clone().unwrap();
        assert_eq!(body["queueVoiceover"], true);
    }

    #[tokio::test]
    async fn generate_without_keyword_reopens_modal() {
        let base = fake_backend(backend()).await;
        let (status, html) = post_form(app(&base), "/content/generate", "client_id=c1&keyword=").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Generate AI Script"));
        assert!(html.contains("Client and keyword are required"));
    }

    #[tokio::test]
    async fn score_redirects_with_notice() {
        let backend = backend().route(
            "/api/v1/content/renders/{id}/score",
            post(|| async { Json(json!({"success": true, "data": {"score": 0.87, "details": {}}})) }),
        );
        let base = fake_backend(backend).await;
        let (status, location) = post_form(app(&base), "/content/renders/r1/score", "tab=videos&client_id=c1&status=").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "/content?tab=videos&client_id=c1&preview=r1&notice=Quality+score%3A+87%25");
    }

    #[tokio::test]
    async fn publish_failure_stays_on_preview() {
        let backend = backend().route(
            "/api/v1/content/renders/{id}/publish",
            post(|| async { Json(json!({"success": false, "error": "No connected platforms"})) }),
        );
        let base = fake_backend(backend).await;
        let (status, html) = post_form(app(&base), "/content/renders/r1/publish", "tab=videos").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("No connected platforms"));
        assert!(html.contains("Publish"));
    }

    #[tokio::test]
    async fn script_detail_failure_shows_retry() {
        let backend = Router::new().route(
            "/api/v1/content/scripts/{id}",
            get(|| async { (StatusCode::NOT_FOUND, "Script not found") }),
        );
        let base = fake_backend(backend).await;
        let (status, html) = get_page(app(&base), "/content/scripts/s404").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Script not found"));
        assert!(html.contains("Retry"));
    }
}
