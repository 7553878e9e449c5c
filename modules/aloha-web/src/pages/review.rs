use std::sync::Arc;

use aloha_common::forms::ScheduleForm;
use aloha_common::{to_review_item, ReviewItem};
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use chrono::Utc;
use content_api_client::ReviewQueueParams;
use serde::Deserialize;
use tracing::info;

use super::{non_empty, see_other, today};
use crate::components::{render_review, ReviewData, ReviewModal, ReviewState};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ReviewQuery {
    pub selected: Option<String>,
    pub dismissed: Option<String>,
    pub schedule: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApproveForm {
    pub dismissed: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleSubmit {
    #[serde(flatten)]
    pub schedule: ScheduleForm,
    pub dismissed: Option<String>,
}

enum Overlay {
    None,
    /// Schedule dialog for a render; `None` form means fresh defaults.
    Schedule { id: String, form: Option<ScheduleForm>, error: Option<String> },
}

async fn review_page(
    state: &Arc<AppState>,
    review: ReviewState,
    overlay: Overlay,
    action_error: Option<String>,
) -> Html<String> {
    let items: Result<Vec<ReviewItem>, String> = state
        .api
        .get_review_queue(&ReviewQueueParams::default())
        .await
        .into_result("Failed to load review queue")
        .map(|queue| queue.iter().map(to_review_item).collect());

    let mut action_error = action_error;
    let modal = match overlay {
        Overlay::None => ReviewModal::Closed,
        Overlay::Schedule { id, form, error } => {
            let item = items
                .as_ref()
                .ok()
                .and_then(|list| list.iter().find(|i| i.id == id))
                .cloned();
            match item {
                Some(item) => ReviewModal::Schedule {
                    item,
                    form: form.unwrap_or_else(|| ScheduleForm::defaults(today(state))),
                    error,
                },
                // The render left the queue; surface a failed submit above it.
                None => {
                    action_error = action_error.or(error);
                    ReviewModal::Closed
                }
            }
        }
    };

    Html(render_review(ReviewData {
        items,
        state: review,
        modal,
        action_error,
        now: Utc::now(),
    }))
}

pub async fn queue(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReviewQuery>,
) -> impl IntoResponse {
    let review = ReviewState::from_query(params.selected.as_deref(), params.dismissed.as_deref());
    let overlay = match non_empty(params.schedule) {
        Some(id) => Overlay::Schedule {
            id,
            form: None,
            error: None,
        },
        None => Overlay::None,
    };
    review_page(&state, review, overlay, None).await
}

pub async fn approve(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<ApproveForm>,
) -> Response {
    let review = ReviewState::from_query(None, form.dismissed.as_deref());
    match state.api.approve_render(&id).await.into_status("Failed to approve") {
        Ok(()) => {
            info!(render_id = %id, "Render approved");
            see_other(&review.href(&[]))
        }
        Err(error) => review_page(&state, review, Overlay::None, Some(error))
            .await
            .into_response(),
    }
}

/// Schedule then approve. The dialog stays open with the error if either call fails.
pub async fn schedule(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(submit): Form<ScheduleSubmit>,
) -> Response {
    let review = ReviewState::from_query(None, submit.dismissed.as_deref());
    let form = submit.schedule;

    let result = match form.validate(state.config.display_offset) {
        Ok(request) => match state
            .api
            .schedule_render(&id, &request)
            .await
            .into_status("Failed to schedule")
        {
            Ok(()) => {
                info!(render_id = %id, scheduled_for = ?request.scheduled_for, "Render scheduled");
                state
                    .api
                    .approve_render(&id)
                    .await
                    .into_status("Failed to approve")
            }
            Err(error) => Err(error),
        },
        Err(e) => Err(e.to_string()),
    };

    match result {
        Ok(()) => see_other(&review.href(&[])),
        Err(error) => review_page(
            &state,
            review,
            Overlay::Schedule {
                id,
                form: Some(form),
                error: Some(error),
            },
            None,
        )
        .await
        .into_response(),
    }
}
