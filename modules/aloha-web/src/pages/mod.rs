//! Page and form handlers. GET handlers fetch what a page needs and render it;
//! POST handlers call the backend and redirect on success or re-render the page
//! with the error on failure.

use std::sync::Arc;

use axum::response::{IntoResponse, Redirect, Response};
use chrono::{NaiveDate, Utc};
use content_api_client::{ClientFull, ClientListParams};
use tracing::warn;

use crate::AppState;

pub mod analytics;
pub mod calendar;
pub mod clients;
pub mod content;
pub mod dashboard;
pub mod review;

pub async fn health() -> &'static str {
    "ok"
}

/// 303 back to a page after a successful action.
fn see_other(location: &str) -> Response {
    Redirect::to(location).into_response()
}

/// Today's date in the display zone.
fn today(state: &AppState) -> NaiveDate {
    Utc::now().with_timezone(&state.config.display_offset).date_naive()
}

/// Active clients for a page's selector. A failed fetch leaves the selector empty.
async fn active_clients(state: &Arc<AppState>) -> Vec<ClientFull> {
    let params = ClientListParams {
        active: Some(true),
        ..Default::default()
    };
    match state.api.get_clients(&params).await.into_result("Failed to load clients") {
        Ok(clients) => clients,
        Err(error) => {
            warn!(%error, "Client list unavailable");
            Vec::new()
        }
    }
}

/// The requested client, else the first one. `None` only when there are no clients.
fn pick_client<'a>(clients: &'a [ClientFull], requested: Option<&str>) -> Option<&'a ClientFull> {
    requested
        .filter(|id| !id.is_empty())
        .and_then(|id| clients.iter().find(|c| c.id == id))
        .or_else(|| clients.first())
}

/// Empty form values read as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
