use std::sync::Arc;

use aloha_common::calendar::{parse_day, Month};
use aloha_common::{to_calendar_item, to_scheduled_item};
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use content_api_client::CalendarRange;
use serde::Deserialize;
use tracing::warn;

use super::{active_clients, pick_client, today};
use crate::components::{render_calendar, CalendarData};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub client_id: Option<String>,
    /// `YYYY-MM`
    pub month: Option<String>,
    /// `YYYY-MM-DD`
    pub day: Option<String>,
}

pub async fn month(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CalendarQuery>,
) -> impl IntoResponse {
    let today = today(&state);
    let day = params.day.as_deref().and_then(parse_day);
    let month = params
        .month
        .as_deref()
        .and_then(Month::parse)
        .or_else(|| day.map(Month::containing))
        .unwrap_or_else(|| Month::containing(today));

    let clients = active_clients(&state).await;
    let client = pick_client(&clients, params.client_id.as_deref()).cloned();

    let (items, scheduled) = match &client {
        Some(client) => {
            let (start, end) = month.api_range(state.config.display_offset);
            let range = CalendarRange {
                start: Some(start),
                end: Some(end),
            };
            let (calendar, scheduled) = tokio::join!(
                state.api.get_calendar(&client.id, &range),
                state.api.get_scheduled(&client.id),
            );

            let items = calendar
                .into_result("Failed to load calendar")
                .map(|entries| entries.iter().map(|e| to_calendar_item(e, client)).collect());
            let scheduled = match scheduled.into_result("Failed to load scheduled posts") {
                Ok(list) => list.iter().map(|s| to_scheduled_item(s, &client.id)).collect(),
                Err(error) => {
                    warn!(client_id = %client.id, %error, "Scheduled posts unavailable");
                    Vec::new()
                }
            };
            (items, scheduled)
        }
        None => (Ok(Vec::new()), Vec::new()),
    };

    Html(render_calendar(CalendarData {
        client_id: client.map(|c| c.id),
        clients,
        month,
        today,
        day,
        items,
        scheduled,
        tz: state.config.display_offset,
    }))
}
