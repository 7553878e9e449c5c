use std::sync::Arc;

use aloha_common::forms::{KeywordForm, NewClientForm, PlatformForm};
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use chrono::Utc;
use content_api_client::{ClientListParams, UpdateClientData};
use serde::Deserialize;
use tracing::{info, warn};

use super::see_other;
use crate::components::{
    render_client_detail, render_clients, ClientDetailData, ClientsData, ClientsModal, DetailForm,
};
use crate::templates::client_path;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ClientsQuery {
    pub q: Option<String>,
    pub modal: Option<String>,
    pub delete: Option<String>,
}

/// What the clients page should overlay once the list is loaded.
enum Overlay {
    None,
    Add { form: NewClientForm, error: Option<String> },
    Delete { id: String, error: Option<String> },
}

async fn clients_page(state: &Arc<AppState>, query: String, overlay: Overlay) -> Html<String> {
    let clients = state
        .api
        .get_clients(&ClientListParams::default())
        .await
        .into_result("Failed to load clients");

    let modal = match overlay {
        Overlay::None => ClientsModal::Closed,
        Overlay::Add { form, error } => ClientsModal::Add { form, error },
        Overlay::Delete { id, error } => clients
            .as_ref()
            .ok()
            .and_then(|list| list.iter().find(|c| c.id == id))
            .map(|client| ClientsModal::Delete { client: client.clone(), error })
            .unwrap_or(ClientsModal::Closed),
    };

    Html(render_clients(ClientsData {
        clients,
        query,
        modal,
        tz: state.config.display_offset,
    }))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ClientsQuery>,
) -> impl IntoResponse {
    let overlay = match (params.modal.as_deref(), params.delete) {
        (Some("add"), _) => Overlay::Add {
            form: NewClientForm::default(),
            error: None,
        },
        (_, Some(id)) if !id.is_empty() => Overlay::Delete { id, error: None },
        _ => Overlay::None,
    };
    clients_page(&state, params.q.unwrap_or_default(), overlay).await
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewClientForm>,
) -> Response {
    let data = match form.validate() {
        Ok(data) => data,
        Err(e) => {
            let error = Some(e.to_string());
            return clients_page(&state, String::new(), Overlay::Add { form, error })
                .await
                .into_response();
        }
    };

    match state.api.create_client(&data).await.into_result("Failed to create client") {
        Ok(client) => {
            info!(client_id = %client.id, "Client created");
            see_other("/clients")
        }
        Err(error) => clients_page(&state, String::new(), Overlay::Add { form, error: Some(error) })
            .await
            .into_response(),
    }
}

pub async fn delete(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.api.delete_client(&id).await.into_result("Failed to delete client") {
        Ok(_) => {
            info!(client_id = %id, "Client deleted");
            see_other("/clients")
        }
        Err(error) => clients_page(&state, String::new(), Overlay::Delete { id, error: Some(error) })
            .await
            .into_response(),
    }
}

// --- Client detail ---

async fn detail_page(state: &Arc<AppState>, id: String, form: DetailForm) -> Html<String> {
    let (client, dashboard) = tokio::join!(
        state.api.get_client(&id),
        state.api.get_client_dashboard(&id),
    );
    let dashboard = match dashboard.into_result("Failed to load client stats") {
        Ok(dashboard) => Some(dashboard),
        Err(error) => {
            warn!(client_id = %id, %error, "Client stats unavailable");
            None
        }
    };

    Html(render_client_detail(ClientDetailData {
        client: client.into_result("Failed to load client"),
        id,
        dashboard,
        form,
        tz: state.config.display_offset,
        now: Utc::now(),
    }))
}

pub async fn detail(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> impl IntoResponse {
    detail_page(&state, id, DetailForm::Clean).await
}

pub async fn add_keyword(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<KeywordForm>,
) -> Response {
    let result = match form.validate() {
        Ok(keyword) => state
            .api
            .add_client_keyword(&id, &keyword)
            .await
            .into_result("Failed to add keyword")
            .map(|_| ()),
        Err(e) => Err(e.to_string()),
    };
    match result {
        Ok(()) => see_other(&client_path(&id)),
        Err(error) => detail_page(&state, id, DetailForm::Keyword { form, error })
            .await
            .into_response(),
    }
}

pub async fn connect_platform(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<PlatformForm>,
) -> Response {
    let result = match form.validate() {
        Ok(data) => state
            .api
            .connect_platform(&id, &data)
            .await
            .into_result("Failed to connect platform")
            .map(|connected| info!(client_id = %id, platform = %connected.platform, "Platform connected")),
        Err(e) => Err(e.to_string()),
    };
    match result {
        Ok(()) => see_other(&client_path(&id)),
        Err(error) => {
            // Tokens are never echoed back into the page.
            let form = PlatformForm {
                access_token: String::new(),
                refresh_token: None,
                ..form
            };
            detail_page(&state, id, DetailForm::Platform { form, error })
                .await
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

pub async fn set_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Response {
    let status = form.status.trim();
    if status != "active" && status != "paused" {
        let error = format!("Invalid status: {status}");
        return detail_page(&state, id, DetailForm::Status { error }).await.into_response();
    }

    let update = UpdateClientData {
        status: Some(status.to_string()),
        ..Default::default()
    };
    match state.api.update_client(&id, &update).await.into_result("Failed to update client") {
        Ok(_) => see_other(&client_path(&id)),
        Err(error) => detail_page(&state, id, DetailForm::Status { error }).await.into_response(),
    }
}
