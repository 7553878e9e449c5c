use crate::types::{
    ApiResponse, ClientFull, ClientKeyword, ConnectedPlatform, CreateClientData, Message,
    NewKeyword, PlatformConnectData, UpdateClientData,
};
use crate::{with_query, ContentApiClient};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientListParams {
    pub active: Option<bool>,
    pub industry: Option<String>,
}

impl ContentApiClient {
    pub async fn get_clients(&self, params: &ClientListParams) -> ApiResponse<Vec<ClientFull>> {
        let endpoint = with_query(
            "/api/v1/clients",
            &[
                ("active", params.active.map(|a| a.to_string())),
                ("industry", params.industry.clone()),
            ],
        );
        self.get(&endpoint).await
    }

    pub async fn get_client(&self, id: &str) -> ApiResponse<ClientFull> {
        self.get(&format!("/api/v1/clients/{id}")).await
    }

    pub async fn create_client(&self, data: &CreateClientData) -> ApiResponse<ClientFull> {
        self.post("/api/v1/clients", data).await
    }

    pub async fn update_client(&self, id: &str, data: &UpdateClientData) -> ApiResponse<ClientFull> {
        self.patch(&format!("/api/v1/clients/{id}"), data).await
    }

    pub async fn delete_client(&self, id: &str) -> ApiResponse<Message> {
        self.delete(&format!("/api/v1/clients/{id}")).await
    }

    pub async fn add_client_keyword(
        &self,
        client_id: &str,
        keyword: &NewKeyword,
    ) -> ApiResponse<ClientKeyword> {
        self.post(&format!("/api/v1/clients/{client_id}/keywords"), keyword)
            .await
    }

    pub async fn connect_platform(
        &self,
        client_id: &str,
        data: &PlatformConnectData,
    ) -> ApiResponse<ConnectedPlatform> {
        self.post(&format!("/api/v1/clients/{client_id}/platforms"), data)
            .await
    }
}
