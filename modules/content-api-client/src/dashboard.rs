use crate::types::{ApiResponse, ClientDashboard, CostData, DashboardOverview, Pipeline};
use crate::{with_query, ContentApiClient};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostParams {
    pub client_id: Option<String>,
    pub days: Option<u32>,
}

impl ContentApiClient {
    pub async fn get_dashboard_overview(&self) -> ApiResponse<DashboardOverview> {
        self.get("/api/v1/dashboard/overview").await
    }

    pub async fn get_client_dashboard(&self, client_id: &str) -> ApiResponse<ClientDashboard> {
        self.get(&format!("/api/v1/dashboard/client/{client_id}")).await
    }

    pub async fn get_pipelines(&self) -> ApiResponse<Vec<Pipeline>> {
        self.get("/api/v1/dashboard/pipelines").await
    }

    pub async fn get_costs(&self, params: &CostParams) -> ApiResponse<CostData> {
        let endpoint = with_query(
            "/api/v1/dashboard/costs",
            &[
                ("clientId", params.client_id.clone()),
                ("days", params.days.map(|d| d.to_string())),
            ],
        );
        self.get(&endpoint).await
    }
}
