use crate::error::ApiError;
use crate::models::dashboard::DashboardOverviewData;
use crate::services::http::RequestDescriptor;
use crate::services::request::ApiClient;

/// Workbench overview: stats, todos, pool warnings, goal progress
pub async fn get_dashboard_overview(client: &ApiClient) -> Result<DashboardOverviewData, ApiError> {
    client
        .request_as(RequestDescriptor::get("/api/v1/dashboard/overview"))
        .await
}
