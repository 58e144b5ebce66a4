use crate::error::ApiError;
use crate::models::reports::{ReportsOverviewData, ReportsQuery};
use crate::services::http::RequestDescriptor;
use crate::services::request::ApiClient;

/// Reports overview with trend window, date range and scope filters
pub async fn get_reports_overview(
    client: &ApiClient,
    query: &ReportsQuery,
) -> Result<ReportsOverviewData, ApiError> {
    client
        .request_as(RequestDescriptor::get("/api/v1/reports/overview").query_pairs(query.to_query()))
        .await
}
