use crate::error::ApiError;
use crate::models::notification::{
    NotificationQuery, NotificationReadAllData, NotificationsData, RecycleRunResult,
};
use crate::services::http::RequestDescriptor;
use crate::services::request::ApiClient;

pub async fn get_notifications(
    client: &ApiClient,
    query: &NotificationQuery,
) -> Result<NotificationsData, ApiError> {
    client
        .request_as(RequestDescriptor::get("/api/v1/notifications").query_pairs(query.to_query()))
        .await
}

pub async fn mark_notification_read(client: &ApiClient, notification_id: i64) -> Result<(), ApiError> {
    client
        .request(RequestDescriptor::put(&format!(
            "/api/v1/notifications/{}/read",
            notification_id
        )))
        .await?;
    Ok(())
}

/// Mark everything read, optionally restricted to one category prefix
pub async fn mark_all_notifications_read(
    client: &ApiClient,
    category_prefix: Option<&str>,
) -> Result<NotificationReadAllData, ApiError> {
    let mut descriptor = RequestDescriptor::put("/api/v1/notifications/read-all");
    if let Some(prefix) = category_prefix {
        descriptor = descriptor.query("categoryPrefix", prefix);
    }
    client.request_as(descriptor).await
}

/// Kick the recycle job immediately instead of waiting for its schedule
pub async fn run_recycle_now(client: &ApiClient) -> Result<RecycleRunResult, ApiError> {
    client
        .request_as(RequestDescriptor::post("/api/v1/notifications/recycle/run-now"))
        .await
}
