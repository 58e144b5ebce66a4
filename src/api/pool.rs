use serde_json::Value;

use crate::error::ApiError;
use crate::models::pool::{
    PoolAssignData, PoolBatchDeleteData, PoolClaimData, PoolDeleteData, PoolListData,
    PoolListQuery, PoolTransferListData, PoolTransferQuery,
};
use crate::services::http::RequestDescriptor;
use crate::services::request::ApiClient;

/// Paged public-pool list
pub async fn get_pool_leads(client: &ApiClient, query: &PoolListQuery) -> Result<PoolListData, ApiError> {
    client
        .request_as(RequestDescriptor::get("/api/v1/pool/leads").query_pairs(query.to_query()))
        .await
}

/// Claim a single pool lead into the caller's private list
pub async fn claim_lead(client: &ApiClient, id: &str) -> Result<PoolClaimData, ApiError> {
    client
        .request_as(
            RequestDescriptor::post(&format!("/api/v1/pool/leads/{}/claim", id))
                .json(&serde_json::json!({}))?,
        )
        .await
}

/// Claim several pool leads at once
pub async fn batch_claim_leads(client: &ApiClient, ids: Vec<String>) -> Result<Value, ApiError> {
    client
        .request(
            RequestDescriptor::post("/api/v1/pool/batch-claim")
                .json(&serde_json::json!({ "ids": ids }))?,
        )
        .await
}

/// Hand one pool lead to a specific sales rep
pub async fn assign_lead(client: &ApiClient, id: &str, user_id: &str) -> Result<Value, ApiError> {
    client
        .request(
            RequestDescriptor::post(&format!("/api/v1/pool/{}/assign", id))
                .json(&serde_json::json!({ "userId": user_id }))?,
        )
        .await
}

/// Hand several pool leads to a specific sales rep
pub async fn batch_assign_leads(
    client: &ApiClient,
    ids: Vec<String>,
    staff_id: &str,
) -> Result<PoolAssignData, ApiError> {
    client
        .request_as(
            RequestDescriptor::post("/api/v1/pool/leads/assign")
                .json(&serde_json::json!({ "lead_ids": ids, "staff_id": staff_id }))?,
        )
        .await
}

/// Pool movement audit trail, filterable by lead and action
pub async fn get_pool_transfers(
    client: &ApiClient,
    query: &PoolTransferQuery,
) -> Result<PoolTransferListData, ApiError> {
    client
        .request_as(RequestDescriptor::get("/api/v1/pool/transfers").query_pairs(query.to_query()))
        .await
}

/// Permanently delete a pool lead (admin only)
pub async fn delete_pool_lead(client: &ApiClient, id: &str) -> Result<PoolDeleteData, ApiError> {
    client
        .request_as(RequestDescriptor::delete(&format!("/api/v1/pool/leads/{}", id)))
        .await
}

/// Permanently delete several pool leads (admin only)
pub async fn delete_pool_leads_batch(
    client: &ApiClient,
    lead_ids: Vec<String>,
) -> Result<PoolBatchDeleteData, ApiError> {
    client
        .request_as(
            RequestDescriptor::post("/api/v1/pool/leads/delete-batch")
                .json(&serde_json::json!({ "lead_ids": lead_ids }))?,
        )
        .await
}
