use crate::error::ApiError;
use crate::models::lead::{
    AiSuggestionData, AiSuggestionRequest, AssignLeadsData, AssignLeadsRequest,
    AssignableStaffData, CreateFollowUpRequest, CreateLeadRequest, FollowUpRecord, Lead,
    LeadDeleteData, LeadDetailData, LeadImportData, LeadListData, LeadListQuery,
    TransferToPoolData, TransferToPoolRequest, UpdateLeadRequest,
};
use crate::services::http::RequestDescriptor;
use crate::services::request::ApiClient;
use crate::utils::constants::AI_SUGGESTION_TIMEOUT_MS;

/// Paged lead list with keyword/status/source/level filters
pub async fn get_leads(client: &ApiClient, query: &LeadListQuery) -> Result<LeadListData, ApiError> {
    client
        .request_as(RequestDescriptor::get("/api/v1/leads").query_pairs(query.to_query()))
        .await
}

/// Lead detail plus its follow-up timeline
pub async fn get_lead_by_id(client: &ApiClient, id: &str) -> Result<LeadDetailData, ApiError> {
    client
        .request_as(RequestDescriptor::get(&format!("/api/v1/leads/{}", id)))
        .await
}

pub async fn create_lead(client: &ApiClient, data: &CreateLeadRequest) -> Result<Lead, ApiError> {
    client
        .request_as(RequestDescriptor::post("/api/v1/leads").json(data)?)
        .await
}

/// Incremental update: only the fields set on `data` are sent
pub async fn update_lead(
    client: &ApiClient,
    id: &str,
    data: &UpdateLeadRequest,
) -> Result<Lead, ApiError> {
    client
        .request_as(RequestDescriptor::put(&format!("/api/v1/leads/{}", id)).json(data)?)
        .await
}

pub async fn delete_lead(client: &ApiClient, id: &str) -> Result<LeadDeleteData, ApiError> {
    client
        .request_as(RequestDescriptor::delete(&format!("/api/v1/leads/{}", id)))
        .await
}

pub async fn add_follow_up(
    client: &ApiClient,
    lead_id: &str,
    data: &CreateFollowUpRequest,
) -> Result<FollowUpRecord, ApiError> {
    client
        .request_as(RequestDescriptor::post(&format!("/api/v1/leads/{}/follow-up", lead_id)).json(data)?)
        .await
}

/// AI follow-up suggestion; the model can take a while, so this call runs
/// with the extended timeout.
pub async fn generate_ai_suggestion(
    client: &ApiClient,
    lead_id: &str,
    data: &AiSuggestionRequest,
) -> Result<AiSuggestionData, ApiError> {
    client
        .request_as(
            RequestDescriptor::post(&format!("/api/v1/leads/{}/ai-suggestion", lead_id))
                .json(data)?
                .timeout(AI_SUGGESTION_TIMEOUT_MS),
        )
        .await
}

/// Assign one or more leads to a staff member
pub async fn assign_leads(
    client: &ApiClient,
    lead_ids: Vec<String>,
    staff_id: &str,
) -> Result<AssignLeadsData, ApiError> {
    let request = AssignLeadsRequest {
        lead_ids,
        staff_id: staff_id.to_string(),
    };
    client
        .request_as(RequestDescriptor::post("/api/v1/leads/assign").json(&request)?)
        .await
}

/// Manually drop leads into the public pool
pub async fn transfer_leads_to_pool(
    client: &ApiClient,
    lead_ids: Vec<String>,
) -> Result<TransferToPoolData, ApiError> {
    let request = TransferToPoolRequest { lead_ids };
    client
        .request_as(RequestDescriptor::post("/api/v1/leads/to-pool").json(&request)?)
        .await
}

/// CSV export (admin only); returns the raw file body
pub async fn export_leads(client: &ApiClient, query: &LeadListQuery) -> Result<String, ApiError> {
    client
        .request_text(RequestDescriptor::get("/api/v1/leads/export").query_pairs(query.to_query()))
        .await
}

/// CSV import via multipart upload
pub async fn import_leads(
    client: &ApiClient,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<LeadImportData, ApiError> {
    client
        .request_as(
            RequestDescriptor::post("/api/v1/leads/import").file("file", file_name, "text/csv", bytes),
        )
        .await
}

/// Staff members the current account may assign leads to
pub async fn get_assignable_staff(client: &ApiClient) -> Result<AssignableStaffData, ApiError> {
    client
        .request_as(RequestDescriptor::get("/api/v1/leads/assignable-staff"))
        .await
}

/// Follow-up activity timeline for one lead
pub async fn get_lead_activities(
    client: &ApiClient,
    lead_id: &str,
) -> Result<Vec<FollowUpRecord>, ApiError> {
    client
        .request_as(RequestDescriptor::get(&format!("/api/v1/leads/{}/activities", lead_id)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::browser::{Navigator, Notifier};
    use crate::services::http::RequestBody;
    use crate::services::session::SessionStore;
    use crate::services::testing::{
        block_on, envelope_ok, MockTransport, RecordingNavigator, RecordingNotifier,
    };
    use crate::utils::constants::DEFAULT_TIMEOUT_MS;
    use crate::utils::storage::MemoryStorage;
    use std::rc::Rc;

    fn client_with(transport: Rc<MockTransport>) -> ApiClient {
        let notifier: Rc<dyn Notifier> = Rc::new(RecordingNotifier::new());
        let navigator: Rc<dyn Navigator> = Rc::new(RecordingNavigator::at("/leads"));
        ApiClient::new(
            transport,
            SessionStore::new(MemoryStorage::shared()),
            notifier,
            navigator,
        )
    }

    #[test]
    fn lead_list_query_builds_only_set_filters() {
        let transport = Rc::new(MockTransport::new());
        transport.ok(
            "/api/v1/leads",
            &envelope_ok(serde_json::json!({"list": [], "total": 0})),
        );
        let client = client_with(transport.clone());

        let query = LeadListQuery {
            page: Some(2),
            page_size: Some(50),
            keyword: Some("张".to_string()),
            status: None,
            source: None,
            level: Some("A".to_string()),
        };
        let data = block_on(get_leads(&client, &query)).unwrap();
        assert_eq!(data.total, 0);

        let call = transport.call(0);
        assert_eq!(
            call.query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("page_size".to_string(), "50".to_string()),
                ("keyword".to_string(), "张".to_string()),
                ("level".to_string(), "A".to_string()),
            ]
        );
        assert_eq!(call.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn ai_suggestion_runs_with_the_extended_timeout() {
        let transport = Rc::new(MockTransport::new());
        transport.ok(
            "/api/v1/leads/l-1/ai-suggestion",
            &envelope_ok(serde_json::json!({
                "nextSentence": "...",
                "nextAction": "...",
                "riskPoints": [],
                "recommendedScript": "...",
                "confidence": 0.8,
                "evidence": [],
                "model": "gpt-4o-mini",
                "generatedAt": "2026-02-25T10:00:00Z"
            })),
        );
        let client = client_with(transport.clone());

        let data = block_on(generate_ai_suggestion(
            &client,
            "l-1",
            &AiSuggestionRequest::default(),
        ))
        .unwrap();
        assert_eq!(data.confidence, 0.8);
        assert_eq!(transport.call(0).timeout_ms, AI_SUGGESTION_TIMEOUT_MS);
    }

    #[test]
    fn import_sends_a_multipart_file_body() {
        let transport = Rc::new(MockTransport::new());
        transport.ok(
            "/api/v1/leads/import",
            &envelope_ok(serde_json::json!({"total": 1, "success": 1, "failed": 0, "errors": []})),
        );
        let client = client_with(transport.clone());

        let data = block_on(import_leads(&client, "leads.csv", b"name,phone\n".to_vec())).unwrap();
        assert_eq!(data.success, 1);
        match &transport.call(0).body {
            RequestBody::File {
                field, file_name, ..
            } => {
                assert_eq!(field, "file");
                assert_eq!(file_name, "leads.csv");
            }
            other => panic!("expected file body, got {:?}", other),
        }
    }

    #[test]
    fn export_returns_the_raw_csv_body() {
        let transport = Rc::new(MockTransport::new());
        transport.ok("/api/v1/leads/export", "id,name\n1,张三\n");
        let client = client_with(transport);

        let body = block_on(export_leads(&client, &LeadListQuery::default())).unwrap();
        assert!(body.starts_with("id,name"));
    }

    #[test]
    fn update_lead_serializes_only_set_fields() {
        let transport = Rc::new(MockTransport::new());
        transport.ok(
            "/api/v1/leads/l-1",
            &envelope_ok(serde_json::json!({
                "id": "l-1",
                "name": "张三",
                "phone": "13800000000",
                "project": "加盟",
                "source": "douyin",
                "status": "signed",
                "level": "A",
                "tags": [],
                "dynamicData": {}
            })),
        );
        let client = client_with(transport.clone());

        let patch = UpdateLeadRequest {
            status: Some("signed".to_string()),
            ..Default::default()
        };
        let lead = block_on(update_lead(&client, "l-1", &patch)).unwrap();
        assert_eq!(lead.status, "signed");

        match &transport.call(0).body {
            RequestBody::Json(value) => {
                assert_eq!(value, &serde_json::json!({"status": "signed"}));
            }
            other => panic!("expected json body, got {:?}", other),
        }
    }
}
