use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub project: String,
    pub source: String,
    pub status: String,
    pub level: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_follow_up: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub dynamic_data: Map<String, Value>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LeadListData {
    pub list: Vec<Lead>,
    pub total: u64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpRecord {
    pub id: i64,
    pub lead_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub operator: String,
    pub timestamp: String,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub ai_analysis: Option<Value>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LeadDetailData {
    pub lead: Lead,
    pub timeline: Vec<FollowUpRecord>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
    pub name: String,
    pub phone: String,
    pub project: String,
    pub source: String,
    pub status: String,
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub dynamic_data: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_follow_up: Option<DateTime<Utc>>,
}

/// Incremental update: only the set fields are sent
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_data: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_follow_up: Option<DateTime<Utc>>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateFollowUpRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub operator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<Value>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_goal: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestionData {
    pub next_sentence: String,
    pub next_action: String,
    pub risk_points: Vec<String>,
    pub recommended_script: String,
    pub confidence: f64,
    pub evidence: Vec<String>,
    pub model: String,
    pub generated_at: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignLeadsRequest {
    pub lead_ids: Vec<String>,
    pub staff_id: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignLeadsData {
    pub lead_ids: Vec<String>,
    pub staff_id: String,
    pub count: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TransferToPoolRequest {
    pub lead_ids: Vec<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TransferToPoolData {
    pub lead_ids: Vec<String>,
    pub count: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LeadDeleteData {
    pub lead_id: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LeadImportData {
    pub total: u32,
    pub success: u32,
    pub failed: u32,
    pub errors: Vec<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignableStaff {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub dept_name: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AssignableStaffData {
    pub list: Vec<AssignableStaff>,
}

/// Pagination and filters for the lead list
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LeadListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub keyword: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub level: Option<String>,
}

impl LeadListQuery {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size".to_string(), page_size.to_string()));
        }
        for (key, value) in [
            ("keyword", &self.keyword),
            ("status", &self.status),
            ("source", &self.source),
            ("level", &self.level),
        ] {
            if let Some(value) = value {
                pairs.push((key.to_string(), value.clone()));
            }
        }
        pairs
    }
}
