use serde::{Deserialize, Serialize};

/// Lead sitting in the shared public pool
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PoolLead {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub source: String,
    pub drop_reason_type: String,
    pub drop_reason_detail: String,
    #[serde(default)]
    pub drop_time: Option<String>,
    #[serde(default)]
    pub original_owner: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PoolListData {
    pub list: Vec<PoolLead>,
    pub total: u64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PoolClaimData {
    pub lead_id: String,
    pub claimer: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PoolAssignData {
    pub lead_ids: Vec<String>,
    pub assignee: String,
    pub count: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PoolDeleteData {
    pub lead_id: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PoolBatchDeleteData {
    pub lead_ids: Vec<String>,
    pub count: u32,
}

/// Audit record of a lead moving in or out of the pool
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PoolTransfer {
    pub id: i64,
    pub lead_id: String,
    pub action: String,
    #[serde(default)]
    pub from_owner_id: Option<String>,
    #[serde(default)]
    pub to_owner_id: Option<String>,
    pub operator_staff_id: String,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PoolTransferListData {
    pub list: Vec<PoolTransfer>,
    pub total: u64,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct PoolListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub keyword: Option<String>,
    pub drop_reason: Option<String>,
    pub previous_owner: Option<String>,
}

impl PoolListQuery {
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
            ("drop_reason", &self.drop_reason),
            ("previous_owner", &self.previous_owner),
        ] {
            if let Some(value) = value {
                pairs.push((key.to_string(), value.clone()));
            }
        }
        pairs
    }
}

/// Filters for the pool transfer audit trail
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PoolTransferQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub lead_id: Option<String>,
    pub action: Option<String>,
}

impl PoolTransferQuery {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size".to_string(), page_size.to_string()));
        }
        for (key, value) in [("lead_id", &self.lead_id), ("action", &self.action)] {
            if let Some(value) = value {
                pairs.push((key.to_string(), value.clone()));
            }
        }
        pairs
    }
}
