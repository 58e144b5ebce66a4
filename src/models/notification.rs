use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub read_at: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NotificationsData {
    pub list: Vec<NotificationItem>,
    pub total: u64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NotificationReadAllData {
    pub updated_count: u32,
}

/// Result of triggering the recycle job by hand
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecycleRunResult {
    pub recycled_count: u32,
    pub before_notified_count: u32,
    pub after_notified_count: u32,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct NotificationQuery {
    pub unread_only: bool,
    pub category_prefix: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl NotificationQuery {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if self.unread_only {
            pairs.push(("unreadOnly".to_string(), "true".to_string()));
        }
        if let Some(prefix) = &self.category_prefix {
            pairs.push(("categoryPrefix".to_string(), prefix.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pageSize".to_string(), page_size.to_string()));
        }
        pairs
    }
}
