use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Platform settings
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSettingsData {
    pub company_name: String,
    pub official_phone: String,
    pub announcement: String,
    pub annual_target: u64,
    pub monthly_targets: Vec<u64>,
    pub max_leads_per_rep: u32,
    pub global_drop_warning_days: u32,
    pub ai_enabled: bool,
    pub ai_api_key_masked: String,
    pub ai_base_url: String,
    pub ai_model: String,
    pub ai_timeout_seconds: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlatformSettingsRequest {
    pub company_name: String,
    pub official_phone: String,
    pub announcement: String,
    pub annual_target: u64,
    /// Exactly 12 entries, one per month
    pub monthly_targets: Vec<u64>,
    pub max_leads_per_rep: u32,
    pub global_drop_warning_days: u32,
    pub ai_enabled: bool,
    /// None keeps the stored key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_api_key: Option<String>,
    pub ai_base_url: String,
    pub ai_model: String,
    pub ai_timeout_seconds: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlatformAiTestRequest {
    pub ai_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_api_key: Option<String>,
    pub ai_base_url: String,
    pub ai_model: String,
    pub ai_timeout_seconds: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlatformAiTestData {
    pub ok: bool,
    pub message: String,
    pub latency_ms: u64,
    pub model: String,
}

// ---------------------------------------------------------------------------
// Organization: departments and users
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub label: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub leader_staff_id: Option<String>,
    #[serde(default)]
    pub leader_name: Option<String>,
    pub sort_order: i32,
    pub active: bool,
    pub monthly_target: u64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    pub label: String,
    pub leader_staff_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub sort_order: i32,
    pub active: bool,
    pub monthly_target: u64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_staff_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_target: Option<u64>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrgUser {
    pub id: String,
    #[serde(default)]
    pub dept_id: Option<i64>,
    pub name: String,
    pub phone: String,
    pub role: String,
    pub active: bool,
    pub join_date: String,
    pub monthly_target: u64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrgUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<i64>,
    pub name: String,
    pub phone: String,
    pub role: String,
    /// None lets the backend seed the default password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub active: bool,
    pub monthly_target: u64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrgUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_target: Option<u64>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OrgData {
    pub departments: Vec<Department>,
    pub users: Vec<OrgUser>,
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub is_system: bool,
    pub menu_keys: Vec<i64>,
    pub data_scope: String,
    pub active: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(default)]
    pub menu_keys: Vec<i64>,
    /// One of "all", "dept", "self"
    pub data_scope: String,
    pub active: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_keys: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RolesData {
    pub list: Vec<Role>,
}

// ---------------------------------------------------------------------------
// Custom fields
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    pub id: i64,
    pub name: String,
    pub code: String,
    /// One of "text", "textarea", "number", "select", "date"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub placeholder: String,
    pub is_required: bool,
    pub active: bool,
    pub is_system: bool,
    pub sort: i32,
    #[serde(default)]
    pub field_options: Vec<crate::models::dict::DictOption>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomFieldRequest {
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub field_options: Vec<crate::models::dict::DictOption>,
    pub is_required: bool,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomFieldRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_options: Option<Vec<crate::models::dict::DictOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CustomFieldsData {
    pub entity: String,
    pub list: Vec<CustomField>,
}

// ---------------------------------------------------------------------------
// Dictionary management
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DictType {
    pub code: String,
    pub name: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DictItemManage {
    pub id: i64,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub color: Option<String>,
    pub active: bool,
    pub is_system: bool,
    pub sort: i32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateDictItemRequest {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub active: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDictItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DictItemsManageData {
    pub dict_type: String,
    pub items: Vec<DictItemManage>,
}

/// Reorder direction for dictionary items
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MoveDirection {
    Up,
    Down,
}

impl MoveDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveDirection::Up => "up",
            MoveDirection::Down => "down",
        }
    }
}

// ---------------------------------------------------------------------------
// Recycle rules
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RuleItem {
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_high_intent: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RuleNotify {
    pub before_drop: bool,
    pub after_drop: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RecycleRulesData {
    pub enabled: bool,
    pub rule1: RuleItem,
    pub rule2: RuleItem,
    pub rule3: RuleItem,
    pub notify: RuleNotify,
}
