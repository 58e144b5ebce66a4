use crate::error::ApiError;
use crate::models::settings::{
    CreateCustomFieldRequest, CreateDepartmentRequest, CreateDictItemRequest, CreateOrgUserRequest,
    CreateRoleRequest, CustomField, CustomFieldsData, Department, DictItemManage,
    DictItemsManageData, DictType, MoveDirection, OrgData, OrgUser, PlatformAiTestData,
    PlatformAiTestRequest, PlatformSettingsData, RecycleRulesData, Role, RolesData,
    UpdateCustomFieldRequest, UpdateDepartmentRequest, UpdateDictItemRequest, UpdateOrgUserRequest,
    UpdatePlatformSettingsRequest, UpdateRoleRequest,
};
use crate::services::http::RequestDescriptor;
use crate::services::request::ApiClient;

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

pub async fn get_platform_settings(client: &ApiClient) -> Result<PlatformSettingsData, ApiError> {
    client
        .request_as(RequestDescriptor::get("/api/v1/settings/platform"))
        .await
}

pub async fn save_platform_settings(
    client: &ApiClient,
    data: &UpdatePlatformSettingsRequest,
) -> Result<PlatformSettingsData, ApiError> {
    client
        .request_as(RequestDescriptor::put("/api/v1/settings/platform").json(data)?)
        .await
}

/// Fire a probe request against the configured AI provider
pub async fn test_platform_ai_connection(
    client: &ApiClient,
    data: &PlatformAiTestRequest,
) -> Result<PlatformAiTestData, ApiError> {
    client
        .request_as(RequestDescriptor::post("/api/v1/settings/platform/test-ai").json(data)?)
        .await
}

// ---------------------------------------------------------------------------
// Organization
// ---------------------------------------------------------------------------

/// Departments + users in one shot
pub async fn get_org_data(client: &ApiClient) -> Result<OrgData, ApiError> {
    client
        .request_as(RequestDescriptor::get("/api/v1/settings/org"))
        .await
}

pub async fn create_department(
    client: &ApiClient,
    data: &CreateDepartmentRequest,
) -> Result<Department, ApiError> {
    client
        .request_as(RequestDescriptor::post("/api/v1/settings/org/departments").json(data)?)
        .await
}

pub async fn update_department(
    client: &ApiClient,
    id: i64,
    data: &UpdateDepartmentRequest,
) -> Result<Department, ApiError> {
    client
        .request_as(RequestDescriptor::put(&format!("/api/v1/settings/org/departments/{}", id)).json(data)?)
        .await
}

pub async fn delete_department(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .request(RequestDescriptor::delete(&format!("/api/v1/settings/org/departments/{}", id)))
        .await?;
    Ok(())
}

pub async fn create_org_user(
    client: &ApiClient,
    data: &CreateOrgUserRequest,
) -> Result<OrgUser, ApiError> {
    client
        .request_as(RequestDescriptor::post("/api/v1/settings/org/users").json(data)?)
        .await
}

pub async fn update_org_user(
    client: &ApiClient,
    id: &str,
    data: &UpdateOrgUserRequest,
) -> Result<OrgUser, ApiError> {
    client
        .request_as(RequestDescriptor::put(&format!("/api/v1/settings/org/users/{}", id)).json(data)?)
        .await
}

pub async fn delete_org_user(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client
        .request(RequestDescriptor::delete(&format!("/api/v1/settings/org/users/{}", id)))
        .await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

pub async fn get_roles(client: &ApiClient) -> Result<RolesData, ApiError> {
    client
        .request_as(RequestDescriptor::get("/api/v1/settings/roles"))
        .await
}

pub async fn create_role(client: &ApiClient, data: &CreateRoleRequest) -> Result<Role, ApiError> {
    client
        .request_as(RequestDescriptor::post("/api/v1/settings/roles").json(data)?)
        .await
}

pub async fn update_role(
    client: &ApiClient,
    id: i64,
    data: &UpdateRoleRequest,
) -> Result<Role, ApiError> {
    client
        .request_as(RequestDescriptor::put(&format!("/api/v1/settings/roles/{}", id)).json(data)?)
        .await
}

pub async fn delete_role(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .request(RequestDescriptor::delete(&format!("/api/v1/settings/roles/{}", id)))
        .await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Custom fields
// ---------------------------------------------------------------------------

/// Custom field definitions for one entity (currently only "lead")
pub async fn get_custom_fields(client: &ApiClient, entity: &str) -> Result<CustomFieldsData, ApiError> {
    client
        .request_as(RequestDescriptor::get(&format!("/api/v1/settings/fields/{}", entity)))
        .await
}

pub async fn create_custom_field(
    client: &ApiClient,
    entity: &str,
    data: &CreateCustomFieldRequest,
) -> Result<CustomField, ApiError> {
    client
        .request_as(RequestDescriptor::post(&format!("/api/v1/settings/fields/{}", entity)).json(data)?)
        .await
}

pub async fn update_custom_field(
    client: &ApiClient,
    id: i64,
    data: &UpdateCustomFieldRequest,
) -> Result<CustomField, ApiError> {
    client
        .request_as(RequestDescriptor::put(&format!("/api/v1/settings/fields/item/{}", id)).json(data)?)
        .await
}

pub async fn delete_custom_field(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .request(RequestDescriptor::delete(&format!("/api/v1/settings/fields/item/{}", id)))
        .await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Dictionary management
// ---------------------------------------------------------------------------

pub async fn get_dict_types(client: &ApiClient) -> Result<Vec<DictType>, ApiError> {
    client
        .request_as(RequestDescriptor::get("/api/v1/settings/dict/types"))
        .await
}

pub async fn get_dict_items_manage(
    client: &ApiClient,
    dict_type: &str,
) -> Result<DictItemsManageData, ApiError> {
    client
        .request_as(RequestDescriptor::get(&format!("/api/v1/settings/dict/{}", dict_type)))
        .await
}

pub async fn create_dict_item(
    client: &ApiClient,
    dict_type: &str,
    data: &CreateDictItemRequest,
) -> Result<DictItemManage, ApiError> {
    client
        .request_as(RequestDescriptor::post(&format!("/api/v1/settings/dict/{}", dict_type)).json(data)?)
        .await
}

pub async fn update_dict_item(
    client: &ApiClient,
    id: i64,
    data: &UpdateDictItemRequest,
) -> Result<DictItemManage, ApiError> {
    client
        .request_as(RequestDescriptor::put(&format!("/api/v1/settings/dict/item/{}", id)).json(data)?)
        .await
}

pub async fn delete_dict_item(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .request(RequestDescriptor::delete(&format!("/api/v1/settings/dict/item/{}", id)))
        .await?;
    Ok(())
}

/// Move a dictionary item up or down within its type
pub async fn move_dict_item(
    client: &ApiClient,
    id: i64,
    direction: MoveDirection,
) -> Result<(), ApiError> {
    client
        .request(
            RequestDescriptor::post(&format!("/api/v1/settings/dict/item/{}/move", id))
                .json(&serde_json::json!({ "direction": direction.as_str() }))?,
        )
        .await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Recycle rules
// ---------------------------------------------------------------------------

pub async fn get_recycle_rules(client: &ApiClient) -> Result<RecycleRulesData, ApiError> {
    client
        .request_as(RequestDescriptor::get("/api/v1/settings/rules"))
        .await
}

pub async fn save_recycle_rules(
    client: &ApiClient,
    data: &RecycleRulesData,
) -> Result<RecycleRulesData, ApiError> {
    client
        .request_as(RequestDescriptor::put("/api/v1/settings/rules").json(data)?)
        .await
}
