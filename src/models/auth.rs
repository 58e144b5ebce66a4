use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

/// Payload returned by login and refresh
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub staff_id: String,
    pub name: String,
    pub role: String,
    pub phone: String,
    #[serde(default)]
    pub must_change_password: bool,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Profile slice persisted alongside the tokens
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub staff_id: String,
    pub name: String,
    pub role: String,
    pub phone: String,
    #[serde(default)]
    pub must_change_password: bool,
}

impl From<&LoginData> for UserProfile {
    fn from(data: &LoginData) -> Self {
        Self {
            staff_id: data.staff_id.clone(),
            name: data.name.clone(),
            role: data.role.clone(),
            phone: data.phone.clone(),
            must_change_password: data.must_change_password,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MeData {
    pub staff_id: String,
    pub name: String,
    pub phone: String,
    pub role: String,
    #[serde(default)]
    pub must_change_password: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
