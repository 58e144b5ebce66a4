use crate::error::ApiError;
use crate::models::auth::{ChangePasswordRequest, LoginData, LoginRequest, MeData};
use crate::services::http::RequestDescriptor;
use crate::services::request::ApiClient;

/// Login with phone + password
pub async fn login_by_phone(client: &ApiClient, request: &LoginRequest) -> Result<LoginData, ApiError> {
    client
        .request_as(RequestDescriptor::post("/api/v1/auth/login").json(request)?)
        .await
}

/// Exchange the refresh token for fresh tokens.
///
/// Marked skip-auth-retry: a failing refresh must never trigger another
/// refresh cycle.
pub async fn refresh_token(client: &ApiClient, refresh_token: &str) -> Result<LoginData, ApiError> {
    client
        .request_as(
            RequestDescriptor::post("/api/v1/auth/refresh")
                .json(&serde_json::json!({ "refreshToken": refresh_token }))?
                .skip_auth_retry(),
        )
        .await
}

/// Revoke the refresh token server-side
pub async fn logout(client: &ApiClient, refresh_token: &str) -> Result<(), ApiError> {
    client
        .request(
            RequestDescriptor::post("/api/v1/auth/logout")
                .json(&serde_json::json!({ "refreshToken": refresh_token }))?
                .skip_auth_retry(),
        )
        .await?;
    Ok(())
}

pub async fn get_me(client: &ApiClient) -> Result<MeData, ApiError> {
    client
        .request_as(RequestDescriptor::get("/api/v1/auth/me"))
        .await
}

/// Returns fresh tokens once the password is changed
pub async fn change_password(
    client: &ApiClient,
    request: &ChangePasswordRequest,
) -> Result<LoginData, ApiError> {
    client
        .request_as(RequestDescriptor::post("/api/v1/auth/change-password").json(request)?)
        .await
}
