/// Base URL for the backend API
/// Configured at compile time:
/// - Default: same-origin (requests go straight to /api/v1/...)
/// - Override via API_BASE_URL env var (loaded from .env by build.rs)
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "",
};

// localStorage keys for the persisted session
pub const ACCESS_TOKEN_KEY: &str = "mengke_access_token";
pub const REFRESH_TOKEN_KEY: &str = "mengke_refresh_token";
pub const USER_KEY: &str = "mengke_user";

/// Default request timeout
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Extended timeout for AI suggestion calls (the model can be slow)
pub const AI_SUGGESTION_TIMEOUT_MS: u32 = 30_000;

pub const LOGIN_PATH: &str = "/login";
