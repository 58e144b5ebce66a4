/// Error del cliente API
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Backend envelope came back with `code != 200`
    RequestFailed(String),
    /// 401 that could not be recovered by a token refresh
    AuthFailed,
    /// Transport-level timeout
    Timeout,
    /// Any other network/server failure
    Network(String),
    /// Refresh attempted without a stored refresh token
    MissingRefreshToken,
    /// Response payload did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            ApiError::AuthFailed => write!(f, "Authentication failed"),
            ApiError::Timeout => write!(f, "Request timed out"),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::MissingRefreshToken => write!(f, "Missing refresh token"),
            ApiError::Decode(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
