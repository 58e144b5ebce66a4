// ============================================================================
// REQUEST PIPELINE - auth header, envelope unwrap, 401 refresh-and-retry
// ============================================================================
// Every backend call goes through here. Invariants:
// - at most one refresh HTTP call in flight, shared by all waiters
// - a request retries at most once after a 401
// - exactly one user-facing notification per failed call
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::services::browser::{Navigator, Notifier};
use crate::services::http::{HttpResponse, HttpTransport, RequestDescriptor, TransportError};
use crate::services::session::SessionStore;
use crate::utils::constants::LOGIN_PATH;

const TIMEOUT_MESSAGE: &str = "请求超时，请稍后重试（AI模型响应较慢时可在系统设置提高超时秒数）";
const NETWORK_MESSAGE: &str = "网络或服务器错误";
const REQUEST_FAILED_MESSAGE: &str = "请求失败";

type SharedRefresh = Shared<LocalBoxFuture<'static, Result<String, ApiError>>>;

/// Cliente API - all outbound calls pass through `request`/`request_as`
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn HttpTransport>,
    session: SessionStore,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
    /// Single-flight slot for the refresh call
    refreshing: Rc<RefCell<Option<SharedRefresh>>>,
}

impl ApiClient {
    pub fn new(
        transport: Rc<dyn HttpTransport>,
        session: SessionStore,
        notifier: Rc<dyn Notifier>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            session,
            notifier,
            navigator,
            refreshing: Rc::new(RefCell::new(None)),
        }
    }

    /// Browser wiring: gloo transport + localStorage + alert/location
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        use crate::services::browser::{BrowserNavigator, BrowserNotifier};
        use crate::services::http::GlooTransport;
        use crate::utils::constants::API_BASE_URL;
        use crate::utils::storage::LocalStorage;

        Self::new(
            Rc::new(GlooTransport::new(API_BASE_URL)),
            SessionStore::new(Rc::new(LocalStorage)),
            Rc::new(BrowserNotifier),
            Rc::new(BrowserNavigator),
        )
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Dispatch a call and unwrap the `{code, message, data}` envelope.
    ///
    /// Payloads without a numeric `code` (plain arrays, raw objects) pass
    /// through unmodified.
    pub async fn request(&self, descriptor: RequestDescriptor) -> Result<Value, ApiError> {
        let response = self.dispatch_with_retry(descriptor).await?;
        self.unwrap_envelope(response)
    }

    /// `request` + typed deserialization of the unwrapped payload
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, ApiError> {
        let value = self.request(descriptor).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("Parse error: {}", e)))
    }

    /// Raw body variant for non-JSON responses (CSV export); same auth and
    /// retry semantics, no envelope handling.
    pub async fn request_text(&self, descriptor: RequestDescriptor) -> Result<String, ApiError> {
        let response = self.dispatch_with_retry(descriptor).await?;
        Ok(response.body)
    }

    async fn dispatch_with_retry(
        &self,
        mut descriptor: RequestDescriptor,
    ) -> Result<HttpResponse, ApiError> {
        let token = self.session.access_token();
        if !token.is_empty() {
            descriptor.set_header("Authorization", format!("Bearer {}", token));
        }

        loop {
            match self.transport.dispatch(&descriptor).await {
                Ok(response) => return Ok(response),
                Err(TransportError::Status { status: 401, body }) if !descriptor.skip_auth_retry => {
                    if !descriptor.retried {
                        descriptor.retried = true;
                        match self.refresh_access_token_once().await {
                            Ok(new_token) => {
                                descriptor
                                    .set_header("Authorization", format!("Bearer {}", new_token));
                                continue;
                            }
                            Err(refresh_error) => {
                                log::warn!("⚠️ Refresh de token falló: {}", refresh_error);
                            }
                        }
                    }
                    // Refreshed token rejected again, or the refresh itself
                    // failed: terminal logout.
                    self.force_logout();
                    self.notify_transport_error(&TransportError::Status { status: 401, body });
                    return Err(ApiError::AuthFailed);
                }
                Err(error) => {
                    self.notify_transport_error(&error);
                    return Err(classify_transport_error(error));
                }
            }
        }
    }

    /// Single-flight refresh: the first caller issues the HTTP call, later
    /// callers await the same shared outcome. The slot clears on completion
    /// (success or failure) so a future 401 can try again.
    fn refresh_access_token_once(&self) -> SharedRefresh {
        if let Some(pending) = self.refreshing.borrow().as_ref() {
            log::info!("🔁 Refresh ya en curso, compartiendo resultado");
            return pending.clone();
        }

        let transport = self.transport.clone();
        let session = self.session.clone();
        let slot = self.refreshing.clone();
        let pending: SharedRefresh = async move {
            let result = perform_refresh(transport, session).await;
            slot.borrow_mut().take();
            result
        }
        .boxed_local()
        .shared();

        *self.refreshing.borrow_mut() = Some(pending.clone());
        pending
    }

    fn unwrap_envelope(&self, response: HttpResponse) -> Result<Value, ApiError> {
        let payload: Value = match serde_json::from_str(&response.body) {
            Ok(value) => value,
            // Non-JSON bodies pass through as plain text
            Err(_) => return Ok(Value::String(response.body)),
        };

        let Some(code) = payload.get("code").and_then(|c| c.as_i64()) else {
            return Ok(payload);
        };

        if code == 200 {
            return Ok(payload.get("data").cloned().unwrap_or(Value::Null));
        }

        let message = payload
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or(REQUEST_FAILED_MESSAGE)
            .to_string();
        self.notifier.error(&message);
        Err(ApiError::RequestFailed(message))
    }

    fn notify_transport_error(&self, error: &TransportError) {
        let message = match error {
            TransportError::Timeout => TIMEOUT_MESSAGE.to_string(),
            TransportError::Network(msg) if msg.to_lowercase().contains("timeout") => {
                TIMEOUT_MESSAGE.to_string()
            }
            TransportError::Status { body, .. } => extract_message(body)
                .unwrap_or_else(|| NETWORK_MESSAGE.to_string()),
            TransportError::Network(msg) if !msg.is_empty() => msg.clone(),
            TransportError::Network(_) => NETWORK_MESSAGE.to_string(),
        };
        self.notifier.error(&message);
    }

    fn force_logout(&self) {
        self.session.clear();
        if self.navigator.current_path() != LOGIN_PATH {
            self.navigator.redirect(LOGIN_PATH);
        }
    }
}

/// Issue the refresh HTTP call and rotate the stored access token.
///
/// Goes straight to the transport so it can never recurse into the
/// refresh-and-retry path, and never notifies by itself.
async fn perform_refresh(
    transport: Rc<dyn HttpTransport>,
    session: SessionStore,
) -> Result<String, ApiError> {
    let refresh_token = session.refresh_token();
    if refresh_token.is_empty() {
        return Err(ApiError::MissingRefreshToken);
    }

    let descriptor = RequestDescriptor::post("/api/v1/auth/refresh")
        .json(&serde_json::json!({ "refreshToken": refresh_token }))?
        .skip_auth_retry();

    let response = transport
        .dispatch(&descriptor)
        .await
        .map_err(classify_transport_error)?;

    let payload: Value = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Decode(format!("Parse error: {}", e)))?;
    let access_token = payload
        .get("data")
        .and_then(|data| data.get("accessToken"))
        .and_then(|token| token.as_str())
        .unwrap_or_default()
        .to_string();

    if access_token.is_empty() {
        return Err(ApiError::RequestFailed("refresh failed".to_string()));
    }

    session.update_access_token(&access_token);
    log::info!("🔑 Access token renovado");
    Ok(access_token)
}

fn classify_transport_error(error: TransportError) -> ApiError {
    match error {
        TransportError::Timeout => ApiError::Timeout,
        TransportError::Network(msg) if msg.to_lowercase().contains("timeout") => ApiError::Timeout,
        TransportError::Network(msg) => ApiError::Network(msg),
        TransportError::Status { body, .. } => {
            ApiError::Network(extract_message(&body).unwrap_or_else(|| NETWORK_MESSAGE.to_string()))
        }
    }
}

/// Backend error bodies usually carry an envelope `message`
fn extract_message(body: &str) -> Option<String> {
    let payload: Value = serde_json::from_str(body).ok()?;
    payload
        .get("message")
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{
        block_on, envelope_ok, MockTransport, RecordingNavigator, RecordingNotifier,
    };
    use crate::utils::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
    use crate::utils::storage::{MemoryStorage, StorageBackend};
    use futures::future::join;

    const REFRESH_URL: &str = "/api/v1/auth/refresh";

    struct Harness {
        client: ApiClient,
        transport: Rc<MockTransport>,
        notifier: Rc<RecordingNotifier>,
        navigator: Rc<RecordingNavigator>,
        storage: Rc<MemoryStorage>,
    }

    fn harness() -> Harness {
        let transport = Rc::new(MockTransport::new());
        let notifier = Rc::new(RecordingNotifier::new());
        let navigator = Rc::new(RecordingNavigator::at("/leads"));
        let storage = MemoryStorage::shared();
        let session = SessionStore::new(storage.clone());
        let client = ApiClient::new(
            transport.clone(),
            session,
            notifier.clone(),
            navigator.clone(),
        );
        Harness {
            client,
            transport,
            notifier,
            navigator,
            storage,
        }
    }

    fn logged_in(h: &Harness) {
        h.storage.set(ACCESS_TOKEN_KEY, "acc-old");
        h.storage.set(REFRESH_TOKEN_KEY, "ref-1");
    }

    #[test]
    fn unwraps_envelope_data_on_code_200() {
        let h = harness();
        h.transport
            .ok("/api/v1/dashboard/overview", &envelope_ok(serde_json::json!({"announcement": "hi"})));

        let value = block_on(h.client.request(RequestDescriptor::get("/api/v1/dashboard/overview")))
            .unwrap();
        assert_eq!(value["announcement"], "hi");
        assert!(h.notifier.messages().is_empty());
    }

    #[test]
    fn envelope_code_not_200_notifies_and_fails() {
        let h = harness();
        h.transport.ok(
            "/api/v1/leads",
            r#"{"code": 403, "message": "没有权限", "data": null}"#,
        );

        let result = block_on(h.client.request(RequestDescriptor::get("/api/v1/leads")));
        assert_eq!(result, Err(ApiError::RequestFailed("没有权限".to_string())));
        assert_eq!(h.notifier.messages(), vec!["没有权限".to_string()]);
    }

    #[test]
    fn payload_without_code_passes_through() {
        let h = harness();
        h.transport.ok("/api/v1/dict/lead_status", r#"[{"value": "pending", "label": "待跟进"}]"#);

        let value =
            block_on(h.client.request(RequestDescriptor::get("/api/v1/dict/lead_status"))).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["value"], "pending");
    }

    #[test]
    fn bearer_header_attached_only_when_token_present() {
        let h = harness();
        h.transport.ok("/api/v1/leads", &envelope_ok(serde_json::json!({})));
        block_on(h.client.request(RequestDescriptor::get("/api/v1/leads"))).unwrap();
        assert_eq!(h.transport.bearer_of(0), None);

        logged_in(&h);
        h.transport.ok("/api/v1/leads", &envelope_ok(serde_json::json!({})));
        block_on(h.client.request(RequestDescriptor::get("/api/v1/leads"))).unwrap();
        assert_eq!(h.transport.bearer_of(1), Some("Bearer acc-old".to_string()));
    }

    #[test]
    fn transparent_retry_after_401_with_successful_refresh() {
        let h = harness();
        logged_in(&h);
        h.transport.fail_status("/api/v1/leads", 401, "");
        h.transport
            .ok(REFRESH_URL, &envelope_ok(serde_json::json!({"accessToken": "acc-new"})));
        h.transport
            .ok("/api/v1/leads", &envelope_ok(serde_json::json!({"total": 0, "list": []})));

        let value = block_on(h.client.request(RequestDescriptor::get("/api/v1/leads"))).unwrap();
        assert_eq!(value["total"], 0);

        // invisible to the caller: no notification, token rotated
        assert!(h.notifier.messages().is_empty());
        assert_eq!(h.storage.get(ACCESS_TOKEN_KEY), Some("acc-new".to_string()));
        assert_eq!(h.transport.calls_to(REFRESH_URL), 1);
        assert_eq!(h.transport.calls_to("/api/v1/leads"), 2);
        assert_eq!(h.transport.bearer_of(2), Some("Bearer acc-new".to_string()));
    }

    #[test]
    fn concurrent_401s_share_one_refresh_call() {
        let h = harness();
        logged_in(&h);
        h.transport.fail_status("/api/v1/leads", 401, "");
        h.transport.fail_status("/api/v1/pool/leads", 401, "");
        h.transport
            .ok(REFRESH_URL, &envelope_ok(serde_json::json!({"accessToken": "acc-new"})));
        h.transport.ok("/api/v1/leads", &envelope_ok(serde_json::json!({"a": 1})));
        h.transport.ok("/api/v1/pool/leads", &envelope_ok(serde_json::json!({"b": 2})));

        let (first, second) = block_on(join(
            h.client.request(RequestDescriptor::get("/api/v1/leads")),
            h.client.request(RequestDescriptor::get("/api/v1/pool/leads")),
        ));

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(h.transport.calls_to(REFRESH_URL), 1);
        assert!(h.notifier.messages().is_empty());
    }

    #[test]
    fn concurrent_401s_share_a_failed_refresh() {
        let h = harness();
        logged_in(&h);
        h.transport.fail_status("/api/v1/leads", 401, "");
        h.transport.fail_status("/api/v1/pool/leads", 401, "");
        h.transport.fail_status(REFRESH_URL, 401, "");

        let (first, second) = block_on(join(
            h.client.request(RequestDescriptor::get("/api/v1/leads")),
            h.client.request(RequestDescriptor::get("/api/v1/pool/leads")),
        ));

        assert_eq!(first, Err(ApiError::AuthFailed));
        assert_eq!(second, Err(ApiError::AuthFailed));
        assert_eq!(h.transport.calls_to(REFRESH_URL), 1);
        // session wiped, one redirect, one notification per failed call
        assert_eq!(h.storage.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(h.navigator.redirects(), vec![LOGIN_PATH.to_string()]);
        assert_eq!(h.notifier.messages().len(), 2);
    }

    #[test]
    fn skip_auth_retry_never_triggers_refresh() {
        let h = harness();
        logged_in(&h);
        h.transport.fail_status("/api/v1/auth/logout", 401, "");

        let result = block_on(h.client.request(
            RequestDescriptor::post("/api/v1/auth/logout").skip_auth_retry(),
        ));
        assert!(matches!(result, Err(ApiError::Network(_))));
        assert_eq!(h.transport.calls_to(REFRESH_URL), 0);
        assert_eq!(h.notifier.messages().len(), 1);
        // no forced logout on the skip path
        assert_eq!(h.storage.get(ACCESS_TOKEN_KEY), Some("acc-old".to_string()));
    }

    #[test]
    fn repeated_401_after_refresh_goes_to_forced_logout() {
        let h = harness();
        logged_in(&h);
        h.transport.fail_status("/api/v1/leads", 401, "");
        h.transport
            .ok(REFRESH_URL, &envelope_ok(serde_json::json!({"accessToken": "acc-new"})));
        h.transport.fail_status("/api/v1/leads", 401, "");

        let result = block_on(h.client.request(RequestDescriptor::get("/api/v1/leads")));
        assert_eq!(result, Err(ApiError::AuthFailed));
        // exactly one refresh cycle, then logout
        assert_eq!(h.transport.calls_to(REFRESH_URL), 1);
        assert_eq!(h.storage.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(h.navigator.redirects(), vec![LOGIN_PATH.to_string()]);
        assert_eq!(h.notifier.messages().len(), 1);
    }

    #[test]
    fn failed_refresh_forces_logout_and_redirect() {
        let h = harness();
        logged_in(&h);
        h.transport.fail_status("/api/v1/leads", 401, "");
        h.transport.fail_status(REFRESH_URL, 500, r#"{"message": "server down"}"#);

        let result = block_on(h.client.request(RequestDescriptor::get("/api/v1/leads")));
        assert_eq!(result, Err(ApiError::AuthFailed));
        assert_eq!(h.storage.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(h.storage.get(REFRESH_TOKEN_KEY), None);
        assert_eq!(h.navigator.redirects(), vec![LOGIN_PATH.to_string()]);
    }

    #[test]
    fn no_redirect_when_already_on_login_page() {
        let h = harness();
        logged_in(&h);
        h.navigator.set_path(LOGIN_PATH);
        h.transport.fail_status("/api/v1/leads", 401, "");
        h.transport.fail_status(REFRESH_URL, 401, "");

        let _ = block_on(h.client.request(RequestDescriptor::get("/api/v1/leads")));
        assert!(h.navigator.redirects().is_empty());
    }

    #[test]
    fn missing_refresh_token_fails_the_retry_immediately() {
        let h = harness();
        h.storage.set(ACCESS_TOKEN_KEY, "acc-old"); // no refresh token stored
        h.transport.fail_status("/api/v1/leads", 401, "");

        let result = block_on(h.client.request(RequestDescriptor::get("/api/v1/leads")));
        assert_eq!(result, Err(ApiError::AuthFailed));
        assert_eq!(h.transport.calls_to(REFRESH_URL), 0);
        assert_eq!(h.navigator.redirects(), vec![LOGIN_PATH.to_string()]);
    }

    #[test]
    fn refresh_slot_clears_after_failure_so_later_calls_retry() {
        let h = harness();
        logged_in(&h);
        h.transport.fail_status("/api/v1/leads", 401, "");
        h.transport.fail_status(REFRESH_URL, 401, "");
        let _ = block_on(h.client.request(RequestDescriptor::get("/api/v1/leads")));
        assert_eq!(h.transport.calls_to(REFRESH_URL), 1);

        // log back in; the next 401 must be able to start a fresh refresh
        logged_in(&h);
        h.transport.fail_status("/api/v1/leads", 401, "");
        h.transport
            .ok(REFRESH_URL, &envelope_ok(serde_json::json!({"accessToken": "acc-new"})));
        h.transport.ok("/api/v1/leads", &envelope_ok(serde_json::json!({})));
        let result = block_on(h.client.request(RequestDescriptor::get("/api/v1/leads")));
        assert!(result.is_ok());
        assert_eq!(h.transport.calls_to(REFRESH_URL), 2);
    }

    #[test]
    fn timeout_shows_the_dedicated_message() {
        let h = harness();
        h.transport.fail("/api/v1/leads", TransportError::Timeout);

        let result = block_on(h.client.request(RequestDescriptor::get("/api/v1/leads")));
        assert_eq!(result, Err(ApiError::Timeout));
        let messages = h.notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("请求超时"));
        assert!(messages[0].contains("AI"));
    }

    #[test]
    fn server_error_message_is_surfaced() {
        let h = harness();
        h.transport
            .fail_status("/api/v1/leads", 500, r#"{"message": "内部错误"}"#);

        let result = block_on(h.client.request(RequestDescriptor::get("/api/v1/leads")));
        assert_eq!(result, Err(ApiError::Network("内部错误".to_string())));
        assert_eq!(h.notifier.messages(), vec!["内部错误".to_string()]);
    }

    #[test]
    fn request_text_returns_raw_body() {
        let h = harness();
        logged_in(&h);
        h.transport.ok("/api/v1/leads/export", "id,name\n1,张三\n");

        let body =
            block_on(h.client.request_text(RequestDescriptor::get("/api/v1/leads/export"))).unwrap();
        assert_eq!(body, "id,name\n1,张三\n");
    }
}
