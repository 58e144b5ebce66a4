// ============================================================================
// HTTP TRANSPORT - request descriptors + pluggable dispatch
// ============================================================================
// The transport only moves bytes; auth, retries and envelope handling live
// in the request pipeline on top of it.
// ============================================================================

use futures::future::LocalBoxFuture;
use serde::Serialize;

use crate::error::ApiError;
use crate::utils::constants::DEFAULT_TIMEOUT_MS;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// Single-file multipart upload (CSV import)
    File {
        field: String,
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

/// Everything needed to dispatch one backend call
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
    pub timeout_ms: u32,
    /// Never attempt a refresh-and-retry for this call
    pub skip_auth_retry: bool,
    /// Set once a 401 retry has been spent, so a request loops at most once
    pub(crate) retried: bool,
}

impl RequestDescriptor {
    fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            skip_auth_retry: false,
            retried: false,
        }
    }

    pub fn get(url: &str) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: &str) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn put(url: &str) -> Self {
        Self::new(Method::Put, url)
    }

    pub fn delete(url: &str) -> Self {
        Self::new(Method::Delete, url)
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Decode(format!("serialize error: {}", e)))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn file(mut self, field: &str, file_name: &str, mime: &str, bytes: Vec<u8>) -> Self {
        self.body = RequestBody::File {
            field: field.to_string(),
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            bytes,
        };
        self
    }

    pub fn timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn skip_auth_retry(mut self) -> Self {
        self.skip_auth_retry = true;
        self
    }

    /// Replace-or-insert a header
    pub(crate) fn set_header(&mut self, key: &str, value: String) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(key));
        self.headers.push((key.to_string(), value));
    }
}

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TransportError {
    /// Request aborted after the descriptor's timeout
    Timeout,
    /// Non-2xx HTTP status; body kept so the pipeline can extract a message
    Status { status: u16, body: String },
    /// Connection-level failure
    Network(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Timeout => write!(f, "timeout"),
            TransportError::Status { status, .. } => write!(f, "HTTP {}", status),
            TransportError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

/// Dispatch seam between the pipeline and the actual HTTP stack.
///
/// The browser build uses gloo-net; tests plug in scripted fakes.
pub trait HttpTransport {
    fn dispatch(
        &self,
        request: &RequestDescriptor,
    ) -> LocalBoxFuture<'static, Result<HttpResponse, TransportError>>;
}

/// gloo-net transport (browser only)
#[cfg(target_arch = "wasm32")]
pub struct GlooTransport {
    base_url: String,
}

#[cfg(target_arch = "wasm32")]
impl GlooTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    async fn send(base_url: String, request: RequestDescriptor) -> Result<HttpResponse, TransportError> {
        use gloo_net::http::Request;

        let url = format!("{}{}", base_url, request.url);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        if !request.query.is_empty() {
            builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        let outgoing = match request.body {
            RequestBody::Empty => builder
                .build()
                .map_err(|e| TransportError::Network(format!("Request build error: {}", e)))?,
            RequestBody::Json(value) => builder
                .json(&value)
                .map_err(|e| TransportError::Network(format!("Request build error: {}", e)))?,
            RequestBody::File {
                field,
                file_name,
                mime,
                bytes,
            } => {
                let form = build_form_data(&field, &file_name, &mime, &bytes)?;
                builder
                    .body(form)
                    .map_err(|e| TransportError::Network(format!("Request build error: {}", e)))?
            }
        };

        let response = outgoing
            .send()
            .await
            .map_err(|e| TransportError::Network(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if (200..300).contains(&status) {
            Ok(HttpResponse { status, body })
        } else {
            Err(TransportError::Status { status, body })
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn build_form_data(
    field: &str,
    file_name: &str,
    mime: &str,
    bytes: &[u8],
) -> Result<web_sys::FormData, TransportError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| TransportError::Network("Blob build error".to_string()))?;
    let form = web_sys::FormData::new()
        .map_err(|_| TransportError::Network("FormData unavailable".to_string()))?;
    form.append_with_blob_and_filename(field, &blob, file_name)
        .map_err(|_| TransportError::Network("FormData append error".to_string()))?;
    Ok(form)
}

#[cfg(target_arch = "wasm32")]
impl HttpTransport for GlooTransport {
    fn dispatch(
        &self,
        request: &RequestDescriptor,
    ) -> LocalBoxFuture<'static, Result<HttpResponse, TransportError>> {
        use futures::future::{select, Either};
        use futures::FutureExt;
        use gloo_timers::future::TimeoutFuture;

        let base_url = self.base_url.clone();
        let request = request.clone();
        Box::pin(async move {
            let timeout_ms = request.timeout_ms;
            let send = Self::send(base_url, request).boxed_local();
            match select(send, TimeoutFuture::new(timeout_ms)).await {
                Either::Left((result, _)) => result,
                Either::Right((_, _)) => Err(TransportError::Timeout),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_defaults() {
        let request = RequestDescriptor::get("/api/v1/leads");
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(!request.skip_auth_retry);
        assert!(!request.retried);
    }

    #[test]
    fn set_header_replaces_existing_value() {
        let mut request = RequestDescriptor::get("/api/v1/leads");
        request.set_header("Authorization", "Bearer a".to_string());
        request.set_header("Authorization", "Bearer b".to_string());
        let auth: Vec<_> = request
            .headers
            .iter()
            .filter(|(k, _)| k == "Authorization")
            .collect();
        assert_eq!(auth.len(), 1);
        assert_eq!(auth[0].1, "Bearer b");
    }

    #[test]
    fn json_body_is_captured() {
        let request = RequestDescriptor::post("/api/v1/auth/login")
            .json(&serde_json::json!({"phone": "13800000000"}))
            .unwrap();
        match request.body {
            RequestBody::Json(value) => assert_eq!(value["phone"], "13800000000"),
            _ => panic!("expected json body"),
        }
    }
}
