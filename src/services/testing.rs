// Test doubles for the request pipeline: a scripted transport plus
// recording notifier/navigator fakes. Only compiled for tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::LocalBoxFuture;

use crate::services::browser::{Navigator, Notifier};
use crate::services::http::{HttpResponse, HttpTransport, RequestDescriptor, TransportError};

pub(crate) use futures::executor::block_on;

/// Standard success envelope around `data`
pub(crate) fn envelope_ok(data: serde_json::Value) -> String {
    serde_json::json!({"code": 200, "message": "操作成功", "data": data}).to_string()
}

/// Future that stays pending for exactly one poll.
///
/// Keeps scripted responses from resolving inside the caller's first poll,
/// so overlapping requests genuinely overlap (the single-flight and
/// coalescing tests depend on it).
struct YieldOnce<T> {
    value: Option<T>,
    yielded: bool,
}

impl<T: Unpin> Future for YieldOnce<T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        if !self.yielded {
            self.yielded = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        Poll::Ready(self.value.take().expect("polled after completion"))
    }
}

/// Transport fake scripted per URL: responses are consumed FIFO
pub(crate) struct MockTransport {
    script: RefCell<HashMap<String, VecDeque<Result<HttpResponse, TransportError>>>>,
    calls: RefCell<Vec<RequestDescriptor>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            script: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn push(&self, url: &str, result: Result<HttpResponse, TransportError>) {
        self.script
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .push_back(result);
    }

    pub fn ok(&self, url: &str, body: &str) {
        self.push(
            url,
            Ok(HttpResponse {
                status: 200,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail_status(&self, url: &str, status: u16, body: &str) {
        self.push(
            url,
            Err(TransportError::Status {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, url: &str, error: TransportError) {
        self.push(url, Err(error));
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.url == url).count()
    }

    pub fn call(&self, index: usize) -> RequestDescriptor {
        self.calls.borrow()[index].clone()
    }

    pub fn bearer_of(&self, index: usize) -> Option<String> {
        self.calls.borrow()[index]
            .headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("Authorization"))
            .map(|(_, v)| v.clone())
    }
}

impl HttpTransport for MockTransport {
    fn dispatch(
        &self,
        request: &RequestDescriptor,
    ) -> LocalBoxFuture<'static, Result<HttpResponse, TransportError>> {
        self.calls.borrow_mut().push(request.clone());
        let result = self
            .script
            .borrow_mut()
            .get_mut(&request.url)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| {
                Err(TransportError::Network(format!(
                    "unscripted call: {} {}",
                    request.method.as_str(),
                    request.url
                )))
            });
        Box::pin(YieldOnce {
            value: Some(result),
            yielded: false,
        })
    }
}

pub(crate) struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

pub(crate) struct RecordingNavigator {
    path: RefCell<String>,
    redirects: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            path: RefCell::new(path.to_string()),
            redirects: RefCell::new(Vec::new()),
        }
    }

    pub fn set_path(&self, path: &str) {
        *self.path.borrow_mut() = path.to_string();
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_string());
        *self.path.borrow_mut() = path.to_string();
    }
}
