//! Native-test doubles for the transport and feedback ports.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, Waker};

use async_trait::async_trait;
use serde_json::Value;

use crate::core::gate::Feedback;
use crate::core::store::ToastKind;
use crate::services::api::{ApiError, HttpRequest, HttpResponse, HttpTransport};

/// One recorded feedback signal, in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FeedbackEvent {
    BusyShown(String),
    BusyCleared,
    Toast(ToastKind, String),
}

/// Feedback port that records every signal for assertions.
#[derive(Default)]
pub(crate) struct RecordingFeedback {
    pub(crate) events: RefCell<Vec<FeedbackEvent>>,
}

impl RecordingFeedback {
    /// Only the toast signals, in arrival order.
    pub(crate) fn toasts(&self) -> Vec<(ToastKind, String)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                FeedbackEvent::Toast(kind, message) => Some((*kind, message.clone())),
                _ => None,
            })
            .collect()
    }
}

impl Feedback for RecordingFeedback {
    fn busy_shown(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(FeedbackEvent::BusyShown(message.to_string()));
    }

    fn busy_cleared(&self) {
        self.events.borrow_mut().push(FeedbackEvent::BusyCleared);
    }

    fn toast(&self, kind: ToastKind, message: &str) {
        self.events
            .borrow_mut()
            .push(FeedbackEvent::Toast(kind, message.to_string()));
    }
}

/// Transport that replays queued responses and records every request.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    pub(crate) requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn push_json(&self, status: u16, body: &Value) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            content_type: Some("application/json; charset=utf-8".to_string()),
            body: body.to_string(),
        }));
    }

    pub(crate) fn push_text(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            content_type: Some("text/plain".to_string()),
            body: body.to_string(),
        }));
    }

    pub(crate) fn push_error(&self, error: ApiError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("mock transport exhausted".to_string())))
    }
}

/// Poll a future exactly once with a no-op waker.
pub(crate) fn poll_once<F: Future>(future: Pin<&mut F>) -> Poll<F::Output> {
    let mut cx = Context::from_waker(Waker::noop());
    future.poll(&mut cx)
}
