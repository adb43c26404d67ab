//! Scripted in-memory transport for controller tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use crate::http::{Method, Request, Response, Transport, TransportError};

type Hook = Rc<dyn Fn(&Request)>;

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    responses: Rc<RefCell<VecDeque<Result<Response, TransportError>>>>,
    requests: Rc<RefCell<Vec<Request>>>,
    on_send: Option<Hook>,
    yield_once: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend each send once so concurrent callers interleave.
    pub fn interleaved(mut self) -> Self {
        self.yield_once = true;
        self
    }

    /// Run `hook` synchronously whenever a request is sent.
    pub fn on_send(mut self, hook: impl Fn(&Request) + 'static) -> Self {
        self.on_send = Some(Rc::new(hook));
        self
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.responses.borrow_mut().push_back(Ok(Response {
            status,
            body: body.to_owned(),
        }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, method: Method, url_suffix: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url.ends_with(url_suffix))
            .count()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        if let Some(hook) = &self.on_send {
            hook(&request);
        }
        self.requests.borrow_mut().push(request);
        if self.yield_once {
            YieldNow(false).await;
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_owned())))
    }
}

struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            return Poll::Ready(());
        }
        self.0 = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

pub(crate) const COMMENTS_JSON: &str =
    r#"[{"id":"c1","email":"a@x.com","content":"hi","created_at":"2024-01-01T00:00:00Z"}]"#;
