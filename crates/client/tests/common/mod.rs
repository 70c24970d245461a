#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
};

use course_client::{
    Client, MemoryStorage, Navigator, Page, Request, Response, Transport, TransportError,
    TOKEN_KEY,
};

pub const BASE: &str = "http://courses.test";

/// Replies with canned responses in order, remembering every request it was given
#[derive(Default)]
pub struct FakeTransport {
    replies: RefCell<VecDeque<Result<Response, TransportError>>>,
    sent: RefCell<Vec<Request>>,
}

impl FakeTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        let t = Self::default();
        t.push(status, body);
        t
    }

    pub fn unreachable() -> Self {
        let t = Self::default();
        t.replies
            .borrow_mut()
            .push_back(Err(TransportError::Other("connection refused".to_string())));
        t
    }

    pub fn push(&self, status: u16, body: &str) {
        self.replies
            .borrow_mut()
            .push_back(Ok(Response::new(status, body)));
    }

    pub fn sent(&self) -> Vec<Request> {
        self.sent.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn send(&self, req: &Request) -> Result<Response, TransportError> {
        self.sent.borrow_mut().push(req.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no reply queued".to_string())))
    }
}

/// Records notices, navigation and rendered containers
#[derive(Default, Debug)]
pub struct FakeUi {
    pub alerts: Vec<String>,
    pub navigations: Vec<String>,
    pub containers: HashMap<String, String>,
}

impl Navigator for FakeUi {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, path: &str) {
        self.navigations.push(path.to_string());
    }
}

impl Page for FakeUi {
    fn replace_contents(&mut self, container_id: &str, html: String) {
        self.containers.insert(container_id.to_string(), html);
    }
}

pub fn client(transport: FakeTransport) -> Client<FakeTransport, MemoryStorage> {
    Client::new(BASE, transport, MemoryStorage::new())
}

pub fn logged_in_client(transport: FakeTransport) -> Client<FakeTransport, MemoryStorage> {
    Client::new(BASE, transport, MemoryStorage::with(TOKEN_KEY, "tok123"))
}
