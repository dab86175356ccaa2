//! Test helpers: a recording in-memory transport and listing fixtures.

use crate::downloader::Transport;
use crate::error::FetchError;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Status(u16),
}

/// Transport answering from a list of `(needle, reply)` routes.
///
/// The first route whose needle is a substring of the URL answers. Unrouted
/// URLs get a 404. Every requested URL is recorded in order.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<Vec<(String, Reply)>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    pub fn route(self, needle: &str, body: impl Into<String>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .push((needle.to_string(), Reply::Body(body.into())));
        self
    }

    pub fn fail(self, needle: &str, status: u16) -> Self {
        self.routes
            .lock()
            .unwrap()
            .push((needle.to_string(), Reply::Status(status)));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        let reply = self
            .routes
            .lock()
            .unwrap()
            .iter()
            .find(|(needle, _)| url.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone());
        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

/// Listing template used by tests; `page={page}&r=` keeps page needles unambiguous.
pub const TEST_TEMPLATE: &str = "https://api.test/roll?lid={lid}&num={num}&page={page}&r={r}";

/// One API item whose article lives at `https://news.test/{id}.shtml`.
pub fn news_item(id: &str) -> Value {
    json!({
        "ctime": "1571476812",
        "title": format!("Title {id}"),
        "url": format!("https://news.test/{id}.shtml"),
        "wapurl": format!("https://news.test/wap/{id}.d.html"),
        "media_name": "Sina",
        "keywords": "markets,stocks",
        "intro": format!("Intro {id}"),
        "level": "1"
    })
}

/// A listing response envelope around `items`.
pub fn listing_body(items: Vec<Value>) -> String {
    json!({ "result": { "status": { "code": 0, "msg": "" }, "data": items } }).to_string()
}

/// A listing body with `n` items named `{prefix}{i}`.
pub fn listing_of(prefix: &str, n: usize) -> String {
    listing_body((0..n).map(|i| news_item(&format!("{prefix}{i}"))).collect())
}
