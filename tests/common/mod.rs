//! Local stand-in for the directory API

#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Serves canned replies keyed by the decoded `search` parameter and records
/// every raw request URL.
pub struct StubServer {
    server: Arc<tiny_http::Server>,
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn start(replies: Vec<(&str, Reply)>) -> Self {
        let replies: HashMap<String, Reply> = replies
            .into_iter()
            .map(|(query, reply)| (query.to_string(), reply))
            .collect();
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").unwrap());
        let port = server.server_addr().to_ip().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let accept = Arc::clone(&server);
        let log = Arc::clone(&requests);
        thread::spawn(move || {
            while let Ok(request) = accept.recv() {
                let url = request.url().to_string();
                log.lock().unwrap().push(url.clone());

                let reply = search_param(&url)
                    .and_then(|q| replies.get(&q).cloned())
                    .unwrap_or_else(|| Reply::status(404, r#"{"detail":"Not Found"}"#));

                thread::spawn(move || {
                    thread::sleep(reply.delay);
                    let header =
                        tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .unwrap();
                    let response = tiny_http::Response::from_string(reply.body)
                        .with_status_code(reply.status)
                        .with_header(header);
                    let _ = request.respond(response);
                });
            }
        });

        Self {
            server,
            base_url: format!("http://127.0.0.1:{}", port),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.server.unblock();
    }
}

/// Raw (still encoded) value of the `search` query parameter
pub fn raw_search_param(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("search="))
        .map(str::to_string)
}

pub fn search_param(url: &str) -> Option<String> {
    let raw = raw_search_param(url)?;
    urlencoding::decode(&raw).ok().map(|s| s.into_owned())
}

pub fn employees_json(names: &[&str]) -> String {
    let records: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(
                r#"{{"id": {}, "name": "{}", "email": "{}@peoplecore.co", "department": "HR", "designation": "HR Executive", "date_of_joining": "2022-0{}-15"}}"#,
                i + 1,
                name,
                name.to_lowercase().replace(' ', "."),
                (i % 9) + 1
            )
        })
        .collect();
    format!("[{}]", records.join(","))
}

/// In-memory log sink for a `tracing_subscriber::fmt()` writer
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
