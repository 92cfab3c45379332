//! Fake recognition endpoint
//!
//! A tiny_http server on an ephemeral localhost port. Every request gets
//! the same scripted [`Reply`]; requests are captured for inspection.

use std::io::Read as _;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tiny_http::{Header, Response, Server};

/// What the server answers with
#[derive(Debug, Clone)]
pub enum Reply {
    /// JSON body with the given status code
    Json(u16, String),
    /// Arbitrary bytes with status 200
    Raw(Vec<u8>),
    /// Status 200 with an empty body
    Empty,
    /// Wait before answering with `{}`
    Hang(Duration),
}

/// A request as the server saw it
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    /// Look up a header, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Parse the body as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

/// Running fake endpoint, shut down on drop
pub struct FakeServer {
    server: Arc<Server>,
    url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl FakeServer {
    /// Start a server answering every request with `reply`
    pub fn start(reply: Reply) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("bind fake server"));
        let addr = server.server_addr().to_ip().expect("fake server has an IP address");
        let url = format!("http://{addr}/v3/latex");
        let captured = Arc::new(Mutex::new(Vec::new()));

        let loop_server = Arc::clone(&server);
        let loop_captured = Arc::clone(&captured);
        thread::spawn(move || {
            for mut request in loop_server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                loop_captured.lock().unwrap().push(CapturedRequest {
                    method: request.method().to_string(),
                    path: request.url().to_string(),
                    headers: request
                        .headers()
                        .iter()
                        .map(|h| (h.field.to_string(), h.value.to_string()))
                        .collect(),
                    body,
                });

                let reply = reply.clone();
                thread::spawn(move || {
                    let _ = match reply {
                        Reply::Json(status, body) => request.respond(
                            Response::from_string(body)
                                .with_status_code(status)
                                .with_header(json_header()),
                        ),
                        Reply::Raw(bytes) => request.respond(Response::from_data(bytes)),
                        Reply::Empty => request.respond(Response::empty(200)),
                        Reply::Hang(delay) => {
                            thread::sleep(delay);
                            request.respond(Response::from_string("{}").with_header(json_header()))
                        },
                    };
                });
            }
        });

        Self {
            server,
            url,
            captured,
        }
    }

    /// Endpoint URL to configure the client with
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        self.server.unblock();
    }
}

fn json_header() -> Header {
    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap()
}

/// A localhost URL nothing is listening on
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v3/latex")
}
