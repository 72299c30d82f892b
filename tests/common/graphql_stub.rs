//! Minimal HTTP endpoint serving canned GraphQL responses
//!
//! Each accepted connection consumes the next canned response and is closed
//! afterwards. Requests are recorded for assertions.

use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Canned HTTP response
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn with_status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    /// A `namespace.projects` page listing the given full paths
    pub fn projects_page(full_paths: &[&str], end_cursor: Option<&str>) -> Self {
        let nodes: Vec<Value> = full_paths
            .iter()
            .map(|p| {
                json!({
                    "sshUrlToRepo": format!("git@gitlab.example.com:{}.git", p),
                    "fullPath": p,
                })
            })
            .collect();

        Self::ok(json!({
            "data": {
                "namespace": {
                    "projects": {
                        "nodes": nodes,
                        "pageInfo": {
                            "hasNextPage": end_cursor.is_some(),
                            "endCursor": end_cursor,
                        }
                    }
                }
            }
        }))
    }

    /// A 200 response carrying GraphQL errors
    pub fn graphql_errors(messages: &[&str]) -> Self {
        let errors: Vec<Value> = messages.iter().map(|m| json!({ "message": m })).collect();
        Self::ok(json!({ "data": null, "errors": errors }))
    }
}

/// A request as received by the stub
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub request_line: String,
    pub authorization: Option<String>,
    pub body: Value,
}

pub struct GraphQlStub {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl GraphQlStub {
    /// Serve `responses` in order, one per connection, on an ephemeral port
    pub fn start(responses: Vec<StubResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub listener address");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for response in responses {
                let Ok((stream, _)) = listener.accept() else {
                    return;
                };
                if let Some(request) = read_request(&stream) {
                    recorded.lock().unwrap().push(request);
                }
                let _ = write_response(&stream, &response);
            }
        });

        Self { addr, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}/api/graphql", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_request(stream: &TcpStream) -> Option<RecordedRequest> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;

    let mut content_length = 0usize;
    let mut authorization = None;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).ok()? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            } else if name.eq_ignore_ascii_case("authorization") {
                authorization = Some(value.to_string());
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok()?;

    Some(RecordedRequest {
        request_line: request_line.trim_end().to_string(),
        authorization,
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    })
}

fn write_response(stream: &TcpStream, response: &StubResponse) -> std::io::Result<()> {
    let reason = if response.status == 200 { "OK" } else { "Error" };
    let reply = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    );
    let mut writer = stream;
    writer.write_all(reply.as_bytes())?;
    writer.flush()
}
