//! Minimal HTTP/1.1 server standing in for the GitHub REST API.
//!
//! Serves canned JSON bodies per path and records every request it sees so
//! tests can assert on hit counts and headers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request target including the query string
    pub target: String,
    /// Header names are lower-cased
    pub headers: HashMap<String, String>,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or("")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
struct Route {
    status: u16,
    body: String,
}

#[derive(Default)]
pub struct FakeGitHubBuilder {
    routes: HashMap<String, Route>,
}

impl FakeGitHubBuilder {
    pub fn route(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(
            path.to_string(),
            Route {
                status,
                body: body.into(),
            },
        );
        self
    }

    pub fn repos(self, user: &str, body: serde_json::Value) -> Self {
        self.route(&format!("/users/{}/repos", user), 200, body.to_string())
    }

    pub fn repos_status(self, user: &str, status: u16) -> Self {
        self.route(
            &format!("/users/{}/repos", user),
            status,
            r#"{"message":"API rate limit exceeded"}"#,
        )
    }

    pub fn languages(self, full_name: &str, body: serde_json::Value) -> Self {
        self.route(&format!("/repos/{}/languages", full_name), 200, body.to_string())
    }

    pub fn languages_status(self, full_name: &str, status: u16) -> Self {
        self.route(
            &format!("/repos/{}/languages", full_name),
            status,
            r#"{"message":"Server Error"}"#,
        )
    }

    /// Binds an ephemeral localhost port and starts serving in the background
    pub async fn start(self) -> FakeGitHub {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes = Arc::new(self.routes);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let server_requests = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                let requests = server_requests.clone();
                tokio::spawn(async move {
                    let _ = serve_connection(stream, &routes, &requests).await;
                });
            }
        });

        FakeGitHub {
            base_url: format!("http://{}", addr),
            requests,
        }
    }
}

pub struct FakeGitHub {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeGitHub {
    pub fn builder() -> FakeGitHubBuilder {
        FakeGitHubBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Number of requests whose path (without query) equals `path`
    pub fn hits(&self, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path() == path)
            .count()
    }
}

async fn serve_connection(
    mut stream: TcpStream,
    routes: &HashMap<String, Route>,
    requests: &Mutex<Vec<RecordedRequest>>,
) -> std::io::Result<()> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buffer.windows(4).any(|w| w == b"\r\n\r\n") {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            return Ok(());
        }
        buffer.extend_from_slice(&chunk[..read]);
    }

    let head = String::from_utf8_lossy(&buffer);
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default();
    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();
    let headers = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_lowercase(), value.trim().to_string()))
        .collect();

    let request = RecordedRequest { target, headers };
    let route = routes.get(request.path()).cloned().unwrap_or(Route {
        status: 404,
        body: r#"{"message":"Not Found"}"#.to_string(),
    });
    requests.lock().unwrap().push(request);

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        route.status,
        if route.status < 400 { "OK" } else { "Error" },
        route.body.len(),
        route.body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
