//! Shared test fixtures for store, catalog and startup test modules.
//!
//! Kept std/tokio-only so unit tests need no extra dev-dependencies.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("theme-loader-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Canned HTTP/1.1 response.
#[derive(Debug, Clone)]
pub struct HttpFixture {
    pub status: u16,
    pub reason: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpFixture {
    pub fn ok(content_type: &'static str, body: &str) -> Self {
        Self {
            status: 200,
            reason: "OK",
            content_type,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, reason: &'static str, body: &str) -> Self {
        Self {
            status,
            reason,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }

    fn to_wire(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status,
            self.reason,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

/// Local server that answers exactly one request.
pub struct TestServer {
    addr: SocketAddr,
    request_line: oneshot::Receiver<String>,
}

impl TestServer {
    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// First line of the request the server received.
    pub async fn request_line(self) -> String {
        self.request_line.await.unwrap_or_default()
    }
}

/// Serve `fixture` to the first connection on an ephemeral port.
pub async fn serve_once(fixture: HttpFixture) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return;
        };
        let mut request_buf = [0u8; 4096];
        let read = stream.read(&mut request_buf).await.unwrap_or(0);
        let request = String::from_utf8_lossy(&request_buf[..read]);
        let first_line = request.lines().next().unwrap_or_default().to_string();
        let _ = stream.write_all(fixture.to_wire().as_bytes()).await;
        let _ = stream.shutdown().await;
        let _ = tx.send(first_line);
    });
    TestServer {
        addr,
        request_line: rx,
    }
}

/// Build an nginx-style auto-index page linking `files` in order.
pub fn autoindex_listing(files: &[&str]) -> String {
    let mut html = String::from(
        "<html>\r\n<head><title>Index of /themes/</title></head>\r\n<body>\r\n<h1>Index of /themes/</h1><hr><pre><a href=\"../\">../</a>\r\n",
    );
    for file in files {
        html.push_str(&format!(
            "<a href=\"{file}\">{file}</a>                    17-Oct-2026 10:00    1024\r\n"
        ));
    }
    html.push_str("</pre><hr></body>\r\n</html>\r\n");
    html
}
