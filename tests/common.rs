#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use restotools::config::ServiceEndpoint;
use restotools::core::executor::{Executor, HttpReply, Transport};
use restotools::errors::AppResult;
use reqwest::Url;
use std::cell::RefCell;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;
use tempfile::TempDir;

/// Replay binary with proxy settings cleared so stub traffic stays local.
pub fn replay_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("resto-replay");
    for var in [
        "HTTP_PROXY",
        "http_proxy",
        "HTTPS_PROXY",
        "https_proxy",
        "ALL_PROXY",
        "all_proxy",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

pub fn logs_cmd() -> Command {
    cargo_bin_cmd!("resto-logs")
}

pub const REVIEW_HEADER: &str = "UserName,RestaurantName,Review,Rating";
pub const RESERVATION_HEADER: &str = "UserName,RestaurantName,Year,Month,Day";
pub const DETAIL_HEADER: &str = "RestaurantName,Location,Style,Capacity";

/// Write `<dir>/<name>` with a header line followed by `rows`.
pub fn write_csv(dir: &Path, name: &str, header: &str, rows: &[&str]) {
    let mut content = String::from(header);
    content.push('\n');
    for r in rows {
        content.push_str(r);
        content.push('\n');
    }
    fs::write(dir.join(name), content).expect("write fixture csv");
}

/// Samples directory with two rows for each resource kind.
pub fn two_row_samples() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");

    write_csv(
        dir.path(),
        "review_samples.csv",
        REVIEW_HEADER,
        &[
            "alice,Sushi Place,Great fish,5",
            "bob,Taco Stand,Too spicy,3",
        ],
    );
    write_csv(
        dir.path(),
        "reservation_samples.csv",
        RESERVATION_HEADER,
        &["alice,Sushi Place,2024,5,17", "carol,Taco Stand,2024,6,1"],
    );
    write_csv(
        dir.path(),
        "detail_samples.csv",
        DETAIL_HEADER,
        &[
            "Sushi Place,Seattle,Japanese,40",
            "Taco Stand,Austin,Mexican,12",
        ],
    );

    dir
}

/// In-memory transport: records every URL and answers from a status script
/// (200 once the script runs out).
#[derive(Default)]
pub struct RecordingTransport {
    pub statuses: Vec<u16>,
    pub calls: RefCell<Vec<Url>>,
}

impl RecordingTransport {
    pub fn with_statuses(statuses: &[u16]) -> Self {
        Self {
            statuses: statuses.to_vec(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|u| u.path().to_string())
            .collect()
    }
}

impl Transport for RecordingTransport {
    fn post(&self, url: &Url) -> AppResult<HttpReply> {
        let mut calls = self.calls.borrow_mut();
        let n = calls.len();
        calls.push(url.clone());

        let status = self.statuses.get(n).copied().unwrap_or(200);
        Ok(HttpReply {
            status,
            body: format!("reply {} for {}", n + 1, url.path()),
        })
    }
}

pub fn test_endpoint() -> ServiceEndpoint {
    ServiceEndpoint::parse("http://service.test:8080").expect("valid endpoint")
}

pub fn recording_executor(statuses: &[u16]) -> Executor<RecordingTransport> {
    Executor::new(test_endpoint(), RecordingTransport::with_statuses(statuses))
}

/// Minimal HTTP/1.1 server on 127.0.0.1 answering each request with the next
/// status of its script (200 afterwards). Request targets are recorded.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn start(statuses: &[u16]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        let script = statuses.to_vec();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                serve_one(stream, &script, &seen);
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Request targets (`POST <target>`) in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("stub lock").clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|t| t.split('?').next().unwrap_or_default().to_string())
            .collect()
    }
}

fn serve_one(stream: TcpStream, script: &[u16], seen: &Mutex<Vec<String>>) -> Option<()> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();

    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header).ok()? == 0 {
            break;
        }
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':')
            && name.eq_ignore_ascii_case("content-length")
        {
            content_length = value.trim().parse().unwrap_or(0);
        }
    }
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok()?;

    // recorded before answering so the client never sees a reply for an
    // unrecorded request
    let status = {
        let mut seen = seen.lock().ok()?;
        let status = script.get(seen.len()).copied().unwrap_or(200);
        seen.push(target.clone());
        status
    };

    let reply = format!("{method} {target}");
    let reason = if status == 200 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{reply}",
        reply.len()
    );
    let mut stream = stream;
    stream.write_all(response.as_bytes()).ok()?;
    stream.flush().ok()?;

    Some(())
}
