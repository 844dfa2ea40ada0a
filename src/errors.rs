//! Unified application error type.
//! Reader, builder, executor and the log extractor all return AppError so
//! both binaries can report failures the same way.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Usage
    // ---------------------------
    #[error("{0}")]
    Usage(String),

    // ---------------------------
    // Input data
    // ---------------------------
    #[error(
        "Malformed row in {}: record {record} has {found} fields, expected {expected}",
        path.display()
    )]
    MalformedInput {
        path: PathBuf,
        record: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Service calls
    // ---------------------------
    #[error("{}", describe_failure(*status, url, body.as_deref()))]
    RequestFailed {
        status: u16,
        url: String,
        body: Option<String>,
    },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid service endpoint: {0}")]
    InvalidEndpoint(String),

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

fn describe_failure(status: u16, url: &str, body: Option<&str>) -> String {
    let mut msg = format!("Request failed with status code {status}\n  url: {url}");
    if let Some(b) = body {
        msg.push_str(&format!("\n  message content: {b}"));
    }
    msg
}

pub type AppResult<T> = Result<T, AppError>;
