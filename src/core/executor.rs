use crate::config::ServiceEndpoint;
use crate::errors::{AppError, AppResult};
use crate::models::RequestSpec;
use crate::ui::messages::request_line;
use reqwest::Url;
use reqwest::blocking::Client;
use std::time::Duration;

/// Status code and raw body of a service response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Sends a body-less POST and hands back the reply, whatever its status.
pub trait Transport {
    fn post(&self, url: &Url) -> AppResult<HttpReply>;
}

/// Blocking reqwest client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// `timeout`: `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &Url) -> AppResult<HttpReply> {
        let resp = self.client.post(url.clone()).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(HttpReply { status, body })
    }
}

/// Issues built requests against one service endpoint.
pub struct Executor<T: Transport> {
    endpoint: ServiceEndpoint,
    transport: T,
}

impl<T: Transport> Executor<T> {
    pub fn new(endpoint: ServiceEndpoint, transport: T) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one request. Anything other than 200 is a
    /// [`AppError::RequestFailed`]; the body is attached for read calls.
    pub fn execute(&self, spec: &RequestSpec) -> AppResult<String> {
        let url = spec.url(&self.endpoint);
        request_line(&url);

        let reply = self.transport.post(&url)?;
        log::debug!("{} -> {}", url, reply.status);

        if reply.status != 200 {
            return Err(AppError::RequestFailed {
                status: reply.status,
                url: url.to_string(),
                body: spec.mode().is_read().then_some(reply.body),
            });
        }

        Ok(reply.body)
    }
}
