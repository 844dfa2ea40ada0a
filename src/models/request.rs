use crate::config::ServiceEndpoint;
use crate::models::resource::{OperationMode, ResourceKind};
use reqwest::Url;

/// A single `name=value` query parameter. Values are kept verbatim and only
/// encoded when the URL is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub name: &'static str,
    pub value: String,
}

/// Endpoint path plus ordered query parameters for one service call.
///
/// Only [`crate::core::builder::build`] creates these, so the parameter set
/// always follows the per-(kind, mode) table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    kind: ResourceKind,
    mode: OperationMode,
    path: &'static str,
    params: Vec<QueryParam>,
}

impl RequestSpec {
    pub(crate) fn new(
        kind: ResourceKind,
        mode: OperationMode,
        path: &'static str,
        params: Vec<QueryParam>,
    ) -> Self {
        Self {
            kind,
            mode,
            path,
            params,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn mode(&self) -> OperationMode {
        self.mode
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn params(&self) -> &[QueryParam] {
        &self.params
    }

    /// Parameter names in emission order.
    pub fn param_names(&self) -> Vec<&'static str> {
        self.params.iter().map(|p| p.name).collect()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Full URL against the given service base, query string percent-encoded.
    pub fn url(&self, endpoint: &ServiceEndpoint) -> Url {
        let mut url = endpoint.base().clone();
        url.set_path(self.path);
        url.set_query(None);

        if !self.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for p in &self.params {
                pairs.append_pair(p.name, &p.value);
            }
        }

        url
    }
}
