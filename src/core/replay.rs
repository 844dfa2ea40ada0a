use crate::core::builder::build;
use crate::core::executor::{Executor, Transport};
use crate::core::reader::RowSource;
use crate::errors::AppResult;
use crate::models::{OperationMode, ResourceKind, ResourceSelector};
use std::io::Write;
use std::path::Path;

/// Requests issued by a completed replay run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub requests: usize,
    pub per_kind: Vec<(ResourceKind, usize)>,
}

/// Top-level replay control flow.
pub struct ReplayLogic;

impl ReplayLogic {
    /// Replay every kind covered by `selector`, one batch after the other.
    ///
    /// The first failing row (malformed record, non-200 reply, transport
    /// error) stops the whole run; later rows and later batches are never
    /// sent. Read-mode response bodies are written to `out`.
    pub fn replay<T: Transport, W: Write>(
        executor: &Executor<T>,
        selector: ResourceSelector,
        samples_dir: &Path,
        mode: OperationMode,
        out: &mut W,
    ) -> AppResult<ReplaySummary> {
        let mut summary = ReplaySummary::default();

        for &kind in selector.kinds() {
            let path = samples_dir.join(kind.sample_file());
            let sent = Self::replay_kind(executor, kind, &path, mode, out)?;

            summary.requests += sent;
            summary.per_kind.push((kind, sent));
        }

        Ok(summary)
    }

    /// Replay one sample file. Returns the number of requests sent.
    pub fn replay_kind<T: Transport, W: Write>(
        executor: &Executor<T>,
        kind: ResourceKind,
        path: &Path,
        mode: OperationMode,
        out: &mut W,
    ) -> AppResult<usize> {
        log::info!(
            "replaying {} samples from {} ({})",
            kind.as_str(),
            path.display(),
            mode.as_str()
        );

        let rows = RowSource::open(path, kind)?;
        let mut sent = 0;

        for row in rows {
            let row = row?;
            let spec = build(mode, &row);
            let body = executor.execute(&spec)?;
            sent += 1;

            if mode.is_read() {
                writeln!(out, "{body}")?;
            }
        }

        log::info!("{} {} requests completed", sent, kind.as_str());
        Ok(sent)
    }
}
