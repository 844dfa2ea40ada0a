use crate::errors::{AppError, AppResult};
use crate::models::{ResourceKind, SampleRow};
use csv::{ReaderBuilder, StringRecordsIntoIter};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Lazily reads sample rows of one resource kind from a CSV source.
///
/// Columns are assigned by position; the first record is a header and is
/// dropped whatever it contains. A record with the wrong number of fields
/// ends the sequence with [`AppError::MalformedInput`].
pub struct RowSource<R: Read> {
    kind: ResourceKind,
    path: PathBuf,
    records: StringRecordsIntoIter<R>,
    record_no: u64,
    finished: bool,
}

impl RowSource<File> {
    pub fn open(path: &Path, kind: ResourceKind) -> AppResult<Self> {
        let file = File::open(path).map_err(|e| {
            AppError::from(io::Error::new(
                e.kind(),
                format!("cannot open sample file {}: {e}", path.display()),
            ))
        })?;
        Ok(Self::from_reader(file, kind, path))
    }
}

impl<R: Read> RowSource<R> {
    /// `path` is only used to label errors.
    pub fn from_reader(reader: R, kind: ResourceKind, path: &Path) -> Self {
        let records = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_records();

        Self {
            kind,
            path: path.to_path_buf(),
            records,
            record_no: 0,
            finished: false,
        }
    }
}

impl<R: Read> Iterator for RowSource<R> {
    type Item = AppResult<SampleRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let record = match self.records.next() {
                None => {
                    self.finished = true;
                    return None;
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(AppError::from(e)));
                }
                Some(Ok(r)) => r,
            };
            self.record_no += 1;

            // header
            if self.record_no == 1 {
                continue;
            }

            let found = record.len();
            let values: Vec<String> = record.iter().map(str::to_string).collect();

            return match SampleRow::new(self.kind, values) {
                Some(row) => Some(Ok(row)),
                None => {
                    self.finished = true;
                    Some(Err(AppError::MalformedInput {
                        path: self.path.clone(),
                        record: self.record_no,
                        expected: self.kind.columns().len(),
                        found,
                    }))
                }
            };
        }
    }
}
