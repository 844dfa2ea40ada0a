use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Column header written at the top of every extraction run.
pub const HEADER: [&str; 7] = [
    "date",
    "time",
    "rpc",
    "input",
    "output",
    "error",
    "duration(µs)",
];

const STRUCTURED_LOG: &str =
    r"^(\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}) (\S+);(.+);(.+);(.+);(.+)$";

/// The six raw groups of a request-tracing line:
/// `<date> <time> <rpc>;<input>;<output>;<error>;<duration>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFields<'a> {
    pub timestamp: &'a str,
    pub rpc: &'a str,
    pub input: &'a str,
    pub output: &'a str,
    pub error: &'a str,
    pub duration: &'a str,
}

pub struct StructuredLogPattern {
    re: Regex,
}

impl Default for StructuredLogPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuredLogPattern {
    pub fn new() -> Self {
        Self {
            re: Regex::new(STRUCTURED_LOG).expect("structured log pattern is valid"),
        }
    }

    pub fn captures<'a>(&self, line: &'a str) -> Option<LogFields<'a>> {
        let caps = self.re.captures(line)?;
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        Some(LogFields {
            timestamp: group(1),
            rpc: group(2),
            input: group(3),
            output: group(4),
            error: group(5),
            duration: group(6),
        })
    }
}

/// Lines read and how many of them had the structured shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub lines: usize,
    pub matched: usize,
}

/// Output file for a pod: `<pod>-logs.csv`.
pub fn output_file_name(pod: &str) -> String {
    format!("{pod}-logs.csv")
}

/// Copy `input` into `output` as CSV: the header, then every line as a
/// single raw field with its line ending removed.
///
/// Structured lines are only counted, never split into columns.
pub fn extract<R: BufRead, W: Write>(mut input: R, output: W) -> AppResult<ExtractSummary> {
    let pattern = StructuredLogPattern::new();
    // header is 7 columns, data rows are 1
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(output);
    let mut summary = ExtractSummary::default();

    wtr.write_record(HEADER)?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let raw = String::from_utf8_lossy(&buf);
        let line = strip_line_ending(&raw);

        if let Some(fields) = pattern.captures(line) {
            summary.matched += 1;
            log::trace!("rpc {} took {}", fields.rpc, fields.duration);
        }

        wtr.write_record([line])?;
        summary.lines += 1;
    }

    wtr.flush()?;
    log::debug!(
        "{} lines written, {} matched the structured pattern",
        summary.lines,
        summary.matched
    );
    Ok(summary)
}

fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(l) => l.strip_suffix('\r').unwrap_or(l),
        None => line,
    }
}

/// High-level log extraction into `<out_dir>/<pod>-logs.csv`.
pub struct LogsLogic;

impl LogsLogic {
    /// Appends to the output file, creating it when missing, and returns
    /// its path.
    pub fn run<R: BufRead>(pod: &str, out_dir: &Path, input: R) -> AppResult<PathBuf> {
        let path = out_dir.join(output_file_name(pod));

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                AppError::from(io::Error::new(
                    e.kind(),
                    format!("cannot open {} for append: {e}", path.display()),
                ))
            })?;

        extract(input, file)?;
        Ok(path)
    }
}
