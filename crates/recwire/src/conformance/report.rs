//! Per-vector outcomes and the final run report.

use std::fmt;

/// Failure reason for a single vector, tagged by the pipeline stage that
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// The vector itself is defective: unparseable type tag or a value
    /// that does not fit its model.
    InvalidVector(String),
    /// Encoding the logical value failed.
    EncodeError(String),
    /// Encoded bytes differ from the expected bytes; `None` on either side
    /// means that encoding ended at `offset`.
    EncodeMismatch {
        offset: usize,
        expected: Option<u8>,
        actual: Option<u8>,
    },
    /// Decoding the expected bytes failed.
    DecodeError(String),
    /// Decoded value differs from the logical value.
    DecodeMismatch,
    /// Decoding succeeded but left unconsumed input.
    TrailingBytes { consumed: usize, total: usize },
}

fn fmt_byte(b: Option<u8>) -> String {
    match b {
        Some(b) => format!("{b:#04x}"),
        None => "end of input".to_string(),
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::InvalidVector(msg) => write!(f, "invalid vector: {msg}"),
            Failure::EncodeError(msg) => write!(f, "encode error: {msg}"),
            Failure::EncodeMismatch {
                offset,
                expected,
                actual,
            } => write!(
                f,
                "encode mismatch at offset {offset}: expected {}, actual {}",
                fmt_byte(*expected),
                fmt_byte(*actual)
            ),
            Failure::DecodeError(msg) => write!(f, "decode error: {msg}"),
            Failure::DecodeMismatch => write!(f, "decoded value differs from vector value"),
            Failure::TrailingBytes { consumed, total } => {
                write!(f, "trailing bytes: consumed {consumed} of {total}")
            }
        }
    }
}

/// Outcome for one vector.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorResult {
    pub name: String,
    pub failure: Option<Failure>,
}

impl VectorResult {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Aggregated run report; results are sorted by vector name so the report
/// never depends on completion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub results: Vec<VectorResult>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Failed vectors, in name order.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &Failure)> {
        self.results
            .iter()
            .filter_map(|r| r.failure.as_ref().map(|f| (r.name.as_str(), f)))
    }

    /// The one-line run summary.
    pub fn summary(&self) -> String {
        format!("{} passed, {} failed", self.passed(), self.failed())
    }
}
