use std::fmt;

/// Errors at the crate's edges: parsing user text and loading run configuration.
///
/// Engine invariants are not reported here; violating them panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QpError {
    /// Text that does not name a square, e.g. `"i9"`.
    InvalidSquare { text: String },
    /// A textual position that cannot be placed on the board.
    InvalidPosition { reason: String },
    /// A sweep configuration outside its accepted range.
    InvalidConfig { reason: String },
    /// A bulk sweep produced a different number of positions than expected.
    CountMismatch {
        what: String,
        expected: usize,
        observed: usize,
    },
    /// I/O or decoding failure for a file-backed input.
    Io { path: String, error: String },
}

impl fmt::Display for QpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QpError::InvalidSquare { text } => write!(f, "invalid square: {text:?}"),
            QpError::InvalidPosition { reason } => write!(f, "invalid position: {reason}"),
            QpError::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
            QpError::CountMismatch {
                what,
                expected,
                observed,
            } => write!(
                f,
                "count mismatch for {what}: expected {expected}, observed {observed}"
            ),
            QpError::Io { path, error } => write!(f, "io error for {path}: {error}"),
        }
    }
}

impl std::error::Error for QpError {}
