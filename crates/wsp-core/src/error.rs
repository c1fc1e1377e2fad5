//! Error types for the transcript pipeline.
//!
//! - **`ParseError`** - everything that can stop or degrade a run. Each
//!   variant carries the 1-based input line and the offending text so a
//!   human can find and fix the transcript.
//!
//! - **`TimestampError`** - why a single timestamp string could not be
//!   resolved. Wrapped by [`ParseError::UnparseableTimestamp`].

use std::path::PathBuf;

// =============================================================================
// ParseError
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    // -------------------------------------------------------------------------
    // Fatal input errors
    // -------------------------------------------------------------------------
    /// The input could not be read at all.
    #[error("cannot read transcript {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input bytes are not valid UTF-8.
    #[error("invalid UTF-8 on line {line} (byte offset {offset}): {text:?}")]
    Encoding {
        /// 1-based line containing the first invalid byte.
        line: usize,
        /// Byte offset of the first invalid byte within the whole input.
        offset: usize,
        /// The offending line, decoded lossily and truncated.
        text: String,
    },

    // -------------------------------------------------------------------------
    // Per-message errors
    // -------------------------------------------------------------------------
    /// A logical message has no `" - "` between header and body.
    #[error("malformed message on line {line}: missing \" - \" separator in {text:?}")]
    MalformedMessage { line: usize, text: String },

    /// Neither timestamp path produced a date-time.
    #[error("unparseable timestamp {text:?} on line {line}: {reason}")]
    UnparseableTimestamp {
        line: usize,
        text: String,
        #[source]
        reason: TimestampError,
    },
}

impl ParseError {
    /// Per-message errors can be skipped under the `skip` policy; input
    /// errors always abort.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ParseError::MalformedMessage { .. } | ParseError::UnparseableTimestamp { .. }
        )
    }

    /// Input line the error refers to, when there is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Io { .. } => None,
            ParseError::Encoding { line, .. }
            | ParseError::MalformedMessage { line, .. }
            | ParseError::UnparseableTimestamp { line, .. } => Some(*line),
        }
    }
}

// =============================================================================
// TimestampError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("no H:MM time found")]
    MissingTime,

    #[error("no D/M/YY date found")]
    MissingDate,

    /// The fields were found but do not form a calendar date-time.
    #[error("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02} is not a valid date-time")]
    OutOfRange {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },

    #[error("no recognizable date-time")]
    Unrecognized,
}
