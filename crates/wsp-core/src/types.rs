//! Core types for wsp-core.
//!
//! This module defines the data structures shared across the pipeline
//! stages: the [`LogicalMessage`] produced by segmentation, the
//! [`ParsedTriple`] produced by the message parser, the finished [`Record`],
//! and the [`SourceKind`] discriminant.

use chrono::NaiveDateTime;
use serde::Serialize;

/// One conversational turn, possibly spanning several physical lines.
///
/// `text` holds the header line followed by every continuation line,
/// verbatim, terminators included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalMessage {
    /// Position of this message in the segmented stream, starting at 0.
    pub index: usize,
    /// 1-based input line number where the message starts.
    pub line: usize,
    pub text: String,
}

impl LogicalMessage {
    pub fn new(index: usize, line: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            line,
            text: text.into(),
        }
    }
}

/// A logical message split into its three textual parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTriple {
    /// Everything before the first `" - "`.
    pub timestamp_text: String,
    /// Author name, or the whole notification text for system messages.
    pub sender: String,
    /// Message body; empty for system messages.
    pub content: String,
}

impl ParsedTriple {
    /// A system notification has no `": "` separated body.
    pub fn is_system(&self) -> bool {
        self.content.is_empty()
    }
}

/// A finished transcript row.
///
/// Serializes with the column names of the tabular output: `date`, `sender`,
/// `content`, `content_length`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub date: NaiveDateTime,
    pub sender: String,
    pub content: String,
    /// Number of characters (Unicode scalar values) in `content`.
    pub content_length: usize,
}

impl Record {
    pub fn new(date: NaiveDateTime, sender: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            date,
            sender: sender.into(),
            content_length: content.chars().count(),
            content,
        }
    }
}

/// Where a transcript was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    File,
    Stdin,
    /// Lines handed over directly by a library caller.
    Memory,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::File => write!(f, "file"),
            SourceKind::Stdin => write!(f, "stdin"),
            SourceKind::Memory => write!(f, "memory"),
        }
    }
}
