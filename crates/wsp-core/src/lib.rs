//! wsp-core — chat transcript parsing.
//!
//! This crate exposes each pipeline stage as a public module, plus the
//! shared types used across them.
//!
//! # Architecture
//!
//! ```text
//! Normalizer ──► Segmenter ──► Message ──► Timestamp ──► Assembler
//!                                                            │
//!                                                            └──► Export
//! ```
//!
//! The pipeline is synchronous and single-pass. Diagnostics are emitted as
//! `tracing` events inside a per-run span; the library never installs a
//! subscriber.

pub mod assembler;
pub mod config;
pub mod error;
pub mod export;
pub mod message;
pub mod normalizer;
pub mod segmenter;
pub mod source;
pub mod timestamp;
pub mod types;

pub use assembler::{parse_lines, Assembler, ParseReport, SkippedMessage, Transcript};
pub use error::{ParseError, TimestampError};
pub use types::{LogicalMessage, ParsedTriple, Record, SourceKind};
