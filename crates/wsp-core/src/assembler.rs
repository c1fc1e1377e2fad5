//! Assembler — runs the whole pipeline and materializes a [`Transcript`].
//!
//! ```text
//! lines ──► normalizer ──► segmenter ──► message ──► timestamp ──► Record
//! ```
//!
//! Records are appended in message order and never rolled back. Whether a
//! bad message aborts the run or is skipped is decided here and only here,
//! according to [`ErrorPolicy`].

use crate::config::{ErrorPolicy, ParserConfig};
use crate::error::ParseError;
use crate::message::parse_message;
use crate::normalizer::normalize_line;
use crate::segmenter::Segmenter;
use crate::timestamp::TimestampResolver;
use crate::types::{LogicalMessage, ParsedTriple, Record, SourceKind};

/// A message left out of the table under [`ErrorPolicy::Skip`].
#[derive(Debug)]
pub struct SkippedMessage {
    /// 1-based input line the message starts on.
    pub line: usize,
    /// The message as read, without its final terminator.
    pub text: String,
    pub reason: ParseError,
}

impl SkippedMessage {
    fn new(message: &LogicalMessage, reason: ParseError) -> Self {
        Self {
            line: message.line,
            text: message.text.trim_end_matches(['\n', '\r']).to_owned(),
            reason,
        }
    }
}

impl std::fmt::Display for SkippedMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Counters and diagnostics for one run.
#[derive(Debug, Default)]
pub struct ParseReport {
    /// Logical messages produced by the segmenter.
    pub messages: usize,
    /// Messages dropped for having no word character.
    pub empty: usize,
    pub skipped: Vec<SkippedMessage>,
}

impl ParseReport {
    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// The parsed table plus what happened while building it.
#[derive(Debug)]
pub struct Transcript {
    pub source: SourceKind,
    records: Vec<Record>,
    report: ParseReport,
}

impl Transcript {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn report(&self) -> &ParseReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Assembler {
    policy: ErrorPolicy,
    resolver: TimestampResolver,
}

impl Assembler {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            policy: config.on_error,
            resolver: config.resolver(),
        }
    }

    /// Resolve the timestamp of `triple` and build its record.
    pub fn assemble(
        &self,
        message: &LogicalMessage,
        triple: ParsedTriple,
    ) -> Result<Record, ParseError> {
        let date = self
            .resolver
            .resolve(&triple.timestamp_text)
            .map_err(|reason| ParseError::UnparseableTimestamp {
                line: message.line,
                text: triple.timestamp_text.clone(),
                reason,
            })?;
        Ok(Record::new(date, triple.sender, triple.content))
    }

    fn record_for(&self, message: &LogicalMessage) -> Result<Option<Record>, ParseError> {
        match parse_message(message)? {
            Some(triple) => self.assemble(message, triple).map(Some),
            None => Ok(None),
        }
    }

    /// Normalize, segment, parse and resolve `lines` in one pass.
    ///
    /// Lines must keep their terminators (see
    /// [`decode_lines`](crate::normalizer::decode_lines)).
    pub fn run<I, S>(&self, lines: I, source: SourceKind) -> Result<Transcript, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let _span = tracing::info_span!("transcript", %source).entered();

        let normalized = lines.into_iter().map(|line| normalize_line(line.as_ref()));
        let mut records = Vec::new();
        let mut report = ParseReport::default();

        for message in Segmenter::new(normalized) {
            report.messages += 1;
            match self.record_for(&message) {
                Ok(Some(record)) => {
                    tracing::debug!(
                        index = message.index,
                        line = message.line,
                        sender = %record.sender,
                        "record assembled"
                    );
                    records.push(record);
                }
                Ok(None) => {
                    tracing::debug!(index = message.index, line = message.line, "empty message");
                    report.empty += 1;
                }
                Err(error) if self.policy == ErrorPolicy::Skip && error.is_recoverable() => {
                    tracing::warn!(index = message.index, line = message.line, %error, "skipping message");
                    report.skipped.push(SkippedMessage::new(&message, error));
                }
                Err(error) => return Err(error),
            }
        }

        tracing::info!(
            records = records.len(),
            messages = report.messages,
            empty = report.empty,
            skipped = report.skipped.len(),
            "transcript parsed"
        );

        Ok(Transcript {
            source,
            records,
            report,
        })
    }
}

/// Parse in-memory lines with `config`.
pub fn parse_lines<I, S>(lines: I, config: &ParserConfig) -> Result<Transcript, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Assembler::new(config).run(lines, SourceKind::Memory)
}
