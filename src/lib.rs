//! wsp — chat transcript statistics.
//!
//! Parses exported chat transcripts (`D/M/YY, H:MM p. - Sender: text`) into
//! an ordered record table and derives per-sender, per-month, per-hour and
//! term statistics from it. [`analyze`] runs both layers over one file.
//!
//! # Architecture
//!
//! ```text
//! wsp-core: source ──► normalizer ──► segmenter ──► message ──► timestamp ──► assembler
//!                                                                               │
//! wsp-stats:                                          volume / activity / terms ◄┘
//! ```

use std::path::Path;

use wsp_core::config::Config;
use wsp_core::Transcript;
use wsp_stats::{Stopwords, Summary, TermOptions};

/// Read, parse and summarize a transcript in one call.
pub fn analyze(
    path: &Path,
    config: &Config,
    stopwords: &Stopwords,
) -> anyhow::Result<(Transcript, Summary)> {
    let transcript = wsp_core::source::read_transcript(path, &config.parser)?;
    let options = TermOptions {
        top: config.stats.top_terms,
        min_chars: config.stats.min_term_chars,
    };
    let summary = Summary::build(transcript.records(), stopwords, options);
    Ok((transcript, summary))
}
