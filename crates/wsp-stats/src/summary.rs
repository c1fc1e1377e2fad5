//! All statistics for one transcript in a single serializable value.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;
use wsp_core::Record;

use crate::activity::{activity_matrix, ActivityMatrix};
use crate::stopwords::Stopwords;
use crate::terms::{term_frequency, TermCount, TermOptions};
use crate::volume::{volume_by_hour, volume_by_month, volume_by_sender, MonthVolume, SenderVolume};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub records: usize,
    pub first: Option<NaiveDateTime>,
    pub last: Option<NaiveDateTime>,
    pub by_sender: Vec<SenderVolume>,
    pub by_month: Vec<MonthVolume>,
    pub by_hour: [usize; 24],
    pub terms: Vec<TermCount>,
    pub activity: ActivityMatrix,
}

impl Summary {
    pub fn build(records: &[Record], stopwords: &Stopwords, terms: TermOptions) -> Self {
        let summary = Self {
            records: records.len(),
            // Input order is kept, so the extremes are not necessarily the ends.
            first: records.iter().map(|r| r.date).min(),
            last: records.iter().map(|r| r.date).max(),
            by_sender: volume_by_sender(records),
            by_month: volume_by_month(records),
            by_hour: volume_by_hour(records),
            terms: term_frequency(records, stopwords, terms),
            activity: activity_matrix(records),
        };
        tracing::debug!(
            records = summary.records,
            senders = summary.by_sender.len(),
            terms = summary.terms.len(),
            "summary built"
        );
        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "records: {}", self.records)?;
        if let (Some(first), Some(last)) = (self.first, self.last) {
            writeln!(f, "span:    {first} .. {last}")?;
        }

        writeln!(f, "\nby sender (chars / messages)")?;
        for s in &self.by_sender {
            writeln!(f, "  {:<24} {:>8} {:>6}", s.sender, s.chars, s.messages)?;
        }

        writeln!(f, "\nby month (chars)")?;
        for m in &self.by_month {
            writeln!(f, "  {:<24} {:>8}", m.name, m.chars)?;
        }

        writeln!(f, "\nby hour (chars)")?;
        for (hour, chars) in self.by_hour.iter().enumerate() {
            if *chars > 0 {
                writeln!(f, "  {hour:02}:00 {chars:>8}")?;
            }
        }

        writeln!(f, "\ntop terms")?;
        for t in &self.terms {
            writeln!(f, "  {:<24} {:>8}", t.term, t.count)?;
        }

        if let Some((sender, hour, count)) = self.activity.peak() {
            writeln!(f, "\nbusiest: {sender} at {hour:02}:00 ({count} messages)")?;
        }
        Ok(())
    }
}
