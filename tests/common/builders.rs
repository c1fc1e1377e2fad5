//! Test builders — ergonomic constructors for `Record` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{NaiveDate, NaiveDateTime};
use wsp_core::Record;

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] test fixtures.
///
/// ```rust
/// let record = RecordBuilder::new("Ana")
///     .at(2023, 3, 15, 23, 45)
///     .content("Hola")
///     .build();
/// ```
pub struct RecordBuilder {
    sender: String,
    date: NaiveDateTime,
    content: String,
}

impl RecordBuilder {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            date: datetime(2023, 1, 1, 0, 0),
            content: String::new(),
        }
    }

    pub fn at(mut self, year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        self.date = datetime(year, month, day, hour, minute);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn build(self) -> Record {
        Record::new(self.date, self.sender, self.content)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid test date")
        .and_hms_opt(hour, minute, 0)
        .expect("valid test time")
}

/// A user message at `hour:00` on 2023-01-01.
pub fn message_at(sender: &str, hour: u32, content: &str) -> Record {
    RecordBuilder::new(sender).at(2023, 1, 1, hour, 0).content(content).build()
}
