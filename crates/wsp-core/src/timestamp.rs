//! Timestamp resolver — turns header text into a [`NaiveDateTime`].
//!
//! Two paths:
//!
//! - **12-hour**: `D/M/YY, H:MM p.` headers. Hour gets +12 unless it is 12,
//!   the 2-digit year gets +2000.
//! - **generic**: everything else, handled by a small free-text parser that
//!   understands RFC 3339 and numeric `A/B/C [H:MM[:SS]] [a|p][m]` forms.
//!
//! Which path runs is decided by [`MeridiemRule`]. The default
//! ([`MeridiemRule::Substring`]) takes the 12-hour path whenever a `p`
//! appears anywhere in the text, which is how transcripts have always been
//! read. [`MeridiemRule::Anchored`] only looks at the marker right after
//! the time.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::{Captures, Regex};
use serde::Deserialize;

use crate::error::TimestampError;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

fn time_re() -> &'static Regex {
    static TIME_RE: OnceLock<Regex> = OnceLock::new();
    TIME_RE.get_or_init(|| Regex::new(r"(\d{1,2}):(\d{2})(?::(\d{2}))?").expect("valid time regex"))
}

fn short_date_re() -> &'static Regex {
    static SHORT_DATE_RE: OnceLock<Regex> = OnceLock::new();
    SHORT_DATE_RE
        .get_or_init(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{2})").expect("valid short date regex"))
}

fn numeric_date_re() -> &'static Regex {
    static NUMERIC_DATE_RE: OnceLock<Regex> = OnceLock::new();
    NUMERIC_DATE_RE.get_or_init(|| {
        Regex::new(r"(\d{1,4})[/.\-](\d{1,2})[/.\-](\d{1,4})").expect("valid numeric date regex")
    })
}

/// Day-period marker directly after a time: `p.`, `p. m.`, `pm`, `a.`, ...
fn marker_re() -> &'static Regex {
    static MARKER_RE: OnceLock<Regex> = OnceLock::new();
    MARKER_RE.get_or_init(|| {
        Regex::new(r"(?i)^\s?([ap])\.?\s?(m\.?)?(?:[^a-z]|$)").expect("valid marker regex")
    })
}

// ---------------------------------------------------------------------------
// Day period
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

static MARKERS: phf::Map<&'static str, Meridiem> = phf::phf_map! {
    "a" => Meridiem::Am,
    "am" => Meridiem::Am,
    "p" => Meridiem::Pm,
    "pm" => Meridiem::Pm,
};

/// Marker at the start of `rest` (the text following a time), if any.
fn marker_at(rest: &str) -> Option<Meridiem> {
    let caps = marker_re().captures(rest)?;
    let mut token = caps[1].to_ascii_lowercase();
    if caps.get(2).is_some() {
        token.push('m');
    }
    MARKERS.get(token.as_str()).copied()
}

/// Marker following the first time in `text`.
pub fn marker_after_time(text: &str) -> Option<Meridiem> {
    let time = time_re().find(text)?;
    marker_at(&text[time.end()..])
}

// ---------------------------------------------------------------------------
// Resolver configuration
// ---------------------------------------------------------------------------

/// How the resolver decides that a header uses the 12-hour PM convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeridiemRule {
    /// Any `p`/`P` anywhere in the text selects the 12-hour path.
    #[default]
    Substring,
    /// Only a `p`/`pm` marker right after `H:MM` selects the 12-hour path.
    Anchored,
}

/// Reading order for ambiguous numeric dates on the generic path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    #[default]
    MonthFirst,
    DayFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPath {
    TwelveHour,
    Generic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampResolver {
    pub meridiem: MeridiemRule,
    pub date_order: DateOrder,
}

impl TimestampResolver {
    pub fn new(meridiem: MeridiemRule, date_order: DateOrder) -> Self {
        Self {
            meridiem,
            date_order,
        }
    }

    pub fn path_for(&self, text: &str) -> ResolutionPath {
        let pm = match self.meridiem {
            MeridiemRule::Substring => text.to_lowercase().contains('p'),
            MeridiemRule::Anchored => marker_after_time(text) == Some(Meridiem::Pm),
        };
        if pm {
            ResolutionPath::TwelveHour
        } else {
            ResolutionPath::Generic
        }
    }

    pub fn resolve(&self, text: &str) -> Result<NaiveDateTime, TimestampError> {
        match self.path_for(text) {
            ResolutionPath::TwelveHour => resolve_twelve_hour(text),
            ResolutionPath::Generic => resolve_generic(text, self.date_order),
        }
    }
}

// ---------------------------------------------------------------------------
// 12-hour path
// ---------------------------------------------------------------------------

fn num<T: std::str::FromStr>(caps: &Captures<'_>, group: usize) -> Option<T> {
    caps.get(group)?.as_str().parse().ok()
}

fn build(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<NaiveDateTime, TimestampError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or(TimestampError::OutOfRange {
            year,
            month,
            day,
            hour,
            minute,
        })
}

/// Resolve a PM header. The first `H:MM` and the first `D/M/YY` win.
pub fn resolve_twelve_hour(text: &str) -> Result<NaiveDateTime, TimestampError> {
    let time = time_re().captures(text).ok_or(TimestampError::MissingTime)?;
    let date = short_date_re()
        .captures(text)
        .ok_or(TimestampError::MissingDate)?;

    let (Some(mut hour), Some(minute)) = (num::<u32>(&time, 1), num::<u32>(&time, 2)) else {
        return Err(TimestampError::MissingTime);
    };
    let (Some(day), Some(month), Some(year)) = (
        num::<u32>(&date, 1),
        num::<u32>(&date, 2),
        num::<i32>(&date, 3),
    ) else {
        return Err(TimestampError::MissingDate);
    };

    if hour != 12 {
        hour += 12;
    }
    build(year + 2000, month, day, hour, minute, 0)
}

// ---------------------------------------------------------------------------
// Generic path
// ---------------------------------------------------------------------------

/// Free-text resolution for headers without a PM marker.
///
/// RFC 3339 input keeps its wall-clock time and drops the offset. Numeric
/// dates are read in `order`, flipping when the preferred reading has no
/// valid month. A date is required; a missing time means midnight.
pub fn resolve_generic(text: &str, order: DateOrder) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }

    let time = time_re().captures(trimmed);
    let Some(date) = numeric_date_re().captures(trimmed) else {
        return Err(if time.is_some() {
            TimestampError::MissingDate
        } else {
            TimestampError::Unrecognized
        });
    };

    let first = &date[1];
    let (Some(a), Some(b), Some(c)) = (
        num::<u32>(&date, 1),
        num::<u32>(&date, 2),
        num::<u32>(&date, 3),
    ) else {
        return Err(TimestampError::Unrecognized);
    };

    let (year, month, day) = if first.len() == 4 {
        (a as i32, b, c)
    } else {
        let year = if date[3].len() <= 2 { c + 2000 } else { c };
        let (month, day) = match order {
            DateOrder::MonthFirst if a <= 12 => (a, b),
            DateOrder::MonthFirst => (b, a),
            DateOrder::DayFirst if b <= 12 => (b, a),
            DateOrder::DayFirst => (a, b),
        };
        (year as i32, month, day)
    };

    let (mut hour, minute, second) = match &time {
        Some(caps) => (
            num::<u32>(caps, 1).unwrap_or(0),
            num::<u32>(caps, 2).unwrap_or(0),
            num::<u32>(caps, 3).unwrap_or(0),
        ),
        None => (0, 0, 0),
    };

    let marker = time
        .as_ref()
        .and_then(|caps| caps.get(0))
        .and_then(|m| marker_at(&trimmed[m.end()..]));
    match marker {
        Some(Meridiem::Am) if hour == 12 => hour = 0,
        Some(Meridiem::Pm) if hour < 12 => hour += 12,
        _ => {}
    }

    build(year, month, day, hour, minute, second)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
