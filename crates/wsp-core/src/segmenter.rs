//! Segmenter — groups normalized lines into [`LogicalMessage`]s.
//!
//! A line containing a header (`D/M/YY[,] H:MM a.` or `... p.`) opens a new
//! message; every other line is a continuation of the current one. The
//! iterator is lazy and yields the final accumulator unconditionally, even
//! when it is empty.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::LogicalMessage;

pub(crate) fn header_re() -> &'static Regex {
    static HEADER_RE: OnceLock<Regex> = OnceLock::new();
    HEADER_RE.get_or_init(|| {
        Regex::new(r"\d{1,2}/\d{1,2}/\d{2},? \d{1,2}:\d{2}\s?[ap]\.").expect("valid header regex")
    })
}

/// True if `line` carries a message header anywhere in it.
pub fn is_header(line: &str) -> bool {
    header_re().is_match(line)
}

/// Lazy message segmentation over any line source.
///
/// ```
/// use wsp_core::segmenter::Segmenter;
///
/// let lines = ["1/1/23, 9:00 a. - Ana: one\n", "two\n", "1/1/23, 9:01 a. - Bo: three\n"];
/// let messages: Vec<_> = Segmenter::new(lines).collect();
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[0].text, "1/1/23, 9:00 a. - Ana: one\ntwo\n");
/// ```
pub struct Segmenter<I> {
    lines: I,
    buf: String,
    /// Line number where `buf` starts.
    start_line: usize,
    /// Number of lines consumed so far.
    line_no: usize,
    next_index: usize,
    done: bool,
}

impl<I, S> Segmenter<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            lines: lines.into_iter(),
            buf: String::new(),
            start_line: 1,
            line_no: 0,
            next_index: 0,
            done: false,
        }
    }

    fn flush(&mut self, next_start: usize) -> LogicalMessage {
        let text = std::mem::take(&mut self.buf);
        let message = LogicalMessage::new(self.next_index, self.start_line, text);
        self.next_index += 1;
        self.start_line = next_start;
        message
    }
}

impl<I, S> Iterator for Segmenter<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = LogicalMessage;

    fn next(&mut self) -> Option<LogicalMessage> {
        if self.done {
            return None;
        }
        while let Some(line) = self.lines.next() {
            let line = line.as_ref();
            self.line_no += 1;
            if is_header(line) {
                if self.buf.is_empty() {
                    self.start_line = self.line_no;
                    self.buf.push_str(line);
                    continue;
                }
                let message = self.flush(self.line_no);
                self.buf.push_str(line);
                return Some(message);
            }
            self.buf.push_str(line);
        }
        self.done = true;
        let next_start = self.line_no + 1;
        Some(self.flush(next_start))
    }
}
