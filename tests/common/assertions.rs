//! Domain-specific assertion macros for wsp harnesses.
//!
//! These add context-rich failure messages that make it clear which record
//! invariant was violated.

use wsp_core::Record;

/// Assert that a record has the expected sender and content.
///
/// ```rust
/// assert_record!(records[0], "Ana", "Hola");
/// ```
#[macro_export]
macro_rules! assert_record {
    ($record:expr, $sender:expr, $content:expr) => {{
        let record: &wsp_core::Record = &$record;
        let sender: &str = $sender;
        let content: &str = $content;
        if record.sender != sender || record.content != content {
            panic!(
                "assert_record! failed:\n  expected: {:?}: {:?}\n  actual:   {:?}: {:?}",
                sender, content, record.sender, record.content
            );
        }
    }};
}

/// Assert that the senders of a record slice appear in exactly this order.
#[macro_export]
macro_rules! assert_sender_order {
    ($records:expr, [$($sender:expr),* $(,)?]) => {{
        let records: &[wsp_core::Record] = &$records;
        let actual: Vec<&str> = records.iter().map(|r| r.sender.as_str()).collect();
        let expected: Vec<&str> = vec![$($sender),*];
        if actual != expected {
            panic!(
                "assert_sender_order! failed:\n  expected: {:?}\n  actual:   {:?}",
                expected, actual
            );
        }
    }};
}

/// `content_length` must equal the character count of `content` on every
/// record.
pub fn assert_lengths_consistent(records: &[Record]) {
    for (i, record) in records.iter().enumerate() {
        assert_eq!(
            record.content_length,
            record.content.chars().count(),
            "record {i} has inconsistent content_length: {:?}",
            record.content
        );
    }
}
