//! Message parser — splits a [`LogicalMessage`] into a [`ParsedTriple`].

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ParseError;
use crate::types::{LogicalMessage, ParsedTriple};

/// Separator between the timestamp header and the body.
pub const HEADER_SEPARATOR: &str = " - ";
/// Separator between sender and content inside the body.
pub const SENDER_SEPARATOR: &str = ": ";

fn word_re() -> &'static Regex {
    static WORD_RE: OnceLock<Regex> = OnceLock::new();
    WORD_RE.get_or_init(|| Regex::new(r"\w").expect("valid word regex"))
}

/// Drop the terminator of the last physical line. Embedded breaks stay.
fn strip_terminator(text: &str) -> &str {
    match text.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => text,
    }
}

/// Parse one logical message.
///
/// Returns `Ok(None)` for messages without a single word character (blank
/// separators, the empty leading accumulator). A message without `" - "` is
/// an error rather than a guess.
pub fn parse_message(message: &LogicalMessage) -> Result<Option<ParsedTriple>, ParseError> {
    if !word_re().is_match(&message.text) {
        return Ok(None);
    }
    let text = strip_terminator(&message.text);

    let Some((timestamp_text, rest)) = text.split_once(HEADER_SEPARATOR) else {
        return Err(ParseError::MalformedMessage {
            line: message.line,
            text: text.to_owned(),
        });
    };

    let (sender, content) = rest.split_once(SENDER_SEPARATOR).unwrap_or((rest, ""));

    Ok(Some(ParsedTriple {
        timestamp_text: timestamp_text.to_owned(),
        sender: sender.to_owned(),
        content: content.to_owned(),
    }))
}

/// Rebuild the header line a triple was parsed from.
///
/// System notifications render without the `": "` separator.
pub fn render_triple(triple: &ParsedTriple) -> String {
    if triple.is_system() {
        format!(
            "{}{HEADER_SEPARATOR}{}",
            triple.timestamp_text, triple.sender
        )
    } else {
        format!(
            "{}{HEADER_SEPARATOR}{}{SENDER_SEPARATOR}{}",
            triple.timestamp_text, triple.sender, triple.content
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn msg(text: &str) -> LogicalMessage {
        LogicalMessage::new(0, 1, text)
    }

    fn parse(text: &str) -> ParsedTriple {
        parse_message(&msg(text))
            .expect("parse ok")
            .expect("not skipped")
    }

    #[test]
    fn user_message() {
        let t = parse("15/3/23, 11:45 p. - Ana: Hola\n");
        assert_eq!(t.timestamp_text, "15/3/23, 11:45 p.");
        assert_eq!(t.sender, "Ana");
        assert_eq!(t.content, "Hola");
    }

    #[test]
    fn system_notification_has_no_content() {
        let t = parse("1/1/23, 9:00 a. - Ana salio del grupo\n");
        assert_eq!(t.sender, "Ana salio del grupo");
        assert_eq!(t.content, "");
        assert!(t.is_system());
    }

    #[test]
    fn only_first_separators_split() {
        let t = parse("1/1/23, 9:00 a. - Ana: note: a - b\n");
        assert_eq!(t.sender, "Ana");
        assert_eq!(t.content, "note: a - b");
    }

    #[test]
    fn multi_line_content_keeps_embedded_breaks() {
        let t = parse("1/1/23, 9:00 a. - Ana: one\r\ntwo\r\n");
        assert_eq!(t.content, "one\r\ntwo");
    }

    #[test]
    fn blank_messages_are_skipped() {
        assert_eq!(parse_message(&msg("")).unwrap(), None);
        assert_eq!(parse_message(&msg("  \n\t\n")).unwrap(), None);
        assert_eq!(parse_message(&msg("-- :\n")).unwrap(), None);
    }

    #[test]
    fn missing_header_separator_is_an_error() {
        let err = parse_message(&LogicalMessage::new(3, 12, "no separator here\n")).unwrap_err();
        match err {
            ParseError::MalformedMessage { line, text } => {
                assert_eq!(line, 12);
                assert_eq!(text, "no separator here");
            }
            other => panic!("expected MalformedMessage, got {other:?}"),
        }
    }

    #[test]
    fn render_round_trips() {
        for text in [
            "15/3/23, 11:45 p. - Ana: Hola",
            "1/1/23, 9:00 a. - Ana salio del grupo",
        ] {
            let triple = parse(text);
            assert_eq!(render_triple(&triple), text);
            assert_eq!(parse(&render_triple(&triple)), triple);
        }
    }
}
