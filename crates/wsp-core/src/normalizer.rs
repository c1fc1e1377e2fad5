//! Normalizer — decodes raw transcript bytes into accent-free lines.
//!
//! Lines keep their terminators so that continuation lines can be appended
//! verbatim by the segmenter. Every terminator (`\n`, `\r\n` or a lone `\r`)
//! comes out as `\n`.

use crate::error::ParseError;

/// Longest fragment of a bad line quoted in an encoding error.
const SNIPPET_CHARS: usize = 80;

/// Decode `bytes` as UTF-8 and split into lines, terminators included.
///
/// `\r\n` and lone `\r` both end a line and are rewritten to `\n`.
///
/// On invalid UTF-8 the error names the 1-based line, the byte offset of
/// the first bad byte and a lossy rendering of that line; no lines are
/// returned.
pub fn decode_lines(bytes: &[u8]) -> Result<Vec<String>, ParseError> {
    let text = std::str::from_utf8(bytes).map_err(|e| encoding_error(bytes, e.valid_up_to()))?;
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(end) = rest.find(['\n', '\r']) {
        let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        lines.push(format!("{}\n", &rest[..end]));
        rest = &rest[end + skip..];
    }
    if !rest.is_empty() {
        lines.push(rest.to_owned());
    }
    Ok(lines)
}

fn encoding_error(bytes: &[u8], offset: usize) -> ParseError {
    let before = &bytes[..offset];
    let line = before
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
        .count()
        + 1;
    let start = before
        .iter()
        .rposition(|&b| b == b'\n' || b == b'\r')
        .map_or(0, |i| i + 1);
    let end = bytes[offset..]
        .iter()
        .position(|&b| b == b'\n' || b == b'\r')
        .map_or(bytes.len(), |i| offset + i);
    let text = String::from_utf8_lossy(&bytes[start..end])
        .chars()
        .take(SNIPPET_CHARS)
        .collect();
    ParseError::Encoding { line, offset, text }
}

/// Strip diacritics from Latin letters and turn exotic whitespace into plain
/// spaces. Other characters (emoji, symbols, non-Latin scripts) pass through
/// unchanged. A trailing `\r\n` or `\r` becomes `\n`.
pub fn normalize_line(line: &str) -> String {
    let (body, terminated) = match line.strip_suffix("\r\n") {
        Some(body) => (body, true),
        None => match line.strip_suffix(['\n', '\r']) {
            Some(body) => (body, true),
            None => (line, false),
        },
    };

    let mut out = String::with_capacity(line.len());
    if body.is_ascii() {
        out.push_str(body);
    } else {
        for c in body.chars() {
            match transliterate(c) {
                Some(ascii) => out.push_str(ascii),
                None => out.push(c),
            }
        }
    }
    if terminated {
        out.push('\n');
    }
    out
}

/// ASCII replacement for `c`, or `None` to keep it as is.
fn transliterate(c: char) -> Option<&'static str> {
    if c.is_ascii() {
        return None;
    }
    if c.is_whitespace() {
        return Some(" ");
    }
    if c.is_alphabetic() && is_latin(c) {
        return deunicode::deunicode_char(c);
    }
    None
}

/// Latin-1 Supplement, Latin Extended-A/B and Latin Extended Additional.
fn is_latin(c: char) -> bool {
    matches!(c, '\u{c0}'..='\u{24f}' | '\u{1e00}'..='\u{1eff}')
}

/// Normalize a whole batch, preserving line count and order.
pub fn normalize_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| normalize_line(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accents_are_stripped() {
        assert_eq!(
            normalize_line("1/1/23, 9:00 a. - Ana salió del grupo\n"),
            "1/1/23, 9:00 a. - Ana salio del grupo\n"
        );
        assert_eq!(normalize_line("Ñandú"), "Nandu");
        assert_eq!(normalize_line("Straße"), "Strasse");
    }

    #[test]
    fn non_breaking_spaces_become_spaces() {
        assert_eq!(normalize_line("11:45\u{a0}p. m."), "11:45 p. m.");
        assert_eq!(normalize_line("11:45\u{202f}p. m."), "11:45 p. m.");
    }

    #[test]
    fn emoji_and_other_scripts_pass_through() {
        assert_eq!(normalize_line("😂😂 ok\n"), "😂😂 ok\n");
        assert_eq!(normalize_line("¿qué? 👍 北京 ×"), "¿que? 👍 北京 ×");
    }

    #[test]
    fn ascii_is_untouched() {
        let line = "15/3/23, 11:45 p. - Ana: Hola\n";
        assert_eq!(normalize_line(line), line);
    }

    #[test]
    fn terminators_become_line_feeds() {
        assert_eq!(normalize_line("Hola\r\n"), "Hola\n");
        assert_eq!(normalize_line("Hola\r"), "Hola\n");
        assert_eq!(normalize_line("Hola"), "Hola");
    }

    #[test]
    fn batch_preserves_length() {
        let out = normalize_lines(["á\n", "b\n", "ç"]);
        assert_eq!(out, vec!["a\n", "b\n", "c"]);
    }

    #[test]
    fn decode_splits_universal_newlines() {
        let lines = decode_lines(b"one\ntwo\r\nthree\rfour").unwrap();
        assert_eq!(lines, vec!["one\n", "two\n", "three\n", "four"]);
    }

    #[test]
    fn decode_empty_input_yields_no_lines() {
        assert!(decode_lines(b"").unwrap().is_empty());
    }

    #[test]
    fn decode_reports_line_of_invalid_byte() {
        let err = decode_lines(b"ok\r\nstill ok\rbad \xff here\nafter\n").unwrap_err();
        match err {
            ParseError::Encoding { line, offset, text } => {
                assert_eq!(line, 3);
                assert_eq!(offset, 17);
                assert_eq!(text, "bad \u{fffd} here");
            }
            other => panic!("expected Encoding, got {other:?}"),
        }
    }
}
