//! Static transcript corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of physical lines, terminators
//! included, exactly as `decode_lines` would produce them.

/// A short Spanish-locale export: user messages, a multi-line message, a
/// system notification and accented text.
pub const CORPUS_BASIC: &[&str] = &[
    "15/3/23, 11:45 p. - Ana: Hola\n",
    "15/3/23, 11:47 p. - Bo: Qué tal?\n",
    "Todo bien por aquí\n",
    "y por allá\n",
    "16/3/23, 9:00 a. - Ana: Buenos días\n",
    "16/3/23, 12:05 p. - Bo: Almorzando\n",
    "1/4/23, 9:00 a. - Ana salió del grupo\n",
];

/// Messages whose timestamps go backwards; order must be kept.
pub const CORPUS_OUT_OF_ORDER: &[&str] = &[
    "20/5/23, 10:00 p. - Ana: later\n",
    "1/5/23, 10:00 p. - Bo: earlier\n",
    "10/5/23, 10:00 p. - Cy: middle\n",
];

/// One broken line in the middle of otherwise valid input.
pub const CORPUS_MALFORMED: &[&str] = &[
    "15/3/23, 11:45 p. - Ana: Hola\n",
    "\n",
    "15/3/23, 11:46 p. Bo without the dash\n",
    "15/3/23, 11:47 p. - Bo: ok\n",
];

/// Headers that survive segmentation but carry impossible dates.
pub const CORPUS_BAD_DATES: &[&str] = &[
    "30/2/23, 10:00 p. - Ana: february 30th\n",
    "1/3/23, 10:00 p. - Bo: fine\n",
];

/// Export written with Windows line endings and a non-breaking space
/// before the day-period marker.
pub const CORPUS_CRLF_NBSP: &[&str] = &[
    "2/11/22, 3:07\u{a0}p. m. - Ana: uno\r\n",
    "dos\r\n",
    "2/11/22, 3:08\u{a0}p. m. - Bo: tres\r\n",
];

/// The same corpus joined into a file body.
pub fn as_file_body(corpus: &[&str]) -> String {
    corpus.concat()
}

/// Generate `n` well-formed messages from three senders across the day.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    const SENDERS: [&str; 3] = ["Ana", "Bo", "Cy"];
    (0..n)
        .map(|i| {
            let hour = i % 12 + 1;
            let marker = if i % 2 == 0 { "a." } else { "p." };
            format!(
                "{}/{}/23, {}:{:02} {} - {}: message number {} about things\n",
                i % 28 + 1,
                i % 12 + 1,
                hour,
                i % 60,
                marker,
                SENDERS[i % SENDERS.len()],
                i,
            )
        })
        .collect()
}
