//! Term frequency over message content.
//!
//! Tokens are runs matching `\w[\w']+`. A trailing `'s` is dropped, purely
//! numeric tokens are ignored, and counting is case-insensitive.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use wsp_core::Record;

use crate::stopwords::Stopwords;

fn token_re() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| Regex::new(r"\w[\w']+").expect("valid token regex"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermOptions {
    /// Keep only the `top` most frequent terms; 0 keeps all.
    pub top: usize,
    pub min_chars: usize,
}

impl Default for TermOptions {
    fn default() -> Self {
        Self {
            top: 50,
            min_chars: 2,
        }
    }
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    token_re().find_iter(text).filter_map(|m| {
        let token = m.as_str();
        let token = token
            .strip_suffix("'s")
            .or_else(|| token.strip_suffix("'S"))
            .unwrap_or(token);
        if token.chars().all(|c| c.is_numeric()) {
            return None;
        }
        Some(token.to_lowercase())
    })
}

/// Most frequent terms, count descending then term ascending.
pub fn term_frequency(
    records: &[Record],
    stopwords: &Stopwords,
    options: TermOptions,
) -> Vec<TermCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        for token in tokens(&record.content) {
            if token.chars().count() < options.min_chars || stopwords.contains(&token) {
                continue;
            }
            *counts.entry(token).or_default() += 1;
        }
    }

    let mut terms: Vec<TermCount> = counts
        .into_iter()
        .map(|(term, count)| TermCount { term, count })
        .collect();
    terms.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    if options.top > 0 {
        terms.truncate(options.top);
    }
    terms
}
