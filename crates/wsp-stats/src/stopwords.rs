//! Stopword lists, read from a JSON object of the form
//! `{"stopwords": ["de", "la", ...]}`, plus a built-in English list that
//! user files are merged on top of.

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("cannot read stopwords file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid stopwords document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Common English function words, lowercase.
const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
    "during", "each", "else", "ever", "few", "for", "from", "further", "get", "had", "has",
    "have", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how",
    "however", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more",
    "most", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own", "same",
    "shall", "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "with", "would", "you", "your", "yours",
    "yourself", "yourselves",
];

#[derive(Deserialize)]
struct StopwordsFile {
    stopwords: Vec<String>,
}

/// Case-insensitive set of words excluded from term counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The built-in English list.
    pub fn english() -> Self {
        Self::new(ENGLISH)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StatsError> {
        let file: StopwordsFile = serde_json::from_reader(reader)?;
        Ok(Self::new(file.stopwords))
    }

    pub fn from_json(json: &str) -> Result<Self, StatsError> {
        Self::from_reader(json.as_bytes())
    }

    pub fn load(path: &Path) -> Result<Self, StatsError> {
        let file = std::fs::File::open(path).map_err(|source| StatsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let words = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(path = %path.display(), count = words.len(), "stopwords loaded");
        Ok(words)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Add more words, e.g. a user file on top of [`Stopwords::english`].
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(Self::new(words).words);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
