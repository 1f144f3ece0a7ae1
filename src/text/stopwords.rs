// Stopword sets: immutable, built once and shared by reference.
//
// The default list is the classic 179-word English list. The extended preset
// unions it with the ISO English list from the `stop-words` crate, which is far
// more aggressive (it drops words like "experience" and "work").

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Classic English stopwords. Contracted forms ("don't") can never match a
/// normalized token since apostrophes are stripped first, but they are kept
/// so the list stays recognizable.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom",
    "this", "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a",
    "an", "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at",
    "by", "for", "with", "about", "against", "between", "into", "through", "during",
    "before", "after", "above", "below", "to", "from", "up", "down", "in", "out", "on",
    "off", "over", "under", "again", "further", "then", "once", "here", "there", "when",
    "where", "why", "how", "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now", "d",
    "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't",
    "isn", "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't",
    "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won",
    "won't", "wouldn", "wouldn't",
];

/// Which stopword list to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwordPreset {
    /// The classic 179-word list (default)
    #[default]
    Nltk,
    /// Classic list plus the ISO English list
    Extended,
}

/// A read-only set of words excluded from keyword and similarity analysis.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The classic English list.
    pub fn nltk() -> Self {
        Self {
            words: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// The classic list unioned with the `stop-words` ISO English list.
    pub fn extended() -> Self {
        let mut set = Self::nltk();
        let iso: Vec<String> = get(LANGUAGE::English);
        set.words.extend(iso.into_iter().map(|w| w.to_lowercase()));
        set
    }

    pub fn from_preset(preset: StopwordPreset) -> Self {
        match preset {
            StopwordPreset::Nltk => Self::nltk(),
            StopwordPreset::Extended => Self::extended(),
        }
    }

    /// Exact-match membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::nltk()
    }
}
