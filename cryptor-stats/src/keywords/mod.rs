// cryptor-stats/src/keywords/mod.rs
use daachorse::DoubleArrayAhoCorasick;
use daachorse::errors::DaachorseError;
extern crate alloc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Common English words whose presence suggests a correct decryption.
pub const COMMON_ENGLISH_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i",
    "it", "for", "not", "on", "with", "he", "as", "you", "do", "at",
    "this", "but", "his", "by", "from", "they", "we", "say", "her", "she",
    "or", "an", "will", "my", "one", "all", "would", "there", "their", "what",
    "so", "up", "out", "if", "about", "who", "get", "which", "go", "me",
    "is", "are", "was", "were", "been", "has", "had", "can", "our", "your",
    "no", "when", "them", "some", "could", "into", "than", "then", "its", "over",
    "only", "also", "just", "like", "time",
];

/// Keyword tally for one decoded text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordHits {
    /// Every whole-word occurrence, repeats included.
    pub hits: u64,
    /// Number of different keywords seen at least once.
    pub distinct: u64,
}

/// Counts whole-word keyword occurrences with word-boundary awareness.
pub struct KeywordScanner {
    automaton: DoubleArrayAhoCorasick<usize>,
    vocabulary: usize,
}

impl fmt::Debug for KeywordScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordScanner")
         .field("automaton", &"<DoubleArrayAhoCorasick>")
         .field("vocabulary", &self.vocabulary)
         .finish()
    }
}

impl KeywordScanner {
    /// Creates a scanner over [`COMMON_ENGLISH_WORDS`].
    pub fn new() -> Self {
        Self::with_words(COMMON_ENGLISH_WORDS.iter().copied())
            .expect("Failed to build Aho-Corasick automaton for the built-in keyword list")
    }

    /// Creates a scanner over a custom word list. Words are lowercased.
    ///
    /// Fails on an empty list, an empty word, or a duplicate word.
    pub fn with_words<I, S>(words: I) -> Result<Self, DaachorseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_ascii_lowercase())
            .collect();
        let vocabulary = patterns.len();
        let automaton = DoubleArrayAhoCorasick::new(patterns)?;
        Ok(Self { automaton, vocabulary })
    }

    /// Number of words the scanner knows.
    pub fn vocabulary(&self) -> usize {
        self.vocabulary
    }

    /// Tallies keyword occurrences in ASCII-lowercased `text`.
    ///
    /// A match only counts when it is not glued to another alphanumeric
    /// character, so "the" inside "there" or "other" is ignored.
    pub fn scan(&self, text: &[u8]) -> KeywordHits {
        let mut seen = vec![false; self.vocabulary];
        let mut tally = KeywordHits::default();

        for matched in self.automaton.find_overlapping_iter(text) {
            let m_start = matched.start();
            let m_end = matched.end();

            let prefix_ok = m_start == 0 || !text[m_start - 1].is_ascii_alphanumeric();
            let suffix_ok = m_end == text.len() || !text[m_end].is_ascii_alphanumeric();

            if prefix_ok && suffix_ok {
                tally.hits += 1;
                let slot = &mut seen[matched.value()];
                if !*slot {
                    *slot = true;
                    tally.distinct += 1;
                }
            }
        }
        tally
    }
}

impl Default for KeywordScanner {
    fn default() -> Self {
        Self::new()
    }
}
