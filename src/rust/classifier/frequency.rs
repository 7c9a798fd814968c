use std::collections::HashMap;

use super::label::Label;
use super::utils::indicator;

/// Occurrence counts of a single word under each label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordStat {
    pub spam: u64,
    pub not_spam: u64,
}

impl WordStat {
    pub fn get(&self, label: Label) -> u64 {
        match label {
            Label::Spam => self.spam,
            Label::NotSpam => self.not_spam,
        }
    }

    fn increment(&mut self, label: Label) {
        match label {
            Label::Spam => self.spam += 1,
            Label::NotSpam => self.not_spam += 1,
        }
    }

    /// Occurrences under either label
    pub fn total(&self) -> u64 {
        self.spam + self.not_spam
    }
}

/// Number of training sentences seen per label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetCounts {
    spam: u64,
    not_spam: u64,
}

impl DatasetCounts {
    pub fn increment(&mut self, label: Label) {
        match label {
            Label::Spam => self.spam += 1,
            Label::NotSpam => self.not_spam += 1,
        }
    }

    pub fn get(&self, label: Label) -> u64 {
        match label {
            Label::Spam => self.spam,
            Label::NotSpam => self.not_spam,
        }
    }

    pub fn total(&self) -> u64 {
        self.spam + self.not_spam
    }
}

/// Per-word occurrence counts accumulated during training.
///
/// The keys of the map form the vocabulary. Entries are only ever created or
/// incremented; nothing is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyModel {
    words: HashMap<String, WordStat>,
}

impl FrequencyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `word` under `label`
    pub fn record(&mut self, word: &str, label: Label) {
        match self.words.get_mut(word) {
            Some(stat) => stat.increment(label),
            None => {
                let mut stat = WordStat::default();
                stat.increment(label);
                self.words.insert(word.to_string(), stat);
            }
        }
    }

    pub fn count(&self, word: &str, label: Label) -> u64 {
        self.words.get(word).map(|stat| stat.get(label)).unwrap_or(0)
    }

    /// Occurrences of a single word across both labels
    pub fn word_occurrences(&self, word: &str) -> u64 {
        self.words.get(word).map(WordStat::total).unwrap_or(0)
    }

    /// Sum of all word occurrences under `label`, or under both labels when `None`
    pub fn total_occurrences(&self, label: Option<Label>) -> u64 {
        self.words
            .values()
            .map(|stat| match label {
                Some(label) => stat.get(label),
                None => stat.total(),
            })
            .sum()
    }

    /// Number of (word, label) pairs with a nonzero count.
    ///
    /// Equals twice the vocabulary size minus the number of words seen under
    /// only one label.
    pub fn distinct_word_count(&self) -> u64 {
        self.words
            .values()
            .map(|stat| indicator(stat.spam) + indicator(stat.not_spam))
            .sum()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.words.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn stat(&self, word: &str) -> Option<&WordStat> {
        self.words.get(word)
    }
}
