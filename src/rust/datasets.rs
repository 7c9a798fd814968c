use std::fmt;
use std::str::FromStr;
use log::warn;

use crate::classifier::{Corpus, Label, TrainingExample};

/// Represents the labeled datasets the library knows how to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinDataset {
    /// Spanish SMS-style sentences, first collection
    Spam01,
    /// Spanish SMS-style sentences, second collection
    Spam02,
}

/// Where a dataset lives and how to check it once downloaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetInfo {
    /// Name of the cache directory entry
    pub name: String,
    /// Location of the tab-separated file
    pub url: String,
    /// Expected SHA-256 of the file, hex encoded. `None` skips verification.
    pub hash: Option<String>,
}

impl DatasetInfo {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            hash: None,
        }
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }
}

impl BuiltinDataset {
    pub fn info(&self) -> DatasetInfo {
        match self {
            BuiltinDataset::Spam01 => DatasetInfo::new(
                "spam01",
                "https://raw.githubusercontent.com/alonzoDiego/SpamData/master/spam01.txt",
            ),
            BuiltinDataset::Spam02 => DatasetInfo::new(
                "spam02",
                "https://raw.githubusercontent.com/alonzoDiego/SpamData/master/spam02.txt",
            ),
        }
    }
}

impl fmt::Display for BuiltinDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info().name)
    }
}

impl FromStr for BuiltinDataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spam01" => Ok(BuiltinDataset::Spam01),
            "spam02" => Ok(BuiltinDataset::Spam02),
            other => Err(format!("Unknown dataset '{}', expected spam01 or spam02", other)),
        }
    }
}

/// Parses tab-separated `sentence<TAB>tag` lines, where the tag is `1` for
/// spam and `0` for not spam.
///
/// Blank lines are ignored. Lines without a tab or with any other tag are
/// skipped with a warning. Duplicate sentences are kept in file order.
pub fn parse_tsv(text: &str) -> Corpus {
    let mut corpus = Corpus::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let sentence = fields.next().unwrap_or_default();
        let Some(tag) = fields.next() else {
            warn!("Skipping line {}: missing label column", number + 1);
            continue;
        };
        match Label::from_tag(tag) {
            Some(label) => corpus.push(TrainingExample::new(sentence, label)),
            None => warn!("Skipping line {}: unknown label '{}'", number + 1, tag),
        }
    }
    corpus
}
