mod error;
mod label;
mod tokenizer;
mod tokens;
mod frequency;
mod corpus;
#[allow(clippy::module_inception)]
mod classifier;
pub mod builder;
mod utils;

pub use error::ClassifierError;
pub use label::Label;
pub use tokenizer::Tokenizer;
pub use tokens::TextTokens;
pub use frequency::{DatasetCounts, FrequencyModel, WordStat};
pub use corpus::{Corpus, TrainingExample};
pub use classifier::{Classifier, LabelScores};
pub use builder::ClassifierBuilder;

/// Information about the current state of a classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierInfo {
    /// Number of training sentences labeled spam
    pub spam_sentences: u64,
    /// Number of training sentences labeled not spam
    pub not_spam_sentences: u64,
    /// Number of distinct words seen during training
    pub vocabulary_size: usize,
    /// Word occurrences across both labels
    pub total_occurrences: u64,
    /// Number of (word, label) pairs with a nonzero count
    pub distinct_word_count: u64,
    /// Size of the stopword set
    pub stopword_count: usize,
}
