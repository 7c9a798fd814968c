use std::collections::HashMap;
use log::{debug, info};
use serde::Serialize;

use super::corpus::TrainingExample;
use super::error::ClassifierError;
use super::frequency::{DatasetCounts, FrequencyModel};
use super::label::Label;
use super::tokenizer::Tokenizer;
use super::tokens::TextTokens;
use super::utils::smoothed_ratio;

/// Raw, unnormalized scores for both labels.
///
/// These are relative scores, not probabilities: they do not sum to one and
/// may exceed one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelScores {
    pub spam: f64,
    pub not_spam: f64,
}

impl LabelScores {
    pub fn get(&self, label: Label) -> f64 {
        match label {
            Label::Spam => self.spam,
            Label::NotSpam => self.not_spam,
        }
    }

    /// `Spam` only when its score is strictly greater; ties go to `NotSpam`
    pub fn best(&self) -> Label {
        if self.spam > self.not_spam {
            Label::Spam
        } else {
            Label::NotSpam
        }
    }
}

/// A multinomial Naive Bayes spam classifier.
///
/// A fresh classifier is untrained: every scoring method returns
/// [`ClassifierError::UntrainedModel`] until at least one sentence has been
/// passed to [`Classifier::train`]. Training is additive across calls.
///
/// Scoring only needs `&self`, so a trained classifier can be shared across
/// threads with `Arc`; `train` needs `&mut self`.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use spamfilter::{Classifier, Label, TrainingExample};
///
/// let mut classifier = Classifier::new();
/// classifier.train(&[
///     TrainingExample::new("gana dinero gratis", Label::Spam),
///     TrainingExample::new("hola como estas", Label::NotSpam),
/// ]);
///
/// assert_eq!(classifier.classify("gana dinero")?, Label::Spam);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    tokenizer: Tokenizer,
    frequencies: FrequencyModel,
    dataset_counts: DatasetCounts,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl TextTokens for Classifier {
    fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

impl Classifier {
    /// Creates an untrained classifier using the default Spanish stopwords
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an untrained classifier with a specific tokenizer
    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            frequencies: FrequencyModel::new(),
            dataset_counts: DatasetCounts::default(),
        }
    }

    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            spam_sentences: self.dataset_counts.get(Label::Spam),
            not_spam_sentences: self.dataset_counts.get(Label::NotSpam),
            vocabulary_size: self.frequencies.vocabulary_size(),
            total_occurrences: self.frequencies.total_occurrences(None),
            distinct_word_count: self.frequencies.distinct_word_count(),
            stopword_count: self.tokenizer.stopwords().len(),
        }
    }

    pub fn frequencies(&self) -> &FrequencyModel {
        &self.frequencies
    }

    pub fn dataset_counts(&self) -> &DatasetCounts {
        &self.dataset_counts
    }

    /// True once at least one training sentence has been ingested
    pub fn is_trained(&self) -> bool {
        self.dataset_counts.total() > 0
    }

    /// Ingests labeled sentences.
    ///
    /// Each sentence counts once towards its label's prior, and each of its
    /// tokens is recorded under that label. Sentences with no surviving
    /// tokens only affect the prior.
    pub fn train<'a, I>(&mut self, examples: I)
    where
        I: IntoIterator<Item = &'a TrainingExample>,
    {
        let mut sentences = 0usize;
        for example in examples {
            self.dataset_counts.increment(example.label);
            for token in self.tokenizer.tokenize(&example.sentence) {
                self.frequencies.record(&token, example.label);
            }
            sentences += 1;
        }
        info!(
            "Trained on {} sentences (spam: {}, not_spam: {}, vocabulary: {})",
            sentences,
            self.dataset_counts.get(Label::Spam),
            self.dataset_counts.get(Label::NotSpam),
            self.frequencies.vocabulary_size()
        );
    }

    /// Fraction of training sentences carrying `label`
    pub fn prior_probability(&self, label: Label) -> Result<f64, ClassifierError> {
        let total = self.dataset_counts.total();
        if total == 0 {
            return Err(ClassifierError::UntrainedModel);
        }
        Ok(self.dataset_counts.get(label) as f64 / total as f64)
    }

    /// Relative score of `label` for an already tokenized sentence.
    ///
    /// The prior is multiplied by each token's add-one smoothed likelihood
    /// under `label`, then divided by each token's smoothed marginal
    /// likelihood across both labels. Long inputs lose precision since no
    /// log-space arithmetic is used.
    pub fn score(&self, tokens: &[String], label: Label) -> Result<f64, ClassifierError> {
        let mut p = self.prior_probability(label)?;

        let distinct = self.frequencies.distinct_word_count();
        let label_denominator = self.frequencies.total_occurrences(Some(label)) + distinct;
        let marginal_denominator = self.frequencies.total_occurrences(None) + distinct;

        for word in tokens {
            p *= smoothed_ratio(self.frequencies.count(word, label), label_denominator);
        }
        for word in tokens {
            p /= smoothed_ratio(self.frequencies.word_occurrences(word), marginal_denominator);
        }
        Ok(p)
    }

    /// Scores `text` under both labels
    pub fn scores(&self, text: &str) -> Result<LabelScores, ClassifierError> {
        let tokens = self.tokens(text);
        let scores = LabelScores {
            spam: self.score(&tokens, Label::Spam)?,
            not_spam: self.score(&tokens, Label::NotSpam)?,
        };
        debug!(
            "Scored {} tokens: spam={:e}, not_spam={:e}",
            tokens.len(),
            scores.spam,
            scores.not_spam
        );
        Ok(scores)
    }

    /// Classifies `text` as spam or not spam. Ties resolve to `NotSpam`.
    pub fn classify(&self, text: &str) -> Result<Label, ClassifierError> {
        Ok(self.scores(text)?.best())
    }

    /// Predicts the label of the input text and returns the score of each label.
    ///
    /// # Example
    /// ```rust
    /// # use spamfilter::{Classifier, Label};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let classifier = Classifier::builder()
    /// #     .add_example("gana dinero gratis", Label::Spam)?
    /// #     .add_example("hola como estas", Label::NotSpam)?
    /// #     .build()?;
    /// let (label, scores) = classifier.predict("gana dinero ahora")?;
    /// println!("Predicted label: {}", label);
    /// for (label, score) in scores {
    ///     println!("{}: {:e}", label, score);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn predict(&self, text: &str) -> Result<(Label, HashMap<Label, f64>), ClassifierError> {
        let scores = self.scores(text)?;
        let map = Label::ALL
            .iter()
            .map(|&label| (label, scores.get(label)))
            .collect();
        Ok((scores.best(), map))
    }
}
