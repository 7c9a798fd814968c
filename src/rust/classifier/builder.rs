use log::{info, warn};

use super::classifier::Classifier;
use super::corpus::{Corpus, TrainingExample};
use super::error::ClassifierError;
use super::label::Label;
use super::tokenizer::Tokenizer;
use super::tokens::TextTokens;

/// A builder for constructing a trained Classifier with a fluent interface.
#[derive(Default, Debug)]
pub struct ClassifierBuilder {
    tokenizer: Tokenizer,
    corpus: Corpus,
}

impl TextTokens for ClassifierBuilder {
    fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

impl ClassifierBuilder {
    /// Creates a new empty ClassifierBuilder using the default Spanish stopwords
    ///
    /// # Example
    /// ```
    /// use spamfilter::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::default(),
            corpus: Corpus::new(),
        }
    }

    /// Replaces the stopword set used for both training and classification
    ///
    /// # Example
    /// ```
    /// use spamfilter::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .with_stopwords(vec!["the", "a", "an"]);
    /// ```
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokenizer = Tokenizer::new(stopwords);
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Validates a training sentence:
    /// - Must not be empty or whitespace only
    ///
    /// Sentences whose words are all stopwords are accepted; they only
    /// contribute to the label prior.
    fn validate_example(sentence: &str) -> Result<(), ClassifierError> {
        if sentence.trim().is_empty() {
            return Err(ClassifierError::ValidationError("Training sentence cannot be empty".into()));
        }
        Ok(())
    }

    /// Adds one labeled training sentence
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful, or a
    ///   `ValidationError` if the sentence is empty
    ///
    /// # Example
    /// ```
    /// use spamfilter::{ClassifierBuilder, Label};
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .add_example("gana dinero gratis", Label::Spam);
    /// assert!(builder.is_ok());
    /// ```
    pub fn add_example(mut self, sentence: impl Into<String>, label: Label) -> Result<Self, ClassifierError> {
        let sentence = sentence.into();
        Self::validate_example(&sentence)?;
        if self.count_tokens(&sentence) == 0 {
            warn!("Sentence '{}' has no tokens after stopword filtering", sentence);
        }
        self.corpus.push(TrainingExample::new(sentence, label));
        Ok(self)
    }

    /// Adds several labeled sentences, stopping at the first invalid one
    pub fn add_examples<I, E>(mut self, examples: I) -> Result<Self, ClassifierError>
    where
        I: IntoIterator<Item = E>,
        E: Into<TrainingExample>,
    {
        for example in examples {
            let example = example.into();
            self = self.add_example(example.sentence, example.label)?;
        }
        Ok(self)
    }

    /// Adds rows of `(sentence, label)` where the label is given as text,
    /// either a name (`spam`, `not_spam`) or a dataset tag (`1`, `0`)
    pub fn add_labeled_rows<I, S, L>(self, rows: I) -> Result<Self, ClassifierError>
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: AsRef<str>,
    {
        let mut builder = self;
        for (sentence, label) in rows {
            let label: Label = label.as_ref().parse()?;
            builder = builder.add_example(sentence, label)?;
        }
        Ok(builder)
    }

    /// Builds and returns a Classifier trained on every added example
    ///
    /// # Returns
    /// * `Result<Classifier, ClassifierError>` - The trained Classifier, or a
    ///   `BuildError` if no examples were added
    ///
    /// # Example
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use spamfilter::{ClassifierBuilder, Label};
    ///
    /// let classifier = ClassifierBuilder::new()
    ///     .add_example("gana dinero gratis", Label::Spam)?
    ///     .add_example("hola como estas", Label::NotSpam)?
    ///     .build()?;
    /// assert!(classifier.is_trained());
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Classifier, ClassifierError> {
        if self.corpus.is_empty() {
            return Err(ClassifierError::BuildError("At least one training example must be added".to_string()));
        }

        info!(
            "Building classifier from {} examples ({} spam, {} not spam)",
            self.corpus.len(),
            self.corpus.count_label(Label::Spam),
            self.corpus.count_label(Label::NotSpam)
        );

        let mut classifier = Classifier::with_tokenizer(self.tokenizer);
        classifier.train(&self.corpus);
        Ok(classifier)
    }
}
