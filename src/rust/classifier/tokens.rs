use super::tokenizer::Tokenizer;

/// Provides tokenization for anything that owns a [`Tokenizer`].
///
/// Implemented by both the classifier and its builder so that training data
/// and classification input go through the exact same normalization and
/// stopword filtering.
pub trait TextTokens {
    /// Returns the tokenizer in use
    fn tokenizer(&self) -> &Tokenizer;

    /// Normalized, stopword-filtered tokens of `text`, in input order
    fn tokens(&self, text: &str) -> Vec<String> {
        self.tokenizer().tokenize(text)
    }

    /// Number of tokens that survive normalization and stopword filtering.
    ///
    /// Useful to spot sentences that would only contribute to the prior.
    fn count_tokens(&self, text: &str) -> usize {
        self.tokens(text).len()
    }
}

impl TextTokens for Tokenizer {
    fn tokenizer(&self) -> &Tokenizer {
        self
    }
}
