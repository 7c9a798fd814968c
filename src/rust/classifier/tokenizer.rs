use std::collections::HashSet;
use std::sync::Arc;
use lazy_static::lazy_static;

/// Spanish function words dropped before counting.
///
/// Accented entries never match a normalized token.
const SPANISH_STOPWORDS: &[&str] = &[
    "yo", "mi", "propio", "nosotros", "nuestro",
    "tu", "tus", "tuyo",
    "él", "su", "el", "ella",
    "esto", "ellos", "ustedes",
    "qué", "cuál", "quién", "cuáles",
    "que", "ello", "aquello", "soy", "es", "son", "fue",
    "fueron", "por", "siendo", "tiene", "tienes", "tuvo",
    "teniendo", "hacer", "haces", "hizo", "haciendo", "a", "un",
    "la", "y", "pero", "si", "o", "porque",
    "hasta", "mientras", "con",
    "sobre", "contra", "entre", "dentro", "mediante", "durante",
    "antes", "después", "encima", "detras", "arriba",
    "abajo", "en", "afuera", "apagado", "terminado", "debajo",
    "lejos", "desde", "aqui", "ahí", "cuándo",
    "dónde", "cómo", "todo", "nada", "ambos", "cada",
    "poco", "más", "ninguno", "otro", "igual", "tal",
    "pocos", "todos", "solo", "iguales", "entonces", "aveces", "también",
    "muy", "puede", "podrás", "justo", "puedo", "debería", "debe",
    "ahora", "luego", "no", "tuviste",
    "querer", "queria't", "quieres",
];

lazy_static! {
    static ref DEFAULT_STOPWORDS: Arc<HashSet<String>> = Arc::new(
        SPANISH_STOPWORDS.iter().map(|w| w.to_string()).collect()
    );
}

/// Normalizes text and splits it into word tokens, dropping stopwords.
///
/// The stopword set is fixed when the tokenizer is constructed and is shared
/// cheaply between clones.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: Arc<HashSet<String>>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            stopwords: Arc::clone(&DEFAULT_STOPWORDS),
        }
    }
}

impl Tokenizer {
    /// Creates a tokenizer with a custom stopword set
    ///
    /// # Example
    /// ```
    /// use spamfilter::Tokenizer;
    ///
    /// let tokenizer = Tokenizer::new(vec!["the", "a"]);
    /// assert_eq!(tokenizer.tokenize("The cat sat on a mat"), vec!["cat", "sat", "on", "mat"]);
    /// ```
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stopwords: Arc::new(stopwords.into_iter().map(Into::into).collect()),
        }
    }

    /// A tokenizer that keeps every word
    pub fn without_stopwords() -> Self {
        Self {
            stopwords: Arc::new(HashSet::new()),
        }
    }

    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Lower-cases the sentence and drops everything except ASCII letters,
    /// ASCII digits and whitespace.
    pub fn normalize(&self, sentence: &str) -> String {
        sentence
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
            .collect()
    }

    /// Splits the normalized sentence on whitespace and filters stopwords.
    /// Token order follows the input.
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        self.normalize(sentence)
            .split_whitespace()
            .filter(|word| !self.is_stopword(word))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_punctuation_and_accents() {
        let tokenizer = Tokenizer::default();
        assert_eq!(tokenizer.normalize("¡Gana DINERO, ya!"), "gana dinero ya");
        assert_eq!(tokenizer.normalize("canción"), "cancin");
        assert_eq!(tokenizer.normalize(""), "");
    }

    #[test]
    fn test_normalize_keeps_whitespace_kinds() {
        let tokenizer = Tokenizer::default();
        assert_eq!(tokenizer.normalize("uno\tdos\nTRES"), "uno\tdos\ntres");
    }

    #[test]
    fn test_tokenize_filters_stopwords_in_order() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.tokenize("Gana dinero con el premio y la casa"),
            vec!["gana", "dinero", "premio", "casa"]
        );
    }

    #[test]
    fn test_tokenize_empty_results() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.tokenize("!!! ... ???").is_empty());
        assert!(tokenizer.tokenize("yo y el a la").is_empty());
        assert!(tokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_is_idempotent_over_normalize() {
        let tokenizer = Tokenizer::default();
        for s in ["Hola, ¿cómo estás?", "GRATIS!!! 100% dinero", "a\tb  c"] {
            assert_eq!(tokenizer.tokenize(&tokenizer.normalize(s)), tokenizer.tokenize(s));
        }
    }

    #[test]
    fn test_custom_stopwords() {
        let tokenizer = Tokenizer::new(["hello"]);
        assert_eq!(tokenizer.tokenize("Hello there"), vec!["there"]);
        assert!(Tokenizer::without_stopwords().stopwords().is_empty());
        assert_eq!(Tokenizer::without_stopwords().tokenize("yo soy"), vec!["yo", "soy"]);
    }
}
