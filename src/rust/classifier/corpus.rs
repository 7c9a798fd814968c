use std::collections::HashMap;

use super::label::Label;

/// A labeled training sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingExample {
    pub sentence: String,
    pub label: Label,
}

impl TrainingExample {
    pub fn new(sentence: impl Into<String>, label: Label) -> Self {
        Self {
            sentence: sentence.into(),
            label,
        }
    }
}

impl<S: Into<String>> From<(S, Label)> for TrainingExample {
    fn from((sentence, label): (S, Label)) -> Self {
        Self::new(sentence, label)
    }
}

/// An ordered collection of training examples.
///
/// Duplicate sentences are kept, including ones with conflicting labels.
/// Callers that want one label per sentence can call [`Corpus::dedup_keep_last`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    examples: Vec<TrainingExample>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, example: impl Into<TrainingExample>) {
        self.examples.push(example.into());
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrainingExample> {
        self.examples.iter()
    }

    /// Number of examples carrying `label`
    pub fn count_label(&self, label: Label) -> usize {
        self.examples.iter().filter(|e| e.label == label).count()
    }

    /// Collapses duplicate sentences so that only the last label seen for
    /// each sentence remains. Surviving entries keep the position of their
    /// first occurrence.
    pub fn dedup_keep_last(&mut self) {
        let mut last_label: HashMap<String, Label> = HashMap::new();
        for example in &self.examples {
            last_label.insert(example.sentence.clone(), example.label);
        }
        let mut deduped = Vec::with_capacity(last_label.len());
        for example in self.examples.drain(..) {
            if let Some(label) = last_label.remove(&example.sentence) {
                deduped.push(TrainingExample::new(example.sentence, label));
            }
        }
        self.examples = deduped;
    }

    pub fn into_inner(self) -> Vec<TrainingExample> {
        self.examples
    }
}

impl<E: Into<TrainingExample>> FromIterator<E> for Corpus {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        Self {
            examples: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<E: Into<TrainingExample>> Extend<E> for Corpus {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        self.examples.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Corpus {
    type Item = TrainingExample;
    type IntoIter = std::vec::IntoIter<TrainingExample>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a TrainingExample;
    type IntoIter = std::slice::Iter<'a, TrainingExample>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
