use spamfilter::{Classifier, ClassifierError, Corpus, Label, TextTokens, Tokenizer, TrainingExample};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn sample_corpus() -> Vec<TrainingExample> {
    vec![
        TrainingExample::new("gana dinero gratis", Label::Spam),
        TrainingExample::new("hola como estas", Label::NotSpam),
    ]
}

fn setup_test_classifier() -> Classifier {
    let mut classifier = Classifier::new();
    classifier.train(&sample_corpus());
    classifier
}

#[test]
fn test_spam_words_classify_as_spam() -> Result<(), ClassifierError> {
    let classifier = setup_test_classifier();
    assert_eq!(classifier.classify("gana dinero")?, Label::Spam);
    Ok(())
}

#[test]
fn test_greeting_classifies_as_not_spam() -> Result<(), ClassifierError> {
    let classifier = setup_test_classifier();
    assert_eq!(classifier.classify("como estas hoy")?, Label::NotSpam);
    Ok(())
}

#[test]
fn test_empty_corpus_is_untrained() {
    let mut classifier = Classifier::new();
    classifier.train(&Corpus::new());
    assert!(!classifier.is_trained());
    assert_eq!(classifier.classify("gana dinero"), Err(ClassifierError::UntrainedModel));
    assert_eq!(classifier.prior_probability(Label::Spam), Err(ClassifierError::UntrainedModel));
}

#[test]
fn test_out_of_vocabulary_still_classifies() -> Result<(), ClassifierError> {
    let classifier = setup_test_classifier();
    let scores = classifier.scores("zapato azul")?;
    assert!(scores.spam.is_finite() && scores.spam > 0.0);
    assert!(scores.not_spam.is_finite() && scores.not_spam > 0.0);
    // Symmetric corpus: unseen words score the same under both labels
    assert_eq!(classifier.classify("zapato azul")?, Label::NotSpam);
    Ok(())
}

#[test]
fn test_priors_sum_to_one() -> Result<(), ClassifierError> {
    let mut classifier = setup_test_classifier();
    classifier.train(&[
        TrainingExample::new("premio gratis ya", Label::Spam),
        TrainingExample::new("compra ahora oferta", Label::Spam),
    ]);
    let total = classifier.prior_probability(Label::Spam)? + classifier.prior_probability(Label::NotSpam)?;
    assert!((total - 1.0).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_distinct_word_count_property() {
    let mut classifier = Classifier::new();
    classifier.train(&[
        TrainingExample::new("gana dinero gratis", Label::Spam),
        TrainingExample::new("dinero para la casa", Label::NotSpam),
        TrainingExample::new("gratis hola", Label::NotSpam),
    ]);
    let model = classifier.frequencies();
    let spam_words: HashSet<&str> = ["gana", "dinero", "gratis"].into_iter().collect();
    let ham_words: HashSet<&str> = ["dinero", "para", "casa", "gratis", "hola"].into_iter().collect();
    let vocabulary: HashSet<&str> = spam_words.union(&ham_words).copied().collect();
    let exclusive = spam_words.symmetric_difference(&ham_words).count();

    assert_eq!(model.vocabulary_size(), vocabulary.len());
    assert_eq!(model.distinct_word_count(), (2 * vocabulary.len() - exclusive) as u64);
}

#[test]
fn test_training_is_additive() {
    let a = vec![
        TrainingExample::new("gana dinero gratis", Label::Spam),
        TrainingExample::new("hola como estas", Label::NotSpam),
    ];
    let b = vec![
        TrainingExample::new("dinero facil", Label::Spam),
        TrainingExample::new("hola de nuevo", Label::NotSpam),
    ];

    let mut split = Classifier::new();
    split.train(&a);
    split.train(&b);

    let mut union = Classifier::new();
    union.train(a.iter().chain(b.iter()));

    assert_eq!(split.frequencies(), union.frequencies());
    assert_eq!(split.dataset_counts(), union.dataset_counts());
    assert_eq!(split.info(), union.info());
}

#[test]
fn test_duplicate_sentences_are_all_counted() {
    let mut classifier = Classifier::new();
    classifier.train(&[
        TrainingExample::new("oferta", Label::Spam),
        TrainingExample::new("oferta", Label::NotSpam),
    ]);
    assert_eq!(classifier.frequencies().count("oferta", Label::Spam), 1);
    assert_eq!(classifier.frequencies().count("oferta", Label::NotSpam), 1);
    assert_eq!(classifier.dataset_counts().total(), 2);
}

#[test]
fn test_stopword_only_input_yields_prior_scores() -> Result<(), ClassifierError> {
    let classifier = setup_test_classifier();
    assert_eq!(classifier.count_tokens("yo y el"), 0);
    let scores = classifier.scores("yo y el")?;
    assert_eq!(scores.spam, 0.5);
    assert_eq!(scores.not_spam, 0.5);
    assert_eq!(classifier.classify("yo y el")?, Label::NotSpam);
    Ok(())
}

#[test]
fn test_injected_tokenizer() -> Result<(), ClassifierError> {
    let mut classifier = Classifier::with_tokenizer(Tokenizer::new(["the", "a"]));
    classifier.train(&[
        TrainingExample::new("win a free prize", Label::Spam),
        TrainingExample::new("the meeting is at noon", Label::NotSpam),
    ]);
    assert!(!classifier.frequencies().contains("the"));
    assert_eq!(classifier.classify("free prize")?, Label::Spam);
    assert_eq!(classifier.classify("meeting at noon")?, Label::NotSpam);
    Ok(())
}

#[test]
fn test_thread_safety() {
    let classifier = Arc::new(setup_test_classifier());
    let mut handles = vec![];

    for _ in 0..3 {
        let classifier = Arc::clone(&classifier);
        let handle = thread::spawn(move || {
            let result = classifier.classify("gana dinero");
            assert_eq!(result, Ok(Label::Spam));
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
