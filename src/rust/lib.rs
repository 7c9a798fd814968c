//! A Naive Bayes spam classifier for short messages.
//!
//! Sentences are lower-cased, stripped of anything but ASCII letters, digits
//! and whitespace, split into words and filtered against a stopword list.
//! Training counts how often each word shows up in spam and non-spam
//! sentences; classification compares add-one smoothed scores for both
//! labels.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use spamfilter::{Classifier, Label};
//!
//! let classifier = Classifier::builder()
//!     .add_example("gana dinero gratis", Label::Spam)?
//!     .add_example("hola como estas", Label::NotSpam)?
//!     .build()?;
//!
//! let (label, scores) = classifier.predict("gana dinero")?;
//! println!("Predicted label: {}", label);
//! assert_eq!(label, Label::Spam);
//! assert!(scores[&Label::Spam] > scores[&Label::NotSpam]);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! A trained classifier is read-only and can be shared across threads using `Arc`:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use spamfilter::{Classifier, Label};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let classifier = Arc::new(Classifier::builder()
//!     .add_example("premio gratis", Label::Spam)?
//!     .add_example("nos vemos mañana", Label::NotSpam)?
//!     .build()?);
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let classifier = Arc::clone(&classifier);
//!     handles.push(thread::spawn(move || {
//!         classifier.classify("premio").unwrap();
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod config;
pub mod dataset_manager;
pub mod datasets;
pub mod service;

pub use classifier::{
    Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo, Corpus, DatasetCounts,
    FrequencyModel, Label, LabelScores, TextTokens, Tokenizer, TrainingExample, WordStat,
};
pub use config::ServiceConfig;
pub use dataset_manager::{load_tsv_file, DatasetError, DatasetManager};
pub use datasets::{parse_tsv, BuiltinDataset, DatasetInfo};
pub use service::{send_message, serve_once, Classification, ServiceError};

pub fn init_logger() {
    env_logger::init();
}
