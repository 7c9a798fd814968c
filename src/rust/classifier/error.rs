use thiserror::Error;

/// Represents the different types of errors that can occur in the spam classifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// Scoring was requested before any training sentence was ingested
    #[error("Classifier has not been trained: no training sentences were ingested")]
    UntrainedModel,
    /// Error occurred during the build phase
    #[error("Build error: {0}")]
    BuildError(String),
    /// Error occurred due to invalid input parameters
    #[error("Validation error: {0}")]
    ValidationError(String),
}
