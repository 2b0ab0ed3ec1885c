//! Error handling primitives shared across the core.
//!
//! Collaborators plugged into the predictor pick their own error type; the
//! types below are what the built-in classifiers and metrics report.

use thiserror::Error;

/// Stable error codes emitted with structured log events.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EvalCode {
    /// Success code used as a sentinel.
    Ok = 0,
    /// True and predicted label sequences differ in length.
    LengthMismatch = 1,
    /// Metrics were requested over zero examples.
    EmptyInput = 2,
    /// A built-in classifier could not score a row.
    Prediction = 3,
    /// Configuration failed to load or validate.
    Config = 4,
    /// A plugged-in collaborator failed with an error type that carries no code.
    Collaborator = 5,
    /// Two distinct classes render to the same report key.
    AmbiguousLabel = 6,
}

/// Canonical error type for the built-in collaborators.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("label length mismatch: {expected} true labels vs {actual} predicted labels")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("cannot compute metrics over an empty label set")]
    EmptyInput,

    #[error("prediction failed: {0}")]
    Prediction(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("distinct classes share the report key {0:?}")]
    AmbiguousLabel(String),
}

/// Result alias used throughout the crate.
pub type EvalResult<T> = Result<T, EvalError>;

impl EvalError {
    /// Machine parsable code for this error.
    pub const fn code(&self) -> EvalCode {
        match self {
            EvalError::LengthMismatch { .. } => EvalCode::LengthMismatch,
            EvalError::EmptyInput => EvalCode::EmptyInput,
            EvalError::Prediction(_) => EvalCode::Prediction,
            EvalError::Config(_) => EvalCode::Config,
            EvalError::AmbiguousLabel(_) => EvalCode::AmbiguousLabel,
        }
    }

    /// Prediction helper.
    pub fn prediction(msg: impl Into<String>) -> Self {
        EvalError::Prediction(msg.into())
    }

    /// Configuration helper.
    pub fn config(msg: impl Into<String>) -> Self {
        EvalError::Config(msg.into())
    }
}
