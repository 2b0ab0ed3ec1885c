//! Prediction side of the pipeline: the classifier capability and its runner.
//!
//! TODO: Chunked prediction for classifiers that cap their batch size.

pub mod domain;
pub mod service;

pub use domain::{Classifier, ConstantClassifier, FnClassifier, ThresholdClassifier};
