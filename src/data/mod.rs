//! Held-out test data handed to the predictor.

pub mod domain;

pub use domain::TestSet;
