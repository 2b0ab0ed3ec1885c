//! Held-out evaluation: the metrics capability, the built-in classification
//! metrics, and the predict-then-score step that ties them to a classifier.
//!
//! TODO: Probability-based metrics (ROC AUC, log loss) need a scoring
//!       capability that returns class probabilities, not just labels.

pub mod domain;
pub mod metrics;
pub mod service;

pub use domain::{FnMetrics, MetricValue, MetricsComputer, PerformanceReport};
pub use metrics::ClassificationMetrics;
pub use service::{evaluate_test_set, predict_and_evaluate};
