// lib.rs - held-out inference and evaluation core
pub mod common;
pub mod data;
pub mod evaluation;
pub mod inference;

pub use common::{EvalCfg, EvalError, EvalResult};
pub use data::TestSet;
pub use evaluation::{
    evaluate_test_set, predict_and_evaluate, ClassificationMetrics, MetricsComputer,
    PerformanceReport,
};
pub use inference::Classifier;
