//! Built-in classification metrics.
//!
//! Works for any label type with a total order, binary or multi-class. Every
//! label seen in either sequence is a class. Per-class scores follow the usual
//! one-vs-rest definitions:
//!
//! - precision = tp / (tp + fp)
//! - recall    = tp / (tp + fn)
//! - f1        = 2tp / (2tp + fp + fn)
//!
//! A ratio with a zero denominator takes the configured `zero_division` value.
//! Per-class entries are keyed by the label's `Display` form, so distinct
//! classes must render differently; a collision is rejected.
//!
//! TODO: Add a confusion-matrix sub-report keyed by (actual, predicted).

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::common::config::EvalCfg;
use crate::common::error::{EvalError, EvalResult};
use crate::common::log as event_log;

use super::domain::{MetricsComputer, PerformanceReport};

const MODULE: &str = "holdout::evaluation";

pub const ACCURACY: &str = "accuracy";
pub const PRECISION: &str = "precision";
pub const RECALL: &str = "recall";
pub const F1_SCORE: &str = "f1_score";
pub const F1_WEIGHTED: &str = "f1_weighted";
pub const SUPPORT: &str = "support";
pub const PER_CLASS: &str = "per_class";

#[derive(Copy, Clone, Debug, Default)]
struct ClassCounts {
    tp: usize,
    fp: usize,
    fn_: usize,
}

impl ClassCounts {
    /// Number of true examples of the class.
    fn support(&self) -> usize {
        self.tp + self.fn_
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationMetrics {
    zero_division: f64,
}

impl Default for ClassificationMetrics {
    fn default() -> Self {
        Self { zero_division: 0.0 }
    }
}

impl ClassificationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cfg(cfg: &EvalCfg) -> Self {
        Self {
            zero_division: cfg.zero_division,
        }
    }

    pub fn zero_division(&self) -> f64 {
        self.zero_division
    }

    fn ratio(&self, num: usize, den: usize) -> f64 {
        if den == 0 {
            self.zero_division
        } else {
            num as f64 / den as f64
        }
    }

    fn class_report(&self, counts: &ClassCounts) -> (f64, f64, f64, PerformanceReport) {
        let precision = self.ratio(counts.tp, counts.tp + counts.fp);
        let recall = self.ratio(counts.tp, counts.support());
        let f1 = self.ratio(2 * counts.tp, 2 * counts.tp + counts.fp + counts.fn_);

        let mut report = PerformanceReport::new();
        report.insert_scalar(PRECISION, precision);
        report.insert_scalar(RECALL, recall);
        report.insert_scalar(F1_SCORE, f1);
        report.insert_scalar(SUPPORT, counts.support() as f64);
        (precision, recall, f1, report)
    }
}

impl<L: Ord + Display> MetricsComputer<L> for ClassificationMetrics {
    type Report = PerformanceReport;
    type Error = EvalError;

    fn get_performance_metrics(
        &self,
        true_labels: &[L],
        predicted_labels: &[L],
    ) -> EvalResult<PerformanceReport> {
        self.score(true_labels, predicted_labels)
            .inspect_err(|err| event_log::error(MODULE, "metrics_rejected", err))
    }
}

impl ClassificationMetrics {
    fn score<L: Ord + Display>(
        &self,
        true_labels: &[L],
        predicted_labels: &[L],
    ) -> EvalResult<PerformanceReport> {
        if true_labels.len() != predicted_labels.len() {
            return Err(EvalError::LengthMismatch {
                expected: true_labels.len(),
                actual: predicted_labels.len(),
            });
        }
        if true_labels.is_empty() {
            return Err(EvalError::EmptyInput);
        }

        let total = true_labels.len();
        let mut classes: BTreeMap<&L, ClassCounts> = BTreeMap::new();
        let mut correct = 0usize;

        for (truth, predicted) in true_labels.iter().zip(predicted_labels) {
            if truth == predicted {
                correct += 1;
                classes.entry(truth).or_default().tp += 1;
            } else {
                classes.entry(truth).or_default().fn_ += 1;
                classes.entry(predicted).or_default().fp += 1;
            }
        }

        let mut per_class = PerformanceReport::new();
        let (mut precision_sum, mut recall_sum, mut f1_sum, mut f1_weighted) =
            (0.0, 0.0, 0.0, 0.0);
        for (label, counts) in &classes {
            let (precision, recall, f1, report) = self.class_report(counts);
            precision_sum += precision;
            recall_sum += recall;
            f1_sum += f1;
            f1_weighted += f1 * counts.support() as f64;

            let key = label.to_string();
            if per_class.get(&key).is_some() {
                return Err(EvalError::AmbiguousLabel(key));
            }
            per_class.insert_report(key, report);
        }

        // classes is non-empty because total > 0
        let n_classes = classes.len() as f64;
        let mut report = PerformanceReport::new();
        report.insert_scalar(ACCURACY, correct as f64 / total as f64);
        report.insert_scalar(PRECISION, precision_sum / n_classes);
        report.insert_scalar(RECALL, recall_sum / n_classes);
        report.insert_scalar(F1_SCORE, f1_sum / n_classes);
        report.insert_scalar(F1_WEIGHTED, f1_weighted / total as f64);
        report.insert_scalar(SUPPORT, total as f64);
        report.insert_report(PER_CLASS, per_class);
        Ok(report)
    }
}
