//! Held-out evaluation: predict, then score the predictions.

use log::Level;

use crate::common::error::EvalCode;
use crate::common::log as event_log;
use crate::common::time::Stopwatch;
use crate::data::domain::TestSet;
use crate::inference::domain::Classifier;
use crate::inference::service as inference_service;

use super::domain::MetricsComputer;

const MODULE: &str = "holdout::evaluation";

/// Run `classifier` over `test_data` and score the result against
/// `test_labels` with `metrics`.
///
/// Returns the predicted labels alongside the report. Both collaborators share
/// one error type, and their failures come back exactly as raised. When the
/// classifier fails the metrics computer is never called. Label counts are not
/// checked here.
pub fn predict_and_evaluate<F, C, M>(
    classifier: &C,
    metrics: &M,
    test_data: &[F],
    test_labels: &[C::Label],
) -> Result<(Vec<C::Label>, M::Report), C::Error>
where
    C: Classifier<F> + ?Sized,
    M: MetricsComputer<C::Label, Error = C::Error> + ?Sized,
{
    let watch = Stopwatch::start();
    let predicted_labels = inference_service::predict(classifier, test_data)?;
    let report = metrics
        .get_performance_metrics(test_labels, &predicted_labels)
        .inspect_err(|_| {
            event_log::event(
                Level::Warn,
                MODULE,
                "metrics_failed",
                EvalCode::Collaborator as u32,
                watch.elapsed_ms(),
            );
        })?;

    event_log::event(
        Level::Debug,
        MODULE,
        "predict_and_evaluate",
        EvalCode::Ok as u32,
        watch.elapsed_ms(),
    );
    Ok((predicted_labels, report))
}

/// [`predict_and_evaluate`] over a bundled [`TestSet`].
pub fn evaluate_test_set<F, C, M>(
    classifier: &C,
    metrics: &M,
    test_set: &TestSet<F, C::Label>,
) -> Result<(Vec<C::Label>, M::Report), C::Error>
where
    C: Classifier<F> + ?Sized,
    M: MetricsComputer<C::Label, Error = C::Error> + ?Sized,
{
    predict_and_evaluate(classifier, metrics, test_set.features(), test_set.labels())
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::common::error::EvalError;
    use crate::common::log::capture;
    use crate::evaluation::domain::{FnMetrics, PerformanceReport};
    use crate::evaluation::metrics::{ClassificationMetrics, ACCURACY};
    use crate::inference::domain::{ConstantClassifier, FnClassifier, ThresholdClassifier};

    /// Records every call and reports the number of matching positions.
    #[derive(Default)]
    struct RecordingMetrics {
        calls: RefCell<Vec<(Vec<u8>, Vec<u8>)>>,
    }

    impl MetricsComputer<u8> for RecordingMetrics {
        type Report = usize;
        type Error = EvalError;

        fn get_performance_metrics(&self, t: &[u8], p: &[u8]) -> Result<usize, EvalError> {
            self.calls.borrow_mut().push((t.to_vec(), p.to_vec()));
            Ok(t.iter().zip(p).filter(|(a, b)| a == b).count())
        }
    }

    fn fixed(labels: Vec<u8>) -> impl Classifier<Vec<f64>, Label = u8, Error = EvalError> {
        FnClassifier::new(move |_: &[Vec<f64>]| -> Result<Vec<u8>, EvalError> {
            Ok(labels.clone())
        })
    }

    #[test]
    fn metrics_receive_truth_then_predictions() {
        let clf = fixed(vec![1, 0, 1]);
        let metrics = RecordingMetrics::default();
        let rows = vec![vec![0.0]; 3];

        let (predicted, report) = predict_and_evaluate(&clf, &metrics, &rows, &[1, 1, 1]).unwrap();

        assert_eq!(predicted, vec![1, 0, 1]);
        assert_eq!(report, 2);
        assert_eq!(
            metrics.calls.borrow().as_slice(),
            &[(vec![1, 1, 1], vec![1, 0, 1])]
        );
    }

    #[test]
    fn builtin_metrics_give_two_thirds_accuracy() {
        let clf = fixed(vec![1, 0, 1]);
        let rows = vec![vec![0.0]; 3];
        let (predicted, report) =
            predict_and_evaluate(&clf, &ClassificationMetrics::new(), &rows, &[1, 1, 1]).unwrap();

        assert_eq!(predicted, vec![1, 0, 1]);
        let accuracy = report.scalar(ACCURACY).unwrap();
        assert!((accuracy - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn metrics_failure_propagates_unchanged() {
        let clf = fixed(vec![1, 0, 1]);
        let rows = vec![vec![0.0]; 3];
        let err =
            predict_and_evaluate(&clf, &ClassificationMetrics::new(), &rows, &[1, 1]).unwrap_err();
        assert_eq!(
            err,
            EvalError::LengthMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn metrics_failure_emits_warning_events() {
        capture::install();
        let clf = fixed(vec![1, 0, 1, 1]);
        let rows = vec![vec![0.0]; 4];

        let err = predict_and_evaluate(&clf, &ClassificationMetrics::new(), &rows, &[1, 1])
            .unwrap_err();

        assert_eq!(err.code(), EvalCode::LengthMismatch);
        assert!(capture::contains(
            "WARN mod=holdout::evaluation ev=metrics_rejected code=1 err=label length mismatch: 2 true labels vs 4 predicted labels"
        ));
        assert!(capture::contains(
            "WARN mod=holdout::evaluation ev=metrics_failed code=5"
        ));
    }

    #[test]
    fn classifier_failure_skips_metrics() {
        let clf = ThresholdClassifier::new(4, 0.5, 1u8, 0u8);
        let metrics = RecordingMetrics::default();
        let rows = vec![vec![0.0, 1.0]];

        let err = predict_and_evaluate(&clf, &metrics, &rows, &[1]).unwrap_err();

        assert_eq!(err, EvalError::prediction("row 0 has no feature column 4"));
        assert!(metrics.calls.borrow().is_empty());
    }

    #[test]
    fn empty_input_defers_to_collaborators() {
        let clf = ConstantClassifier::new(1u8);
        let rows: Vec<Vec<f64>> = Vec::new();

        let recording = RecordingMetrics::default();
        let (predicted, report) = predict_and_evaluate(&clf, &recording, &rows, &[]).unwrap();
        assert!(predicted.is_empty());
        assert_eq!(report, 0);
        assert_eq!(recording.calls.borrow().len(), 1);

        let err = predict_and_evaluate(&clf, &ClassificationMetrics::new(), &rows, &[])
            .unwrap_err();
        assert_eq!(err, EvalError::EmptyInput);
    }

    #[test]
    fn inputs_are_left_untouched() {
        let clf = ThresholdClassifier::new(0, 0.5, 1u8, 0u8);
        let rows = vec![vec![0.9], vec![0.1], vec![0.6]];
        let labels = vec![1u8, 0, 0];
        let (rows_before, labels_before) = (rows.clone(), labels.clone());

        predict_and_evaluate(&clf, &ClassificationMetrics::new(), &rows, &labels).unwrap();

        assert_eq!(rows, rows_before);
        assert_eq!(labels, labels_before);
    }

    #[test]
    fn test_set_wrapper_matches_direct_call() {
        let clf = ThresholdClassifier::new(0, 0.5, "pos", "neg");
        let set: TestSet<Vec<f64>, &str> = vec![
            (vec![0.8], "pos"),
            (vec![0.3], "pos"),
            (vec![0.1], "neg"),
        ]
        .into_iter()
        .collect();
        let metrics = ClassificationMetrics::new();

        let via_set = evaluate_test_set(&clf, &metrics, &set).unwrap();
        let direct = predict_and_evaluate(&clf, &metrics, set.features(), set.labels()).unwrap();

        assert_eq!(via_set, direct);
        assert_eq!(via_set.0, vec!["pos", "neg", "neg"]);
    }

    #[test]
    fn custom_error_types_pass_through() {
        #[derive(Debug, PartialEq)]
        enum PipelineError {
            Scoring(&'static str),
        }

        let clf = FnClassifier::new(|rows: &[u32]| -> Result<Vec<u32>, PipelineError> {
            Ok(rows.to_vec())
        });
        let invoked = Cell::new(false);
        let metrics = FnMetrics::new(|_: &[u32], _: &[u32]| -> Result<(), PipelineError> {
            invoked.set(true);
            Err(PipelineError::Scoring("calibration table missing"))
        });

        let err = predict_and_evaluate(&clf, &metrics, &[1u32, 2], &[1, 2]).unwrap_err();
        assert!(invoked.get());
        assert_eq!(err, PipelineError::Scoring("calibration table missing"));
    }

    #[test]
    fn trait_objects_are_accepted() {
        let clf: Box<dyn Classifier<Vec<f64>, Label = u8, Error = EvalError>> =
            Box::new(ConstantClassifier::new(0u8));
        let metrics: &dyn MetricsComputer<u8, Report = PerformanceReport, Error = EvalError> =
            &ClassificationMetrics::new();
        let rows = vec![vec![1.0], vec![2.0]];

        let (predicted, report) = predict_and_evaluate(&*clf, metrics, &rows, &[0, 1]).unwrap();
        assert_eq!(predicted, vec![0, 0]);
        assert_eq!(report.scalar(ACCURACY), Some(0.5));
    }
}
