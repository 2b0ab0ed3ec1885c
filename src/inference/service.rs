//! Inference orchestration around a [`Classifier`].

use log::{warn, Level};

use crate::common::error::EvalCode;
use crate::common::log as event_log;
use crate::common::time::Stopwatch;

use super::domain::Classifier;

const MODULE: &str = "holdout::inference";

/// Run the classifier over `features` and return its labels untouched.
///
/// Classifier errors are returned as-is. A label count that differs from the
/// row count is logged but not rejected.
pub fn predict<F, C>(classifier: &C, features: &[F]) -> Result<Vec<C::Label>, C::Error>
where
    C: Classifier<F> + ?Sized,
{
    let watch = Stopwatch::start();
    let labels = classifier.predict(features).inspect_err(|_| {
        event_log::event(
            Level::Warn,
            MODULE,
            "predict_failed",
            EvalCode::Collaborator as u32,
            watch.elapsed_ms(),
        );
    })?;

    if labels.len() != features.len() {
        warn!(
            target: MODULE,
            "classifier returned {} labels for {} rows",
            labels.len(),
            features.len()
        );
    }
    event_log::event(
        Level::Debug,
        MODULE,
        "predict",
        EvalCode::Ok as u32,
        watch.elapsed_ms(),
    );

    Ok(labels)
}
