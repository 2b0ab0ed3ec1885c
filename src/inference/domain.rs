//! Classifier capability and a couple of training-free baselines.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::common::error::{EvalError, EvalResult};
use crate::common::log as event_log;

const MODULE: &str = "holdout::inference";

/// Anything that maps feature rows to one predicted label per row.
///
/// Implementations must return labels in row order. The predictor borrows the
/// classifier immutably and never checks the returned length itself.
pub trait Classifier<F> {
    type Label;
    type Error;

    fn predict(&self, features: &[F]) -> Result<Vec<Self::Label>, Self::Error>;
}

impl<F, C: Classifier<F> + ?Sized> Classifier<F> for &C {
    type Label = C::Label;
    type Error = C::Error;

    fn predict(&self, features: &[F]) -> Result<Vec<Self::Label>, Self::Error> {
        (**self).predict(features)
    }
}

impl<F, C: Classifier<F> + ?Sized> Classifier<F> for Box<C> {
    type Label = C::Label;
    type Error = C::Error;

    fn predict(&self, features: &[F]) -> Result<Vec<Self::Label>, Self::Error> {
        (**self).predict(features)
    }
}

impl<F, C: Classifier<F> + ?Sized> Classifier<F> for Arc<C> {
    type Label = C::Label;
    type Error = C::Error;

    fn predict(&self, features: &[F]) -> Result<Vec<Self::Label>, Self::Error> {
        (**self).predict(features)
    }
}

/// Adapts a closure into a [`Classifier`].
pub struct FnClassifier<G, L, E> {
    f: G,
    _marker: PhantomData<fn() -> (L, E)>,
}

impl<G, L, E> FnClassifier<G, L, E> {
    pub fn new(f: G) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<F, G, L, E> Classifier<F> for FnClassifier<G, L, E>
where
    G: Fn(&[F]) -> Result<Vec<L>, E>,
{
    type Label = L;
    type Error = E;

    fn predict(&self, features: &[F]) -> Result<Vec<L>, E> {
        (self.f)(features)
    }
}

/// Predicts the same label for every row.
#[derive(Clone, Debug)]
pub struct ConstantClassifier<L> {
    label: L,
}

impl<L: Clone> ConstantClassifier<L> {
    pub fn new(label: L) -> Self {
        Self { label }
    }
}

impl<F, L: Clone> Classifier<F> for ConstantClassifier<L> {
    type Label = L;
    type Error = EvalError;

    fn predict(&self, features: &[F]) -> EvalResult<Vec<L>> {
        Ok(vec![self.label.clone(); features.len()])
    }
}

/// Single-feature decision stump: `above` when `row[feature] >= threshold`,
/// `below` otherwise.
#[derive(Clone, Debug)]
pub struct ThresholdClassifier<L> {
    pub feature: usize,
    pub threshold: f64,
    pub above: L,
    pub below: L,
}

impl<L: Clone> ThresholdClassifier<L> {
    pub fn new(feature: usize, threshold: f64, above: L, below: L) -> Self {
        Self {
            feature,
            threshold,
            above,
            below,
        }
    }
}

impl<F: AsRef<[f64]>, L: Clone> Classifier<F> for ThresholdClassifier<L> {
    type Label = L;
    type Error = EvalError;

    fn predict(&self, features: &[F]) -> EvalResult<Vec<L>> {
        features
            .iter()
            .enumerate()
            .map(|(row, values)| {
                let value = values.as_ref().get(self.feature).ok_or_else(|| {
                    EvalError::prediction(format!(
                        "row {row} has no feature column {}",
                        self.feature
                    ))
                })?;
                Ok(if *value >= self.threshold {
                    self.above.clone()
                } else {
                    self.below.clone()
                })
            })
            .collect::<EvalResult<Vec<L>>>()
            .inspect_err(|err| event_log::error(MODULE, "threshold_rejected", err))
    }
}
