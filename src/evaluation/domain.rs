//! Metrics capability and the report it produces.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use serde::Serialize;

/// Computes a report from ground-truth and predicted labels.
///
/// Cardinality checks belong here, not in the predictor.
pub trait MetricsComputer<L> {
    type Report;
    type Error;

    fn get_performance_metrics(
        &self,
        true_labels: &[L],
        predicted_labels: &[L],
    ) -> Result<Self::Report, Self::Error>;
}

impl<L, M: MetricsComputer<L> + ?Sized> MetricsComputer<L> for &M {
    type Report = M::Report;
    type Error = M::Error;

    fn get_performance_metrics(
        &self,
        true_labels: &[L],
        predicted_labels: &[L],
    ) -> Result<Self::Report, Self::Error> {
        (**self).get_performance_metrics(true_labels, predicted_labels)
    }
}

/// Adapts a closure into a [`MetricsComputer`].
pub struct FnMetrics<G, R, E> {
    f: G,
    _marker: PhantomData<fn() -> (R, E)>,
}

impl<G, R, E> FnMetrics<G, R, E> {
    pub fn new(f: G) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<L, G, R, E> MetricsComputer<L> for FnMetrics<G, R, E>
where
    G: Fn(&[L], &[L]) -> Result<R, E>,
{
    type Report = R;
    type Error = E;

    fn get_performance_metrics(&self, true_labels: &[L], predicted_labels: &[L]) -> Result<R, E> {
        (self.f)(true_labels, predicted_labels)
    }
}

/// A single entry of a [`PerformanceReport`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Scalar(f64),
    Report(PerformanceReport),
}

/// Named evaluation statistics, ordered by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PerformanceReport {
    metrics: BTreeMap<String, MetricValue>,
}

impl PerformanceReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_scalar(&mut self, name: impl Into<String>, value: f64) {
        self.metrics.insert(name.into(), MetricValue::Scalar(value));
    }

    pub fn insert_report(&mut self, name: impl Into<String>, report: PerformanceReport) {
        self.metrics.insert(name.into(), MetricValue::Report(report));
    }

    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.metrics.get(name)
    }

    /// Scalar metric by name; `None` if absent or a sub-report.
    pub fn scalar(&self, name: &str) -> Option<f64> {
        match self.metrics.get(name)? {
            MetricValue::Scalar(value) => Some(*value),
            MetricValue::Report(_) => None,
        }
    }

    pub fn sub_report(&self, name: &str) -> Option<&PerformanceReport> {
        match self.metrics.get(name)? {
            MetricValue::Report(report) => Some(report),
            MetricValue::Scalar(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.metrics.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}
