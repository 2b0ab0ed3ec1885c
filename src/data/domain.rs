//! Held-out dataset definitions.

/// Feature rows paired with their ground-truth labels.
///
/// Lengths are not checked here. A mismatch between labels and predictions is
/// reported by whichever metrics computer consumes them.
#[derive(Clone, Debug, PartialEq)]
pub struct TestSet<F, L> {
    features: Vec<F>,
    labels: Vec<L>,
}

impl<F, L> TestSet<F, L> {
    pub fn new(features: Vec<F>, labels: Vec<L>) -> Self {
        Self { features, labels }
    }

    pub fn features(&self) -> &[F] {
        &self.features
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Number of feature rows.
    pub fn rows(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn into_parts(self) -> (Vec<F>, Vec<L>) {
        (self.features, self.labels)
    }
}

impl<F, L> FromIterator<(F, L)> for TestSet<F, L> {
    fn from_iter<I: IntoIterator<Item = (F, L)>>(iter: I) -> Self {
        let (features, labels) = iter.into_iter().unzip();
        Self { features, labels }
    }
}
