pub mod core;
pub mod distributions;
pub mod inference;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::core::{DistributionError, NumericKey, Real, Weight, WeightedMap};
pub use distributions::{Histogram, Pmf, SamplingParameters};
pub use inference::{HypothesisRange, Likelihood, Suite};

/// Empty histogram.
pub fn make_histogram<K: Ord + Clone>() -> Histogram<K> {
    Histogram::new()
}

/// Empty probability mass function.
pub fn make_pmf<K: Ord + Clone>() -> Pmf<K> {
    Pmf::new()
}

/// Suite with a uniform prior over `hypotheses`.
pub fn make_suite<H, L, I>(hypotheses: I, likelihood: L) -> Result<Suite<H, L>, DistributionError>
where
    H: Ord + Clone + std::fmt::Debug,
    I: IntoIterator<Item = H>,
{
    Suite::new(hypotheses, likelihood)
}
