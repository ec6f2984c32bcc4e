use crate::core::error::DistributionError;
use crate::distributions::Pmf;
use crate::inference::hypotheses::HypothesisRange;
use crate::inference::likelihood::Likelihood;
use serde::{Serialize, Serializer};
use std::fmt::Debug;
use std::ops::Deref;

/// Posterior distribution over a fixed set of hypotheses.
///
/// Built with a uniform prior and refined one datum at a time by
/// [`update`](Suite::update): every hypothesis is scaled by
/// `likelihood(hypothesis, datum)` and the whole distribution is then
/// renormalized to 1. The hypothesis set never changes after construction,
/// so the distribution is exposed read-only (through `Deref` to [`Pmf`])
/// and only the mass-rescaling operations are forwarded as mutators.
///
/// If an update fails the suite keeps whatever partial state it reached
/// (for instance every mass multiplied by zero). Take a
/// [`copy`](Suite::copy) beforehand when a rollback is needed.
#[derive(Debug, Clone)]
pub struct Suite<H: Ord, L> {
    posterior: Pmf<H>,
    likelihood: L,
}

impl<H: Ord + Clone + Debug, L> Suite<H, L> {
    /// Uniform prior over `hypotheses`. Duplicates collapse into one entry.
    ///
    /// An empty hypothesis set fails with [`DistributionError::ZeroTotal`].
    pub fn new<I>(hypotheses: I, likelihood: L) -> Result<Self, DistributionError>
    where
        I: IntoIterator<Item = H>,
    {
        let mut posterior = Pmf::new();
        for h in hypotheses {
            posterior.set(h, 1.0);
        }
        posterior.normalize()?;
        log::debug!("suite initialized over {} hypotheses", posterior.len());
        Ok(Self {
            posterior,
            likelihood,
        })
    }

    pub fn with_name<N: Into<String>>(mut self, name: N) -> Self {
        self.posterior = self.posterior.with_name(name);
        self
    }

    pub fn likelihood(&self) -> &L {
        &self.likelihood
    }

    /// Folds one observation into the posterior.
    ///
    /// Fails with [`DistributionError::ZeroTotal`] when the datum is
    /// impossible under every hypothesis; the masses are all zero afterwards.
    pub fn update<D>(&mut self, datum: &D) -> Result<(), DistributionError>
    where
        L: Likelihood<H, D>,
    {
        let likelihood = &self.likelihood;
        self.posterior
            .rescale_with(|h, p| p * likelihood.likelihood(h, datum));
        self.posterior.normalize()
    }

    /// Applies [`update`](Suite::update) to each datum in order, renormalizing
    /// after every one. Stops at the first failure.
    pub fn update_all<D, I>(&mut self, data: I) -> Result<(), DistributionError>
    where
        I: IntoIterator<Item = D>,
        L: Likelihood<H, D>,
    {
        for (i, datum) in data.into_iter().enumerate() {
            self.update(&datum).inspect_err(|e| {
                log::warn!("update #{i} failed: {e}");
            })?;
            log::trace!("after update #{i} peak = {:?}", self.posterior.peak().ok());
        }
        Ok(())
    }

    /// Rescales the posterior to sum to `fraction`. See [`Pmf::normalize_to`].
    pub fn normalize_to(&mut self, fraction: f64) -> Result<(), DistributionError> {
        self.posterior.normalize_to(fraction)
    }

    pub fn normalize(&mut self) -> Result<(), DistributionError> {
        self.posterior.normalize()
    }

    /// `w -> exp(w - max)` over every hypothesis. See [`Pmf::exp`].
    pub fn exp(&mut self) -> Result<(), DistributionError> {
        self.posterior.exp()
    }

    /// `w -> exp(w / max)` over every hypothesis. See [`Pmf::log`].
    pub fn log(&mut self) -> Result<(), DistributionError> {
        self.posterior.log()
    }

    /// Current posterior, detached from the likelihood.
    pub fn posterior(&self) -> &Pmf<H> {
        &self.posterior
    }

    pub fn into_pmf(self) -> Pmf<H> {
        self.posterior
    }
}

impl<H: Ord + Clone + Debug, L: Clone> Suite<H, L> {
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<L> Suite<i64, L> {
    /// Uniform prior over every hypothesis in `range`.
    pub fn from_range(range: HypothesisRange, likelihood: L) -> Result<Self, DistributionError> {
        Self::new(range.hypotheses()?, likelihood)
    }
}

impl<H: Ord + Serialize, L> Serialize for Suite<H, L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.posterior.serialize(serializer)
    }
}

impl<H: Ord, L> Deref for Suite<H, L> {
    type Target = Pmf<H>;

    fn deref(&self) -> &Self::Target {
        &self.posterior
    }
}
