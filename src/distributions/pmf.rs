use crate::core::error::DistributionError;
use crate::core::keys::NumericKey;
use crate::core::weights::WeightedMap;
use rand::Rng;
use serde::Serialize;
use std::ops::{Deref, DerefMut};

/// Probability mass function over keys `K`.
///
/// Masses are non-negative reals and are *not* kept normalized: the sum is
/// only guaranteed to match a target after [`normalize`](Pmf::normalize) or
/// [`normalize_to`](Pmf::normalize_to) succeeds.
///
/// Keys are enumerated in ascending order. That order is part of the
/// contract: [`peak`](Pmf::peak) returns the smallest key among tied maxima
/// and [`random_with`](Pmf::random_with) walks the cumulative mass in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Pmf<K: Ord> {
    masses: WeightedMap<K, f64>,
}

impl<K: Ord> Default for Pmf<K> {
    fn default() -> Self {
        Self {
            masses: WeightedMap::default(),
        }
    }
}

impl<K: Ord + Clone> Pmf<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts occurrences of each value, then normalizes to 1.
    pub fn from_values<I: IntoIterator<Item = K>>(values: I) -> Result<Self, DistributionError> {
        let mut pmf = Self::new();
        for v in values {
            pmf.increment(v, 1.0);
        }
        pmf.normalize()?;
        Ok(pmf)
    }

    pub fn with_name<N: Into<String>>(self, name: N) -> Self {
        Self {
            masses: self.masses.with_name(name),
        }
    }

    /// Mass stored for `x`, zero when absent.
    #[inline]
    pub fn probability(&self, x: &K) -> f64 {
        self.masses.get(x, 0.0)
    }

    #[inline]
    pub fn probability_or(&self, x: &K, default: f64) -> f64 {
        self.masses.get(x, default)
    }

    /// Rescales every mass so that they sum to 1.
    pub fn normalize(&mut self) -> Result<(), DistributionError> {
        self.normalize_to(1.0)
    }

    /// Rescales every mass so that they sum to `fraction`.
    ///
    /// An empty or all-zero distribution fails with [`DistributionError::ZeroTotal`],
    /// a NaN or infinite total with [`DistributionError::NonFinite`]. Either way
    /// the masses are left untouched.
    pub fn normalize_to(&mut self, fraction: f64) -> Result<(), DistributionError> {
        let total = self.masses.total().unwrap_or(0.0);
        if total == 0.0 {
            log::warn!(
                "cannot normalize {}: zero total probability",
                self.masses.name().unwrap_or("pmf")
            );
            return Err(DistributionError::ZeroTotal);
        }
        if !total.is_finite() {
            log::warn!(
                "cannot normalize {}: total probability is {total}",
                self.masses.name().unwrap_or("pmf")
            );
            return Err(DistributionError::NonFinite(total));
        }
        let factor = fraction / total;
        self.masses.rescale_with(|_, p| p * factor);
        Ok(())
    }

    /// Key carrying the largest mass. Ties go to the smallest key.
    ///
    /// NaN masses are skipped; a distribution holding nothing but NaN fails
    /// with [`DistributionError::NonFinite`].
    pub fn peak(&self) -> Result<&K, DistributionError> {
        if self.masses.is_empty() {
            return Err(DistributionError::EmptyReduction);
        }
        let mut best: Option<(&K, f64)> = None;
        for (k, p) in self.masses.iter().filter(|(_, p)| !p.is_nan()) {
            match best {
                Some((_, m)) if p <= m => {}
                _ => best = Some((k, p)),
            }
        }
        best.map(|(k, _)| k)
            .ok_or(DistributionError::NonFinite(f64::NAN))
    }

    /// Draws a key by inverse-CDF sampling using the thread-local RNG.
    pub fn random(&self) -> Result<K, DistributionError> {
        self.random_with(&mut rand::rng())
    }

    /// Draws a key by inverse-CDF sampling.
    ///
    /// A uniform target in `[0, 1)` is compared against the running sum of
    /// masses in ascending key order; the first key whose running sum exceeds
    /// the target is returned. If the masses sum to less than the target the
    /// walk runs out and [`DistributionError::SampleExhausted`] is returned,
    /// so callers should normalize first.
    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<K, DistributionError> {
        if self.masses.is_empty() {
            return Err(DistributionError::EmptyDistribution);
        }
        let target: f64 = rng.random();
        self.walk_to(target)
    }

    /// Smallest key whose cumulative mass reaches `p` (in `[0, 1]`).
    pub fn percentile(&self, p: f64) -> Result<K, DistributionError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(DistributionError::InvalidParameter(format!(
                "percentile must be in 0.0..=1.0, got {p}"
            )));
        }
        if self.masses.is_empty() {
            return Err(DistributionError::EmptyDistribution);
        }
        let mut running = 0.0;
        for (k, mass) in self.masses.iter() {
            running += mass;
            if running >= p {
                return Ok(k.clone());
            }
        }
        Err(DistributionError::SampleExhausted {
            target: p,
            reached: running,
        })
    }

    /// Central interval holding `percentage` percent of the mass.
    pub fn credible_interval(&self, percentage: f64) -> Result<(K, K), DistributionError> {
        if !(0.0..=100.0).contains(&percentage) {
            return Err(DistributionError::InvalidParameter(format!(
                "percentage must be in 0.0..=100.0, got {percentage}"
            )));
        }
        let tail = (1.0 - percentage / 100.0) / 2.0;
        Ok((self.percentile(tail)?, self.percentile(1.0 - tail)?))
    }

    /// Replaces every mass `w` with `exp(w / m)`, `m` being the largest mass
    /// before the call.
    ///
    /// Despite the name this is not a logarithm; the transform is kept as-is
    /// for compatibility with existing callers. See also [`exp`](Pmf::exp).
    pub fn log(&mut self) -> Result<(), DistributionError> {
        let m = self.masses.max()?;
        self.masses.rescale_with(|_, p| (p / m).exp());
        Ok(())
    }

    /// Replaces every mass `w` with `exp(w - m)`, `m` being the largest mass
    /// before the call. Turns log-probabilities back into (unnormalized)
    /// probabilities without overflow.
    pub fn exp(&mut self) -> Result<(), DistributionError> {
        let m = self.masses.max()?;
        self.masses.rescale_with(|_, p| (p - m).exp());
        Ok(())
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn walk_to(&self, target: f64) -> Result<K, DistributionError> {
        let mut running = 0.0;
        for (k, mass) in self.masses.iter() {
            running += mass;
            if running > target {
                return Ok(k.clone());
            }
        }
        Err(DistributionError::SampleExhausted {
            target,
            reached: running,
        })
    }
}

impl<K: Ord + Clone + NumericKey> Pmf<K> {
    /// Keys read as numbers, ascending.
    pub fn numeric_keys(&self) -> Vec<f64> {
        self.masses.keys().map(NumericKey::as_number).collect()
    }

    /// Σ p(x)·x over every key. Only an expectation once normalized.
    pub fn mean(&self) -> f64 {
        self.masses
            .iter()
            .map(|(k, p)| p * k.as_number())
            .sum()
    }

    /// Σ p(x)·(x − μ)² with μ = [`mean`](Pmf::mean).
    pub fn variance(&self) -> f64 {
        self.variance_about(self.mean())
    }

    /// Σ p(x)·(x − μ)² about a caller-supplied μ.
    pub fn variance_about(&self, mu: f64) -> f64 {
        self.masses
            .iter()
            .map(|(k, p)| p * (k.as_number() - mu).powi(2))
            .sum()
    }
}

impl<K: Ord> Deref for Pmf<K> {
    type Target = WeightedMap<K, f64>;

    fn deref(&self) -> &Self::Target {
        &self.masses
    }
}

impl<K: Ord> DerefMut for Pmf<K> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.masses
    }
}

impl<K: Ord> From<WeightedMap<K, f64>> for Pmf<K> {
    fn from(masses: WeightedMap<K, f64>) -> Self {
        Self { masses }
    }
}
