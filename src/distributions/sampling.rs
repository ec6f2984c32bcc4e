use crate::core::error::DistributionError;
use crate::distributions::{Histogram, Pmf};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_draws() -> usize {
    1000
}

/// How many keys to draw from a [`Pmf`] and how to seed the generator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SamplingParameters {
    #[serde(default = "default_draws")]
    #[schemars(
        title = "Draws",
        description = "Number of samples to draw",
        range(min = 1),
        default = "default_draws"
    )]
    pub draws: usize,

    #[serde(default)]
    #[schemars(
        title = "Seed",
        description = "PRNG seed; empty = thread-local generator"
    )]
    pub seed: Option<u64>,
}

impl Default for SamplingParameters {
    fn default() -> Self {
        Self {
            draws: default_draws(),
            seed: None,
        }
    }
}

impl SamplingParameters {
    pub fn seeded(draws: usize, seed: u64) -> Self {
        Self {
            draws,
            seed: Some(seed),
        }
    }
}

impl<K: Ord + Clone> Pmf<K> {
    /// Draws `params.draws` keys and counts them in a [`Histogram`].
    pub fn sample(&self, params: &SamplingParameters) -> Result<Histogram<K>, DistributionError> {
        if params.draws == 0 {
            return Err(DistributionError::InvalidParameter(
                "draws must be > 0".into(),
            ));
        }
        match params.seed {
            Some(seed) => self.sample_with(params.draws, &mut StdRng::seed_from_u64(seed)),
            None => self.sample_with(params.draws, &mut rand::rng()),
        }
    }

    pub fn sample_with<R: Rng + ?Sized>(
        &self,
        draws: usize,
        rng: &mut R,
    ) -> Result<Histogram<K>, DistributionError> {
        let mut hist = Histogram::new();
        for _ in 0..draws {
            hist.increment(self.random_with(rng)?, 1);
        }
        log::debug!("drew {draws} samples over {} keys", hist.len());
        Ok(hist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin() -> Pmf<char> {
        let mut p = Pmf::new();
        p.set('A', 0.9);
        p.set('B', 0.1);
        p
    }

    #[test]
    fn defaults_from_empty_json() {
        let params: SamplingParameters = serde_json::from_str("{}").unwrap();
        assert_eq!(params.draws, 1000);
        assert!(params.seed.is_none());
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let p = coin();
        let params = SamplingParameters::seeded(500, 42);
        let a = p.sample(&params).unwrap();
        let b = p.sample(&params).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.total().unwrap(), 500);
    }

    #[test]
    fn sample_counts_track_masses() {
        let p = coin();
        let hist = p.sample(&SamplingParameters::seeded(10_000, 2025)).unwrap();
        let share = hist.frequency(&'A') as f64 / 10_000.0;
        assert!((share - 0.9).abs() <= 0.03, "share of A = {share}");
    }

    #[test]
    fn rejects_zero_draws_and_empty_pmf() {
        let p = coin();
        assert!(matches!(
            p.sample(&SamplingParameters::seeded(0, 1)),
            Err(DistributionError::InvalidParameter(_))
        ));

        let empty: Pmf<char> = Pmf::new();
        assert!(matches!(
            empty.sample(&SamplingParameters::seeded(3, 1)),
            Err(DistributionError::EmptyDistribution)
        ));
    }

    #[test]
    fn schema_mentions_fields() {
        let schema = schemars::schema_for!(SamplingParameters);
        let json = serde_json::to_value(&schema).unwrap();
        let props = json.get("properties").unwrap();
        assert!(props.get("draws").is_some());
        assert!(props.get("seed").is_some());
    }
}
