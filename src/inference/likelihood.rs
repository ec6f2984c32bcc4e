/// Probability of observing a datum under a hypothesis.
///
/// Implementations must return a non-negative value, and exactly `0.0` for
/// observations that are impossible under the hypothesis. Negative values
/// are not rejected and will corrupt normalization.
///
/// Any `Fn(&H, &D) -> f64` closure is a likelihood.
pub trait Likelihood<H, D> {
    fn likelihood(&self, hypothesis: &H, datum: &D) -> f64;
}

impl<H, D, F> Likelihood<H, D> for F
where
    F: Fn(&H, &D) -> f64,
{
    #[inline]
    fn likelihood(&self, hypothesis: &H, datum: &D) -> f64 {
        self(hypothesis, datum)
    }
}
