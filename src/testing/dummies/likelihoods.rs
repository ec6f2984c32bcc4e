use crate::inference::Likelihood;

/// Hypothesis = number of sides on a die, datum = the rolled face.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiceLikelihood;

impl Likelihood<i64, i64> for DiceLikelihood {
    fn likelihood(&self, sides: &i64, outcome: &i64) -> f64 {
        if *outcome <= 0 || outcome > sides {
            0.0
        } else {
            1.0 / *sides as f64
        }
    }
}

/// Hypothesis = number of locomotives in service, datum = an observed serial number.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocomotiveLikelihood;

impl Likelihood<i64, i64> for LocomotiveLikelihood {
    fn likelihood(&self, fleet: &i64, serial: &i64) -> f64 {
        if *serial <= 0 || serial > fleet {
            0.0
        } else {
            1.0 / *fleet as f64
        }
    }
}

/// Hypothesis = percent chance of heads, datum = `'H'` or anything else for tails.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuroLikelihood;

impl Likelihood<i64, char> for EuroLikelihood {
    fn likelihood(&self, percent: &i64, side: &char) -> f64 {
        let x = *percent as f64 / 100.0;
        if *side == 'H' { x } else { 1.0 - x }
    }
}
