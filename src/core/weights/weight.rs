use std::fmt::Debug;
use std::ops::{Add, Mul, Neg};

/// Numeric weight stored against a key in a [`WeightedMap`](super::WeightedMap).
///
/// Histograms count with `i64`, probability mass functions carry `f64`.
pub trait Weight:
    Copy + Debug + PartialOrd + Add<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    fn zero() -> Self;
}

impl Weight for i64 {
    #[inline]
    fn zero() -> Self {
        0
    }
}

impl Weight for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }
}
