use serde::Serialize;
use std::cmp::Ordering;

/// Keys that can be read back as a number.
///
/// Probability mass functions interpret every key numerically for
/// `mean`, `variance` and `numeric_keys`.
pub trait NumericKey {
    fn as_number(&self) -> f64;
}

macro_rules! numeric_key {
    ($($t:ty),*) => {
        $(
            impl NumericKey for $t {
                #[inline]
                fn as_number(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

numeric_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Real-valued key with a total order, so it can index a sorted map.
///
/// Ordering follows [`f64::total_cmp`]: `-0.0 < 0.0` and NaN sorts after
/// every finite value.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Real(pub f64);

impl Real {
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Real {
    fn from(x: f64) -> Self {
        Real(x)
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Real {}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl NumericKey for Real {
    #[inline]
    fn as_number(&self) -> f64 {
        self.0
    }
}
