pub mod error;
pub mod keys;
pub mod weights;

pub use error::DistributionError;
pub use keys::{NumericKey, Real};
pub use weights::{Weight, WeightedMap};
