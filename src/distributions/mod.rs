mod histogram;
mod pmf;
mod sampling;

pub use histogram::Histogram;
pub use pmf::Pmf;
pub use sampling::SamplingParameters;
