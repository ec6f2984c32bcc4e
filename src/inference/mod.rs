mod hypotheses;
mod likelihood;
mod suite;

pub use hypotheses::HypothesisRange;
pub use likelihood::Likelihood;
pub use suite::Suite;
