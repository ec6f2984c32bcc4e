mod likelihoods;

pub use likelihoods::{DiceLikelihood, EuroLikelihood, LocomotiveLikelihood};
