mod weight;
mod weighted_map;

pub use weight::Weight;
pub use weighted_map::WeightedMap;
