use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("cannot reduce an empty distribution")]
    EmptyReduction,

    #[error("zero total probability")]
    ZeroTotal,

    #[error("distribution contains no values")]
    EmptyDistribution,

    #[error("non-finite probability mass: {0}")]
    NonFinite(f64),

    #[error("sampling walk ended at cumulative mass {reached} without passing {target}")]
    SampleExhausted { target: f64, reached: f64 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
