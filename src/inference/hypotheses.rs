use crate::core::error::DistributionError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_step() -> i64 {
    1
}

/// Half-open stepped range `start..end` of integer hypotheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HypothesisRange {
    #[schemars(title = "Start", description = "First hypothesis (inclusive)")]
    pub start: i64,

    #[schemars(title = "End", description = "Upper bound (exclusive)")]
    pub end: i64,

    #[serde(default = "default_step")]
    #[schemars(
        title = "Step",
        description = "Distance between consecutive hypotheses",
        range(min = 1),
        default = "default_step"
    )]
    pub step: i64,
}

impl HypothesisRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            step: default_step(),
        }
    }

    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Materializes the hypotheses. Fails when `step` is not positive.
    pub fn hypotheses(&self) -> Result<Vec<i64>, DistributionError> {
        if self.step <= 0 {
            return Err(DistributionError::InvalidParameter(format!(
                "step must be > 0, got {}",
                self.step
            )));
        }
        let step = usize::try_from(self.step)
            .map_err(|e| DistributionError::InvalidParameter(e.to_string()))?;
        Ok((self.start..self.end).step_by(step).collect())
    }
}
