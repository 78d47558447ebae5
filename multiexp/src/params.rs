use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BATCH_LEN;
use crate::errors::Error;

/// Parameters of a simultaneous exponentiation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimExpParams {
    /// Bases per precomputed table. `None` picks the width from the exponent
    /// bit length and the batch length.
    pub block_width: Option<usize>,
    /// Bases processed per batch. Peak table memory is bounded by one batch.
    pub batch_len: usize,
}

impl Default for SimExpParams {
    fn default() -> Self {
        Self {
            block_width: None,
            batch_len: DEFAULT_BATCH_LEN,
        }
    }
}

impl SimExpParams {
    pub fn with_block_width(mut self, block_width: usize) -> Self {
        self.block_width = Some(block_width);
        self
    }

    pub fn with_batch_len(mut self, batch_len: usize) -> Self {
        self.batch_len = batch_len;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.block_width == Some(0) {
            return Err(Error::ZeroBlockWidth);
        }
        if self.batch_len == 0 {
            return Err(Error::ZeroBatchLength);
        }
        Ok(())
    }
}
