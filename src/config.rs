use crate::constants::config::{
    DEFAULT_BIAS_TO_UNIFORM, DEFAULT_SEED, DEFAULT_SIZE_PERCENT,
};
use crate::errors::ResampleError;

/// Immutable resampling configuration, fixed before the first batch buffers.
///
/// Invalid combinations are rejected by [`ResampleConfig::validate`] when the
/// filter is constructed, never mid-resample.
#[derive(Clone, Debug)]
pub struct ResampleConfig {
    /// RNG seed that controls every random draw.
    pub seed: u64,
    /// Output size as a percentage of the classed input size.
    pub size_percent: f64,
    /// 0.0 keeps the empirical class distribution; 1.0 forces uniform.
    pub bias_to_uniform: f64,
    /// Draw with replacement (default) or without.
    pub with_replacement: bool,
    /// Emit the complement of the drawn subset; only valid without replacement.
    pub invert_selection: bool,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            size_percent: DEFAULT_SIZE_PERCENT,
            bias_to_uniform: DEFAULT_BIAS_TO_UNIFORM,
            with_replacement: true,
            invert_selection: false,
        }
    }
}

impl ResampleConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the output size as a percentage of the classed input size.
    pub fn with_size_percent(mut self, size_percent: f64) -> Self {
        self.size_percent = size_percent;
        self
    }

    /// Set the bias toward the uniform class distribution.
    pub fn with_bias_to_uniform(mut self, bias: f64) -> Self {
        self.bias_to_uniform = bias;
        self
    }

    /// Enable or disable sampling with replacement.
    pub fn with_replacement(mut self, with_replacement: bool) -> Self {
        self.with_replacement = with_replacement;
        self
    }

    /// Enable or disable inverted (complement) selection.
    pub fn with_inverted_selection(mut self, invert: bool) -> Self {
        self.invert_selection = invert;
        self
    }

    /// Reject invalid settings before any batch is processed.
    pub fn validate(&self) -> Result<(), ResampleError> {
        if !self.bias_to_uniform.is_finite() || !(0.0..=1.0).contains(&self.bias_to_uniform) {
            return Err(ResampleError::Configuration(format!(
                "bias_to_uniform must be within [0, 1], got {}",
                self.bias_to_uniform
            )));
        }
        if !self.size_percent.is_finite() || self.size_percent < 0.0 {
            return Err(ResampleError::Configuration(format!(
                "size_percent must be a non-negative finite value, got {}",
                self.size_percent
            )));
        }
        if self.invert_selection && self.with_replacement {
            return Err(ResampleError::Configuration(
                "invert_selection requires sampling without replacement".into(),
            ));
        }
        Ok(())
    }
}
