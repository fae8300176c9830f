/// Constants used by configuration defaults.
pub mod config {
    /// Default RNG seed for resampling draws.
    pub const DEFAULT_SEED: u64 = 1;
    /// Default output size as a percentage of the classed input size.
    pub const DEFAULT_SIZE_PERCENT: f64 = 100.0;
    /// Default bias toward the uniform class distribution.
    pub const DEFAULT_BIAS_TO_UNIFORM: f64 = 0.0;
    /// Denominator applied to `size_percent` when computing the target total.
    pub const PERCENT_SCALE: f64 = 100.0;
}
