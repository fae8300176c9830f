#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Resampling configuration types.
pub mod config;
/// Centralized constants used across configuration and resampling.
pub mod constants;
/// Record, schema, and class label types.
pub mod data;
/// Batch-buffered streaming filter.
pub mod filter;
/// Class-distribution balance metrics.
pub mod metrics;
/// Stratified resampling core.
pub mod resample;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::ResampleConfig;
pub use data::{ClassSchema, Record};
pub use errors::ResampleError;
pub use filter::ResampleFilter;
pub use metrics::{ClassBalance, ClassShare, class_balance, class_counts};
pub use resample::{ClassSampleStats, ResampleStats, output_total, per_class_targets, resample};
pub use types::{ClassIndex, RecordId};
