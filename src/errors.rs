use thiserror::Error;

use crate::types::ClassIndex;

/// Error type for filter preconditions and configuration failures.
#[derive(Debug, Error)]
pub enum ResampleError {
    #[error("no class schema established")]
    SchemaNotEstablished,
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("class index {class} out of range for schema with {classes} classes")]
    ClassOutOfRange { class: ClassIndex, classes: usize },
}
