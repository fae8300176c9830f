use serde::{Deserialize, Serialize};

pub use crate::types::{ClassIndex, RecordId};

/// Class schema established by the caller before any record is filtered.
///
/// Only the nominal class cardinality is relevant to resampling; attribute
/// metadata stays with the surrounding collaborator.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ClassSchema {
    /// Number of nominal classes `C`; valid class indices are `0..C-1`.
    pub classes: usize,
}

impl ClassSchema {
    /// Create a schema with `classes` nominal class values.
    pub fn new(classes: usize) -> Self {
        Self { classes }
    }

    /// Returns `true` when `class` is a valid index under this schema.
    pub fn contains(&self, class: ClassIndex) -> bool {
        class < self.classes
    }
}

/// A labeled record flowing through the filter.
///
/// The payload is opaque to resampling: records are reordered, duplicated,
/// or omitted, never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Record {
    /// Stable record identifier (used to trace a record through output).
    pub id: RecordId,
    /// Nominal class index, or `None` when the class value is missing.
    pub class: Option<ClassIndex>,
    /// Opaque feature payload carried through untouched.
    pub payload: Vec<f64>,
}

impl Record {
    /// Build a record with a known nominal class.
    pub fn new(id: impl Into<RecordId>, class: ClassIndex, payload: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            class: Some(class),
            payload,
        }
    }

    /// Build a record whose class value is missing.
    pub fn with_missing_class(id: impl Into<RecordId>, payload: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            class: None,
            payload,
        }
    }
}
