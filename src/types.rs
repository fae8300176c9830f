/// Zero-based nominal class index within an established schema.
/// Examples: `0`, `3` (valid for any schema with at least 4 classes)
pub type ClassIndex = usize;
/// Stable record identifier carried through resampling untouched.
/// Examples: `census::row_001843`, `iris_042`
pub type RecordId = String;
