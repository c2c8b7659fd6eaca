use thiserror::Error;

/// Errors raised when manifest data violates a model invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    #[error("Invalid track type: {0}")]
    InvalidTrackType(i32),
    #[error("Duplicate adaptation set id {id} in period")]
    DuplicateAdaptationSetId { id: i32 },
}
