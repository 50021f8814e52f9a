use thiserror::Error;

use crate::core::ValueKind;

pub type StudioResult<T> = Result<T, StudioError>;

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("cannot write `{path}`: segment `{segment}` addresses a {found} value")]
    StructuralMismatch {
        path: String,
        segment: String,
        found: ValueKind,
    },

    #[error("duplicate control id `{0}`")]
    DuplicateControlId(String),

    #[error("duplicate control group id `{0}`")]
    DuplicateGroupId(String),

    #[error("unknown control `{0}`")]
    UnknownControl(String),

    #[error("invalid input for control `{control}`: {reason}")]
    InvalidInput { control: String, reason: String },

    #[error("edit `{descendant}` overlaps its ancestor edit `{ancestor}`")]
    OverlappingEdits {
        ancestor: String,
        descendant: String,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
