use thiserror::Error;

use crate::ComponentId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Geometry(#[from] GeometryError),
    #[error("unsupported gesture type \"{0}\"")]
    UnsupportedGesture(String),
    #[error("unknown selection mode \"{0}\"")]
    UnknownSelectionMode(String),
    #[error("x, y and z attributes must be set before applying a selection")]
    MissingAttributes,
    #[error("layer \"{0}\" is already shown in the viewer")]
    DuplicateLayer(String),
    #[error("component \"{0}\" not found")]
    ComponentNotFound(ComponentId),
    #[error("component has {found} values, data has {expected}")]
    ComponentLength { expected: usize, found: usize },
    #[error("interleaved xyz buffer length {0} is not a multiple of 3")]
    InterleavedLength(usize),
}

/// The errors for building a region of interest.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("camera transform is singular or non-finite")]
    SingularTransform,
    #[error("camera transform is not available")]
    TransformUnavailable,
    #[error("matrix has {0} elements, expected 16")]
    InvalidMatrixLength(usize),
    #[error("circle selection has zero radius")]
    ZeroRadius,
    #[error("lasso selection with {0} vertices encloses no area")]
    EmptyPolygon(usize),
    #[error("rectangle selection has zero width or height")]
    EmptyRectangle,
    #[error("selection payload does not match the gesture type")]
    MalformedPayload,
}
