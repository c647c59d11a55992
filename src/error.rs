//! Error types for casteljau operations.

use thiserror::Error;

/// Errors reported by the checked entry points and the owned curve types.
///
/// The evaluation and subdivision engines themselves never fail; these
/// errors come from wrappers that validate buffers up front.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplineError {
    /// A curve needs at least one control point.
    #[error("control polygon is empty")]
    EmptyControlPolygon,

    /// The destination buffer cannot hold the subdivided control points.
    #[error("output buffer too small: need {required} elements, got {actual}")]
    OutputTooSmall {
        /// Number of elements the subdivision writes.
        required: usize,
        /// Length of the buffer that was provided.
        actual: usize,
    },
}
