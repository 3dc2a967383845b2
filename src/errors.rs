//! Validation errors

use crate::float_types::Real;
use nalgebra::Point3;
use std::fmt::Display;

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (SeamMismatch) A redundant vertex has different coordinates on different faces
    SeamMismatch { a: Point3<Real>, b: Point3<Real> },
    /// (VertexCountMismatch) The flat vertex list does not hold `6*(q+1)^2` entries
    VertexCountMismatch { expected: usize, actual: usize },
    /// (InvalidCoordinate) The coordinate has a NaN or infinite
    InvalidCoordinate(Point3<Real>),
    /// (ResolutionTooLow) The model resolution cannot be lowered any further
    ResolutionTooLow(usize),
    /// (ZeroResolution) A lattice needs at least one subdivision per edge
    ZeroResolution,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::SeamMismatch { a, b } => write!(
                f,
                "(SeamMismatch) Redundant vertex has different coordinates on different faces: {} vs {}",
                a, b
            ),
            ValidationError::VertexCountMismatch { expected, actual } => write!(
                f,
                "(VertexCountMismatch) Expected {} vertices for this resolution, got {}",
                expected, actual
            ),
            ValidationError::InvalidCoordinate(point) => {
                write!(f, "(InvalidCoordinate) The coordinate ({}) has a NaN or infinite", point)
            },
            ValidationError::ResolutionTooLow(q) => {
                write!(f, "(ResolutionTooLow) Model resolution cannot be lowered (q={})", q)
            },
            ValidationError::ZeroResolution => {
                write!(f, "(ZeroResolution) A lattice needs at least one subdivision per edge")
            },
        }
    }
}
