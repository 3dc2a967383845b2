//! Shape constructors for `IcqShape`.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::shape::IcqShape;
use crate::vertex::Vertex;
use nalgebra::Point3;

/// Vertices of an axis-aligned cube of side length `l` centered at the
/// origin, traversed face by face in ICQ emission order.
///
/// Each face is covered by a `(q+1)×(q+1)` grid: one coordinate pinned at
/// `±l/2`, the other two swept from bound to bound in steps of `l/q`,
/// inclusive of both ends. The traversal reproduces the historical cube
/// shapefile generator exactly:
///
/// | Face | Fixed    | Outer loop            | Inner loop            |
/// |------|----------|-----------------------|-----------------------|
/// | 0    | z = +l/2 | y: -l/2 → +l/2        | x: +l/2 → -l/2        |
/// | 1    | y = +l/2 | z: +l/2 → -l/2        | x: +l/2 → -l/2        |
/// | 2    | x = +l/2 | z: +l/2 → -l/2        | y: -l/2 → +l/2        |
/// | 3    | y = -l/2 | z: +l/2 → -l/2        | x: -l/2 → +l/2        |
/// | 4    | x = -l/2 | z: +l/2 → -l/2        | y: +l/2 → -l/2        |
/// | 5    | z = -l/2 | y: +l/2 → -l/2        | x: +l/2 → -l/2        |
///
/// Loop bounds are tracked by repeated addition of `l/q`, not by index
/// multiplication, to keep parity with historical output. When `l/q` is not
/// exactly representable the accumulated bound check can drop or duplicate
/// the final row of a face; [`IcqShape::cube`] surfaces that as an error.
pub fn cube_vertices(q: usize, l: Real) -> Vec<Vertex> {
    let half = l / 2.0;
    let step = l / q as Real;
    let mut vertices = Vec::with_capacity(6 * (q + 1) * (q + 1));

    // Face 0: z = +l/2
    let k = half;
    let mut j = -half;
    while j <= half {
        let mut i = half;
        while i >= -half {
            vertices.push(Vertex::new(Point3::new(i, j, k)));
            i -= step;
        }
        j += step;
    }
    // Face 1: y = +l/2
    let j = half;
    let mut k = half;
    while k >= -half {
        let mut i = half;
        while i >= -half {
            vertices.push(Vertex::new(Point3::new(i, j, k)));
            i -= step;
        }
        k -= step;
    }
    // Face 2: x = +l/2
    let i = half;
    let mut k = half;
    while k >= -half {
        let mut j = -half;
        while j <= half {
            vertices.push(Vertex::new(Point3::new(i, j, k)));
            j += step;
        }
        k -= step;
    }
    // Face 3: y = -l/2
    let j = -half;
    let mut k = half;
    while k >= -half {
        let mut i = -half;
        while i <= half {
            vertices.push(Vertex::new(Point3::new(i, j, k)));
            i += step;
        }
        k -= step;
    }
    // Face 4: x = -l/2
    let i = -half;
    let mut k = half;
    while k >= -half {
        let mut j = half;
        while j >= -half {
            vertices.push(Vertex::new(Point3::new(i, j, k)));
            j -= step;
        }
        k -= step;
    }
    // Face 5: z = -l/2
    let k = -half;
    let mut j = half;
    while j >= -half {
        let mut i = half;
        while i >= -half {
            vertices.push(Vertex::new(Point3::new(i, j, k)));
            i -= step;
        }
        j -= step;
    }

    vertices
}

impl IcqShape {
    /// An axis-aligned cube of side length `l` (kilometers) centered at the
    /// origin, at resolution `q`.
    ///
    /// Fails with [`ValidationError::ZeroResolution`] for `q == 0`, and with
    /// [`ValidationError::VertexCountMismatch`] when floating-point
    /// accumulation in [`cube_vertices`] loses or duplicates a boundary row.
    pub fn cube(q: usize, l: Real) -> Result<IcqShape, ValidationError> {
        if q == 0 {
            return Err(ValidationError::ZeroResolution);
        }
        IcqShape::from_vertices(q, cube_vertices(q, l))
    }
}
