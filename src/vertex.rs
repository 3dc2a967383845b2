//! Struct and functions for working with `Vertex`s from which ICQ lattices are composed.

use crate::float_types::{Real, tolerance};
use nalgebra::Point3;

/// A vertex of an ICQ lattice, holding a bare position.
///
/// The format stores no normals; exporters that need them derive
/// per-facet normals from the triangle winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`] at `pos` in model space.
    pub const fn new(pos: Point3<Real>) -> Self {
        Vertex { pos }
    }

    /// Return the linear interpolation between `self` (`t = 0`) and `other` (`t = 1`).
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        // p(t) = p0 + t * (p1 - p0)
        Vertex::new(self.pos + (other.pos - self.pos) * t)
    }

    /// Midpoint between `self` and `other`; the twofold densify stencil.
    pub fn midpoint(&self, other: &Vertex) -> Vertex {
        self.interpolate(other, 0.5)
    }

    /// Componentwise equality within [`tolerance`].
    pub fn approx_eq(&self, other: &Vertex) -> bool {
        let eps = tolerance();
        (self.pos - other.pos).amax() <= eps
    }
}
