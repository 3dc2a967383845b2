//! `IcqShape` struct: the six-face vertex lattice and its operations.
//!
//! Face numbering and in-face layout follow the small-body shape model
//! convention (see <https://sbib.psi.edu/spc_wiki/SHAPE.TXT>):
//!
//! ```text
//!                         -----------
//!                         |         |
//!                         |    0    |
//!                         |         |
//!   -----------------------------------------
//!   |         |         |         |         |
//!   |    4    |    3    |    2    |    1    |
//!   |         |         |         |         |
//!   -----------------------------------------
//!                         |         |
//!                         |    5    |
//!                         |         |
//!                         -----------
//! ```
//!
//! Within a face, `col` runs `0..=q` fastest and `row` `0..=q` slowest, so the
//! vertex at `(face, row, col)` sits at flat index
//! `face*(q+1)^2 + row*(q+1) + col`. Vertices on the 12 cube edges and the
//! 8 corners are stored redundantly, once per adjacent face;
//! [`IcqShape::validate`] checks that the copies coincide.

use crate::errors::ValidationError;
use crate::triangulated::Triangulated3D;
use crate::vertex::Vertex;

/// A lattice point addressed as `(face, row, col)`.
type Lattice = (usize, usize, usize);

/// One seam identity: maps a position along the seam to the two
/// lattice points that must coincide.
type SeamFn = fn(usize, usize) -> (Lattice, Lattice);

/// An ICQ shape model of resolution `q`, holding `6*(q+1)^2` vertices in
/// flat face-major, row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct IcqShape {
    q: usize,
    vertices: Vec<Vertex>,
}

impl IcqShape {
    /// Build an `IcqShape` from an existing flat vertex list.
    ///
    /// Fails with [`ValidationError::VertexCountMismatch`] unless the list
    /// holds exactly `6*(q+1)^2` vertices, and with
    /// [`ValidationError::ZeroResolution`] for `q == 0`.
    pub fn from_vertices(q: usize, vertices: Vec<Vertex>) -> Result<Self, ValidationError> {
        if q == 0 {
            return Err(ValidationError::ZeroResolution);
        }
        let expected = 6 * (q + 1) * (q + 1);
        if vertices.len() != expected {
            return Err(ValidationError::VertexCountMismatch {
                expected,
                actual: vertices.len(),
            });
        }
        Ok(IcqShape { q, vertices })
    }

    /// Model resolution: subdivisions along each face edge.
    pub const fn q(&self) -> usize {
        self.q
    }

    /// Vertices per face: `(q+1)^2`.
    pub const fn face_vertex_count(&self) -> usize {
        (self.q + 1) * (self.q + 1)
    }

    /// Total vertex count: `6*(q+1)^2`.
    pub const fn vertex_count(&self) -> usize {
        6 * self.face_vertex_count()
    }

    /// The flat vertex list, in ICQ emission order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Flat index of the lattice point `(face, row, col)`.
    ///
    /// Panics when any index is out of range for this resolution.
    pub fn flat_index(&self, face: usize, row: usize, col: usize) -> usize {
        assert!(face < 6 && row <= self.q && col <= self.q);
        let side = self.q + 1;
        (face * side + row) * side + col
    }

    /// Vertex at the lattice point `(face, row, col)`.
    pub fn vertex(&self, face: usize, row: usize, col: usize) -> &Vertex {
        &self.vertices[self.flat_index(face, row, col)]
    }

    /// Mutable vertex at the lattice point `(face, row, col)`.
    pub fn vertex_mut(&mut self, face: usize, row: usize, col: usize) -> &mut Vertex {
        let idx = self.flat_index(face, row, col);
        &mut self.vertices[idx]
    }

    /// Checks that all coordinates are finite and that every redundant
    /// vertex carries coinciding coordinates on each face that shares it.
    ///
    /// Comparison is componentwise within [`crate::float_types::tolerance`].
    /// Corner identities are checked pairwise; epsilon equality is not
    /// transitive, so all three comparisons per corner are kept even though
    /// the corners also appear in the edge checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for vertex in &self.vertices {
            if !vertex.pos.iter().all(|c| c.is_finite()) {
                return Err(ValidationError::InvalidCoordinate(vertex.pos));
            }
        }

        let eq = |a: Lattice, b: Lattice| -> Result<(), ValidationError> {
            let va = self.vertex(a.0, a.1, a.2);
            let vb = self.vertex(b.0, b.1, b.2);
            if va.approx_eq(vb) {
                Ok(())
            } else {
                Err(ValidationError::SeamMismatch { a: va.pos, b: vb.pos })
            }
        };

        // The 12 cube edges, each shared by two faces:
        //   v(I,Q,5)=v(Q-I,Q,3)  v(I,0,5)=v(I,Q,1)  v(I,0,4)=v(Q,Q-I,0)
        //   v(I,0,3)=v(Q-I,0,0)  v(I,0,2)=v(0,I,0)  v(I,0,1)=v(I,Q,0)
        //   v(Q,I,5)=v(I,Q,4)    v(Q,I,4)=v(0,I,3)  v(Q,I,3)=v(0,I,2)
        //   v(Q,I,2)=v(0,I,1)    v(0,I,5)=v(Q-I,Q,2) v(0,I,4)=v(Q,I,1)
        let edges: [SeamFn; 12] = [
            |q, i| ((5, q, i), (3, q, q - i)),
            |q, i| ((5, 0, i), (1, q, i)),
            |q, i| ((4, 0, i), (0, q - i, q)),
            |q, i| ((3, 0, i), (0, 0, q - i)),
            |_q, i| ((2, 0, i), (0, i, 0)),
            |q, i| ((1, 0, i), (0, q, i)),
            |q, i| ((5, i, q), (4, q, i)),
            |q, i| ((4, i, q), (3, i, 0)),
            |q, i| ((3, i, q), (2, i, 0)),
            |q, i| ((2, i, q), (1, i, 0)),
            |q, i| ((5, i, 0), (2, q, q - i)),
            |q, i| ((4, i, 0), (1, i, q)),
        ];
        for seam in edges {
            for i in 0..=self.q {
                let (a, b) = seam(self.q, i);
                eq(a, b)?;
            }
        }

        // The 8 corners, each shared by three faces.
        let q = self.q;
        let corners: [[Lattice; 3]; 8] = [
            [(0, 0, 0), (2, 0, 0), (3, 0, q)],
            [(0, q, 0), (1, 0, 0), (2, 0, q)],
            [(0, 0, q), (3, 0, 0), (4, 0, q)],
            [(0, q, q), (4, 0, 0), (1, 0, q)],
            [(5, 0, 0), (1, q, 0), (2, q, q)],
            [(5, q, 0), (2, q, 0), (3, q, q)],
            [(5, 0, q), (4, q, 0), (1, q, q)],
            [(5, q, q), (3, q, 0), (4, q, q)],
        ];
        for [a, b, c] in corners {
            eq(a, b)?;
            eq(b, c)?;
            eq(a, c)?;
        }

        Ok(())
    }

    /// Non-failing variant of [`validate`](Self::validate).
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns the triangles constituting the model, as triples of flat
    /// vertex indices.
    ///
    /// Each lattice cell contributes two triangles; `12*q^2` in total, in
    /// face-major, column-major cell order.
    pub fn triangles(&self) -> Vec<[usize; 3]> {
        let q = self.q;
        let mut triangles = Vec::with_capacity(12 * q * q);
        for face in 0..6 {
            for i in 0..q {
                for j in 0..q {
                    let v00 = self.flat_index(face, j, i);
                    let v01 = self.flat_index(face, j, i + 1);
                    let v10 = self.flat_index(face, j + 1, i);
                    let v11 = self.flat_index(face, j + 1, i + 1);
                    triangles.push([v00, v01, v11]);
                    triangles.push([v00, v10, v11]);
                }
            }
        }
        triangles
    }

    /// One pass of twofold densification: `q -> 2q`.
    ///
    /// Original lattice points are preserved at the even positions; odd
    /// positions take the midpoint of their neighbours, with each cell
    /// center interpolated along the cell diagonal.
    pub fn densify(&self) -> IcqShape {
        let q2 = 2 * self.q;
        let side = q2 + 1;
        let mut vertices = Vec::with_capacity(6 * side * side);
        for face in 0..6 {
            for row in 0..=q2 {
                for col in 0..=q2 {
                    let (j, i) = (row / 2, col / 2);
                    let vertex = match (row % 2, col % 2) {
                        (0, 0) => self.vertex(face, j, i).clone(),
                        (0, 1) => self.vertex(face, j, i).midpoint(self.vertex(face, j, i + 1)),
                        (1, 0) => self.vertex(face, j, i).midpoint(self.vertex(face, j + 1, i)),
                        _ => self.vertex(face, j, i).midpoint(self.vertex(face, j + 1, i + 1)),
                    };
                    vertices.push(vertex);
                }
            }
        }
        IcqShape { q: q2, vertices }
    }

    /// One pass of twofold coarse graining: `q -> q/2`, keeping every other
    /// lattice point. An odd resolution floors.
    ///
    /// Fails with [`ValidationError::ResolutionTooLow`] when the result
    /// would drop below 1.
    pub fn coarsen(&self) -> Result<IcqShape, ValidationError> {
        let half = self.q / 2;
        if half < 1 {
            return Err(ValidationError::ResolutionTooLow(self.q));
        }
        let side = half + 1;
        let mut vertices = Vec::with_capacity(6 * side * side);
        for face in 0..6 {
            for row in 0..=half {
                for col in 0..=half {
                    vertices.push(self.vertex(face, 2 * row, 2 * col).clone());
                }
            }
        }
        Ok(IcqShape { q: half, vertices })
    }
}

/// So all triangle-based IO backends work on `IcqShape` too.
impl Triangulated3D for IcqShape {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for [a, b, c] in self.triangles() {
            f([
                self.vertices[a].clone(),
                self.vertices[b].clone(),
                self.vertices[c].clone(),
            ]);
        }
    }
}
