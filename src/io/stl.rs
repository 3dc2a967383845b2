use crate::float_types::{Real, tolerance};
use crate::triangulated::Triangulated3D;
use crate::vertex::Vertex;
use nalgebra::Vector3;
use std::io::Cursor;

/// Facet normal from the triangle winding; zero for degenerate triangles.
fn facet_normal(tri: &[Vertex; 3]) -> Vector3<Real> {
    let n = (tri[1].pos - tri[0].pos).cross(&(tri[2].pos - tri[0].pos));
    if n.norm() > tolerance() { n.normalize() } else { Vector3::zeros() }
}

/// Export to ASCII STL
/// Convert this shape to an **ASCII STL** string with the given `name`.
///
/// ```rust
/// # use icqrs::IcqShape;
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cube = IcqShape::cube(2, 1.0)?;
/// let bytes = cube.to_stl_ascii("my_solid");
/// std::fs::write("my_solid.stl", bytes)?;
/// # std::fs::remove_file("my_solid.stl")?;
/// # Ok(())
/// # }
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for v in &tri {
            let p = v.pos;
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// Convert this shape to a **binary STL** byte vector with the given `name`.
///
/// The resulting `Vec<u8>` can then be written to a file or handled in memory.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T, _name: &str) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|v| {
                    let p = v.pos;
                    Vertex::new([p.x as f32, p.y as f32, p.z as f32])
                }),
            });
        }
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl crate::shape::IcqShape {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
    pub fn to_stl_binary(&self, name: &str) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self, name)
    }
}
