//! Wavefront OBJ export. Viewable at <https://3dviewer.net/>

use crate::shape::IcqShape;

/// Convert `shape` to a **Wavefront OBJ** string with the given object `name`.
///
/// Vertices are emitted once each, in ICQ order, so face indices reuse the
/// shared lattice points (1-based, as OBJ requires).
///
/// ```rust
/// # use icqrs::IcqShape;
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cube = IcqShape::cube(2, 1.0)?;
/// let obj = cube.to_obj_string("cube");
/// assert!(obj.starts_with("o cube\n"));
/// # Ok(())
/// # }
/// ```
pub fn to_obj_string(shape: &IcqShape, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("o {name}\n"));

    for vertex in shape.vertices() {
        let p = vertex.pos;
        out.push_str(&format!("v {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
    }
    for [a, b, c] in shape.triangles() {
        out.push_str(&format!("f {} {} {}\n", a + 1, b + 1, c + 1));
    }

    out
}

impl IcqShape {
    pub fn to_obj_string(&self, name: &str) -> String {
        self::to_obj_string(self, name)
    }
}
