//! ICQ plain-text import/export.
//!
//! The on-disk layout mirrors the historical cube shapefile generator
//! exactly: a header line holding the resolution (a tab, five spaces, the
//! integer), then one line per vertex with each coordinate printed as a tab
//! followed by the value with six fixed decimals.

use crate::float_types::Real;
use crate::io::IoError;
use crate::shape::IcqShape;
use crate::vertex::Vertex;
use nalgebra::Point3;
use std::path::Path;

/// Serialize `shape` to an **ICQ** string.
///
/// ```rust
/// # use icqrs::IcqShape;
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cube = IcqShape::cube(4, 30.0)?;
/// std::fs::write("icq.txt", icqrs::io::to_icq_string(&cube))?;
/// # std::fs::remove_file("icq.txt")?;
/// # Ok(())
/// # }
/// ```
pub fn to_icq_string(shape: &IcqShape) -> String {
    let mut out = String::new();
    out.push_str(&format!("\t     {}\n", shape.q()));
    for vertex in shape.vertices() {
        for component in vertex.pos.iter() {
            out.push_str(&format!("\t{:.6}", component));
        }
        out.push('\n');
    }
    out
}

/// Parse an **ICQ** string: a resolution header, then `6*(q+1)^2`
/// whitespace-separated coordinate triples.
pub fn from_icq_str(input: &str) -> Result<IcqShape, IoError> {
    let mut lines = input.lines();
    let header = lines
        .next()
        .ok_or_else(|| IoError::MalformedInput("empty input".into()))?;
    let q: usize = header.trim().parse()?;

    let mut vertices = Vec::new();
    let mut components = lines.flat_map(str::split_whitespace);
    loop {
        let Some(x) = components.next() else { break };
        let (Some(y), Some(z)) = (components.next(), components.next()) else {
            return Err(IoError::MalformedInput(
                "vertex list length is not a multiple of 3".into(),
            ));
        };
        vertices.push(Vertex::new(Point3::new(
            x.parse::<Real>()?,
            y.parse::<Real>()?,
            z.parse::<Real>()?,
        )));
    }

    Ok(IcqShape::from_vertices(q, vertices)?)
}

impl IcqShape {
    /// Serialize to an ICQ string.
    pub fn to_icq_string(&self) -> String {
        self::to_icq_string(self)
    }

    /// Write to `path` in ICQ format, creating or overwriting the file.
    pub fn write_icq<P: AsRef<Path>>(&self, path: P) -> Result<(), IoError> {
        std::fs::write(path, self::to_icq_string(self))?;
        Ok(())
    }

    /// Parse from an ICQ string.
    pub fn from_icq_str(input: &str) -> Result<IcqShape, IoError> {
        self::from_icq_str(input)
    }

    /// Read an ICQ file from `path`.
    pub fn read_icq<P: AsRef<Path>>(path: P) -> Result<IcqShape, IoError> {
        self::from_icq_str(&std::fs::read_to_string(path)?)
    }
}
