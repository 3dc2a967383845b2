//! Test support library
//! Provides various helper functions & utilities for tests.

use icqrs::IcqShape;
use icqrs::float_types::Real;

/// Returns the bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]`
/// spanned by a shape's vertices.
#[allow(dead_code)]
pub fn bounding_box(shape: &IcqShape) -> [Real; 6] {
    let mut min_x = Real::MAX;
    let mut min_y = Real::MAX;
    let mut min_z = Real::MAX;
    let mut max_x = Real::MIN;
    let mut max_y = Real::MIN;
    let mut max_z = Real::MIN;

    for v in shape.vertices() {
        let p = v.pos;
        if p.x < min_x {
            min_x = p.x;
        }
        if p.y < min_y {
            min_y = p.y;
        }
        if p.z < min_z {
            min_z = p.z;
        }
        if p.x > max_x {
            max_x = p.x;
        }
        if p.y > max_y {
            max_y = p.y;
        }
        if p.z > max_z {
            max_z = p.z;
        }
    }

    [min_x, min_y, min_z, max_x, max_y, max_z]
}
