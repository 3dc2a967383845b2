use icqrs::IcqShape;
use icqrs::float_types::Real;
use nalgebra::Point3;

mod support;

#[test]
fn cube_vertex_count() {
    // Step l/q is exactly representable for l = 2q, so no boundary loss.
    for q in 1..=8 {
        let l = 2.0 * q as Real;
        let cube = IcqShape::cube(q, l).unwrap();
        assert_eq!(cube.vertex_count(), 6 * (q + 1) * (q + 1));
        assert_eq!(cube.vertices().len(), cube.vertex_count());
    }
}

#[test]
fn cube_every_vertex_sits_on_a_face_plane() {
    let cube = IcqShape::cube(4, 30.0).unwrap();
    let half = 15.0;
    for v in cube.vertices() {
        let p = v.pos;
        assert!(
            (p.x.abs() - half).abs() < 1e-9
                || (p.y.abs() - half).abs() < 1e-9
                || (p.z.abs() - half).abs() < 1e-9,
            "vertex {} has no coordinate on a face plane",
            p
        );
    }

    // All coordinates stay within the cube.
    let [min_x, min_y, min_z, max_x, max_y, max_z] = support::bounding_box(&cube);
    assert_eq!([min_x, min_y, min_z], [-half, -half, -half]);
    assert_eq!([max_x, max_y, max_z], [half, half, half]);
}

#[test]
fn cube_reference_traversal_order() {
    let cube = IcqShape::cube(4, 30.0).unwrap();
    let verts = cube.vertices();

    // Face 0 (z = +15): first vertex, then the 25th closing the face block.
    assert_eq!(verts[0].pos, Point3::new(15.0, -15.0, 15.0));
    assert_eq!(verts[24].pos, Point3::new(-15.0, 15.0, 15.0));

    // Face 5 (z = -15) is the last block of 25 vertices.
    assert_eq!(cube.face_vertex_count(), 25);
    assert_eq!(verts[125].pos, Point3::new(15.0, 15.0, -15.0));
    for v in &verts[125..150] {
        assert_eq!(v.pos.z, -15.0);
    }
}

#[test]
fn cube_fixed_coordinate_per_face_block() {
    let cube = IcqShape::cube(4, 30.0).unwrap();
    // (coordinate index, expected fixed value) per face, in emission order
    let fixed = [(2, 15.0), (1, 15.0), (0, 15.0), (1, -15.0), (0, -15.0), (2, -15.0)];
    for (face, (axis, value)) in fixed.iter().enumerate() {
        for row in 0..=4 {
            for col in 0..=4 {
                assert_eq!(cube.vertex(face, row, col).pos[*axis], *value);
            }
        }
    }
}

#[test]
fn cube_is_deterministic() {
    let a = IcqShape::cube(4, 30.0).unwrap();
    let b = IcqShape::cube(4, 30.0).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_icq_string(), b.to_icq_string());
}

#[test]
fn cube_rejects_zero_resolution() {
    assert!(IcqShape::cube(0, 30.0).is_err());
}

#[test]
fn generated_cube_validates() {
    for q in [1, 2, 4] {
        let cube = IcqShape::cube(q, 30.0).unwrap();
        assert!(cube.is_valid(), "cube q={} failed seam validation", q);
    }
}
