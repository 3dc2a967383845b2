#![cfg(feature = "obj-io")]

use icqrs::IcqShape;

#[test]
fn obj_output_shape() {
    let cube = IcqShape::cube(4, 30.0).unwrap();
    let obj = cube.to_obj_string("cube4");

    assert!(obj.starts_with("o cube4\n"));

    let v_lines = obj.lines().filter(|l| l.starts_with("v ")).count();
    let f_lines = obj.lines().filter(|l| l.starts_with("f ")).count();
    assert_eq!(v_lines, 150);
    assert_eq!(f_lines, 12 * 4 * 4);
}

#[test]
fn obj_vertices_in_icq_order() {
    let cube = IcqShape::cube(1, 1.0).unwrap();
    let obj = cube.to_obj_string("unit");
    let mut lines = obj.lines();
    assert_eq!(lines.next(), Some("o unit"));
    assert_eq!(lines.next(), Some("v 0.500000 -0.500000 0.500000"));
    assert_eq!(lines.next(), Some("v -0.500000 -0.500000 0.500000"));
}

#[test]
fn obj_face_indices_are_one_based_and_in_range() {
    let cube = IcqShape::cube(2, 10.0).unwrap();
    let obj = cube.to_obj_string("cube2");

    for line in obj.lines().filter(|l| l.starts_with("f ")) {
        for index in line.split_whitespace().skip(1) {
            let index: usize = index.parse().unwrap();
            assert!(index >= 1);
            assert!(index <= cube.vertex_count());
        }
    }
}
