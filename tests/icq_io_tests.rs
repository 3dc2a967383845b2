use icqrs::IcqShape;
use icqrs::io::IoError;

/// The full legacy shapefile for a q=1 cube, byte for byte.
const CUBE_Q1_L30: &str = "\t     1\n\
\t15.000000\t-15.000000\t15.000000\n\
\t-15.000000\t-15.000000\t15.000000\n\
\t15.000000\t15.000000\t15.000000\n\
\t-15.000000\t15.000000\t15.000000\n\
\t15.000000\t15.000000\t15.000000\n\
\t-15.000000\t15.000000\t15.000000\n\
\t15.000000\t15.000000\t-15.000000\n\
\t-15.000000\t15.000000\t-15.000000\n\
\t15.000000\t-15.000000\t15.000000\n\
\t15.000000\t15.000000\t15.000000\n\
\t15.000000\t-15.000000\t-15.000000\n\
\t15.000000\t15.000000\t-15.000000\n\
\t-15.000000\t-15.000000\t15.000000\n\
\t15.000000\t-15.000000\t15.000000\n\
\t-15.000000\t-15.000000\t-15.000000\n\
\t15.000000\t-15.000000\t-15.000000\n\
\t-15.000000\t15.000000\t15.000000\n\
\t-15.000000\t-15.000000\t15.000000\n\
\t-15.000000\t15.000000\t-15.000000\n\
\t-15.000000\t-15.000000\t-15.000000\n\
\t15.000000\t15.000000\t-15.000000\n\
\t-15.000000\t15.000000\t-15.000000\n\
\t15.000000\t-15.000000\t-15.000000\n\
\t-15.000000\t-15.000000\t-15.000000\n";

#[test]
fn icq_string_matches_legacy_format_exactly() {
    let cube = IcqShape::cube(1, 30.0).unwrap();
    assert_eq!(cube.to_icq_string(), CUBE_Q1_L30);
}

#[test]
fn icq_header_and_first_line() {
    let cube = IcqShape::cube(4, 30.0).unwrap();
    let icq = cube.to_icq_string();
    assert!(icq.starts_with("\t     4\n\t15.000000\t-15.000000\t15.000000\n"));
    // one header line plus one line per vertex
    assert_eq!(icq.lines().count(), 1 + 150);
}

#[test]
fn icq_string_roundtrip() {
    let cube = IcqShape::cube(4, 30.0).unwrap();
    let parsed = IcqShape::from_icq_str(&cube.to_icq_string()).unwrap();
    assert_eq!(parsed, cube);
}

#[test]
fn icq_file_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_path = "roundtrip.icq";

    let cube = IcqShape::cube(4, 30.0)?;
    cube.write_icq(tmp_path)?;
    let read_back = IcqShape::read_icq(tmp_path)?;
    assert_eq!(read_back, cube);

    let _ = std::fs::remove_file(tmp_path);
    Ok(())
}

#[test]
fn icq_file_is_overwritten_not_appended() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_path = "overwrite.icq";

    IcqShape::cube(4, 30.0)?.write_icq(tmp_path)?;
    IcqShape::cube(2, 30.0)?.write_icq(tmp_path)?;

    let contents = std::fs::read_to_string(tmp_path)?;
    assert_eq!(contents.lines().count(), 1 + 54);
    let read_back = IcqShape::from_icq_str(&contents)?;
    assert_eq!(read_back.q(), 2);

    let _ = std::fs::remove_file(tmp_path);
    Ok(())
}

#[test]
fn parse_rejects_empty_input() {
    assert!(matches!(
        IcqShape::from_icq_str("").unwrap_err(),
        IoError::MalformedInput(_)
    ));
}

#[test]
fn parse_rejects_bad_header() {
    assert!(matches!(
        IcqShape::from_icq_str("\t     four\n").unwrap_err(),
        IoError::ParseInt(_)
    ));
}

#[test]
fn parse_rejects_bad_float() {
    let input = "\t     1\n\t1.0\t2.0\tnope\n";
    assert!(matches!(
        IcqShape::from_icq_str(input).unwrap_err(),
        IoError::ParseFloat(_)
    ));
}

#[test]
fn parse_rejects_truncated_triple() {
    let input = "\t     1\n\t1.0\t2.0\n";
    assert!(matches!(
        IcqShape::from_icq_str(input).unwrap_err(),
        IoError::MalformedInput(_)
    ));
}

#[test]
fn parse_rejects_wrong_vertex_count() {
    // header says q=2 (54 vertices) but only one triple follows
    let input = "\t     2\n\t1.0\t2.0\t3.0\n";
    assert!(matches!(
        IcqShape::from_icq_str(input).unwrap_err(),
        IoError::InvalidShape(_)
    ));
}
