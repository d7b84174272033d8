use crate::routing::serialize::{format_segments, parse_segments};
use crate::routing::types::Segment;

#[test]
fn serialize_three_segment_path() {
    let segments = vec![Segment::x(-10.0), Segment::y(30.0), Segment::x(40.0)];
    assert_eq!(format_segments(&segments), "x:-10,y:30,x:40");
}

#[test]
fn serialize_fractional_lengths() {
    let segments = vec![Segment::x(7.5), Segment::y(2.0), Segment::x(7.5)];
    assert_eq!(format_segments(&segments), "x:7.5,y:2,x:7.5");
}

#[test]
fn serialize_empty_path() {
    assert_eq!(format_segments(&[]), "");
}

#[test]
fn parse_three_segment_path() {
    let segments = parse_segments("x:-10,y:30,x:40").unwrap();
    assert_eq!(
        segments,
        vec![Segment::x(-10.0), Segment::y(30.0), Segment::x(40.0)]
    );
}

#[test]
fn parse_tolerates_whitespace() {
    let segments = parse_segments("  x:10 , y:-2.5,  x:4 ").unwrap();
    assert_eq!(
        segments,
        vec![Segment::x(10.0), Segment::y(-2.5), Segment::x(4.0)]
    );
}

#[test]
fn parse_rejects_empty_input() {
    assert!(parse_segments("").is_none());
    assert!(parse_segments("   ").is_none());
}

#[test]
fn parse_rejects_malformed_tokens() {
    assert!(parse_segments("x:10,,y:5").is_none());
    assert!(parse_segments("x:10,q:5").is_none());
    assert!(parse_segments("x:10;y:5").is_none());
}

#[test]
fn parse_reads_what_format_writes() {
    let text = "x:10,y:20,x:-80,y:50,x:10";
    let segments = parse_segments(text).unwrap();
    assert_eq!(format_segments(&segments), text);
}
