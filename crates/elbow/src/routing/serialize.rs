use std::sync::LazyLock;

use regex::Regex;

use super::types::{Axis, Segment};

static SEGMENT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([xyXY])\s*:\s*([-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?)$")
        .expect("segment token pattern is valid")
});

/// Serialize a path to its text form.
///
/// Format: `x:-10,y:30,x:40`
///
/// Whole lengths are displayed without decimals (e.g., 30), fractional ones as decimals
/// (e.g., 7.5).
pub fn format_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|seg| format!("{}:{}", seg.axis, format_length(seg.length)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Format a length for the text form.
fn format_length(length: f64) -> String {
    if length == 0.0 {
        "0".to_string()
    } else if length.fract() == 0.0 && length.abs() < 1e15 {
        format!("{}", length as i64)
    } else {
        format!("{length}")
    }
}

/// Parse a path from its text form.
///
/// Format: `x:-10,y:30,x:40`
///
/// Returns `None` if the string is empty or any token is malformed.
pub fn parse_segments(s: &str) -> Option<Vec<Segment>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.split(',').map(parse_segment).collect()
}

/// Parse a token like `x:30` or `y:-7.5`.
fn parse_segment(token: &str) -> Option<Segment> {
    let caps = SEGMENT_TOKEN.captures(token.trim())?;
    let axis = match &caps[1] {
        "x" | "X" => Axis::X,
        _ => Axis::Y,
    };
    let length: f64 = caps[2].parse().ok()?;
    length.is_finite().then(|| Segment::new(axis, length))
}
