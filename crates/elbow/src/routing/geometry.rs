use super::types::{Axis, Point, Segment};

/// Walk `segments` from `source` and return where the walk ends.
pub fn travel_segments(source: Point, segments: &[Segment]) -> Point {
    segments
        .iter()
        .fold(source, |at, seg| at.offset(seg.axis, seg.length))
}

/// Polyline visited by walking `segments` from `source`, starting with `source` itself.
pub fn segments_to_points(source: Point, segments: &[Segment]) -> Vec<Point> {
    let mut points = Vec::with_capacity(segments.len() + 1);
    points.push(source);
    let mut at = source;
    for seg in segments {
        at = at.offset(seg.axis, seg.length);
        points.push(at);
    }
    points
}

/// Segments walking through `points` in order.
///
/// A diagonal step becomes an `x` segment followed by a `y` segment. Zero steps are skipped.
pub fn points_to_segments(points: &[Point]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        let delta = pair[1] - pair[0];
        for axis in Axis::ALL {
            let length = delta.get(axis);
            if length != 0.0 {
                segments.push(Segment::new(axis, length));
            }
        }
    }
    segments
}

/// The same path walked from its end back to its start.
pub fn reversed(segments: &[Segment]) -> Vec<Segment> {
    segments.iter().rev().map(|seg| seg.negated()).collect()
}

/// Push the first point back along the first leg and the last point forward along the last leg.
///
/// Rendering-only: the result is a derived polyline and never feeds back into segments.
pub fn extend_endpoints(points: &[Point], offset: f64) -> Vec<Point> {
    let mut extended = points.to_vec();
    let n = extended.len();
    if n < 2 || offset == 0.0 {
        return extended;
    }
    if let Some(dir) = unit_step(points[0], points[1]) {
        extended[0] = Point::new(points[0].x - dir.x * offset, points[0].y - dir.y * offset);
    }
    if let Some(dir) = unit_step(points[n - 2], points[n - 1]) {
        extended[n - 1] = Point::new(
            points[n - 1].x + dir.x * offset,
            points[n - 1].y + dir.y * offset,
        );
    }
    extended
}

/// Unit vector from `a` toward `b`, or `None` if they coincide.
fn unit_step(a: Point, b: Point) -> Option<Point> {
    let len = a.distance_to(b);
    if len == 0.0 {
        return None;
    }
    Some(Point::new((b.x - a.x) / len, (b.y - a.y) / len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_folds_every_segment() {
        let segments = [Segment::x(-10.0), Segment::y(30.0), Segment::x(40.0)];
        assert_eq!(
            travel_segments(Point::new(5.0, 5.0), &segments),
            Point::new(35.0, 35.0)
        );
    }

    #[test]
    fn travel_of_nothing_stays_put() {
        assert_eq!(travel_segments(Point::new(1.0, 2.0), &[]), Point::new(1.0, 2.0));
    }

    #[test]
    fn points_include_source() {
        let points = segments_to_points(Point::ORIGIN, &[Segment::x(10.0), Segment::y(-5.0)]);
        assert_eq!(
            points,
            vec![Point::ORIGIN, Point::new(10.0, 0.0), Point::new(10.0, -5.0)]
        );
    }

    #[test]
    fn diagonal_steps_split_into_x_then_y() {
        let segments = points_to_segments(&[Point::ORIGIN, Point::new(3.0, 4.0), Point::new(3.0, 4.0)]);
        assert_eq!(segments, vec![Segment::x(3.0), Segment::y(4.0)]);
    }

    #[test]
    fn reversed_walks_back_to_start() {
        let segments = [Segment::x(10.0), Segment::y(20.0), Segment::x(-4.0)];
        let end = travel_segments(Point::ORIGIN, &segments);
        assert_eq!(travel_segments(end, &reversed(&segments)), Point::ORIGIN);
    }

    #[test]
    fn extension_only_moves_the_ends() {
        let points = vec![Point::ORIGIN, Point::new(10.0, 0.0), Point::new(10.0, 20.0)];
        let extended = extend_endpoints(&points, 2.0);
        assert_eq!(extended[0], Point::new(-2.0, 0.0));
        assert_eq!(extended[1], points[1]);
        assert_eq!(extended[2], Point::new(10.0, 22.0));
    }

    #[test]
    fn extension_skips_degenerate_legs() {
        let points = vec![Point::ORIGIN, Point::ORIGIN];
        assert_eq!(extend_endpoints(&points, 5.0), points);
    }
}
