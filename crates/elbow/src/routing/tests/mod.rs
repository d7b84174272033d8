mod move_node;
mod serialization;

use super::geometry::travel_segments;
use super::types::{BoundingBox, Orientation, Point, Port, RoutingConfig, Segment};

/// Helper to create the default RoutingConfig.
fn cfg() -> RoutingConfig {
    RoutingConfig::default()
}

/// Helper to create a port at (x, y) on the middle of one side of a 40x20 node.
fn port(x: f64, y: f64, orientation: Orientation) -> Port {
    let bounds = match orientation {
        Orientation::Right => BoundingBox::new(x - 40.0, y - 10.0, 40.0, 20.0),
        Orientation::Left => BoundingBox::new(x, y - 10.0, 40.0, 20.0),
        Orientation::Top => BoundingBox::new(x - 20.0, y, 40.0, 20.0),
        Orientation::Bottom => BoundingBox::new(x - 20.0, y - 20.0, 40.0, 20.0),
    };
    Port::new(Point::new(x, y), bounds, orientation)
}

/// Where a path walked from `source` ends.
fn end_of(source: Point, segments: &[Segment]) -> Point {
    travel_segments(source, segments)
}

/// Assert that two points coincide.
fn assert_same_point(actual: Point, expected: Point) {
    assert!(
        actual.distance_to(expected) < 1e-6,
        "expected {expected}, got {actual}"
    );
}
