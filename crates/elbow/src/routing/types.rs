use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical minimum length of the first and last segment of a path.
pub const STUMP_LENGTH: f64 = 10.0;

/// Non-terminal segments shorter than this are folded into a neighbor.
pub const COMPRESSION_THRESHOLD: f64 = 4.0;

/// Non-terminal segments shorter than this are dropped outright.
pub const DIRECT_REMOVAL_THRESHOLD: f64 = 0.25;

/// Vertical distance between stump tips under which close nodes are snapped together.
pub const SNAP_VERTICAL_TOLERANCE: f64 = 10.0;

/// Euclidean distance the integrity checker tolerates between the reached and expected endpoint.
pub const INTEGRITY_TOLERANCE: f64 = 0.5;

/// Axis a segment runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// The other axis.
    pub fn swap(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Compass direction a port faces.
///
/// `y` grows downward, so `Top` is the negative member of the `y` axis and `Left`
/// the negative member of the `x` axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Top,
    Right,
    Bottom,
    Left,
}

impl Orientation {
    /// All four orientations.
    pub const ALL: [Orientation; 4] = [
        Orientation::Top,
        Orientation::Right,
        Orientation::Bottom,
        Orientation::Left,
    ];

    /// The opposite orientation.
    pub fn swap(self) -> Orientation {
        match self {
            Orientation::Top => Orientation::Bottom,
            Orientation::Bottom => Orientation::Top,
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Orientation::Left | Orientation::Right => Axis::X,
            Orientation::Top | Orientation::Bottom => Axis::Y,
        }
    }

    /// `-1.0` for top/left, `1.0` for bottom/right.
    pub fn magnitude(self) -> f64 {
        match self {
            Orientation::Top | Orientation::Left => -1.0,
            Orientation::Bottom | Orientation::Right => 1.0,
        }
    }

    /// Orientation of a signed displacement along `axis`. Zero counts as positive.
    pub fn from_axis_sign(axis: Axis, length: f64) -> Orientation {
        match (axis, length < 0.0) {
            (Axis::X, false) => Orientation::Right,
            (Axis::X, true) => Orientation::Left,
            (Axis::Y, false) => Orientation::Bottom,
            (Axis::Y, true) => Orientation::Top,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Top => "top",
            Orientation::Right => "right",
            Orientation::Bottom => "bottom",
            Orientation::Left => "left",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Orientation::Top),
            "right" => Ok(Orientation::Right),
            "bottom" => Ok(Orientation::Bottom),
            "left" => Ok(Orientation::Left),
            other => Err(format!(
                "Invalid orientation: {other}. Must be 'top', 'right', 'bottom', or 'left'."
            )),
        }
    }
}

/// A coordinate in diagram space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The component along `axis`.
    pub fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// This point moved by `distance` along `axis`.
    pub fn offset(self, axis: Axis, distance: f64) -> Point {
        match axis {
            Axis::X => Point::new(self.x + distance, self.y),
            Axis::Y => Point::new(self.x, self.y + distance),
        }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Axis-aligned rectangle owned by a node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Lowest coordinate covered along `axis`.
    pub fn min(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Highest coordinate covered along `axis`.
    pub fn max(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x + self.width,
            Axis::Y => self.y + self.height,
        }
    }

    /// The edge along `axis` lying in the direction of `sign` (max for positive, min otherwise).
    pub fn edge(&self, axis: Axis, sign: f64) -> f64 {
        if sign >= 0.0 {
            self.max(axis)
        } else {
            self.min(axis)
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Midpoint of the side a port with `orientation` sits on.
    pub fn port_position(&self, orientation: Orientation) -> Point {
        let center = self.center();
        match orientation {
            Orientation::Top => Point::new(center.x, self.y),
            Orientation::Bottom => Point::new(center.x, self.y + self.height),
            Orientation::Left => Point::new(self.x, center.y),
            Orientation::Right => Point::new(self.x + self.width, center.y),
        }
    }

    pub fn translated(&self, delta: Point) -> BoundingBox {
        BoundingBox::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }
}

/// A signed displacement along one axis.
///
/// On `x` a positive length runs rightward, on `y` downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub axis: Axis,
    pub length: f64,
}

impl Segment {
    pub fn new(axis: Axis, length: f64) -> Self {
        Self { axis, length }
    }

    pub fn x(length: f64) -> Self {
        Self::new(Axis::X, length)
    }

    pub fn y(length: f64) -> Self {
        Self::new(Axis::Y, length)
    }

    /// A segment of `length` units heading in `orientation`.
    pub fn toward(orientation: Orientation, length: f64) -> Self {
        Self::new(orientation.axis(), length * orientation.magnitude())
    }

    pub fn orientation(self) -> Orientation {
        Orientation::from_axis_sign(self.axis, self.length)
    }

    /// The same displacement walked backward.
    pub fn negated(self) -> Self {
        Self::new(self.axis, -self.length)
    }
}

/// A port on a node: where the connector attaches and which way it leaves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub position: Point,
    pub bounds: BoundingBox,
    pub orientation: Orientation,
}

impl Port {
    pub fn new(position: Point, bounds: BoundingBox, orientation: Orientation) -> Self {
        Self {
            position,
            bounds,
            orientation,
        }
    }

    /// A port at the midpoint of the `orientation` side of `bounds`.
    pub fn on_side(bounds: BoundingBox, orientation: Orientation) -> Self {
        Self::new(bounds.port_position(orientation), bounds, orientation)
    }

    /// The port and its node moved by `delta`.
    pub fn translated(&self, delta: Point) -> Port {
        Port::new(
            self.position + delta,
            self.bounds.translated(delta),
            self.orientation,
        )
    }
}

/// Tuning constants for the routing engine.
///
/// Missing keys in a config file fall back to the built-in constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Canonical length of the first and last segment.
    pub stump_length: f64,
    /// Non-terminal segments shorter than this are folded away.
    pub compression_threshold: f64,
    /// Non-terminal segments shorter than this are deleted outright.
    pub direct_removal_threshold: f64,
    /// Vertical tip distance under which adjacent nodes get snapped stumps.
    pub snap_vertical_tolerance: f64,
    /// Allowed endpoint drift before the integrity checker complains.
    pub integrity_tolerance: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            stump_length: STUMP_LENGTH,
            compression_threshold: COMPRESSION_THRESHOLD,
            direct_removal_threshold: DIRECT_REMOVAL_THRESHOLD,
            snap_vertical_tolerance: SNAP_VERTICAL_TOLERANCE,
            integrity_tolerance: INTEGRITY_TOLERANCE,
        }
    }
}

/// A node in a scene: a name and its bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    pub bounds: BoundingBox,
}

/// A connection in a scene between two named nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConnection {
    pub source: String,
    pub source_side: Orientation,
    pub target: String,
    pub target_side: Orientation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Nodes and the connections between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub nodes: Vec<SceneNode>,
    #[serde(default)]
    pub connections: Vec<SceneConnection>,
}

/// Result for routing a single connection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteResult {
    /// Routed path, walking from source port to target port.
    Success(Vec<Segment>),
    /// Could not route the connection.
    Failure { warning: String },
}

/// Output of routing all connections in a scene.
#[derive(Debug, Clone, Serialize)]
pub struct RoutingOutput {
    pub results: Vec<(SceneConnection, RouteResult)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_swap_is_an_involution() {
        for o in Orientation::ALL {
            assert_eq!(o.swap().swap(), o);
            assert_ne!(o.swap(), o);
            assert_eq!(o.swap().axis(), o.axis());
        }
    }

    #[test]
    fn orientation_round_trips_through_axis_and_sign() {
        for o in Orientation::ALL {
            assert_eq!(Orientation::from_axis_sign(o.axis(), o.magnitude()), o);
            assert_eq!(Segment::toward(o, 3.0).orientation(), o);
        }
    }

    #[test]
    fn zero_length_counts_as_positive() {
        assert_eq!(Segment::x(0.0).orientation(), Orientation::Right);
        assert_eq!(Segment::y(0.0).orientation(), Orientation::Bottom);
    }

    #[test]
    fn parse_orientation_is_case_insensitive() {
        assert_eq!("Top".parse::<Orientation>(), Ok(Orientation::Top));
        assert_eq!(" left ".parse::<Orientation>(), Ok(Orientation::Left));
        assert!("up".parse::<Orientation>().is_err());
    }

    #[test]
    fn port_positions_sit_on_side_midpoints() {
        let bounds = BoundingBox::new(0.0, 0.0, 40.0, 20.0);
        assert_eq!(bounds.port_position(Orientation::Top), Point::new(20.0, 0.0));
        assert_eq!(
            bounds.port_position(Orientation::Bottom),
            Point::new(20.0, 20.0)
        );
        assert_eq!(bounds.port_position(Orientation::Left), Point::new(0.0, 10.0));
        assert_eq!(
            bounds.port_position(Orientation::Right),
            Point::new(40.0, 10.0)
        );
    }

    #[test]
    fn edge_follows_sign() {
        let bounds = BoundingBox::new(-5.0, 10.0, 10.0, 30.0);
        assert_eq!(bounds.edge(Axis::Y, 1.0), 40.0);
        assert_eq!(bounds.edge(Axis::Y, -1.0), 10.0);
        assert_eq!(bounds.edge(Axis::X, -1.0), -5.0);
    }

    #[test]
    fn default_config_matches_constants() {
        let config = RoutingConfig::default();
        assert_eq!(config.stump_length, 10.0);
        assert_eq!(config.compression_threshold, 4.0);
        assert_eq!(config.direct_removal_threshold, 0.25);
    }
}
