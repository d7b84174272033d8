use super::compress::compress_segments;
use super::geometry::travel_segments;
use super::types::{Axis, BoundingBox, Orientation, Point, Port, RoutingConfig, Segment};

/// Canonical first/last segment for a port facing `orientation`.
pub fn stump(orientation: Orientation, config: &RoutingConfig) -> Segment {
    Segment::toward(orientation, config.stump_length)
}

/// Whether reaching `other_tip` from `tip` means first heading back against `orientation`.
pub fn need_to_go_around(orientation: Orientation, tip: Point, other_tip: Point) -> bool {
    let axis = orientation.axis();
    (other_tip.get(axis) - tip.get(axis)) * orientation.magnitude() < 0.0
}

/// A detour leading a stump tip around its own node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detour {
    pub segment: Segment,
    pub tip: Point,
    pub orientation: Orientation,
}

/// Route a stump tip out past the edge of its node when the other tip lies behind the port.
///
/// The detour runs along the swapped axis to the edge of `bounds` nearest `other_tip`, plus
/// one stump of clearance. With `allow_flip`, a gap narrower than a stump between that edge
/// and the facing edge of `other_bounds` sends the detour to the opposite edge instead.
pub fn prepare_node(
    tip: Point,
    orientation: Orientation,
    bounds: &BoundingBox,
    other_tip: Point,
    other_bounds: &BoundingBox,
    allow_flip: bool,
    config: &RoutingConfig,
) -> Option<Detour> {
    if !need_to_go_around(orientation, tip, other_tip) {
        return None;
    }

    let axis = orientation.axis().swap();
    let mut sign = if other_tip.get(axis) >= tip.get(axis) {
        1.0
    } else {
        -1.0
    };

    if allow_flip {
        let gap = (other_bounds.edge(axis, -sign) - bounds.edge(axis, sign)) * sign;
        if gap < config.stump_length {
            log::debug!("gap of {gap} between facing edges is too narrow, detouring the far way");
            sign = -sign;
        }
    }

    let clearance = bounds.edge(axis, sign) + sign * config.stump_length;
    let segment = Segment::new(axis, clearance - tip.get(axis));
    Some(Detour {
        segment,
        tip: tip.offset(axis, segment.length),
        orientation: segment.orientation(),
    })
}

/// Route a fresh path from `source` to `target`.
///
/// The result walks from the source port to the target port: its first segment heads out of
/// the source port and its last segment heads into the target port.
pub fn build_new(source: &Port, target: &Port, config: &RoutingConfig) -> Vec<Segment> {
    let mut source_stump = stump(source.orientation, config);
    let mut target_stump = stump(target.orientation, config);
    let mut source_tip = travel_segments(source.position, &[source_stump]);
    let mut target_tip = travel_segments(target.position, &[target_stump]);

    // Adjacent nodes: let horizontal stumps meet halfway instead of overshooting each other.
    let gap = target_tip.x - source_tip.x;
    if gap.abs() < 2.0 * config.stump_length
        && (target_tip.y - source_tip.y).abs() < config.snap_vertical_tolerance
    {
        if source_stump.axis == Axis::X {
            source_stump.length += gap / 2.0;
        }
        if target_stump.axis == Axis::X {
            target_stump.length -= gap / 2.0;
        }
        source_tip = travel_segments(source.position, &[source_stump]);
        target_tip = travel_segments(target.position, &[target_stump]);
    }

    let facing = source.orientation.swap() == target.orientation;

    let source_detour = prepare_node(
        source_tip,
        source.orientation,
        &source.bounds,
        target_tip,
        &target.bounds,
        facing,
        config,
    );
    let mut source_orientation = source.orientation;
    if let Some(detour) = source_detour {
        source_tip = detour.tip;
        source_orientation = detour.orientation;
    }

    let target_detour = prepare_node(
        target_tip,
        target.orientation,
        &target.bounds,
        source_tip,
        &source.bounds,
        facing && source_detour.is_none(),
        config,
    );
    let mut target_orientation = target.orientation;
    if let Some(detour) = target_detour {
        target_tip = detour.tip;
        target_orientation = detour.orientation;
    }

    let mut segments = Vec::with_capacity(7);
    segments.push(source_stump);
    segments.extend(source_detour.map(|d| d.segment));
    segments.extend(closing_segments(
        source_tip,
        source_orientation,
        target_tip,
        target_orientation,
    ));
    // Target-side pieces were measured walking out of the target.
    segments.extend(target_detour.map(|d| d.segment.negated()));
    segments.push(target_stump.negated());

    compress_segments(&segments, config)
}

/// Segments joining two stump tips, given the direction each tip points away from its port.
fn closing_segments(
    from: Point,
    from_orientation: Orientation,
    to: Point,
    to_orientation: Orientation,
) -> Vec<Segment> {
    let delta = to - from;
    let along = from_orientation.axis();
    let cross = along.swap();

    if from_orientation.swap() == to_orientation {
        // Centre the turn between the two stumps.
        let half = delta.get(along) / 2.0;
        return vec![
            Segment::new(along, half),
            Segment::new(cross, delta.get(cross)),
            Segment::new(along, delta.get(along) - half),
        ];
    }

    let arrival = to_orientation.swap();
    let first = Segment::new(along, delta.get(along));
    let second = Segment::new(cross, delta.get(cross));
    if heads(first, from_orientation) && heads(second, arrival) {
        vec![first, second]
    } else {
        vec![second, first]
    }
}

/// Whether `segment` runs in `orientation`. Empty segments run anywhere along their axis.
fn heads(segment: Segment, orientation: Orientation) -> bool {
    segment.axis == orientation.axis()
        && (segment.length == 0.0 || segment.orientation() == orientation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> RoutingConfig {
        RoutingConfig::default()
    }

    #[test]
    fn stumps_point_the_port_way() {
        assert_eq!(stump(Orientation::Top, &cfg()), Segment::y(-10.0));
        assert_eq!(stump(Orientation::Right, &cfg()), Segment::x(10.0));
    }

    #[test]
    fn go_around_only_when_target_is_behind() {
        let tip = Point::new(10.0, 0.0);
        assert!(need_to_go_around(Orientation::Right, tip, Point::new(-5.0, 40.0)));
        assert!(!need_to_go_around(Orientation::Right, tip, Point::new(10.0, 40.0)));
        assert!(!need_to_go_around(Orientation::Right, tip, Point::new(50.0, -40.0)));
    }

    #[test]
    fn detour_clears_the_near_edge() {
        let bounds = BoundingBox::new(-50.0, -20.0, 50.0, 40.0);
        let far = BoundingBox::new(-100.0, 80.0, 40.0, 40.0);
        let detour = prepare_node(
            Point::new(10.0, 0.0),
            Orientation::Right,
            &bounds,
            Point::new(-70.0, 100.0),
            &far,
            true,
            &cfg(),
        )
        .expect("target is behind the port");
        assert_eq!(detour.segment, Segment::y(30.0));
        assert_eq!(detour.tip, Point::new(10.0, 30.0));
        assert_eq!(detour.orientation, Orientation::Bottom);
    }

    #[test]
    fn detour_flips_when_the_gap_is_too_narrow() {
        let bounds = BoundingBox::new(-50.0, -20.0, 50.0, 40.0);
        let close = BoundingBox::new(-100.0, 25.0, 40.0, 40.0);
        let detour = prepare_node(
            Point::new(10.0, 0.0),
            Orientation::Right,
            &bounds,
            Point::new(-70.0, 45.0),
            &close,
            true,
            &cfg(),
        )
        .expect("target is behind the port");
        assert_eq!(detour.segment, Segment::y(-30.0));
        assert_eq!(detour.orientation, Orientation::Top);
    }

    #[test]
    fn perpendicular_tips_take_one_turn() {
        let segments = closing_segments(
            Point::new(10.0, 0.0),
            Orientation::Right,
            Point::new(50.0, 40.0),
            Orientation::Top,
        );
        assert_eq!(segments, vec![Segment::x(40.0), Segment::y(40.0)]);
    }

    #[test]
    fn same_facing_tips_start_across() {
        let segments = closing_segments(
            Point::new(-10.0, 0.0),
            Orientation::Left,
            Point::new(20.0, 30.0),
            Orientation::Left,
        );
        assert_eq!(segments, vec![Segment::y(30.0), Segment::x(30.0)]);
    }
}
