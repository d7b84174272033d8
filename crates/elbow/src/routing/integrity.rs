use super::geometry::travel_segments;
use super::serialize::format_segments;
use super::types::{Point, RoutingConfig, Segment};

/// Check that walking `next` from `source` still lands on `target`.
///
/// Never fails: a mismatch is logged together with the new and previous segment lists and
/// reported as `false`.
pub fn check_integrity(
    source: Point,
    target: Point,
    next: &[Segment],
    prev: &[Segment],
    config: &RoutingConfig,
) -> bool {
    let reached = travel_segments(source, next);
    let drift = reached.distance_to(target);
    if drift <= config.integrity_tolerance {
        return true;
    }

    log::warn!(
        "connector from {source} misses its target: reached {reached} instead of {target} \
         (off by {drift:.3}); segments [{}], previously [{}]",
        format_segments(next),
        format_segments(prev)
    );
    false
}
