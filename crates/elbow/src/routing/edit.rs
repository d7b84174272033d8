//! Editors that re-derive a path after a single user action.
//!
//! Every editor keeps the far endpoint where it was and returns a compressed path. Target-side
//! edits run the source-side logic on the reversed path.

use super::build::stump;
use super::compress::{compress_segments, keeps_stump};
use super::error::{Result, RoutingError};
use super::geometry::reversed;
use super::types::{Axis, Orientation, Point, RoutingConfig, Segment};

/// Move segment `index` by `magnitude` along its perpendicular axis.
///
/// Dragging a stump keeps the port fixed: a fresh canonical stump and a perpendicular hop are
/// inserted between the port and the dragged segment, which gives up one stump of length.
/// Neighbors on the drag axis take up the move; a neighboring stump that would shrink below
/// `stump_length` or flip gets a hop inserted next to it instead.
pub fn drag_segment(
    segments: &[Segment],
    index: usize,
    magnitude: f64,
    config: &RoutingConfig,
) -> Result<Vec<Segment>> {
    let n = segments.len();
    if index >= n {
        return Err(RoutingError::IndexOutOfRange { index, len: n });
    }

    let dragged = segments[index];
    let hop_axis = dragged.axis.swap();
    let fresh = stump(dragged.orientation(), config);
    // A stump neighbor only absorbs the drag if it keeps its orientation and length.
    let absorbs = |i: usize, amount: f64| {
        let seg = segments[i];
        seg.axis == hop_axis
            && (i != 0 && i != n - 1 || keeps_stump(seg, seg.length + amount, config))
    };
    let prev_absorbs = index > 0 && absorbs(index - 1, magnitude);
    let next_absorbs = index + 1 < n && absorbs(index + 1, -magnitude);
    let mut out = Vec::with_capacity(n + 4);

    for (i, seg) in segments.iter().enumerate() {
        if i == index {
            let mut moved = *seg;
            if i == 0 {
                out.push(fresh);
                moved.length -= fresh.length;
            }
            if !prev_absorbs {
                out.push(Segment::new(hop_axis, magnitude));
            }
            if i == n - 1 {
                moved.length -= fresh.length;
            }
            out.push(moved);
            if !next_absorbs {
                out.push(Segment::new(hop_axis, -magnitude));
            }
            if i == n - 1 {
                out.push(fresh);
            }
        } else if prev_absorbs && i + 1 == index {
            out.push(Segment::new(seg.axis, seg.length + magnitude));
        } else if next_absorbs && i == index + 1 {
            out.push(Segment::new(seg.axis, seg.length - magnitude));
        } else {
            out.push(*seg);
        }
    }

    log::debug!("dragged segment {index} of {n} by {magnitude}");
    Ok(compress_segments(&out, config))
}

/// Re-route after the source node moved by `delta`.
pub fn move_source_node(
    segments: &[Segment],
    delta: Point,
    config: &RoutingConfig,
) -> Result<Vec<Segment>> {
    let moved = shift_source_end(segments.to_vec(), delta, config)?;
    Ok(compress_segments(&moved, config))
}

/// Re-route after the target node moved by `delta`.
pub fn move_target_node(
    segments: &[Segment],
    delta: Point,
    config: &RoutingConfig,
) -> Result<Vec<Segment>> {
    // Walking backward, the target is the start of the path.
    let moved = shift_source_end(reversed(segments), delta, config)?;
    Ok(compress_segments(&reversed(&moved), config))
}

/// Point the source stump in `orientation`, keeping the rest of the path attached.
pub fn change_source_orientation(
    segments: &[Segment],
    orientation: Orientation,
    config: &RoutingConfig,
) -> Vec<Segment> {
    match reorient_start(segments, orientation, config) {
        Some(next) => compress_segments(&next, config),
        None => segments.to_vec(),
    }
}

/// Point the target stump so the path enters a port facing `orientation`.
pub fn change_target_orientation(
    segments: &[Segment],
    orientation: Orientation,
    config: &RoutingConfig,
) -> Vec<Segment> {
    match reorient_start(&reversed(segments), orientation, config) {
        Some(next) => compress_segments(&reversed(&next), config),
        None => segments.to_vec(),
    }
}

/// Absorb a move of the path's start by `delta` so the end stays put.
fn shift_source_end(
    mut segments: Vec<Segment>,
    delta: Point,
    config: &RoutingConfig,
) -> Result<Vec<Segment>> {
    for axis in Axis::ALL {
        let d = delta.get(axis);
        if d != 0.0 {
            segments = absorb(segments, axis, -d, config)?;
        }
    }
    Ok(segments)
}

/// Add `amount` to the total displacement of the path along `axis`.
///
/// Stumps only take a share they can absorb without dropping below `stump_length` or
/// flipping, except a far stump that is already short and would otherwise collapse.
fn absorb(
    mut segments: Vec<Segment>,
    axis: Axis,
    amount: f64,
    config: &RoutingConfig,
) -> Result<Vec<Segment>> {
    let n = segments.len();
    if n == 0 {
        return Err(RoutingError::CannotSplit { count: 0, axis });
    }
    let last = n - 1;
    let far = segments[last];

    let chosen = if n > 1
        && far.axis == axis
        && far.length.abs() < config.stump_length
        && !flips(far, amount)
    {
        // A short far stump would otherwise be left degenerate.
        Some(last)
    } else if can_adjust_stump(segments[0], axis, amount, config) {
        Some(0)
    } else if let Some(i) = (1..last).find(|&i| segments[i].axis == axis) {
        Some(i)
    } else if n > 1 && can_adjust_stump(far, axis, amount, config) {
        Some(last)
    } else {
        None
    };

    if let Some(i) = chosen {
        log::debug!("segment {i} absorbs {amount} along {axis}");
        segments[i].length += amount;
        return Ok(segments);
    }

    if n > 1 {
        let near_slack = slack(segments[0], axis, amount, config);
        let far_slack = slack(far, axis, amount, config);
        if near_slack > 0.0 && near_slack + far_slack >= amount.abs() {
            let near_share = amount.signum() * near_slack.min(amount.abs());
            log::debug!("stumps share {amount} along {axis}: {near_share} at the near end");
            segments[0].length += near_share;
            segments[last].length += amount - near_share;
            return Ok(segments);
        }

        // Splice behind the near stump; compression clamps it if the two line up.
        log::debug!("spliced {amount} along {axis} after the first of {n} segments");
        segments.insert(1, Segment::new(axis, amount));
        return Ok(segments);
    }

    Ok(split_lone_segment(segments[0], axis, amount, config))
}

/// Re-route a single straight segment whose start moved by `-amount` along `axis`.
fn split_lone_segment(
    seg: Segment,
    axis: Axis,
    amount: f64,
    config: &RoutingConfig,
) -> Vec<Segment> {
    let fresh = stump(seg.orientation(), config);

    if axis == seg.axis {
        // The ports passed each other: step aside and come back in through a fresh stump.
        let hop = Segment::new(axis.swap(), config.stump_length);
        let middle = seg.length + amount - 2.0 * fresh.length;
        log::debug!("stepped {seg:?} aside to route {amount} along {axis}");
        return vec![fresh, hop, Segment::new(axis, middle), hop.negated(), fresh];
    }

    log::debug!("split {seg:?} to route {amount} along {axis}");
    let cross = Segment::new(axis, amount);
    if seg.length.abs() >= 2.0 * config.stump_length {
        // Two directly opposite ports: break the straight line into an elbow.
        let half = Segment::new(seg.axis, seg.length / 2.0);
        vec![half, cross, half]
    } else {
        let middle = Segment::new(seg.axis, seg.length - 2.0 * fresh.length);
        vec![fresh, cross, middle, fresh]
    }
}

/// Whether a stump can take `amount` without flipping or dropping below a stump.
fn can_adjust_stump(seg: Segment, axis: Axis, amount: f64, config: &RoutingConfig) -> bool {
    seg.axis == axis && keeps_stump(seg, seg.length + amount, config)
}

/// How much of `amount` a stump on `axis` can give up before reaching `stump_length`.
fn slack(seg: Segment, axis: Axis, amount: f64, config: &RoutingConfig) -> f64 {
    if seg.axis != axis || seg.length * amount >= 0.0 {
        return 0.0;
    }
    (seg.length.abs() - config.stump_length).max(0.0)
}

fn flips(seg: Segment, amount: f64) -> bool {
    let length = seg.length + amount;
    length == 0.0 || Segment::new(seg.axis, length).orientation() != seg.orientation()
}

/// Replace the first stump with a canonical one facing `orientation`.
///
/// Returns `None` when the stump already faces that way.
fn reorient_start(
    segments: &[Segment],
    orientation: Orientation,
    config: &RoutingConfig,
) -> Option<Vec<Segment>> {
    let first = *segments.first()?;
    if first.orientation() == orientation {
        return None;
    }

    let fresh = stump(orientation, config);
    // A lone segment is also the target stump: keep its second half for the target, or a
    // fresh stump when half would be too short.
    let (old, rest) = if segments.len() == 1 {
        let tail = if first.length.abs() >= 2.0 * config.stump_length {
            Segment::new(first.axis, first.length / 2.0)
        } else {
            stump(first.orientation(), config)
        };
        (Segment::new(first.axis, first.length - tail.length), vec![tail])
    } else {
        (first, segments[1..].to_vec())
    };

    let mut out = Vec::with_capacity(rest.len() + 4);
    out.push(fresh);
    if old.axis == fresh.axis {
        // Reversed stump: step aside so the path does not double back over itself.
        let hop_axis = fresh.axis.swap();
        let sign = rest
            .first()
            .filter(|seg| seg.axis == hop_axis && seg.length != 0.0)
            .map_or(1.0, |seg| seg.length.signum());
        let hop = Segment::new(hop_axis, sign * config.stump_length);
        out.push(hop);
        out.push(Segment::new(old.axis, old.length - fresh.length));
        out.push(hop.negated());
    } else {
        out.push(old);
        out.push(fresh.negated());
    }
    out.extend(rest);

    log::debug!("turned start stump {first:?} to face {orientation}");
    Some(out)
}
