use super::types::{RoutingConfig, Segment};

/// Upper bound on fixed-point rounds, on top of one round per segment.
const EXTRA_ROUNDS: usize = 8;

/// Normalize a path: merge collinear runs and drop or fold near-zero segments.
///
/// One round is `remove_same_orientation_segments ∘ remove_short_segments ∘
/// remove_same_orientation_segments`. Rounds repeat until the list stops changing, so
/// compressing an already compressed path returns it unchanged.
pub fn compress_segments(segments: &[Segment], config: &RoutingConfig) -> Vec<Segment> {
    let mut current = segments.to_vec();
    for _ in 0..segments.len() + EXTRA_ROUNDS {
        let merged = remove_same_orientation_segments(current.clone(), config);
        let trimmed = remove_short_segments(merged, config);
        let next = remove_same_orientation_segments(trimmed, config);
        if next == current {
            break;
        }
        current = next;
    }
    log::trace!(
        "compressed {} segments into {}",
        segments.len(),
        current.len()
    );
    current
}

/// Remove at most one short non-terminal segment.
///
/// Segments under `direct_removal_threshold` are deleted. Other segments under
/// `compression_threshold` are folded into the same-axis segment two positions away
/// (behind first, then ahead) when the path has at least four segments. A stump only
/// takes the fold if it keeps its orientation and does not shrink below `stump_length`.
pub fn remove_short_segments(mut segments: Vec<Segment>, config: &RoutingConfig) -> Vec<Segment> {
    let n = segments.len();
    if n < 3 {
        return segments;
    }

    for i in 1..n - 1 {
        let seg = segments[i];
        let len = seg.length.abs();
        if len >= config.compression_threshold {
            continue;
        }
        if len < config.direct_removal_threshold {
            segments.remove(i);
            return segments;
        }
        if n < 4 {
            continue;
        }

        let partner = [i.checked_sub(2), Some(i + 2).filter(|&j| j < n)]
            .into_iter()
            .flatten()
            .find(|&j| {
                let other = segments[j];
                other.axis == seg.axis
                    && (j != 0 && j != n - 1
                        || keeps_stump(other, other.length + seg.length, config))
            });

        if let Some(j) = partner {
            segments[j].length += seg.length;
            segments.remove(i);
            return segments;
        }
    }

    segments
}

/// Outcome of trying to merge two adjacent same-axis segments.
enum PairMerge {
    Joined(Segment),
    Clamped(Segment, Segment),
    Kept,
}

/// Merge adjacent same-axis segments until none are left.
///
/// A merge that would shrink a stump below `stump_length` (or flip it) clamps the stump to
/// exactly `stump_length` and hands the rest to its neighbor instead, provided the neighbor
/// stays at least `stump_length` long. Otherwise the pair is left alone.
pub fn remove_same_orientation_segments(
    mut segments: Vec<Segment>,
    config: &RoutingConfig,
) -> Vec<Segment> {
    let mut from = 0;
    // Every step either shortens the list or advances `from`.
    for _ in 0..2 * segments.len() + 1 {
        let Some(i) = (from..segments.len().saturating_sub(1))
            .find(|&i| segments[i].axis == segments[i + 1].axis)
        else {
            break;
        };

        match merge_pair(&segments, i, config) {
            PairMerge::Joined(seg) => {
                segments[i] = seg;
                segments.remove(i + 1);
                from = i;
            }
            PairMerge::Clamped(first, second) => {
                log::trace!("clamped stump pair at {i} to {first:?}, {second:?}");
                segments[i] = first;
                segments[i + 1] = second;
                from = i + 1;
            }
            PairMerge::Kept => from = i + 1,
        }
    }
    segments
}

fn merge_pair(segments: &[Segment], i: usize, config: &RoutingConfig) -> PairMerge {
    let (a, b) = (segments[i], segments[i + 1]);
    let joined = Segment::new(a.axis, a.length + b.length);
    let source_stump = i == 0;
    let target_stump = i + 2 == segments.len();

    match (source_stump, target_stump) {
        (false, false) => PairMerge::Joined(joined),
        (true, true) => {
            if keeps_stump(a, joined.length, config) && keeps_stump(b, joined.length, config) {
                PairMerge::Joined(joined)
            } else {
                PairMerge::Kept
            }
        }
        (true, false) => {
            if keeps_stump(a, joined.length, config) {
                return PairMerge::Joined(joined);
            }
            let stump = clamped(a, config);
            let rest = Segment::new(a.axis, joined.length - stump.length);
            if rest.length.abs() >= config.stump_length {
                PairMerge::Clamped(stump, rest)
            } else {
                PairMerge::Kept
            }
        }
        (false, true) => {
            if keeps_stump(b, joined.length, config) {
                return PairMerge::Joined(joined);
            }
            let stump = clamped(b, config);
            let rest = Segment::new(b.axis, joined.length - stump.length);
            if rest.length.abs() >= config.stump_length {
                PairMerge::Clamped(rest, stump)
            } else {
                PairMerge::Kept
            }
        }
    }
}

/// Whether `stump` may take on `length` without flipping or shrinking below the minimum.
pub(crate) fn keeps_stump(stump: Segment, length: f64, config: &RoutingConfig) -> bool {
    length != 0.0
        && stump.orientation() == Segment::new(stump.axis, length).orientation()
        && (length.abs() >= config.stump_length || length.abs() >= stump.length.abs())
}

fn clamped(stump: Segment, config: &RoutingConfig) -> Segment {
    Segment::toward(stump.orientation(), config.stump_length)
}
