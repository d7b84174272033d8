use super::*;
use crate::routing::edit::{move_source_node, move_target_node};

#[test]
fn opposite_ports_disconnect_into_an_elbow() {
    let segments = vec![Segment::y(30.0)];
    let moved = move_source_node(&segments, Point::new(15.0, 0.0), &cfg()).unwrap();
    assert_eq!(
        moved,
        vec![Segment::y(15.0), Segment::x(-15.0), Segment::y(15.0)]
    );
    assert_same_point(end_of(Point::new(15.0, 0.0), &moved), Point::new(0.0, 30.0));
}

#[test]
fn moving_the_target_splits_the_other_way() {
    let segments = vec![Segment::y(30.0)];
    let moved = move_target_node(&segments, Point::new(15.0, 0.0), &cfg()).unwrap();
    assert_eq!(
        moved,
        vec![Segment::y(15.0), Segment::x(15.0), Segment::y(15.0)]
    );
}

#[test]
fn near_stump_absorbs_a_small_move() {
    let segments = vec![Segment::x(50.0), Segment::y(60.0), Segment::x(50.0)];
    let moved = move_source_node(&segments, Point::new(5.0, 0.0), &cfg()).unwrap();
    assert_eq!(
        moved,
        vec![Segment::x(45.0), Segment::y(60.0), Segment::x(50.0)]
    );
}

#[test]
fn cross_axis_move_lands_on_the_middle_segment() {
    let segments = vec![Segment::x(50.0), Segment::y(60.0), Segment::x(50.0)];
    let moved = move_source_node(&segments, Point::new(5.0, 10.0), &cfg()).unwrap();
    assert_eq!(
        moved,
        vec![Segment::x(45.0), Segment::y(50.0), Segment::x(50.0)]
    );
}

#[test]
fn stumps_share_a_move_neither_can_take_alone() {
    // Each stump can give up 40 before reaching the minimum.
    let segments = vec![Segment::x(50.0), Segment::y(60.0), Segment::x(50.0)];
    let moved = move_source_node(&segments, Point::new(45.0, 0.0), &cfg()).unwrap();
    assert_eq!(
        moved,
        vec![Segment::x(10.0), Segment::y(60.0), Segment::x(45.0)]
    );
}

#[test]
fn far_stump_is_not_flipped_by_a_large_move() {
    let segments = vec![Segment::y(-90.0), Segment::x(-45.0)];
    let delta = Point::new(-60.0, 0.0);
    let moved = move_source_node(&segments, delta, &cfg()).unwrap();
    // The target is still entered from its right-hand side.
    assert_eq!(
        moved,
        vec![Segment::y(-90.0), Segment::x(25.0), Segment::x(-10.0)]
    );
    assert_same_point(end_of(delta, &moved), Point::new(-45.0, -90.0));
}

#[test]
fn ports_moved_past_each_other_step_aside() {
    let segments = vec![Segment::y(30.0)];
    let moved = move_source_node(&segments, Point::new(0.0, 25.0), &cfg()).unwrap();
    assert_eq!(
        moved,
        vec![
            Segment::y(10.0),
            Segment::x(10.0),
            Segment::y(-15.0),
            Segment::x(-10.0),
            Segment::y(10.0),
        ]
    );
    assert_same_point(end_of(Point::new(0.0, 25.0), &moved), Point::new(0.0, 30.0));
}

#[test]
fn target_move_prefers_the_target_stump() {
    let segments = vec![Segment::x(50.0), Segment::y(60.0), Segment::x(50.0)];
    let moved = move_target_node(&segments, Point::new(-20.0, 0.0), &cfg()).unwrap();
    assert_eq!(
        moved,
        vec![Segment::x(50.0), Segment::y(60.0), Segment::x(30.0)]
    );
}

#[test]
fn short_far_stump_is_adjusted_first() {
    let segments = vec![Segment::x(7.5), Segment::y(2.0), Segment::x(7.5)];
    let moved = move_source_node(&segments, Point::new(1.0, 0.0), &cfg()).unwrap();
    assert_eq!(
        moved,
        vec![Segment::x(7.5), Segment::y(2.0), Segment::x(6.5)]
    );
}

#[test]
fn moved_source_still_reaches_the_old_target() {
    let segments = vec![
        Segment::x(10.0),
        Segment::y(50.0),
        Segment::x(-80.0),
        Segment::y(50.0),
        Segment::x(10.0),
    ];
    let target = end_of(Point::ORIGIN, &segments);
    let delta = Point::new(-33.0, 17.0);
    let moved = move_source_node(&segments, delta, &cfg()).unwrap();
    assert_same_point(end_of(delta, &moved), target);
}
