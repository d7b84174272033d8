//! Orthogonal connector routing.
//!
//! A path is a list of axis-aligned [`Segment`]s walked from the source port to the target
//! port. [`build_new`] routes a fresh path; the editors in [`edit`] re-derive it after a segment
//! drag, a node move or a port rotation. Every producer hands its candidate to
//! [`compress_segments`] before returning it.

pub mod build;
pub mod compress;
pub mod connector;
pub mod edit;
pub mod error;
pub mod geometry;
pub mod integrity;
pub mod scene;
pub mod serialize;
pub mod types;

#[cfg(test)]
mod tests;

pub use build::{build_new, need_to_go_around, prepare_node, stump};
pub use compress::{compress_segments, remove_same_orientation_segments, remove_short_segments};
pub use connector::Connector;
pub use edit::{
    change_source_orientation, change_target_orientation, drag_segment, move_source_node,
    move_target_node,
};
pub use error::{Result, RoutingError};
pub use geometry::{
    extend_endpoints, points_to_segments, reversed, segments_to_points, travel_segments,
};
pub use integrity::check_integrity;
pub use scene::route_scene;
pub use serialize::{format_segments, parse_segments};
pub use types::{
    Axis, BoundingBox, Orientation, Point, Port, RouteResult, RoutingConfig, RoutingOutput,
    Scene, SceneConnection, SceneNode, Segment,
};
