use serde::Serialize;

use super::build::build_new;
use super::edit::{
    change_source_orientation, change_target_orientation, drag_segment, move_source_node,
    move_target_node,
};
use super::error::Result;
use super::geometry::{extend_endpoints, segments_to_points};
use super::integrity::check_integrity;
use super::types::{Orientation, Point, Port, RoutingConfig, Segment};

/// A routed connection between two ports.
///
/// Each edit replaces the path wholesale and checks that it still reaches the target port.
#[derive(Debug, Clone, Serialize)]
pub struct Connector {
    source: Port,
    target: Port,
    segments: Vec<Segment>,
    #[serde(skip)]
    config: RoutingConfig,
}

impl Connector {
    /// Route a fresh connection between two ports.
    pub fn route(source: Port, target: Port, config: RoutingConfig) -> Self {
        let segments = build_new(&source, &target, &config);
        let connector = Self {
            source,
            target,
            segments,
            config,
        };
        connector.verify(&[]);
        connector
    }

    /// Adopt an existing path, e.g. one loaded from a saved diagram.
    pub fn with_segments(
        source: Port,
        target: Port,
        segments: Vec<Segment>,
        config: RoutingConfig,
    ) -> Self {
        Self {
            source,
            target,
            segments,
            config,
        }
    }

    pub fn source(&self) -> &Port {
        &self.source
    }

    pub fn target(&self) -> &Port {
        &self.target
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Polyline to paint, from the source port to the target port.
    pub fn points(&self) -> Vec<Point> {
        segments_to_points(self.source.position, &self.segments)
    }

    /// Polyline with both ends pushed out by `offset`, for drawing under port markers.
    pub fn render_points(&self, offset: f64) -> Vec<Point> {
        extend_endpoints(&self.points(), offset)
    }

    /// Route again from scratch, discarding manual edits.
    pub fn reroute(&mut self) {
        let next = build_new(&self.source, &self.target, &self.config);
        self.commit(next);
    }

    pub fn drag_segment(&mut self, index: usize, magnitude: f64) -> Result<()> {
        let next = drag_segment(&self.segments, index, magnitude, &self.config)?;
        self.commit(next);
        Ok(())
    }

    pub fn move_source(&mut self, delta: Point) -> Result<()> {
        let next = move_source_node(&self.segments, delta, &self.config)?;
        self.source = self.source.translated(delta);
        self.commit(next);
        Ok(())
    }

    pub fn move_target(&mut self, delta: Point) -> Result<()> {
        let next = move_target_node(&self.segments, delta, &self.config)?;
        self.target = self.target.translated(delta);
        self.commit(next);
        Ok(())
    }

    pub fn set_source_orientation(&mut self, orientation: Orientation) {
        let next = change_source_orientation(&self.segments, orientation, &self.config);
        self.source.orientation = orientation;
        self.commit(next);
    }

    pub fn set_target_orientation(&mut self, orientation: Orientation) {
        let next = change_target_orientation(&self.segments, orientation, &self.config);
        self.target.orientation = orientation;
        self.commit(next);
    }

    fn commit(&mut self, next: Vec<Segment>) {
        let prev = std::mem::replace(&mut self.segments, next);
        self.verify(&prev);
    }

    fn verify(&self, prev: &[Segment]) -> bool {
        check_integrity(
            self.source.position,
            self.target.position,
            &self.segments,
            prev,
            &self.config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::geometry::travel_segments;
    use crate::routing::types::BoundingBox;

    fn connector() -> Connector {
        let source = Port::on_side(BoundingBox::new(0.0, 0.0, 40.0, 20.0), Orientation::Right);
        let target = Port::on_side(BoundingBox::new(100.0, 60.0, 40.0, 20.0), Orientation::Left);
        Connector::route(source, target, RoutingConfig::default())
    }

    fn lands_on_target(c: &Connector) -> bool {
        travel_segments(c.source().position, c.segments()).distance_to(c.target().position) < 1e-9
    }

    #[test]
    fn fresh_route_is_centred_between_facing_ports() {
        let c = connector();
        assert_eq!(
            c.segments(),
            &[Segment::x(30.0), Segment::y(60.0), Segment::x(30.0)]
        );
        assert!(c.verify(&[]));
    }

    #[test]
    fn edits_keep_the_connector_attached() {
        let mut c = connector();
        c.drag_segment(1, 12.0).unwrap();
        assert!(lands_on_target(&c));
        c.move_source(Point::new(-20.0, 15.0)).unwrap();
        assert!(lands_on_target(&c));
        c.move_target(Point::new(30.0, -5.0)).unwrap();
        assert!(lands_on_target(&c));
        c.set_source_orientation(Orientation::Bottom);
        assert!(lands_on_target(&c));
        c.set_target_orientation(Orientation::Top);
        assert!(lands_on_target(&c));
        assert_eq!(c.source().orientation, Orientation::Bottom);
        assert_eq!(c.target().orientation, Orientation::Top);
    }

    #[test]
    fn render_points_leave_segments_alone() {
        let c = connector();
        let before = c.segments().to_vec();
        let points = c.render_points(3.0);
        assert_eq!(points.first(), Some(&Point::new(37.0, 10.0)));
        assert_eq!(points.last(), Some(&Point::new(103.0, 70.0)));
        assert_eq!(c.segments(), before.as_slice());
    }

    #[test]
    fn adopted_path_is_edited_in_place() {
        let fresh = connector();
        let saved = vec![Segment::x(20.0), Segment::y(60.0), Segment::x(40.0)];
        let mut c = Connector::with_segments(
            *fresh.source(),
            *fresh.target(),
            saved.clone(),
            RoutingConfig::default(),
        );
        assert_eq!(c.segments(), saved.as_slice());
        c.drag_segment(1, 5.0).unwrap();
        assert_eq!(
            c.segments(),
            &[Segment::x(25.0), Segment::y(60.0), Segment::x(35.0)]
        );
        assert!(lands_on_target(&c));
    }

    #[test]
    fn reroute_discards_manual_edits() {
        let mut c = connector();
        let fresh = c.segments().to_vec();
        c.drag_segment(1, -12.0).unwrap();
        assert_ne!(c.segments(), fresh.as_slice());
        c.reroute();
        assert_eq!(c.segments(), fresh.as_slice());
    }

    #[test]
    fn failed_drag_keeps_the_old_path() {
        let mut c = connector();
        let before = c.segments().to_vec();
        assert!(c.drag_segment(9, 5.0).is_err());
        assert_eq!(c.segments(), before.as_slice());
    }
}
