//! Orthogonal connector routing with incremental editing.
//!
//! ```
//! use elbow::routing::{build_new, BoundingBox, Orientation, Point, Port, RoutingConfig, Segment};
//!
//! let config = RoutingConfig::default();
//! let source = Port::new(
//!     Point::new(0.0, 0.0),
//!     BoundingBox::new(-20.0, -20.0, 40.0, 20.0),
//!     Orientation::Bottom,
//! );
//! let target = Port::new(
//!     Point::new(0.0, 30.0),
//!     BoundingBox::new(-20.0, 30.0, 40.0, 20.0),
//!     Orientation::Top,
//! );
//! assert_eq!(build_new(&source, &target, &config), vec![Segment::y(30.0)]);
//! ```

pub mod routing;
