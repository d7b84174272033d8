use anyhow::Result;

use elbow::routing::{BoundingBox, Orientation, Point, Port, build_new, check_integrity};

use crate::config::OutputFormat;

/// Run the build command.
pub fn run(
    source: (Point, BoundingBox, Orientation),
    target: (Point, BoundingBox, Orientation),
    format: Option<OutputFormat>,
) -> Result<()> {
    let (config, format) = super::settings(format);
    let source = Port::new(source.0, source.1, source.2);
    let target = Port::new(target.0, target.1, target.2);

    let segments = build_new(&source, &target, &config);
    check_integrity(source.position, target.position, &segments, &[], &config);
    super::print_segments(&segments, format)
}
