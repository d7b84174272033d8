use anyhow::{Context, Result};

use elbow::routing::{
    Orientation, Point, change_source_orientation, change_target_orientation, drag_segment,
    format_segments, move_source_node, move_target_node,
};

use crate::cli::End;
use crate::config::OutputFormat;

/// Run the drag command.
pub fn drag(text: &str, index: usize, magnitude: f64, format: Option<OutputFormat>) -> Result<()> {
    let (config, format) = super::settings(format);
    let segments = super::read_segments(text)?;
    let next = drag_segment(&segments, index, magnitude, &config)
        .with_context(|| format!("Failed to drag segment {index} of {text}"))?;
    super::print_segments(&next, format)
}

/// Run the move command.
pub fn move_node(text: &str, end: End, delta: Point, format: Option<OutputFormat>) -> Result<()> {
    let (config, format) = super::settings(format);
    let segments = super::read_segments(text)?;
    let next = match end {
        End::Source => move_source_node(&segments, delta, &config),
        End::Target => move_target_node(&segments, delta, &config),
    }
    .with_context(|| format!("Failed to move the node of {text} by {delta}"))?;
    super::print_segments(&next, format)
}

/// Run the rotate command.
pub fn rotate(
    text: &str,
    end: End,
    orientation: Orientation,
    format: Option<OutputFormat>,
) -> Result<()> {
    let (config, format) = super::settings(format);
    let segments = super::read_segments(text)?;
    let next = match end {
        End::Source => change_source_orientation(&segments, orientation, &config),
        End::Target => change_target_orientation(&segments, orientation, &config),
    };
    if next == segments {
        log::info!("{} already faces {orientation}", format_segments(&segments));
    }
    super::print_segments(&next, format)
}
