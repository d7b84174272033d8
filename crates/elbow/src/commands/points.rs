use anyhow::Result;

use elbow::routing::{Point, extend_endpoints, segments_to_points};

use crate::config::OutputFormat;

/// Run the points command.
pub fn run(
    source: Point,
    text: &str,
    extend: Option<f64>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let (_, format) = super::settings(format);
    let segments = super::read_segments(text)?;

    let mut points = segments_to_points(source, &segments);
    if let Some(offset) = extend {
        points = extend_endpoints(&points, offset);
    }

    match format {
        OutputFormat::Text => {
            for point in &points {
                println!("{point}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&points)?),
    }
    Ok(())
}
