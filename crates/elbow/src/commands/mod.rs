pub mod batch;
pub mod build;
pub mod check;
pub mod completion;
pub mod config;
pub mod edit;
pub mod points;

use anyhow::Result;

use elbow::routing::{RoutingConfig, Segment, format_segments, parse_segments};

use crate::config::{Config, OutputFormat};

/// Routing settings and output format for a command, with `--format` taking precedence.
fn settings(format: Option<OutputFormat>) -> (RoutingConfig, OutputFormat) {
    let config = Config::load_or_default();
    (config.routing, format.unwrap_or(config.output.format))
}

/// Read a path given on the command line.
fn read_segments(text: &str) -> Result<Vec<Segment>> {
    parse_segments(text).ok_or_else(|| {
        anyhow::anyhow!("Invalid path: '{text}'. Expected segments like x:30,y:-20,x:15.")
    })
}

fn print_segments(segments: &[Segment], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", format_segments(segments)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(segments)?),
    }
    Ok(())
}
