use anyhow::Result;
use colored::Colorize;

use elbow::routing::{Point, check_integrity, travel_segments};

use crate::config::OutputFormat;

/// Run the check command. Fails when the path misses the target.
pub fn run(source: Point, target: Point, text: &str, format: Option<OutputFormat>) -> Result<()> {
    let (config, format) = super::settings(format);
    let segments = super::read_segments(text)?;

    let reaches = check_integrity(source, target, &segments, &[], &config);
    let end = travel_segments(source, &segments);

    match format {
        OutputFormat::Text if reaches => {
            println!("{}", format!("Path ends at the target {target}").green());
        }
        OutputFormat::Text => {}
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "reaches_target": reaches,
                "end": end,
                "target": target,
            }))?
        ),
    }

    if !reaches {
        anyhow::bail!(
            "Path ends at {end}, {:.2} away from the target {target}",
            end.distance_to(target)
        );
    }
    Ok(())
}
