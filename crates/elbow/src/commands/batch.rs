use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use elbow::routing::{RouteResult, Scene, route_scene};

/// Run the batch command: route every connection of a scene and print the results as JSON.
pub fn run(file: &Path) -> Result<()> {
    let (config, _) = super::settings(None);
    let scene = read_scene(file)?;
    log::debug!(
        "routing {} connections between {} nodes",
        scene.connections.len(),
        scene.nodes.len()
    );

    let output = route_scene(&scene, &config);

    let mut failures = 0;
    for (_, result) in &output.results {
        if let RouteResult::Failure { warning } = result {
            log::warn!("{warning}");
            failures += 1;
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);

    if failures > 0 {
        log::warn!(
            "{}",
            format!("{failures} of {} connections failed", output.results.len()).yellow()
        );
    }
    Ok(())
}

fn read_scene(file: &Path) -> Result<Scene> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let is_json = file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let scene = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", file.display()))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {} as YAML", file.display()))?
    };
    Ok(scene)
}
