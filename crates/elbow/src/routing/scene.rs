use std::collections::HashMap;

use rayon::prelude::*;

use super::build::build_new;
use super::error::RoutingError;
use super::types::{
    BoundingBox, Port, RouteResult, RoutingConfig, RoutingOutput, Scene, SceneConnection,
};

/// Route all connections in a scene.
///
/// Connections are independent of each other: each one is routed between its two ports
/// with `build_new`, in parallel via rayon. Results keep the definition order.
///
/// # Arguments
/// * `scene`: Named nodes and the connections between them.
/// * `config`: Routing configuration.
///
/// # Returns
/// A `RoutingOutput` with a result for each connection.
pub fn route_scene(scene: &Scene, config: &RoutingConfig) -> RoutingOutput {
    // Build lookup from node name to bounding box.
    let name_to_bounds: HashMap<&str, BoundingBox> = scene
        .nodes
        .iter()
        .map(|n| (n.name.as_str(), n.bounds))
        .collect();

    let results = scene
        .connections
        .par_iter()
        .map(|conn| {
            let result = route_connection(&name_to_bounds, conn, config);
            (conn.clone(), result)
        })
        .collect();

    RoutingOutput { results }
}

fn route_connection(
    name_to_bounds: &HashMap<&str, BoundingBox>,
    conn: &SceneConnection,
    config: &RoutingConfig,
) -> RouteResult {
    let lookup = |name: &str| {
        name_to_bounds
            .get(name)
            .copied()
            .ok_or_else(|| RoutingError::UnknownNode {
                name: name.to_string(),
            })
    };

    match (lookup(&conn.source), lookup(&conn.target)) {
        (Ok(source_bounds), Ok(target_bounds)) => {
            let source = Port::on_side(source_bounds, conn.source_side);
            let target = Port::on_side(target_bounds, conn.target_side);
            RouteResult::Success(build_new(&source, &target, config))
        }
        (Err(err), _) | (_, Err(err)) => RouteResult::Failure {
            warning: format!(
                "Could not route '{}' -> '{}': {err}",
                conn.source, conn.target
            ),
        },
    }
}
