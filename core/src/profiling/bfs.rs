use super::DistanceMap;
use crate::error::GraphResult;
use crate::graph::{ActorId, CollaborationGraph};
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::info;

/// Layered BFS from `root` covering its whole connected component.
///
/// Each actor keeps the distance of the frontier it was first found in.
pub fn profile(graph: &CollaborationGraph, root: &str) -> GraphResult<DistanceMap> {
    let start_time = Instant::now();
    let root_id = graph.require(root)?;

    let mut visited = FxHashSet::default();
    visited.insert(root_id);

    let mut frontier = vec![root_id];
    let mut layers: Vec<Vec<ActorId>> = Vec::new();

    while !frontier.is_empty() {
        let next_frontier = expand_frontier(graph, &frontier, &mut visited);
        layers.push(frontier);
        frontier = next_frontier;
    }

    let named_layers: Vec<Vec<String>> = layers
        .into_iter()
        .map(|layer| {
            layer
                .into_iter()
                .map(|id| graph.name(id).to_string())
                .collect()
        })
        .collect();
    let distance_map = DistanceMap::new(root.to_string(), named_layers);

    info!(
        root,
        reachable = distance_map.len(),
        max_distance = distance_map.max_distance(),
        duration_ms = start_time.elapsed().as_millis() as u64,
        "profiled distances"
    );
    Ok(distance_map)
}

fn expand_frontier(
    graph: &CollaborationGraph,
    frontier: &[ActorId],
    visited: &mut FxHashSet<ActorId>,
) -> Vec<ActorId> {
    let mut next_frontier = Vec::new();

    for &current in frontier {
        for &neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                next_frontier.push(neighbor);
            }
        }
    }

    next_frontier
}
