mod state;

use super::utils::{ActorPath, PathResult};
use crate::error::GraphResult;
use crate::graph::CollaborationGraph;
use state::BfsState;
use tracing::debug;

/// Shortest chain of shared movies from `source` to `target`.
///
/// Both names must be graph nodes; an actor missing from every cast is
/// reported as [`GraphError::UnknownActor`](crate::GraphError::UnknownActor)
/// rather than treated as isolated. Among several shortest chains the one
/// discovered first in neighbor order wins.
pub fn find_path(
    graph: &CollaborationGraph,
    source: &str,
    target: &str,
) -> GraphResult<PathResult> {
    let start = graph.require(source)?;
    let goal = graph.require(target)?;

    if start == goal {
        return Ok(PathResult::Found {
            path: ActorPath {
                actors: vec![source.to_string()],
                distance: 0,
            },
            actors_visited: 1,
        });
    }

    let mut bfs_state = BfsState::new(start);
    let path = bfs_state.find_path_to_target(goal, graph);
    let actors_visited = bfs_state.visited.len();

    debug!(
        source,
        target,
        distance = path.as_ref().map(|path| path.distance),
        actors_visited,
        "path search finished"
    );

    Ok(match path {
        Some(path) => PathResult::Found {
            path,
            actors_visited,
        },
        None => PathResult::NoPath { actors_visited },
    })
}
