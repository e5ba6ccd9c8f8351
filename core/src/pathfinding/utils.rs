use crate::graph::{ActorId, CollaborationGraph};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Actors from source to target inclusive, one shared movie per hop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorPath {
    pub actors: Vec<String>,
    /// Number of hops, always `actors.len() - 1`.
    pub distance: usize,
}

impl ActorPath {
    pub fn source(&self) -> &str {
        &self.actors[0]
    }

    pub fn target(&self) -> &str {
        &self.actors[self.actors.len() - 1]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    Found {
        path: ActorPath,
        actors_visited: usize,
    },
    /// Both actors exist but lie in different components.
    NoPath { actors_visited: usize },
}

impl PathResult {
    pub fn path(&self) -> Option<&ActorPath> {
        match self {
            PathResult::Found { path, .. } => Some(path),
            PathResult::NoPath { .. } => None,
        }
    }

    pub fn distance(&self) -> Option<usize> {
        self.path().map(|path| path.distance)
    }

    pub fn actors_visited(&self) -> usize {
        match self {
            PathResult::Found { actors_visited, .. } | PathResult::NoPath { actors_visited } => {
                *actors_visited
            }
        }
    }
}

pub fn reconstruct_path(
    graph: &CollaborationGraph,
    parent_map: &FxHashMap<ActorId, ActorId>,
    start: ActorId,
    target: ActorId,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current_node = target;

    while current_node != start {
        path.push(graph.name(current_node).to_string());
        current_node = parent_map[&current_node];
    }

    path.push(graph.name(start).to_string());
    path.reverse();
    path
}
