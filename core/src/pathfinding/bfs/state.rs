use super::super::utils::{ActorPath, reconstruct_path};
use crate::graph::{ActorId, CollaborationGraph};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

pub struct BfsState {
    start: ActorId,
    queue: VecDeque<(ActorId, usize)>,
    pub visited: FxHashSet<ActorId>,
    parent_map: FxHashMap<ActorId, ActorId>,
}

impl BfsState {
    pub fn new(start: ActorId) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back((start, 0));
        visited.insert(start);

        Self {
            start,
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    // Marks on enqueue so an actor reachable through several co-stars is
    // queued once.
    fn visit_neighbor(&mut self, neighbor: ActorId, current: ActorId, depth: usize) {
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, current);
            self.queue.push_back((neighbor, depth));
        }
    }

    /// Runs until `target` is dequeued or the component is exhausted.
    pub fn find_path_to_target(
        &mut self,
        target: ActorId,
        graph: &CollaborationGraph,
    ) -> Option<ActorPath> {
        while let Some((current_actor, depth)) = self.queue.pop_front() {
            if current_actor == target {
                let actors = reconstruct_path(graph, &self.parent_map, self.start, target);
                return Some(ActorPath {
                    actors,
                    distance: depth,
                });
            }

            for &neighbor in graph.neighbors(current_actor) {
                self.visit_neighbor(neighbor, current_actor, depth + 1);
            }
        }

        None
    }
}
