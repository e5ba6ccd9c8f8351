use crate::error::{GraphError, GraphResult};
use crate::parsing::CastRecords;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::info;

/// Dense index of an actor inside a [`CollaborationGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(u32);

impl ActorId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Undirected co-appearance graph over actor names.
///
/// Built once from [`CastRecords`] and read-only afterwards, so a shared
/// reference can be queried from several threads at once.
///
/// Invariants upheld by [`CollaborationGraph::build`]:
/// - symmetric: `b` in `neighbors(a)` iff `a` in `neighbors(b)`
/// - no self-loops, even when a cast lists the same actor twice
/// - each neighbor appears at most once per adjacency list
#[derive(Debug, Clone, Default)]
pub struct CollaborationGraph {
    names: Vec<String>,
    ids: FxHashMap<String, ActorId>,
    adjacency: Vec<Vec<ActorId>>,
}

impl CollaborationGraph {
    /// Connects every pair of distinct actors that share a movie.
    ///
    /// Neighbor lists keep the order in which co-appearances were first
    /// seen, walking movies in record order.
    pub fn build(records: &CastRecords) -> Self {
        let mut builder = GraphBuilder::default();

        for movie in records.iter() {
            let cast: Vec<ActorId> = movie
                .cast
                .iter()
                .map(|actor| builder.intern(actor))
                .collect();

            for (i, &first) in cast.iter().enumerate() {
                for &second in &cast[i + 1..] {
                    builder.connect(first, second);
                }
            }
        }

        let graph = builder.finish();
        info!(
            movies = records.movie_count(),
            actors = graph.actor_count(),
            edges = graph.edge_count(),
            "built collaboration graph"
        );
        graph
    }

    pub fn actor_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    pub fn actor_id(&self, name: &str) -> Option<ActorId> {
        self.ids.get(name).copied()
    }

    /// Like [`actor_id`](Self::actor_id) but reports unknown names as errors.
    pub fn require(&self, name: &str) -> GraphResult<ActorId> {
        self.actor_id(name).ok_or_else(|| GraphError::UnknownActor {
            name: name.to_string(),
        })
    }

    pub fn name(&self, id: ActorId) -> &str {
        &self.names[id.index()]
    }

    pub fn neighbors(&self, id: ActorId) -> &[ActorId] {
        &self.adjacency[id.index()]
    }

    /// Co-stars of `name`; empty for an actor who only worked alone.
    pub fn neighbors_of(&self, name: &str) -> GraphResult<Vec<&str>> {
        let id = self.require(name)?;
        Ok(self
            .neighbors(id)
            .iter()
            .map(|&neighbor| self.name(neighbor))
            .collect())
    }

    pub fn are_connected(&self, first: &str, second: &str) -> bool {
        match (self.actor_id(first), self.actor_id(second)) {
            (Some(a), Some(b)) => self.neighbors(a).contains(&b),
            _ => false,
        }
    }

    /// All actor names in interning order.
    pub fn actors(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[derive(Default)]
struct GraphBuilder {
    names: Vec<String>,
    ids: FxHashMap<String, ActorId>,
    adjacency: Vec<Vec<ActorId>>,
    edges: FxHashSet<(ActorId, ActorId)>,
}

impl GraphBuilder {
    fn intern(&mut self, name: &str) -> ActorId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = ActorId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    fn connect(&mut self, a: ActorId, b: ActorId) {
        if a == b {
            return;
        }

        let key = if a < b { (a, b) } else { (b, a) };
        if self.edges.insert(key) {
            self.adjacency[a.index()].push(b);
            self.adjacency[b.index()].push(a);
        }
    }

    fn finish(self) -> CollaborationGraph {
        CollaborationGraph {
            names: self.names,
            ids: self.ids,
            adjacency: self.adjacency,
        }
    }
}
