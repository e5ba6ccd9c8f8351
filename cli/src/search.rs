use baconpath_core::string_normalization::{canonical_actor_name, clean_str};
use baconpath_core::{CollaborationGraph, GraphError, GraphResult, PathResult, find_path};
use rustc_hash::FxHashMap;
use std::time::Instant;

/// Normalized name -> canonical graph names sharing that key.
pub type NameLookup = FxHashMap<String, Vec<String>>;

/// Resolves user-typed actor names against the graph.
pub struct ActorLookup<'g> {
    graph: &'g CollaborationGraph,
    name_lookup: NameLookup,
}

impl<'g> ActorLookup<'g> {
    pub fn new(graph: &'g CollaborationGraph) -> Self {
        let mut name_lookup: NameLookup = FxHashMap::default();
        for actor in graph.actors() {
            name_lookup
                .entry(clean_str(actor))
                .or_default()
                .push(actor.to_string());
        }

        Self { graph, name_lookup }
    }

    pub fn graph(&self) -> &'g CollaborationGraph {
        self.graph
    }

    /// Exact canonical name first, then a case/accent-insensitive match on
    /// either `First Last` or `Last, First` input.
    pub fn find_best_actor_match(&self, name: &str) -> GraphResult<String> {
        let trimmed = name.trim();
        if self.graph.contains(trimmed) {
            return Ok(trimmed.to_string());
        }

        let canonical = canonical_actor_name(trimmed);
        if self.graph.contains(&canonical) {
            return Ok(canonical);
        }

        let candidates = self
            .name_lookup
            .get(&clean_str(&canonical))
            .filter(|candidates| !candidates.is_empty())
            .ok_or_else(|| GraphError::UnknownActor {
                name: trimmed.to_string(),
            })?;

        let lowercase_query = canonical.to_lowercase();
        let best = candidates
            .iter()
            .find(|candidate| candidate.to_lowercase() == lowercase_query)
            .unwrap_or(&candidates[0]);

        Ok(best.clone())
    }
}

pub struct SearchRequest {
    pub from_name: String,
    pub to_name: String,
}

pub struct SearchResult {
    pub result: PathResult,
    pub search_duration: f64,
    pub from_name: String,
    pub to_name: String,
}

pub fn create_search_request(
    from_query: &str,
    to_query: &str,
    lookup: &ActorLookup<'_>,
) -> GraphResult<SearchRequest> {
    Ok(SearchRequest {
        from_name: lookup.find_best_actor_match(from_query)?,
        to_name: lookup.find_best_actor_match(to_query)?,
    })
}

pub fn execute_search(
    request: SearchRequest,
    graph: &CollaborationGraph,
) -> GraphResult<SearchResult> {
    let search_timer = Instant::now();
    let result = find_path(graph, &request.from_name, &request.to_name)?;

    Ok(SearchResult {
        result,
        search_duration: search_timer.elapsed().as_secs_f64(),
        from_name: request.from_name,
        to_name: request.to_name,
    })
}
