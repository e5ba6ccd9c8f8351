pub mod bfs;

pub use bfs::profile;

use crate::error::{GraphError, GraphResult};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Shortest distance from a fixed root to every actor it can reach.
///
/// Unreachable actors are absent. `layers()[d]` lists the actors first
/// discovered at distance `d`, in discovery order; layer 0 is the root.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    root: String,
    distances: FxHashMap<String, usize>,
    layers: Vec<Vec<String>>,
}

impl DistanceMap {
    pub(crate) fn new(root: String, layers: Vec<Vec<String>>) -> Self {
        let distances = layers
            .iter()
            .enumerate()
            .flat_map(|(distance, layer)| layer.iter().map(move |actor| (actor.clone(), distance)))
            .collect();

        Self {
            root,
            distances,
            layers,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn distance_of(&self, actor: &str) -> Option<usize> {
        self.distances.get(actor).copied()
    }

    pub fn contains(&self, actor: &str) -> bool {
        self.distances.contains_key(actor)
    }

    /// Reachable actors including the root.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn layers(&self) -> &[Vec<String>] {
        &self.layers
    }

    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Vec::len).collect()
    }

    /// Running totals of `layer_sizes`, root included.
    pub fn cumulative_sizes(&self) -> Vec<usize> {
        self.layers
            .iter()
            .scan(0, |total, layer| {
                *total += layer.len();
                Some(*total)
            })
            .collect()
    }

    pub fn max_distance(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }

    /// `(actor, distance)` pairs ordered by distance, then discovery.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(distance, layer)| layer.iter().map(move |actor| (actor.as_str(), distance)))
    }

    pub fn to_hash_map(&self) -> FxHashMap<String, usize> {
        self.distances.clone()
    }

    /// Mean and median over every non-root actor's distance.
    pub fn summary(&self) -> GraphResult<DistanceSummary> {
        let mut observations: Vec<usize> = self
            .iter()
            .filter(|&(_, distance)| distance > 0)
            .map(|(_, distance)| distance)
            .collect();

        if observations.is_empty() {
            return Err(GraphError::EmptyPopulation {
                root: self.root.clone(),
            });
        }

        observations.sort_unstable();
        let population = observations.len();
        let total: usize = observations.iter().sum();

        let middle = population / 2;
        let median = if population % 2 == 1 {
            observations[middle] as f64
        } else {
            (observations[middle - 1] + observations[middle]) as f64 / 2.0
        };

        Ok(DistanceSummary {
            root: self.root.clone(),
            population,
            mean: total as f64 / population as f64,
            median,
            layer_sizes: self.layer_sizes(),
        })
    }
}

/// Distance distribution of the population reachable from one root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceSummary {
    pub root: String,
    /// Reachable actors excluding the root.
    pub population: usize,
    pub mean: f64,
    pub median: f64,
    pub layer_sizes: Vec<usize>,
}
