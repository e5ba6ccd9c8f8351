//! Error types for graph queries and cast ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of path and distance queries against a built graph.
///
/// A disconnected pair of actors is not an error; see
/// [`PathResult::NoPath`](crate::PathResult::NoPath).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The actor does not appear in any recorded cast.
    #[error("actor not found: {name}")]
    UnknownActor { name: String },

    /// The root reaches no other actor, so distance statistics are undefined.
    #[error("no actors reachable from {root}")]
    EmptyPopulation { root: String },
}

/// Failures while loading cast records from disk.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read cast file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;
