pub mod error;
pub mod graph;
pub mod parsing;
pub mod pathfinding;
pub mod profiling;
pub mod string_normalization;

// Re-export commonly used items
pub use error::{GraphError, GraphResult, IngestError};
pub use graph::{ActorId, CollaborationGraph};
pub use parsing::{CastRecords, Movie, load_cast_file, parse_cast_line, read_cast_records};
pub use pathfinding::{ActorPath, PathResult, find_path};
pub use profiling::{DistanceMap, DistanceSummary, profile};
