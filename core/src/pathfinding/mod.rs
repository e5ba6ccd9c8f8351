pub mod bfs;
pub mod utils;

pub use bfs::find_path;
pub use utils::{ActorPath, PathResult};
