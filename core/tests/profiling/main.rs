
use baconpath_core::{CastRecords, CollaborationGraph};

pub fn three_movie_graph() -> CollaborationGraph {
    let records: CastRecords = [
        ("M1", vec!["Alice", "Bob"]),
        ("M2", vec!["Bob", "Carol"]),
        ("M3", vec!["Dave", "Eve"]),
    ]
    .into_iter()
    .collect();
    CollaborationGraph::build(&records)
}

/// Hub with three co-stars, each of whom has their own co-star, plus a
/// triangle so some actors are reachable along several equal routes.
pub fn star_graph() -> CollaborationGraph {
    let records: CastRecords = [
        ("Hub Film", vec!["Hub", "North", "South", "East"]),
        ("North Film", vec!["North", "Far North"]),
        ("South Film", vec!["South", "Far South", "South"]),
        ("East Film", vec!["East", "Far East"]),
        ("Crossover", vec!["Far North", "Far South", "Farthest"]),
        ("Elsewhere", vec!["Stranger", "Other Stranger"]),
        ("Alone", vec!["Hermit"]),
    ]
    .into_iter()
    .collect();
    CollaborationGraph::build(&records)
}
