use baconpath_core::{CastRecords, CollaborationGraph};
use rustc_hash::FxHashSet;

fn messy_records() -> CastRecords {
    [
        ("Remake", vec!["Ann", "Ben", "Ann", "Cal"]),
        ("Remake II", vec!["Ben", "Ann"]),
        ("Remake III", vec!["Ann", "Ben", "Cal", "Dee"]),
        ("Cameo", vec!["Dee", "Dee"]),
        ("Unrelated", vec!["Eli", "Fay"]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_adjacency_is_symmetric() {
    let graph = CollaborationGraph::build(&messy_records());

    for actor in graph.actors() {
        for neighbor in graph.neighbors_of(actor).unwrap() {
            assert!(
                graph.neighbors_of(neighbor).unwrap().contains(&actor),
                "{neighbor} lists no edge back to {actor}"
            );
        }
    }
}

#[test]
fn test_duplicate_names_in_cast_never_create_self_loops() {
    let graph = CollaborationGraph::build(&messy_records());

    for actor in graph.actors() {
        assert!(!graph.neighbors_of(actor).unwrap().contains(&actor));
    }
    assert!(graph.neighbors_of("Dee").unwrap().iter().all(|&n| n != "Dee"));
}

#[test]
fn test_repeated_co_appearances_keep_one_edge() {
    let graph = CollaborationGraph::build(&messy_records());

    for actor in graph.actors() {
        let neighbors = graph.neighbors_of(actor).unwrap();
        let unique: FxHashSet<&str> = neighbors.iter().copied().collect();
        assert_eq!(unique.len(), neighbors.len(), "{actor} has duplicate neighbors");
    }

    assert_eq!(graph.neighbors_of("Ann").unwrap(), vec!["Ben", "Cal", "Dee"]);
    // Ann-Ben, Ann-Cal, Ben-Cal, Ann-Dee, Ben-Dee, Cal-Dee, Eli-Fay
    assert_eq!(graph.edge_count(), 7);
}

#[test]
fn test_build_is_deterministic() {
    let first = CollaborationGraph::build(&messy_records());
    let second = CollaborationGraph::build(&messy_records());

    for actor in first.actors() {
        assert_eq!(
            first.neighbors_of(actor).unwrap(),
            second.neighbors_of(actor).unwrap()
        );
    }
}
