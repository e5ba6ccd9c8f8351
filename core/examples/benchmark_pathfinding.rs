use baconpath_core::{CollaborationGraph, PathResult, find_path, load_cast_file, profile};
use std::path::PathBuf;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cast_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("../BaconCastFull.txt"));

    if !cast_path.exists() {
        eprintln!("Error: {} not found", cast_path.display());
        eprintln!("Usage: cargo run --release --example benchmark_pathfinding -- <cast file>");
        std::process::exit(1);
    }

    let load_timer = Instant::now();
    let records = load_cast_file(&cast_path)?;
    let graph = CollaborationGraph::build(&records);
    println!(
        "Loaded {} movies, {} actors, {} edges in {:.3} sec",
        records.movie_count(),
        graph.actor_count(),
        graph.edge_count(),
        load_timer.elapsed().as_secs_f64()
    );

    let Some(root) = graph.actors().next() else {
        println!("Cast file is empty, nothing to benchmark");
        return Ok(());
    };

    let profile_timer = Instant::now();
    let distance_map = profile(&graph, root)?;
    println!(
        "Profiled {:?}: {} reachable actors in {:.3} sec",
        root,
        distance_map.len(),
        profile_timer.elapsed().as_secs_f64()
    );

    // Query one actor per distance layer so every search depth is covered.
    let targets: Vec<&str> = distance_map
        .layers()
        .iter()
        .filter_map(|layer| layer.last().map(String::as_str))
        .collect();

    for target in targets {
        let search_timer = Instant::now();
        let result = find_path(&graph, root, target)?;
        let elapsed = search_timer.elapsed().as_secs_f64();

        match result {
            PathResult::Found {
                path,
                actors_visited,
            } => println!(
                "{:>3} hops to {:?}: visited {} actors in {:.3} sec",
                path.distance, target, actors_visited, elapsed
            ),
            PathResult::NoPath { actors_visited } => println!(
                "no path to {:?}: visited {} actors in {:.3} sec",
                target, actors_visited, elapsed
            ),
        }
    }

    Ok(())
}
