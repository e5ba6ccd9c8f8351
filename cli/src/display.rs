use baconpath_core::{ActorPath, DistanceSummary, GraphError, PathResult};
use std::io::{self, Write};

use crate::colors::ColorScheme;
use crate::search::SearchResult;
use crate::utils::format_number;

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    pub verbose: bool,
    pub quiet: bool,
}

pub fn write_search_info(
    out: &mut impl Write,
    from_name: &str,
    to_name: &str,
    colors: &ColorScheme,
) -> io::Result<()> {
    writeln!(
        out,
        "🎬 Finding degrees of separation between {} and {}",
        colors.actor_name(&format!("\"{}\"", from_name)),
        colors.actor_name(&format!("\"{}\"", to_name))
    )?;
    writeln!(out, "🔍 Searching...")
}

pub fn write_search_results(
    out: &mut impl Write,
    search: &SearchResult,
    options: DisplayOptions,
    colors: &ColorScheme,
) -> io::Result<()> {
    if options.verbose {
        writeln!(out, "\n---\n")?;
    }

    match &search.result {
        PathResult::Found { path, .. } if path.distance == 0 => {
            writeln!(
                out,
                "{} They are the same person, so they have {} degrees of separation",
                colors.success("✅"),
                colors.number("0")
            )?;
        }
        PathResult::Found { path, .. } => {
            write_successful_path(out, path, options, colors)?;
            writeln!(
                out,
                "{} is {} degrees of separation from {}",
                colors.actor_name(&search.from_name),
                colors.number(&path.distance.to_string()),
                colors.actor_name(&search.to_name)
            )?;
        }
        PathResult::NoPath { .. } => {
            writeln!(
                out,
                "{} {} and {}",
                colors.error("❌ No path found between"),
                colors.actor_name(&format!("\"{}\"", search.from_name)),
                colors.actor_name(&format!("\"{}\"", search.to_name))
            )?;
        }
    }

    if options.verbose {
        write_search_statistics(
            out,
            search.result.actors_visited(),
            search.search_duration,
            colors,
        )?;
    }

    Ok(())
}

fn write_successful_path(
    out: &mut impl Write,
    path: &ActorPath,
    options: DisplayOptions,
    colors: &ColorScheme,
) -> io::Result<()> {
    if options.verbose {
        writeln!(
            out,
            "{} Found path with {} steps:\n",
            colors.success("✅"),
            colors.number(&path.distance.to_string())
        )?;
    }

    writeln!(out, "{}", format_path_flow(path, colors))?;

    if !options.quiet {
        writeln!(out)?;
        for (step_index, actor) in path.actors.iter().enumerate() {
            writeln!(out, "{}", format_path_step(step_index, actor, colors))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

pub fn format_path_flow(path: &ActorPath, colors: &ColorScheme) -> String {
    path.actors
        .iter()
        .map(|actor| colors.actor_name(&format!("\"{}\"", actor)).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

fn format_path_step(step_index: usize, actor: &str, colors: &ColorScheme) -> String {
    let step_number = format!("{}.", step_index + 1);
    format!(
        "{:3} {}",
        colors.step_number(&step_number),
        colors.actor_name(&format!("\"{}\"", actor))
    )
}

fn write_search_statistics(
    out: &mut impl Write,
    actors_visited: usize,
    search_duration: f64,
    colors: &ColorScheme,
) -> io::Result<()> {
    writeln!(out, "\n---\n")?;
    writeln!(
        out,
        "{} Explored {} actors in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(actors_visited)),
        colors.number(&format!("{:.3}", search_duration))
    )
}

/// Mean/median report for the root actor, or why it cannot be computed.
pub fn write_distance_summary(
    out: &mut impl Write,
    root: &str,
    summary: &Result<DistanceSummary, GraphError>,
    colors: &ColorScheme,
) -> io::Result<()> {
    match summary {
        Ok(summary) => {
            writeln!(
                out,
                "{} Distances from {} across {} reachable actors",
                colors.stats("📊"),
                colors.actor_name(&format!("\"{}\"", summary.root)),
                colors.number(&format_number(summary.population))
            )?;
            writeln!(out, "Mean: {}", colors.number(&format!("{:.3}", summary.mean)))?;
            writeln!(out, "Median: {}", colors.number(&summary.median.to_string()))
        }
        Err(GraphError::EmptyPopulation { .. }) => writeln!(
            out,
            "{} Mean and median are not computable: {} shares no movie with anyone",
            colors.error("⚠️"),
            colors.actor_name(&format!("\"{}\"", root))
        ),
        Err(error) => writeln!(
            out,
            "{} Mean and median are not computable: {}",
            colors.error("⚠️"),
            error
        ),
    }
}
