use std::{
    error::Error,
    io::{self, Write},
    path::{Path, PathBuf},
};

use baconpath_core::{CollaborationGraph, DistanceSummary, GraphError, load_cast_file, profile};
use tracing::info;

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::display::{DisplayOptions, write_distance_summary, write_search_info, write_search_results};
use crate::interactive::run_interactive;
use crate::json_output::create_json_output;
use crate::search::{ActorLookup, create_search_request, execute_search};

pub struct BaconPathApp {
    pub data_path: PathBuf,
}

impl BaconPathApp {
    pub fn new(data_path: &Path) -> Result<Self, Box<dyn Error>> {
        if !data_path.exists() {
            return Err(format!(
                "Cast file not found: {:?}. Pass --data or set BACON_CAST_PATH",
                data_path
            )
            .into());
        }

        Ok(Self {
            data_path: data_path.to_path_buf(),
        })
    }

    pub fn load_graph(&self) -> Result<CollaborationGraph, Box<dyn Error>> {
        let records = load_cast_file(&self.data_path)?;
        Ok(CollaborationGraph::build(&records))
    }
}

pub fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let colors = ColorScheme::new(!args.no_color);
    let options = DisplayOptions {
        verbose: args.verbose,
        quiet: args.quiet,
    };

    let app = BaconPathApp::new(&args.data_path)?;
    let graph = app.load_graph()?;
    let lookup = ActorLookup::new(&graph);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some((from_query, to_query)) = args.query() {
        let request = create_search_request(from_query, to_query, &lookup)?;
        if options.verbose && !args.json {
            write_search_info(&mut out, &request.from_name, &request.to_name, &colors)?;
        }

        let search = execute_search(request, &graph)?;
        if args.json {
            let json = serde_json::to_string_pretty(&create_json_output(&search))?;
            writeln!(out, "{}", json)?;
        } else {
            write_search_results(&mut out, &search, options, &colors)?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let queries = run_interactive(&mut stdin.lock(), &mut out, &lookup, options, &colors)?;
    info!(queries, "interactive session ended");

    writeln!(out)?;
    let (root, summary) = root_summary(&lookup, &args.root);
    write_distance_summary(&mut out, &root, &summary, &colors)?;
    Ok(())
}

/// Resolves the configured root and summarizes its distance distribution.
pub fn root_summary(
    lookup: &ActorLookup<'_>,
    root_query: &str,
) -> (String, Result<DistanceSummary, GraphError>) {
    let root = match lookup.find_best_actor_match(root_query) {
        Ok(root) => root,
        Err(error) => return (root_query.to_string(), Err(error)),
    };

    let summary = profile(lookup.graph(), &root).and_then(|distance_map| distance_map.summary());
    (root, summary)
}
