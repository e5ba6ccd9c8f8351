use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_ROOT_ACTOR: &str = "Kevin Bacon";

#[derive(Parser, Debug, Clone)]
#[command(name = "baconpath")]
#[command(about = "Find the degrees of separation between any two actors through shared movies")]
pub struct Args {
    /// First actor name (omit both actors for interactive mode)
    #[arg(requires = "actor2")]
    pub actor1: Option<String>,

    /// Second actor name
    pub actor2: Option<String>,

    /// Cast file with one `Title/Last, First/...` line per movie
    #[arg(
        short = 'd',
        long = "data",
        value_name = "FILE",
        env = "BACON_CAST_PATH",
        default_value = "BaconCastFull.txt"
    )]
    pub data_path: PathBuf,

    /// Actor whose distance statistics are reported on exit
    #[arg(short = 'r', long, value_name = "NAME", default_value = DEFAULT_ROOT_ACTOR)]
    pub root: String,

    /// Print the result as JSON (one-shot mode only)
    #[arg(short, long, requires = "actor1")]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Both actors when given on the command line.
    pub fn query(&self) -> Option<(&str, &str)> {
        match (&self.actor1, &self.actor2) {
            (Some(first), Some(second)) => Some((first.as_str(), second.as_str())),
            _ => None,
        }
    }
}
