use baconpath::{Args, logging::init_logging, run};
use clap::Parser;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(error) = run(args) {
        eprintln!("❌ Error: {}", error);
        std::process::exit(1);
    }
}
