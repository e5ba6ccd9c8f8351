mod json_output;
mod summary;

use baconpath_core::{CastRecords, CollaborationGraph, read_cast_records};

pub const CAST_FILE: &str = "\
Footloose (1984)/Bacon, Kevin/Singer, Lori/Lithgow, John
Apollo 13 (1995)/Hanks, Tom/Bacon, Kevin/Paxton, Bill
Big (1988)/Hanks, Tom/Perkins, Elizabeth
Cliffhanger (1993)/Stallone, Sylvester/Lithgow, John
Amélie (2001)/Tautou, Audrey/Kassovitz, Mathieu
Volver (2006)/Cruz, Penélope/Maura, Carmen
Solo Show (2010)/Cher
";

pub fn test_graph() -> CollaborationGraph {
    let records: CastRecords = read_cast_records(CAST_FILE.as_bytes()).unwrap();
    CollaborationGraph::build(&records)
}
