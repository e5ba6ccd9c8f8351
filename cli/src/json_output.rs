use baconpath_core::PathResult;
use serde::{Deserialize, Serialize};

use crate::search::SearchResult;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degrees: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub actors_explored: usize,
}

pub fn create_json_output(search: &SearchResult) -> JsonOutput {
    let (degrees, path) = match &search.result {
        PathResult::Found { path, .. } => (Some(path.distance), Some(path.actors.clone())),
        PathResult::NoPath { .. } => (None, None),
    };

    JsonOutput {
        query: JsonQuery {
            from: search.from_name.clone(),
            to: search.to_name.clone(),
        },
        result: JsonResult {
            found: path.is_some(),
            degrees,
            path,
        },
        stats: JsonStats {
            search_time_ms: (search.search_duration * 1000.0) as u64,
            actors_explored: search.result.actors_visited(),
        },
    }
}
