use super::test_graph;
use baconpath::json_output::create_json_output;
use baconpath::search::{ActorLookup, create_search_request, execute_search};

#[test]
fn test_json_output_for_found_path() {
    let graph = test_graph();
    let lookup = ActorLookup::new(&graph);
    let request = create_search_request("Lori Singer", "Tom Hanks", &lookup).unwrap();
    let search = execute_search(request, &graph).unwrap();

    let json = serde_json::to_value(create_json_output(&search)).unwrap();

    assert_eq!(json["query"]["from"], "Lori Singer");
    assert_eq!(json["query"]["to"], "Tom Hanks");
    assert_eq!(json["result"]["found"], true);
    assert_eq!(json["result"]["degrees"], 2);
    assert_eq!(
        json["result"]["path"],
        serde_json::json!(["Lori Singer", "Kevin Bacon", "Tom Hanks"])
    );
    assert!(json["stats"]["actors_explored"].as_u64().unwrap() >= 3);
}

#[test]
fn test_json_output_omits_path_when_disconnected() {
    let graph = test_graph();
    let lookup = ActorLookup::new(&graph);
    let request = create_search_request("Cher", "Kevin Bacon", &lookup).unwrap();
    let search = execute_search(request, &graph).unwrap();

    let json = serde_json::to_value(create_json_output(&search)).unwrap();

    assert_eq!(json["result"]["found"], false);
    assert!(json["result"].get("path").is_none());
    assert!(json["result"].get("degrees").is_none());
    assert_eq!(json["stats"]["actors_explored"], 1);
}
