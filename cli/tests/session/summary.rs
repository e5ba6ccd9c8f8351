use super::test_graph;
use baconpath::app::root_summary;
use baconpath::colors::ColorScheme;
use baconpath::display::write_distance_summary;
use baconpath::search::ActorLookup;
use baconpath_core::GraphError;

fn render(root_query: &str) -> String {
    let graph = test_graph();
    let lookup = ActorLookup::new(&graph);
    let (root, summary) = root_summary(&lookup, root_query);

    let mut output = Vec::new();
    write_distance_summary(&mut output, &root, &summary, &ColorScheme::new(false)).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_root_summary_for_default_root() {
    let graph = test_graph();
    let lookup = ActorLookup::new(&graph);

    let (root, summary) = root_summary(&lookup, "kevin bacon");
    let summary = summary.unwrap();

    // Singer, Lithgow, Hanks, Paxton at 1; Stallone, Perkins at 2
    assert_eq!(root, "Kevin Bacon");
    assert_eq!(summary.population, 6);
    assert!((summary.mean - 8.0 / 6.0).abs() < 1e-9);
    assert!((summary.median - 1.0).abs() < 1e-9);
}

#[test]
fn test_summary_output_lines() {
    let output = render("Kevin Bacon");

    assert!(output.contains("Mean: 1.333"));
    assert!(output.contains("Median: 1\n"));
}

#[test]
fn test_isolated_root_is_not_computable() {
    let graph = test_graph();
    let lookup = ActorLookup::new(&graph);

    let (_, summary) = root_summary(&lookup, "Cher");
    assert_eq!(
        summary,
        Err(GraphError::EmptyPopulation {
            root: "Cher".to_string()
        })
    );

    assert!(render("Cher").contains("Mean and median are not computable"));
}

#[test]
fn test_unknown_root_is_not_computable() {
    let output = render("Nobody Famous");

    assert!(output.contains("not computable: actor not found: Nobody Famous"));
}
