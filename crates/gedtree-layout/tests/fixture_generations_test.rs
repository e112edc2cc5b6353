use gedtree_layout::{FounderPolicy, KinGraph, assign_generations, find_path};
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn fixture_graph() -> KinGraph {
    let path = workspace_root().join("fixtures").join("family.ged");
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    KinGraph::from_gedcom(&gedtree_core::parse(&text))
}

#[test]
fn fixture_generations_are_grouped_and_ordered() {
    let graph = fixture_graph();
    let map = assign_generations(&graph, &FounderPolicy);

    assert_eq!(map.group(1), ["@I2@", "@I1@", "@I3@"]);
    assert_eq!(map.group(2), ["@I4@", "@I5@", "@I7@", "@I6@", "@I8@"]);
    assert_eq!(map.group(3), ["@I9@", "@I10@", "@I11@"]);
    assert_eq!(map.len(), 11);
}

#[test]
fn fixture_children_sit_below_their_parents() {
    let graph = fixture_graph();
    let map = assign_generations(&graph, &FounderPolicy);
    for parent in 0..graph.node_count() {
        for &child in graph.children(parent) {
            let pg = map.generation(graph.id(parent)).unwrap();
            let cg = map.generation(graph.id(child)).unwrap();
            assert!(
                cg > pg,
                "{} (gen {cg}) should be below {} (gen {pg})",
                graph.id(child),
                graph.id(parent)
            );
        }
    }
}

#[test]
fn fixture_cousins_connect_through_grandfather() {
    let graph = fixture_graph();
    assert_eq!(
        find_path(&graph, "@I11@", "@I9@"),
        vec!["@I11@", "@I6@", "@I1@", "@I5@", "@I9@"]
    );
}
