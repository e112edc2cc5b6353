use super::graph_of;
use crate::*;
use gedtree_core::SpouseStatus;
use serde_json::json;

// Grandparents G1+G2 have P and A. P+S have C and T. A+U have K. X+Y are unrelated.
const COUSINS: &str = "0 @G1@ INDI
1 FAMS @FG@
0 @G2@ INDI
1 DEAT
2 DATE 1990
1 FAMS @FG@
0 @P@ INDI
1 FAMC @FG@
1 FAMS @FP@
0 @A@ INDI
1 FAMC @FG@
1 FAMS @FA@
0 @S@ INDI
1 FAMS @FP@
0 @U@ INDI
1 FAMS @FA@
0 @C@ INDI
1 FAMC @FP@
0 @T@ INDI
1 FAMC @FP@
0 @K@ INDI
1 FAMC @FA@
0 @X@ INDI
1 FAMS @FX@
0 @Y@ INDI
1 FAMS @FX@
0 @FG@ FAM
1 HUSB @G1@
1 WIFE @G2@
1 CHIL @P@
1 CHIL @A@
0 @FP@ FAM
1 HUSB @P@
1 WIFE @S@
1 CHIL @C@
1 CHIL @T@
1 DIV
2 DATE 2001
0 @FA@ FAM
1 HUSB @U@
1 WIFE @A@
1 CHIL @K@
0 @FX@ FAM
1 HUSB @X@
1 WIFE @Y@
";

#[test]
fn find_path_returns_shortest_route_between_cousins() {
    let graph = graph_of(COUSINS);
    assert_eq!(
        find_path(&graph, "@C@", "@K@"),
        vec!["@C@", "@P@", "@G1@", "@A@", "@K@"]
    );
    assert_eq!(
        find_path(&graph, "@K@", "@C@"),
        vec!["@K@", "@A@", "@G1@", "@P@", "@C@"]
    );
}

#[test]
fn find_path_prefers_parents_before_children_and_spouses() {
    let graph = graph_of(COUSINS);
    // Both P and S lead to the sibling T in two hops; P is the first listed parent.
    assert_eq!(find_path(&graph, "@C@", "@T@"), vec!["@C@", "@P@", "@T@"]);
    // S reaches C directly as a child before going through the spouse P.
    assert_eq!(find_path(&graph, "@S@", "@C@"), vec!["@S@", "@C@"]);
}

#[test]
fn find_path_edge_cases() {
    let graph = graph_of(COUSINS);
    assert_eq!(find_path(&graph, "@C@", "@C@"), vec!["@C@"]);
    assert!(find_path(&graph, "@C@", "@X@").is_empty());
    assert!(find_path(&graph, "@C@", "@NOPE@").is_empty());
    assert!(find_path(&graph, "@NOPE@", "@C@").is_empty());
    assert_eq!(find_path(&graph, "@X@", "@Y@"), vec!["@X@", "@Y@"]);
}

#[test]
fn relationship_type_checks_parent_child_then_spouse() {
    let graph = graph_of(COUSINS);
    assert_eq!(relationship_type(&graph, "@C@", "@P@"), RelationshipKind::Parent);
    assert_eq!(relationship_type(&graph, "@P@", "@C@"), RelationshipKind::Child);
    assert_eq!(
        relationship_type(&graph, "@P@", "@S@"),
        RelationshipKind::Spouse(SpouseStatus::Divorced)
    );
    assert_eq!(
        relationship_type(&graph, "@G1@", "@G2@"),
        RelationshipKind::Spouse(SpouseStatus::Widowed)
    );
    assert_eq!(
        relationship_type(&graph, "@G2@", "@G1@"),
        RelationshipKind::Spouse(SpouseStatus::Married)
    );
    assert_eq!(relationship_type(&graph, "@C@", "@K@"), RelationshipKind::Unknown);
    assert_eq!(RelationshipKind::Spouse(SpouseStatus::Widowed).to_string(), "spouse-widowed");
}

#[test]
fn labelled_path_names_every_hop() {
    let graph = graph_of(COUSINS);
    assert_eq!(
        serde_json::to_value(labelled_path(&graph, "@T@", "@U@")).unwrap(),
        json!([
            { "from": "@T@", "to": "@P@", "relationship": "parent" },
            { "from": "@P@", "to": "@G1@", "relationship": "parent" },
            { "from": "@G1@", "to": "@A@", "relationship": "child" },
            { "from": "@A@", "to": "@U@", "relationship": "spouse-married" }
        ])
    );
    assert!(labelled_path(&graph, "@C@", "@C@").is_empty());
}
