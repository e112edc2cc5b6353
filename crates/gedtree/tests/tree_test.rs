use gedtree::{Engine, Error, FamilyTree, RelationshipKind, SpouseStatus, TreeConfig};
use serde_json::json;
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn fixture_tree() -> FamilyTree {
    let path = workspace_root().join("fixtures").join("family.ged");
    Engine::new()
        .load_file(&path)
        .unwrap_or_else(|e| panic!("failed to load {}: {e}", path.display()))
}

#[test]
fn load_file_parses_the_fixture() {
    let tree = fixture_tree();
    assert_eq!(tree.len(), 11);
    assert_eq!(tree.gedcom().families.len(), 4);
    assert_eq!(tree.gedcom().objects.len(), 2);
    assert_eq!(tree.generations().max_generation(), Some(3));
}

#[test]
fn load_file_reports_missing_files() {
    let path = workspace_root().join("fixtures").join("missing.ged");
    let err = Engine::new().load_file(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "unexpected error: {err:?}");
    assert!(err.to_string().contains("missing.ged"));
}

#[test]
fn couple_with_child_spans_two_generations() {
    let text = "\
0 @I1@ INDI
1 NAME John /Smith/
1 FAMS @F1@
0 @I2@ INDI
1 NAME Jane /Doe/
1 FAMS @F1@
0 @I3@ INDI
1 NAME Bob /Smith/
1 FAMC @F1@
0 @F1@ FAM
1 HUSB @I1@
1 WIFE @I2@
1 CHIL @I3@
";
    let tree = Engine::new().parse(text);
    assert_eq!(tree.generation("@I1@"), Some(1));
    assert_eq!(tree.generation("@I2@"), Some(1));
    assert_eq!(tree.generation("@I3@"), Some(2));
    assert_eq!(tree.generation("i3"), Some(2));
}

#[test]
fn empty_input_yields_an_empty_tree() {
    let tree = Engine::new().parse("");
    assert!(tree.is_empty());
    assert!(tree.generations().is_empty());
    assert!(tree.summaries().is_empty());
    assert!(tree.find_path("@I1@", "@I2@").is_empty());
}

#[test]
fn display_ids_resolve_to_gedcom_ids() {
    let tree = fixture_tree();
    assert_eq!(tree.resolve_id("i4"), Some("@I4@"));
    assert_eq!(tree.resolve_id("@I4@"), Some("@I4@"));
    assert_eq!(tree.resolve_id("f1"), None);
    assert_eq!(tree.resolve_id("i99"), None);
    assert_eq!(tree.display_id("@I10@"), "i10");
    assert_eq!(tree.id_map().display_id_to_gedcom_id("o2"), Some("@O2@"));
}

#[test]
fn summary_collects_tile_fields() {
    let tree = fixture_tree();
    let summary = tree.summary("i1").unwrap();

    assert_eq!(
        serde_json::to_value(&summary).unwrap(),
        json!({
            "id": "@I1@",
            "displayId": "i1",
            "displayName": "Martin",
            "fullName": "Martin Porter",
            "years": "1900-1980",
            "sex": "M",
            "generation": 1,
            "spouses": [
                {
                    "spouseId": "@I2@",
                    "familyId": "@F1@",
                    "marriageDate": "1925",
                    "divorceDate": null,
                    "status": "widowed"
                },
                {
                    "spouseId": "@I3@",
                    "familyId": "@F2@",
                    "marriageDate": "1952",
                    "divorceDate": null,
                    "status": "married"
                }
            ],
            "parents": [],
            "children": ["@I4@", "@I5@", "@I6@"]
        })
    );
}

#[test]
fn summaries_follow_generation_order() {
    let tree = fixture_tree();
    let ids: Vec<String> = tree.summaries().into_iter().map(|s| s.id).collect();
    assert_eq!(
        ids,
        [
            "@I2@", "@I1@", "@I3@", "@I4@", "@I5@", "@I7@", "@I6@", "@I8@", "@I9@", "@I10@",
            "@I11@"
        ]
    );
}

#[test]
fn central_view_rows_put_parents_above_and_children_below() {
    let tree = fixture_tree();
    let view = tree.central_view("i5").unwrap();

    let [above, middle, below] = view.rows();
    assert_eq!(above, ["@I1@", "@I2@"]);
    assert_eq!(middle, ["@I5@", "@I7@"]);
    assert_eq!(below, ["@I9@", "@I10@"]);

    assert!(view.contains("@I7@"));
    assert!(!view.contains("@I4@"));
    assert_eq!(view.visible_ids().len(), 6);
    assert!(tree.central_view("i99").is_none());
}

#[test]
fn central_view_of_a_founder_has_an_empty_top_row() {
    let tree = fixture_tree();
    let view = tree.central_view("@I1@").unwrap();
    let [above, middle, below] = view.rows();
    assert!(above.is_empty());
    assert_eq!(middle, ["@I1@", "@I2@", "@I3@"]);
    assert_eq!(below, ["@I4@", "@I5@", "@I6@"]);
}

#[test]
fn search_matches_names_in_generation_order() {
    let tree = fixture_tree();
    let ids: Vec<String> = tree.search("PORTER").into_iter().map(|h| h.id).collect();
    assert_eq!(
        ids,
        ["@I1@", "@I4@", "@I5@", "@I6@", "@I9@", "@I10@", "@I11@"]
    );

    let hits = tree.search_with_limit("porter", 3);
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[2].display_id, "i5");
}

#[test]
fn search_matches_years_and_ignores_blank_queries() {
    let tree = fixture_tree();
    let hits = tree.search("1955");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].full_name, "Rita Lund");
    assert_eq!(hits[0].years, "1955-");

    assert!(tree.search("").is_empty());
    assert!(tree.search("   ").is_empty());
    assert!(tree.search("nobody").is_empty());
}

#[test]
fn connection_path_builds_breadcrumbs() {
    let tree = fixture_tree();
    let steps = tree.connection_path("i11", "i9");

    let ids: Vec<&str> = steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["@I11@", "@I6@", "@I1@", "@I5@", "@I9@"]);

    let initials: Vec<&str> = steps.iter().map(|s| s.initials.as_str()).collect();
    assert_eq!(initials, ["CP", "PP", "MP", "TP", "AP"]);

    let next: Vec<Option<RelationshipKind>> = steps.iter().map(|s| s.next).collect();
    assert_eq!(
        next,
        [
            Some(RelationshipKind::Parent),
            Some(RelationshipKind::Parent),
            Some(RelationshipKind::Child),
            Some(RelationshipKind::Child),
            None
        ]
    );
}

#[test]
fn relationship_type_reports_spouse_status() {
    let tree = fixture_tree();
    assert_eq!(
        tree.relationship_type("@I6@", "@I8@"),
        RelationshipKind::Spouse(SpouseStatus::Divorced)
    );
    assert_eq!(
        tree.relationship_type("@I2@", "@I1@"),
        RelationshipKind::Spouse(SpouseStatus::Widowed)
    );
    assert_eq!(
        tree.relationship_type("@I1@", "@I2@"),
        RelationshipKind::Spouse(SpouseStatus::Widowed)
    );
    assert_eq!(tree.relationship_type("i4", "nobody"), RelationshipKind::Unknown);
}

#[test]
fn attachments_are_reachable_through_the_tree() {
    let tree = fixture_tree();
    let gedcom = tree.gedcom();

    assert_eq!(
        serde_json::to_value(gedcom.photos("@I4@")).unwrap(),
        json!([{
            "src": "photos/sarah-1950.jpg",
            "caption": "Sarah at the schoolhouse",
            "people": ["@I4@"]
        }])
    );
    assert_eq!(
        serde_json::to_value(gedcom.documents("@I4@")).unwrap(),
        json!([{
            "src": "docs/teaching-certificate.pdf",
            "caption": "Teaching certificate",
            "type": "certificate"
        }])
    );
    assert_eq!(
        serde_json::to_value(gedcom.contacts("@I4@")).unwrap(),
        json!({
            "physical": [{ "type": "Home", "address": "12 Mill Lane, Ashford" }],
            "virtual": [
                { "type": "Email", "value": "sarah@example.org" },
                { "type": "Phone", "value": "555-0142" },
                { "type": "Blog", "value": "https://example.org/sarah" }
            ]
        })
    );
    assert_eq!(
        gedcom.bio("@I4@"),
        "Taught school in Ashford. Kept the family bible."
    );
}

#[test]
fn parentless_policy_comes_from_config() {
    let config =
        TreeConfig::from_json_str(r#"{ "generations": { "rootPolicy": "parentless" } }"#).unwrap();
    let engine = Engine::new().with_config(config).unwrap();
    let tree = engine.parse(
        "\
0 @I1@ INDI
1 FAMS @F1@
0 @I2@ INDI
1 FAMS @F1@
0 @F1@ FAM
1 HUSB @I1@
1 WIFE @I2@
",
    );
    assert_eq!(tree.generation("@I1@"), Some(1));
    assert_eq!(tree.generation("@I2@"), Some(1));
}

#[test]
fn invalid_config_is_rejected() {
    let config =
        TreeConfig::from_json_str(r#"{ "generations": { "rootPolicy": "oldest" } }"#).unwrap();
    let err = Engine::new().with_config(config).unwrap_err();
    assert!(matches!(err, Error::Core(_)), "unexpected error: {err:?}");
}

#[test]
fn engine_config_is_laid_over_defaults() {
    assert_eq!(Engine::new().config(), &TreeConfig::defaults());

    let config =
        TreeConfig::from_json_str(r#"{ "generations": { "rootPolicy": "parentless" } }"#).unwrap();
    let engine = Engine::new().with_config(config).unwrap();
    assert_eq!(engine.config().get_str("generations.rootPolicy"), Some("parentless"));
    assert_eq!(engine.config().get_f64("routing.margin"), Some(20.0));
    assert_eq!(engine.config().get_f64("routing.jointRadius"), Some(4.0));
}
