use chart_studio::StudioError;
use chart_studio::api::{
    EditOverlapPolicy, EditSet, PathMode, StudioConfig, apply_edits, apply_edits_with,
};
use chart_studio::core::OptionValue;
use serde_json::json;

fn tree(value: serde_json::Value) -> OptionValue {
    OptionValue::from(value)
}

#[test]
fn single_edit_replaces_leaf() {
    let base = tree(json!({ "title": { "text": "A" } }));
    let edits = EditSet::new().with_edit("title.text", "B");

    assert_eq!(apply_edits(&base, &edits), tree(json!({ "title": { "text": "B" } })));
}

#[test]
fn nested_creation_builds_sequence_and_mappings() {
    let edits = EditSet::new().with_edit("series[0].itemStyle.color", "#fff");

    assert_eq!(
        apply_edits(&OptionValue::empty_mapping(), &edits),
        tree(json!({ "series": [{ "itemStyle": { "color": "#fff" } }] }))
    );
}

#[test]
fn last_recorded_value_wins_per_path() {
    let mut edits = EditSet::new();
    edits.record("legend.show", true);
    edits.record("title.text", "first");
    edits.record("legend.show", false);

    let output = apply_edits(&OptionValue::empty_mapping(), &edits);

    assert_eq!(edits.len(), 2);
    assert_eq!(
        output,
        tree(json!({ "legend": { "show": false }, "title": { "text": "first" } }))
    );
}

#[test]
fn base_is_never_mutated() {
    let base = tree(json!({
        "title": { "text": "A" },
        "series": [{ "type": "bar", "data": [1, 2] }]
    }));
    let snapshot = base.clone();
    let edits: EditSet = [
        ("title.text", OptionValue::from("B")),
        ("series[0].data[1]", OptionValue::from(7_i64)),
        ("series[1].type", OptionValue::from("line")),
    ]
    .into_iter()
    .collect();

    let output = apply_edits(&base, &edits);

    assert_eq!(base, snapshot);
    assert_eq!(
        output,
        tree(json!({
            "title": { "text": "B" },
            "series": [{ "type": "bar", "data": [1, 7] }, { "type": "line" }]
        }))
    );
}

#[test]
fn empty_edit_set_yields_structural_clone() {
    let base = tree(json!({ "xAxis": { "type": "category", "data": ["a", "b"] } }));
    assert_eq!(apply_edits(&base, &EditSet::new()), base);
}

#[test]
fn later_ancestor_edit_overwrites_earlier_descendant() {
    let edits = EditSet::new()
        .with_edit("xAxis.type", "value")
        .with_edit("xAxis", OptionValue::from(json!({ "show": false })));

    assert_eq!(
        apply_edits(&OptionValue::empty_mapping(), &edits),
        tree(json!({ "xAxis": { "show": false } }))
    );
}

#[test]
fn earlier_ancestor_edit_is_refined_by_later_descendant() {
    let edits = EditSet::new()
        .with_edit("xAxis", OptionValue::from(json!({ "show": false })))
        .with_edit("xAxis.type", "value");

    assert_eq!(
        apply_edits(&OptionValue::empty_mapping(), &edits),
        tree(json!({ "xAxis": { "show": false, "type": "value" } }))
    );
}

#[test]
fn reject_policy_refuses_overlapping_edits() {
    let edits = EditSet::new()
        .with_edit("xAxis.type", "value")
        .with_edit("xAxis", OptionValue::from(json!({})));
    let config = StudioConfig::new().with_overlap_policy(EditOverlapPolicy::Reject);

    let err = apply_edits_with(&OptionValue::empty_mapping(), &edits, &config)
        .expect_err("overlap must be rejected");
    match err {
        StudioError::OverlappingEdits {
            ancestor,
            descendant,
        } => {
            assert_eq!(ancestor, "xAxis");
            assert_eq!(descendant, "xAxis.type");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reject_policy_compares_normalized_paths() {
    let edits = EditSet::new()
        .with_edit("series.0", OptionValue::from(json!({})))
        .with_edit("series[0].name", "a");
    let config = StudioConfig::new().with_overlap_policy(EditOverlapPolicy::Reject);

    assert!(apply_edits_with(&OptionValue::empty_mapping(), &edits, &config).is_err());
}

#[test]
fn strict_mode_fails_instead_of_dropping() {
    let base = tree(json!({ "series": [] }));
    let edits = EditSet::new().with_edit("series.name", "x");

    let permissive = apply_edits_with(&base, &edits, &StudioConfig::new())
        .expect("permissive apply never fails");
    assert_eq!(permissive, base);

    let strict = StudioConfig::new().with_path_mode(PathMode::Strict);
    let err = apply_edits_with(&base, &edits, &strict).expect_err("strict apply must fail");
    assert!(matches!(err, StudioError::StructuralMismatch { .. }));
}

#[test]
fn re_recorded_ancestor_replaces_earlier_descendant() {
    let mut edits = EditSet::new();
    edits.record("xAxis", OptionValue::from(json!({})));
    edits.record("xAxis.type", "value");
    edits.record("xAxis", OptionValue::from(json!({ "show": false })));

    let order: Vec<&str> = edits.iter().map(|(path, _)| path).collect();
    assert_eq!(order, vec!["xAxis.type", "xAxis"]);
    assert_eq!(
        apply_edits(&OptionValue::empty_mapping(), &edits),
        tree(json!({ "xAxis": { "show": false } }))
    );
}

#[test]
fn re_recorded_descendant_refines_the_ancestor_again() {
    let mut edits = EditSet::new();
    edits.record("xAxis.type", "category");
    edits.record("xAxis", OptionValue::from(json!({ "show": false })));
    edits.record("xAxis.type", "value");

    assert_eq!(
        apply_edits(&OptionValue::empty_mapping(), &edits),
        tree(json!({ "xAxis": { "show": false, "type": "value" } }))
    );
}
