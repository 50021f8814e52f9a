use std::collections::HashSet;

use chart_studio::StudioError;
use chart_studio::core::{OptionPath, OptionValue};
use chart_studio::registry::{
    CatalogConfig, ControlDescriptor, ControlGroup, ControlRegistry, ControlType,
    build_default_registry,
};
use serde_json::json;

fn default_registry() -> ControlRegistry {
    build_default_registry(&CatalogConfig::default()).expect("default catalog is valid")
}

#[test]
fn default_catalog_has_core_and_generated_groups() {
    let registry = default_registry();
    let ids: Vec<&str> = registry.groups().iter().map(|group| group.id.as_str()).collect();

    assert_eq!(&ids[..3], &["title", "legend", "tooltip"]);
    assert!(ids.contains(&"series-0"));
    assert!(ids.contains(&"series-59"));
    assert!(!ids.contains(&"series-60"));
    assert!(ids.contains(&"xAxis-style"));
    assert!(ids.contains(&"yAxis-style"));
    assert_eq!(ids[ids.len() - 2], "grid-spacing");
    assert_eq!(ids[ids.len() - 1], "palette");
}

#[test]
fn default_catalog_control_count_matches_sections() {
    let registry = default_registry();
    // core 52, 60 series x 15, 2 axes x 7, grid spacing 6, palette 120
    assert_eq!(registry.control_count(), 52 + 900 + 14 + 6 + 120);
    assert_eq!(registry.controls().count(), registry.control_count());
}

#[test]
fn every_control_id_is_unique_and_path_normalizes() {
    let registry = default_registry();
    let mut seen = HashSet::new();
    for control in registry.controls() {
        assert!(seen.insert(control.id.as_str()), "duplicate id {}", control.id);
        assert!(!OptionPath::parse(&control.path).is_identity());
    }
}

#[test]
fn catalog_sizes_follow_config() {
    let config = CatalogConfig::default()
        .with_series_group_count(2)
        .with_palette_stop_count(3)
        .with_axes(["xAxis"]);
    let registry = build_default_registry(&config).expect("catalog is valid");

    assert!(registry.group("series-1").is_some());
    assert!(registry.group("series-2").is_none());
    assert!(registry.group("yAxis-style").is_none());
    assert_eq!(registry.group("palette").map(|group| group.controls.len()), Some(3));
}

#[test]
fn controls_for_path_returns_every_binding() {
    let registry = default_registry();
    let ids: Vec<&str> = registry
        .controls_for_path("series.0.name")
        .into_iter()
        .map(|control| control.id.as_str())
        .collect();

    assert_eq!(ids, vec!["series[0].name", "series-0.name"]);
}

#[test]
fn control_lookup_by_id() {
    let registry = default_registry();
    let control = registry.control("series-3.itemStyle.opacity").expect("generated control");

    assert_eq!(control.control_type, ControlType::Slider);
    assert_eq!(control.path, "series[3].itemStyle.opacity");
    let constraints = control.constraints.expect("slider has range");
    assert_eq!((constraints.min, constraints.max), (Some(0.0), Some(1.0)));

    assert!(registry.control("series-999.name").is_none());
    assert!(matches!(
        registry.require_control("nope"),
        Err(StudioError::UnknownControl(id)) if id == "nope"
    ));
}

#[test]
fn duplicate_control_ids_are_rejected() {
    let groups = vec![
        ControlGroup::new("a", "A").with_control(ControlDescriptor::text("same", "One", "title.text")),
        ControlGroup::new("b", "B").with_control(ControlDescriptor::text("same", "Two", "title.subtext")),
    ];
    let err = ControlRegistry::new(groups).expect_err("duplicate id must fail");
    assert!(matches!(err, StudioError::DuplicateControlId(id) if id == "same"));
}

#[test]
fn duplicate_group_ids_are_rejected() {
    let groups = vec![ControlGroup::new("a", "A"), ControlGroup::new("a", "Again")];
    let err = ControlRegistry::new(groups).expect_err("duplicate group must fail");
    assert!(matches!(err, StudioError::DuplicateGroupId(id) if id == "a"));
}

#[test]
fn identity_paths_are_rejected() {
    let groups = vec![ControlGroup::new("a", "A").with_control(ControlDescriptor::text("root", "Root", "..."))];
    let err = ControlRegistry::new(groups).expect_err("identity path must fail");
    assert!(format!("{err}").contains("no addressable path"));
}

#[test]
fn shared_paths_are_allowed() {
    let groups = vec![ControlGroup::new("animation", "Animation").with_controls([
        ControlDescriptor::toggle("animation", "Enable", "animation"),
        ControlDescriptor::button("animation.reset", "Reset", "animation").with_default(true),
    ])];
    let registry = ControlRegistry::new(groups).expect("shared paths are fine");
    assert_eq!(registry.controls_for_path("animation").len(), 2);
}

#[test]
fn visibility_conditions_follow_the_option() {
    let registry = default_registry();
    let pointer = registry.control("tooltip.axisPointer.type").expect("core control");

    let axis = OptionValue::from(json!({ "tooltip": { "trigger": "axis" } }));
    let item = OptionValue::from(json!({ "tooltip": { "trigger": "item" } }));
    let unset = OptionValue::empty_mapping();

    assert!(registry.is_visible(pointer, &axis));
    assert!(!registry.is_visible(pointer, &item));
    assert!(!registry.is_visible(pointer, &unset));

    let title = registry.control("title.text").expect("core control");
    assert!(registry.is_visible(title, &unset));
}

#[test]
fn descriptor_serializes_type_field() {
    let control = ControlDescriptor::number("legend.itemWidth", "Item Width", "legend.itemWidth")
        .with_range(4.0, 40.0, 1.0);
    let json = serde_json::to_value(&control).expect("descriptor should serialize");

    assert_eq!(json["type"], "number");
    assert_eq!(json["constraints"]["max"], 40.0);
    assert!(json.get("options").is_none());

    let decoded: ControlDescriptor = serde_json::from_value(json).expect("descriptor should deserialize");
    assert_eq!(decoded, control);
}

#[test]
fn conditions_on_unset_toggles_read_the_toggle_default() {
    let registry = default_registry();
    let empty = OptionValue::empty_mapping();

    for id in ["legend.left", "legend.top", "animationDuration", "animationEasing"] {
        let control = registry.control(id).expect("core control");
        assert!(registry.is_visible(control, &empty), "{id} should be visible by default");
    }

    let hidden = OptionValue::from(json!({ "legend": { "show": false }, "animation": false }));
    for id in ["legend.left", "legend.top", "animationDuration", "animationEasing"] {
        let control = registry.control(id).expect("core control");
        assert!(!registry.is_visible(control, &hidden), "{id} should follow the option");
    }
}

#[test]
fn default_for_path_skips_buttons_and_unbound_paths() {
    let groups = vec![ControlGroup::new("animation", "Animation").with_controls([
        ControlDescriptor::button("animation.reset", "Reset", "animation").with_default(true),
        ControlDescriptor::toggle("animation", "Enable", "animation").with_default(false),
    ])];
    let registry = ControlRegistry::new(groups).expect("valid registry");

    assert_eq!(registry.default_for_path("animation"), Some(&OptionValue::from(false)));
    assert_eq!(registry.default_for_path("legend.show"), None);
}
