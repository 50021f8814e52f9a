use approx::assert_relative_eq;
use chart_studio::StudioError;
use chart_studio::core::OptionValue;
use chart_studio::registry::{ControlDescriptor, ControlOption, coerce_input, select_options};
use serde_json::json;

#[test]
fn toggle_parses_booleans() {
    let control = ControlDescriptor::toggle("legend.show", "Show Legend", "legend.show");

    assert_eq!(coerce_input(&control, "true").expect("bool"), OptionValue::from(true));
    assert_eq!(coerce_input(&control, "off").expect("bool"), OptionValue::from(false));
    assert!(matches!(
        coerce_input(&control, "maybe"),
        Err(StudioError::InvalidInput { control, .. }) if control == "legend.show"
    ));
}

#[test]
fn number_is_clamped_into_range() {
    let control = ControlDescriptor::number("axis.rotate", "Rotate", "xAxis.axisLabel.rotate")
        .with_range(-90.0, 90.0, 1.0);

    assert_eq!(coerce_input(&control, "45").expect("number"), OptionValue::from(45_i64));
    assert_eq!(coerce_input(&control, "180").expect("number"), OptionValue::from(90_i64));
    assert_eq!(coerce_input(&control, " -120 ").expect("number"), OptionValue::from(-90_i64));
}

#[test]
fn slider_keeps_fractional_steps() {
    let control = ControlDescriptor::slider("opacity", "Opacity", "series[0].itemStyle.opacity")
        .with_range(0.0, 1.0, 0.05);

    let value = coerce_input(&control, "0.35").expect("number");
    assert_relative_eq!(value.as_f64().expect("float"), 0.35);
}

#[test]
fn number_rejects_garbage_and_non_finite() {
    let control = ControlDescriptor::number("z", "Z", "series[0].z");

    assert!(coerce_input(&control, "abc").is_err());
    assert!(coerce_input(&control, "inf").is_err());
    assert!(coerce_input(&control, "NaN").is_err());
}

#[test]
fn unconstrained_number_is_not_clamped() {
    let control = ControlDescriptor::number("z", "Z", "series[0].z");
    assert_eq!(coerce_input(&control, "1000").expect("number"), OptionValue::from(1000_i64));
}

#[test]
fn text_and_color_pass_through() {
    let text = ControlDescriptor::text("title.text", "Title", "title.text");
    let color = ControlDescriptor::color("title.color", "Color", "title.textStyle.color");

    assert_eq!(coerce_input(&text, " spaced ").expect("text"), OptionValue::from(" spaced "));
    assert_eq!(coerce_input(&color, "#5470c6").expect("color"), OptionValue::from("#5470c6"));
}

#[test]
fn select_returns_typed_option_value() {
    let control = ControlDescriptor::select("symbolSize", "Size", "series[0].symbolSize")
        .with_options(vec![
            ControlOption::new("Small", 4_i64),
            ControlOption::new("Large", 12_i64),
        ]);

    assert_eq!(coerce_input(&control, "12").expect("option"), OptionValue::from(12_i64));
    assert!(coerce_input(&control, "Large").is_err());
}

#[test]
fn select_matches_string_options() {
    let control = ControlDescriptor::select("orient", "Orientation", "legend.orient")
        .with_options(select_options(["horizontal", "vertical"]));

    assert_eq!(coerce_input(&control, "vertical").expect("option"), OptionValue::from("vertical"));
    assert!(coerce_input(&control, "diagonal").is_err());
}

#[test]
fn json_input_is_parsed() {
    let control = ControlDescriptor::json("dataset.source", "Source", "dataset.source");

    let value = coerce_input(&control, r#"[["a", 1], ["b", 2]]"#).expect("json");
    assert_eq!(value, OptionValue::from(json!([["a", 1], ["b", 2]])));

    let err = coerce_input(&control, "[1,").expect_err("broken json must fail");
    assert!(format!("{err}").contains("invalid json"));
}

#[test]
fn button_yields_default_value() {
    let reset = ControlDescriptor::button("reset", "Reset", "animation").with_default(true);
    let bare = ControlDescriptor::button("noop", "Noop", "animation");

    assert_eq!(coerce_input(&reset, "").expect("default"), OptionValue::from(true));
    assert!(coerce_input(&bare, "").is_err());
}
