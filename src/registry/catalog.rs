//! Default studio catalog.
//!
//! A few hand-written core groups cover the chart-wide options; the
//! repetitive per-series, per-axis and palette controls are generated.

use serde::{Deserialize, Serialize};

use crate::error::{StudioError, StudioResult};

use super::control::{ControlDescriptor, ControlGroup, ControlType, select_options};
use super::ControlRegistry;

const SERIES_TYPES: [&str; 8] = [
    "line", "bar", "pie", "scatter", "radar", "heatmap", "funnel", "gauge",
];
const SYMBOLS: [&str; 8] = [
    "none", "circle", "rect", "roundRect", "triangle", "diamond", "pin", "arrow",
];
const LINE_TYPES: [&str; 3] = ["solid", "dashed", "dotted"];
const LABEL_POSITIONS: [&str; 6] = ["top", "left", "right", "bottom", "inside", "center"];
const AXIS_TYPES: [&str; 4] = ["value", "category", "time", "log"];
const EASINGS: [&str; 6] = [
    "linear",
    "quadraticIn",
    "quadraticOut",
    "cubicInOut",
    "elasticOut",
    "bounceOut",
];

/// Sizes of the generated catalog sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_series_group_count")]
    pub series_group_count: usize,
    #[serde(default = "default_palette_stop_count")]
    pub palette_stop_count: usize,
    #[serde(default = "default_axes")]
    pub axes: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            series_group_count: default_series_group_count(),
            palette_stop_count: default_palette_stop_count(),
            axes: default_axes(),
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn with_series_group_count(mut self, count: usize) -> Self {
        self.series_group_count = count;
        self
    }

    #[must_use]
    pub fn with_palette_stop_count(mut self, count: usize) -> Self {
        self.palette_stop_count = count;
        self
    }

    #[must_use]
    pub fn with_axes<I, S>(mut self, axes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.axes = axes.into_iter().map(Into::into).collect();
        self
    }

    pub fn to_json_pretty(&self) -> StudioResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            StudioError::InvalidData(format!("failed to serialize catalog config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> StudioResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| StudioError::InvalidData(format!("failed to parse catalog config: {e}")))
    }
}

fn default_series_group_count() -> usize {
    60
}

fn default_palette_stop_count() -> usize {
    120
}

fn default_axes() -> Vec<String> {
    vec!["xAxis".to_owned(), "yAxis".to_owned()]
}

/// Builds the studio registry: core groups, then generated sections.
pub fn build_default_registry(config: &CatalogConfig) -> StudioResult<ControlRegistry> {
    let mut groups = core_groups();
    groups.extend(series_groups(config.series_group_count));
    groups.extend(config.axes.iter().map(|axis| axis_style_group(axis)));
    groups.push(grid_spacing_group());
    groups.push(palette_group(config.palette_stop_count));
    ControlRegistry::new(groups)
}

fn core_groups() -> Vec<ControlGroup> {
    vec![
        ControlGroup::new("title", "Title").with_icon("Type").with_controls([
            ControlDescriptor::text("title.text", "Title Text", "title.text")
                .with_placeholder("Chart title"),
            ControlDescriptor::text("title.subtext", "Subtitle", "title.subtext"),
            ControlDescriptor::select("title.left", "Title Align", "title.left")
                .with_options(select_options(["auto", "left", "center", "right"])),
            ControlDescriptor::select("title.top", "Title Vertical", "title.top")
                .with_options(select_options(["auto", "top", "middle", "bottom"])),
            ControlDescriptor::color("title.textStyle.color", "Title Color", "title.textStyle.color"),
            ControlDescriptor::number(
                "title.textStyle.fontSize",
                "Title Font Size",
                "title.textStyle.fontSize",
            )
            .with_range(8.0, 48.0, 1.0),
        ]),
        ControlGroup::new("legend", "Legend").with_icon("List").with_controls([
            ControlDescriptor::toggle("legend.show", "Show Legend", "legend.show").with_default(true),
            ControlDescriptor::select("legend.orient", "Orientation", "legend.orient")
                .with_options(select_options(["horizontal", "vertical"])),
            ControlDescriptor::select("legend.left", "Align", "legend.left")
                .with_options(select_options(["left", "center", "right"]))
                .visible_when("legend.show", true),
            ControlDescriptor::select("legend.top", "Vertical", "legend.top")
                .with_options(select_options(["top", "middle", "bottom"]))
                .visible_when("legend.show", true),
            ControlDescriptor::color("legend.textStyle.color", "Text Color", "legend.textStyle.color"),
            ControlDescriptor::number("legend.itemWidth", "Item Width", "legend.itemWidth")
                .with_range(4.0, 40.0, 1.0),
            ControlDescriptor::number("legend.itemHeight", "Item Height", "legend.itemHeight")
                .with_range(4.0, 40.0, 1.0),
        ]),
        ControlGroup::new("tooltip", "Tooltip")
            .with_icon("SquareDashed")
            .with_controls([
                ControlDescriptor::toggle("tooltip.show", "Show Tooltip", "tooltip.show")
                    .with_default(true),
                ControlDescriptor::select("tooltip.trigger", "Trigger", "tooltip.trigger")
                    .with_options(select_options(["item", "axis", "none"])),
                ControlDescriptor::select(
                    "tooltip.axisPointer.type",
                    "Axis Pointer",
                    "tooltip.axisPointer.type",
                )
                .with_options(select_options(["line", "shadow", "cross", "none"]))
                .visible_when("tooltip.trigger", "axis")
                .depending_on("tooltip.trigger"),
                ControlDescriptor::color(
                    "tooltip.backgroundColor",
                    "Background",
                    "tooltip.backgroundColor",
                ),
                ControlDescriptor::number("tooltip.borderWidth", "Border Width", "tooltip.borderWidth")
                    .with_range(0.0, 10.0, 1.0),
            ]),
        ControlGroup::new("grid", "Grid").with_icon("Grid").with_controls([
            ControlDescriptor::toggle("grid.show", "Show Grid", "grid.show"),
            ControlDescriptor::text("grid.left", "Left", "grid.left"),
            ControlDescriptor::text("grid.right", "Right", "grid.right"),
            ControlDescriptor::text("grid.top", "Top", "grid.top"),
            ControlDescriptor::text("grid.bottom", "Bottom", "grid.bottom"),
            ControlDescriptor::toggle("grid.containLabel", "Contain Label", "grid.containLabel"),
        ]),
        axis_group("xAxis", "X Axis"),
        axis_group("yAxis", "Y Axis"),
        ControlGroup::new("seriesCommon", "Series (Common)")
            .with_icon("Layers")
            .with_controls([
                ControlDescriptor::text("series[0].name", "Series 1 Name", "series[0].name"),
                ControlDescriptor::color(
                    "series[0].itemStyle.color",
                    "Series 1 Color",
                    "series[0].itemStyle.color",
                ),
                ControlDescriptor::select(
                    "series[0].emphasis.focus",
                    "Focus",
                    "series[0].emphasis.focus",
                )
                .with_options(select_options(["none", "series", "self"])),
                ControlDescriptor::number("series[0].z", "Z", "series[0].z")
                    .with_range(-10.0, 10.0, 1.0),
                ControlDescriptor::text("series[1].name", "Series 2 Name", "series[1].name"),
                ControlDescriptor::color(
                    "series[1].itemStyle.color",
                    "Series 2 Color",
                    "series[1].itemStyle.color",
                ),
            ]),
        ControlGroup::new("visualMap", "Visual Map")
            .with_icon("Palette")
            .with_controls([
                ControlDescriptor::toggle("visualMap.show", "Show", "visualMap.show"),
                ControlDescriptor::select("visualMap.type", "Type", "visualMap.type")
                    .with_options(select_options(["continuous", "piecewise"])),
                ControlDescriptor::select("visualMap.orient", "Orient", "visualMap.orient")
                    .with_options(select_options(["horizontal", "vertical"])),
                ControlDescriptor::select("visualMap.left", "Left", "visualMap.left")
                    .with_options(select_options(["left", "center", "right"])),
                ControlDescriptor::select("visualMap.top", "Top", "visualMap.top")
                    .with_options(select_options(["top", "middle", "bottom"])),
            ]),
        ControlGroup::new("dataset", "Dataset")
            .with_icon("Database")
            .with_control(ControlDescriptor::json(
                "dataset.source",
                "Dataset Source (JSON)",
                "dataset.source",
            )),
        ControlGroup::new("animation", "Animation")
            .with_icon("Zap")
            .with_controls([
                ControlDescriptor::toggle("animation", "Enable", "animation").with_default(true),
                ControlDescriptor::slider("animationDuration", "Duration", "animationDuration")
                    .with_range(0.0, 5000.0, 50.0)
                    .visible_when("animation", true),
                ControlDescriptor::select("animationEasing", "Easing", "animationEasing")
                    .with_options(select_options(EASINGS))
                    .visible_when("animation", true),
                ControlDescriptor::button("animation.reset", "Reset Animation", "animation")
                    .with_default(true)
                    .with_description("Re-enables animation with library defaults"),
            ]),
    ]
}

fn axis_group(axis: &str, label: &str) -> ControlGroup {
    let control = |suffix: &str, label: &str, control_type: ControlType| {
        let path = format!("{axis}.{suffix}");
        ControlDescriptor::new(path.clone(), label, control_type, path)
    };
    ControlGroup::new(axis, label).with_icon("Axis3D").with_controls([
        control("show", "Show", ControlType::Toggle).with_default(true),
        control("type", "Type", ControlType::Select).with_options(select_options(AXIS_TYPES)),
        control("name", "Name", ControlType::Text),
        control("axisLabel.rotate", "Label Rotate", ControlType::Number)
            .with_range(-90.0, 90.0, 1.0),
        control("axisLine.lineStyle.color", "Line Color", ControlType::Color),
        control("splitLine.show", "Show Split Lines", ControlType::Toggle),
    ])
}

fn series_groups(count: usize) -> impl Iterator<Item = ControlGroup> {
    (0..count).map(series_group)
}

fn series_group(index: usize) -> ControlGroup {
    let group_id = format!("series-{index}");
    let control = |suffix: &str, label: &str, control_type: ControlType| {
        ControlDescriptor::new(
            format!("{group_id}.{suffix}"),
            label,
            control_type,
            format!("series[{index}].{suffix}"),
        )
    };
    let controls = vec![
        control("type", "Type", ControlType::Select).with_options(select_options(SERIES_TYPES)),
        control("name", "Name", ControlType::Text),
        control("itemStyle.color", "Color", ControlType::Color),
        control("itemStyle.opacity", "Opacity", ControlType::Slider).with_range(0.0, 1.0, 0.05),
        control("symbol", "Symbol", ControlType::Select).with_options(select_options(SYMBOLS)),
        control("symbolSize", "Symbol Size", ControlType::Slider).with_range(0.0, 40.0, 1.0),
        control("lineStyle.width", "Line Width", ControlType::Slider).with_range(0.0, 12.0, 1.0),
        control("lineStyle.type", "Line Type", ControlType::Select)
            .with_options(select_options(LINE_TYPES)),
        control("areaStyle.opacity", "Area Opacity", ControlType::Slider)
            .with_range(0.0, 1.0, 0.05),
        control("smooth", "Smooth", ControlType::Toggle),
        control("stack", "Stack", ControlType::Text),
        control("barWidth", "Bar Width", ControlType::Text),
        control("label.show", "Show Label", ControlType::Toggle),
        control("label.formatter", "Label Format", ControlType::Text).with_placeholder("{b}: {c}"),
        control("label.position", "Label Position", ControlType::Select)
            .with_options(select_options(LABEL_POSITIONS)),
    ];
    ControlGroup::new(group_id.clone(), format!("Series {}", index + 1))
        .with_icon("Layers")
        .with_controls(controls)
}

enum AxisStyleKind {
    Color,
    Toggle,
    Number { min: f64, max: f64, step: f64 },
    Select(&'static [&'static str]),
}

const AXIS_STYLE_PROPS: [(&str, AxisStyleKind); 7] = [
    ("axisLabel.color", AxisStyleKind::Color),
    (
        "axisLabel.fontSize",
        AxisStyleKind::Number {
            min: 8.0,
            max: 32.0,
            step: 1.0,
        },
    ),
    (
        "axisLabel.rotate",
        AxisStyleKind::Number {
            min: -90.0,
            max: 90.0,
            step: 1.0,
        },
    ),
    ("axisLine.lineStyle.color", AxisStyleKind::Color),
    (
        "axisLine.lineStyle.width",
        AxisStyleKind::Number {
            min: 0.0,
            max: 6.0,
            step: 1.0,
        },
    ),
    ("splitLine.show", AxisStyleKind::Toggle),
    ("splitLine.lineStyle.type", AxisStyleKind::Select(&LINE_TYPES)),
];

fn axis_style_group(axis: &str) -> ControlGroup {
    let group_id = format!("{axis}-style");
    let controls = AXIS_STYLE_PROPS.iter().map(|(suffix, kind)| {
        let id = format!("{group_id}.{suffix}");
        let path = format!("{axis}.{suffix}");
        match kind {
            AxisStyleKind::Color => ControlDescriptor::color(id, *suffix, path),
            AxisStyleKind::Toggle => ControlDescriptor::toggle(id, *suffix, path),
            AxisStyleKind::Number { min, max, step } => {
                ControlDescriptor::number(id, *suffix, path).with_range(*min, *max, *step)
            }
            AxisStyleKind::Select(values) => ControlDescriptor::select(id, *suffix, path)
                .with_options(select_options(values.iter().copied())),
        }
    });
    ControlGroup::new(group_id.clone(), format!("{} Style", axis.to_uppercase()))
        .with_icon("Axis3D")
        .with_controls(controls)
}

fn grid_spacing_group() -> ControlGroup {
    let controls = ["left", "right", "top", "bottom", "width", "height"]
        .into_iter()
        .map(|side| {
            ControlDescriptor::text(
                format!("grid-spacing.{side}"),
                capitalize(side),
                format!("grid.{side}"),
            )
        });
    ControlGroup::new("grid-spacing", "Grid Spacing")
        .with_icon("Grid")
        .with_controls(controls)
}

fn palette_group(count: usize) -> ControlGroup {
    let controls = (0..count).map(|index| {
        ControlDescriptor::color(
            format!("color[{index}]"),
            format!("Color {}", index + 1),
            format!("color[{index}]"),
        )
    });
    ControlGroup::new("palette", "Palette")
        .with_icon("Palette")
        .with_controls(controls)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
