use serde::{Deserialize, Serialize};

use crate::core::{OptionPath, OptionValue};

/// Widget kind a control is rendered with; also decides input coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlType {
    Toggle,
    Number,
    Text,
    Select,
    Color,
    Slider,
    Json,
    Button,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlOption {
    pub label: String,
    pub value: OptionValue,
}

impl ControlOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Numeric input bounds; any side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlConstraints {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub step: Option<f64>,
}

impl ControlConstraints {
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        let value = self.min.map_or(value, |min| value.max(min));
        self.max.map_or(value, |max| value.min(max))
    }
}

/// Shows a control only while the option at `path` equals `equals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityCondition {
    pub path: String,
    pub equals: OptionValue,
}

/// Immutable description of one form control bound to an option path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlDescriptor {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub control_type: ControlType,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ControlConstraints>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ControlOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<OptionValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visible_when: Vec<VisibilityCondition>,
}

impl ControlDescriptor {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        control_type: ControlType,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            control_type,
            path: path.into(),
            constraints: None,
            options: Vec::new(),
            placeholder: None,
            default_value: None,
            depends_on: Vec::new(),
            visible_when: Vec::new(),
        }
    }

    #[must_use]
    pub fn toggle(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(id, label, ControlType::Toggle, path)
    }

    #[must_use]
    pub fn number(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(id, label, ControlType::Number, path)
    }

    #[must_use]
    pub fn text(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(id, label, ControlType::Text, path)
    }

    #[must_use]
    pub fn select(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(id, label, ControlType::Select, path)
    }

    #[must_use]
    pub fn color(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(id, label, ControlType::Color, path)
    }

    #[must_use]
    pub fn slider(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(id, label, ControlType::Slider, path)
    }

    #[must_use]
    pub fn json(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(id, label, ControlType::Json, path)
    }

    #[must_use]
    pub fn button(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(id, label, ControlType::Button, path)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_constraints(mut self, constraints: ControlConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    #[must_use]
    pub fn with_range(self, min: f64, max: f64, step: f64) -> Self {
        self.with_constraints(range(min, max, step))
    }

    #[must_use]
    pub fn with_options(mut self, options: Vec<ControlOption>) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<OptionValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn depending_on(mut self, control_id: impl Into<String>) -> Self {
        self.depends_on.push(control_id.into());
        self
    }

    #[must_use]
    pub fn visible_when(mut self, path: impl Into<String>, equals: impl Into<OptionValue>) -> Self {
        self.visible_when.push(VisibilityCondition {
            path: path.into(),
            equals: equals.into(),
        });
        self
    }

    #[must_use]
    pub fn option_path(&self) -> OptionPath {
        OptionPath::parse(&self.path)
    }
}

/// Named, ordered collection of controls rendered as one form section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlGroup {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub controls: Vec<ControlDescriptor>,
}

impl ControlGroup {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            controls: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_control(mut self, control: ControlDescriptor) -> Self {
        self.controls.push(control);
        self
    }

    #[must_use]
    pub fn with_controls(mut self, controls: impl IntoIterator<Item = ControlDescriptor>) -> Self {
        self.controls.extend(controls);
        self
    }
}

#[must_use]
pub fn range(min: f64, max: f64, step: f64) -> ControlConstraints {
    ControlConstraints {
        min: Some(min),
        max: Some(max),
        step: Some(step),
    }
}

/// Builds select options labelled by their own display form.
#[must_use]
pub fn select_options<V, I>(values: I) -> Vec<ControlOption>
where
    V: Into<OptionValue>,
    I: IntoIterator<Item = V>,
{
    values
        .into_iter()
        .map(|value| {
            let value = value.into();
            ControlOption {
                label: value.display_string(),
                value,
            }
        })
        .collect()
}
