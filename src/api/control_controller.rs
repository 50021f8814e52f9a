use crate::core::{OptionValue, get_by_path};
use crate::error::StudioResult;
use crate::registry::{ControlDescriptor, coerce_input};
use crate::render::OptionRenderer;

use super::ChartStudio;

impl<R: OptionRenderer> ChartStudio<R> {
    /// Coerces raw widget input for `control_id` and records it at the
    /// control's path.
    pub fn record_control_input(
        &mut self,
        control_id: &str,
        raw: &str,
    ) -> StudioResult<&OptionValue> {
        let control = self.registry.require_control(control_id)?;
        let value = coerce_input(control, raw)?;
        let path = control.path.clone();
        self.record_edit(path, value)
    }

    /// Records an already-typed value at the path of `control_id`.
    pub fn record_control_value(
        &mut self,
        control_id: &str,
        value: impl Into<OptionValue>,
    ) -> StudioResult<&OptionValue> {
        let path = self.registry.require_control(control_id)?.path.clone();
        self.record_edit(path, value)
    }

    /// Value a form field should show: the current option at the control's
    /// path, else the control default.
    pub fn control_value(&self, control_id: &str) -> StudioResult<Option<&OptionValue>> {
        let control = self.registry.require_control(control_id)?;
        Ok(get_by_path(&self.current, &control.path).or(control.default_value.as_ref()))
    }

    /// Controls of `group_id` whose visibility conditions hold for the current
    /// option. Unknown groups yield nothing.
    #[must_use]
    pub fn visible_controls(&self, group_id: &str) -> Vec<&ControlDescriptor> {
        self.registry
            .group(group_id)
            .map(|group| {
                group
                    .controls
                    .iter()
                    .filter(|control| self.registry.is_visible(control, &self.current))
                    .collect()
            })
            .unwrap_or_default()
    }
}
