//! Read-only catalog of form controls bound to option paths.
//!
//! A registry is built once (usually through [`catalog::build_default_registry`])
//! and shared by reference; it has no mutation API.

pub mod catalog;
mod control;
mod input;

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::core::{OptionPath, OptionValue, get_by_path};
use crate::error::{StudioError, StudioResult};

pub use catalog::{CatalogConfig, build_default_registry};
pub use control::{
    ControlConstraints, ControlDescriptor, ControlGroup, ControlOption, ControlType,
    VisibilityCondition, range, select_options,
};
pub use input::coerce_input;

#[derive(Debug, Clone, PartialEq)]
pub struct ControlRegistry {
    groups: Vec<ControlGroup>,
    /// control id -> (group position, control position)
    index: HashMap<String, (usize, usize)>,
}

impl ControlRegistry {
    /// Validates and indexes `groups`.
    ///
    /// Group ids and control ids must be unique and every control path must
    /// address something below the root. Paths may repeat across controls.
    pub fn new(groups: Vec<ControlGroup>) -> StudioResult<Self> {
        let mut group_ids = HashSet::with_capacity(groups.len());
        let mut index = HashMap::new();
        for (group_position, group) in groups.iter().enumerate() {
            if !group_ids.insert(group.id.as_str()) {
                return Err(StudioError::DuplicateGroupId(group.id.clone()));
            }
            for (control_position, control) in group.controls.iter().enumerate() {
                if control.option_path().is_identity() {
                    return Err(StudioError::InvalidPath(format!(
                        "control `{}` has no addressable path: `{}`",
                        control.id, control.path
                    )));
                }
                if index
                    .insert(control.id.clone(), (group_position, control_position))
                    .is_some()
                {
                    return Err(StudioError::DuplicateControlId(control.id.clone()));
                }
            }
        }

        debug!(
            groups = groups.len(),
            controls = index.len(),
            "built control registry"
        );
        Ok(Self { groups, index })
    }

    #[must_use]
    pub fn groups(&self) -> &[ControlGroup] {
        &self.groups
    }

    #[must_use]
    pub fn group(&self, group_id: &str) -> Option<&ControlGroup> {
        self.groups.iter().find(|group| group.id == group_id)
    }

    #[must_use]
    pub fn control(&self, control_id: &str) -> Option<&ControlDescriptor> {
        let &(group, control) = self.index.get(control_id)?;
        self.groups.get(group)?.controls.get(control)
    }

    /// Looks a control up, failing with `UnknownControl`.
    pub fn require_control(&self, control_id: &str) -> StudioResult<&ControlDescriptor> {
        self.control(control_id)
            .ok_or_else(|| StudioError::UnknownControl(control_id.to_owned()))
    }

    /// Every control bound to `path`, compared after normalization so
    /// `series[0].name` and `series.0.name` match the same controls.
    #[must_use]
    pub fn controls_for_path(&self, path: &str) -> Vec<&ControlDescriptor> {
        let wanted = OptionPath::parse(path);
        self.controls()
            .filter(|control| control.option_path() == wanted)
            .collect()
    }

    /// All controls in group order.
    pub fn controls(&self) -> impl Iterator<Item = &ControlDescriptor> {
        self.groups.iter().flat_map(|group| group.controls.iter())
    }

    #[must_use]
    pub fn control_count(&self) -> usize {
        self.index.len()
    }

    /// `true` when every visibility condition of `control` holds against `option`.
    ///
    /// A condition path the option leaves unset reads as the default of the
    /// controls bound to it, matching what those controls display.
    #[must_use]
    pub fn is_visible(&self, control: &ControlDescriptor, option: &OptionValue) -> bool {
        control.visible_when.iter().all(|condition| {
            get_by_path(option, &condition.path)
                .or_else(|| self.default_for_path(&condition.path))
                .map_or(condition.equals.is_nullish(), |current| {
                    *current == condition.equals
                })
        })
    }

    /// Default value of the first non-button control bound to `path`.
    #[must_use]
    pub fn default_for_path(&self, path: &str) -> Option<&OptionValue> {
        self.controls_for_path(path)
            .into_iter()
            .filter(|control| control.control_type != ControlType::Button)
            .find_map(|control| control.default_value.as_ref())
    }
}
