use serde::{Deserialize, Serialize};

use crate::error::{StudioError, StudioResult};

/// How the apply step treats writes that cannot land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathMode {
    /// Mismatched writes are dropped.
    #[default]
    Permissive,
    /// Mismatched writes fail the whole apply.
    Strict,
}

/// Resolution for edit sets holding both a path and one of its ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOverlapPolicy {
    /// Edits apply in submission order (re-recording a path moves it last),
    /// so the last one submitted wins.
    #[default]
    LastSubmittedWins,
    /// Overlapping edit sets are refused.
    Reject,
}

/// Editing session configuration.
///
/// Serializable so hosts can persist studio preferences next to saved edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioConfig {
    #[serde(default)]
    pub path_mode: PathMode,
    #[serde(default)]
    pub overlap_policy: EditOverlapPolicy,
    #[serde(default = "default_render_on_edit")]
    pub render_on_edit: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            path_mode: PathMode::default(),
            overlap_policy: EditOverlapPolicy::default(),
            render_on_edit: default_render_on_edit(),
        }
    }
}

impl StudioConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_path_mode(mut self, mode: PathMode) -> Self {
        self.path_mode = mode;
        self
    }

    #[must_use]
    pub fn with_overlap_policy(mut self, policy: EditOverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    /// Disables pushing every recomputed option to the renderer; callers then
    /// render explicitly through `ChartStudio::render`.
    #[must_use]
    pub fn with_render_on_edit(mut self, enabled: bool) -> Self {
        self.render_on_edit = enabled;
        self
    }

    pub fn to_json_pretty(self) -> StudioResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| StudioError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> StudioResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| StudioError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_render_on_edit() -> bool {
    true
}
