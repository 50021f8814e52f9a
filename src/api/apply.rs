use tracing::debug;

use crate::core::{OptionValue, clone_tree, set_by_path, try_set_by_path};
use crate::error::StudioResult;

use super::{EditOverlapPolicy, EditSet, PathMode, StudioConfig};

/// Produces a new option tree: one structural clone of `base`, then every edit
/// written in recording order. `base` is never touched.
#[must_use]
pub fn apply_edits(base: &OptionValue, edits: &EditSet) -> OptionValue {
    let mut output = clone_tree(base);
    for (path, value) in edits.iter() {
        set_by_path(&mut output, path, value.clone());
    }
    debug!(edits = edits.len(), "applied edit set");
    output
}

/// [`apply_edits`] honouring the overlap policy and path mode of `config`.
pub fn apply_edits_with(
    base: &OptionValue,
    edits: &EditSet,
    config: &StudioConfig,
) -> StudioResult<OptionValue> {
    if config.overlap_policy == EditOverlapPolicy::Reject {
        if let Some(overlap) = edits.ancestor_overlaps().into_iter().next() {
            return Err(overlap.into());
        }
    }
    apply_in_mode(base, edits, config.path_mode)
}

/// Apply step without the overlap check, for callers that have already
/// vetted the edit set.
pub(super) fn apply_in_mode(
    base: &OptionValue,
    edits: &EditSet,
    mode: PathMode,
) -> StudioResult<OptionValue> {
    match mode {
        PathMode::Permissive => Ok(apply_edits(base, edits)),
        PathMode::Strict => {
            let mut output = clone_tree(base);
            for (path, value) in edits.iter() {
                try_set_by_path(&mut output, path, value.clone())?;
            }
            debug!(edits = edits.len(), "applied edit set in strict mode");
            Ok(output)
        }
    }
}
