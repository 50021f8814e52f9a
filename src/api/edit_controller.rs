use tracing::{debug, trace, warn};

use crate::core::OptionValue;
use crate::error::StudioResult;
use crate::render::OptionRenderer;

use super::apply::apply_in_mode;
use super::edit_set::RecordUndo;
use super::{ChartStudio, EditOverlapPolicy, StudioConfig, apply_edits_with};

impl<R: OptionRenderer> ChartStudio<R> {
    /// Records one control edit and recomputes the merged option.
    ///
    /// When the recompute is refused (strict path mode, rejected overlap) the
    /// edit set is restored and the previous option stays current.
    pub fn record_edit(
        &mut self,
        path: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> StudioResult<&OptionValue> {
        let path = path.into();
        trace!(path = %path, pending = self.edits.len(), "record edit");
        // The pending set is overlap-free under `Reject`, so only the new path
        // needs checking.
        if self.config.overlap_policy == EditOverlapPolicy::Reject {
            if let Some(overlap) = self.edits.overlap_with(&path) {
                return Err(overlap.into());
            }
        }
        let undo = self.edits.record_undoable(path, value.into());
        if let Err(err) = self.recompute() {
            self.edits.undo(undo);
            return Err(err);
        }
        Ok(&self.current)
    }

    /// Records several edits as one recompute and one render, in iteration order.
    pub fn record_edits<P, V>(
        &mut self,
        edits: impl IntoIterator<Item = (P, V)>,
    ) -> StudioResult<&OptionValue>
    where
        P: Into<String>,
        V: Into<OptionValue>,
    {
        let undos: Vec<RecordUndo> = edits
            .into_iter()
            .map(|(path, value)| self.edits.record_undoable(path.into(), value.into()))
            .collect();
        match apply_edits_with(&self.base, &self.edits, &self.config) {
            Ok(current) => {
                self.current = current;
                self.render_if_enabled();
                Ok(&self.current)
            }
            Err(err) => {
                for undo in undos.into_iter().rev() {
                    self.edits.undo(undo);
                }
                Err(err)
            }
        }
    }

    /// Forgets the edit for `path`. Returns `false` when none was recorded.
    pub fn reset_edit(&mut self, path: &str) -> StudioResult<bool> {
        let Some(undo) = self.edits.remove_undoable(path) else {
            return Ok(false);
        };
        if let Err(err) = self.recompute() {
            self.edits.undo(undo);
            return Err(err);
        }
        Ok(true)
    }

    pub fn clear_edits(&mut self) -> StudioResult<()> {
        let previous = std::mem::take(&mut self.edits);
        if let Err(err) = self.recompute() {
            self.edits = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Swaps the base option (e.g. after a chart-type or data change) and
    /// reapplies the pending edits on top of it.
    pub fn set_base(&mut self, base: OptionValue) -> StudioResult<()> {
        let current = apply_edits_with(&base, &self.edits, &self.config)?;
        debug!(edits = self.edits.len(), "replaced base option");
        self.base = base;
        self.current = current;
        self.render_if_enabled();
        Ok(())
    }

    /// Switches policies; refused when the pending edits violate `config`.
    pub fn set_config(&mut self, config: StudioConfig) -> StudioResult<()> {
        let current = apply_edits_with(&self.base, &self.edits, &config)?;
        self.config = config;
        self.current = current;
        self.render_if_enabled();
        Ok(())
    }

    /// Reapplies the pending edits; `current` changes only on success.
    fn recompute(&mut self) -> StudioResult<()> {
        self.current = apply_in_mode(&self.base, &self.edits, self.config.path_mode)?;
        self.render_if_enabled();
        Ok(())
    }

    fn render_if_enabled(&mut self) {
        if !self.config.render_on_edit {
            return;
        }
        if let Err(err) = self.renderer.render(&self.current) {
            warn!(
                error = %err,
                "renderer rejected recomputed option"
            );
        }
    }
}
