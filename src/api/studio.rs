use std::sync::Arc;

use crate::core::OptionValue;
use crate::error::StudioResult;
use crate::registry::ControlRegistry;
use crate::render::OptionRenderer;

use super::{EditSet, StudioConfig, apply_edits_with};

/// One editing session: a base chart option, the edits recorded against it and
/// the merged result handed to the renderer.
///
/// The registry is shared; every session owns its base, edits and output, so
/// sessions never observe each other's clones.
pub struct ChartStudio<R: OptionRenderer> {
    pub(super) renderer: R,
    pub(super) registry: Arc<ControlRegistry>,
    pub(super) config: StudioConfig,
    pub(super) base: OptionValue,
    pub(super) edits: EditSet,
    pub(super) current: OptionValue,
}

impl<R: OptionRenderer> ChartStudio<R> {
    /// Starts a session over `base` with no pending edits.
    pub fn new(
        renderer: R,
        registry: Arc<ControlRegistry>,
        base: OptionValue,
        config: StudioConfig,
    ) -> StudioResult<Self> {
        Self::with_edits(renderer, registry, base, EditSet::new(), config)
    }

    /// Resumes a session from previously persisted edits.
    pub fn with_edits(
        renderer: R,
        registry: Arc<ControlRegistry>,
        base: OptionValue,
        edits: EditSet,
        config: StudioConfig,
    ) -> StudioResult<Self> {
        let current = apply_edits_with(&base, &edits, &config)?;
        Ok(Self {
            renderer,
            registry,
            config,
            base,
            edits,
            current,
        })
    }

    #[must_use]
    pub fn base(&self) -> &OptionValue {
        &self.base
    }

    #[must_use]
    pub fn edits(&self) -> &EditSet {
        &self.edits
    }

    /// Merged option as of the last successful recompute.
    #[must_use]
    pub fn current_option(&self) -> &OptionValue {
        &self.current
    }

    #[must_use]
    pub fn config(&self) -> StudioConfig {
        self.config
    }

    #[must_use]
    pub fn registry(&self) -> &ControlRegistry {
        &self.registry
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Pretty JSON of the merged option for the code/data exporters.
    pub fn current_option_json_pretty(&self) -> StudioResult<String> {
        self.current.to_json_pretty()
    }

    /// Hands the current option to the renderer.
    pub fn render(&mut self) -> StudioResult<()> {
        self.renderer.render(&self.current)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
