use crate::core::OptionValue;
use crate::error::{StudioError, StudioResult};
use crate::render::OptionRenderer;

/// Headless renderer used by tests and batch tooling.
///
/// Keeps the last option it was handed so callers can inspect what a real
/// backend would have drawn. A root that is not a mapping is rejected, which is
/// the one shape check every chart library makes.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_option: Option<OptionValue>,
}

impl OptionRenderer for NullRenderer {
    fn render(&mut self, option: &OptionValue) -> StudioResult<()> {
        if option.as_mapping().is_none() {
            return Err(StudioError::InvalidData(format!(
                "chart option root must be a mapping, got {}",
                option.kind()
            )));
        }
        self.render_count += 1;
        self.last_option = Some(option.clone());
        Ok(())
    }
}
