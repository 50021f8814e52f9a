mod null_renderer;

pub use null_renderer::NullRenderer;

use crate::core::OptionValue;
use crate::error::StudioResult;

/// Hand-off point to an external chart renderer.
///
/// Implementations receive the fully merged option tree after every commit;
/// they own whatever schema validation the rendering library performs.
pub trait OptionRenderer {
    fn render(&mut self, option: &OptionValue) -> StudioResult<()>;
}
