//! chart-studio: path-addressed editing engine for declarative chart options.
//!
//! Controls from a static registry emit `(path, value)` edits; the apply engine
//! folds them onto a base option tree and hands the result to an external
//! renderer. The engine is structural only and never validates the rendering
//! schema.

pub mod api;
pub mod core;
pub mod error;
pub mod registry;
pub mod render;
pub mod telemetry;

pub use api::{ChartStudio, EditSet, StudioConfig, apply_edits};
pub use core::{OptionPath, OptionValue, deep_merge, get_by_path, set_by_path};
pub use error::{StudioError, StudioResult};
pub use registry::{ControlRegistry, build_default_registry};
