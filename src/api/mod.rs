//! Session-level API: edit sets, the apply engine and the editing session
//! that feeds a renderer.

mod apply;
mod control_controller;
mod edit_controller;
mod edit_set;
mod json_contract;
mod studio;
mod studio_config;

pub use apply::{apply_edits, apply_edits_with};
pub use edit_set::{EditOverlap, EditSet};
pub use json_contract::{EDIT_SET_JSON_SCHEMA_V1, EditSetJsonContractV1};
pub use studio::ChartStudio;
pub use studio_config::{EditOverlapPolicy, PathMode, StudioConfig};
