//! Structural operations over chart-option trees: path parsing, keyed access
//! and override-biased merging. Nothing here knows the rendering schema.

pub mod accessor;
pub mod merge;
pub mod path;
pub mod value;

pub use accessor::{
    MAX_SEQUENCE_INDEX, get_by_path, get_by_path_or, get_by_segments, set_by_path,
    set_by_segments, try_set_by_path, try_set_by_segments,
};
pub use merge::{clone_tree, deep_merge};
pub use path::{OptionPath, PathSegment, normalize};
pub use value::{FormatterFn, OpaqueValue, OptionMap, OptionValue, ValueKind};
