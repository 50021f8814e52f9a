use tracing::warn;

use crate::core::path::{OptionPath, PathSegment};
use crate::core::value::{OptionValue, ValueKind};
use crate::error::{StudioError, StudioResult};

/// Highest sequence index a write may materialize.
///
/// Writing past the end of a sequence pads it with `Null`, so the cap bounds
/// the allocation a single path can trigger.
pub const MAX_SEQUENCE_INDEX: usize = 65_535;

/// Reads the value at `path`.
///
/// Returns `None` when traversal passes through a missing, `Null`, scalar or
/// opaque node, and when the value found is `Null`. An empty path addresses
/// `root` itself.
#[must_use]
pub fn get_by_path<'a>(root: &'a OptionValue, path: &str) -> Option<&'a OptionValue> {
    get_by_segments(root, &OptionPath::parse(path))
}

/// Reads the value at `path`, falling back to `default` for anything nullish.
#[must_use]
pub fn get_by_path_or<'a>(
    root: &'a OptionValue,
    path: &str,
    default: &'a OptionValue,
) -> &'a OptionValue {
    get_by_path(root, path).unwrap_or(default)
}

#[must_use]
pub fn get_by_segments<'a>(root: &'a OptionValue, path: &OptionPath) -> Option<&'a OptionValue> {
    let mut current = root;
    for segment in path.segments() {
        current = child(current, segment)?;
    }
    (!current.is_nullish()).then_some(current)
}

/// Writes `value` at `path`, creating missing containers on the way.
///
/// A missing or `Null` container becomes a sequence when the segment after it
/// is an index and a mapping otherwise. Existing containers are indexed as they
/// are, even when their shape disagrees with the path; writes that cannot land
/// are dropped. An empty path leaves `root` untouched.
pub fn set_by_path<'a>(
    root: &'a mut OptionValue,
    path: &str,
    value: OptionValue,
) -> &'a mut OptionValue {
    set_by_segments(root, &OptionPath::parse(path), value)
}

pub fn set_by_segments<'a>(
    root: &'a mut OptionValue,
    path: &OptionPath,
    value: OptionValue,
) -> &'a mut OptionValue {
    if let Err(blocked) = write_segments(root, path, value) {
        warn!(
            path = %path,
            segment = %blocked.segment(path),
            reason = %blocked,
            "dropping option write"
        );
    }
    root
}

/// Strict form of [`set_by_path`]: a write that cannot land is an error
/// instead of a silent no-op.
pub fn try_set_by_path(root: &mut OptionValue, path: &str, value: OptionValue) -> StudioResult<()> {
    try_set_by_segments(root, &OptionPath::parse(path), value)
}

pub fn try_set_by_segments(
    root: &mut OptionValue,
    path: &OptionPath,
    value: OptionValue,
) -> StudioResult<()> {
    write_segments(root, path, value).map_err(|blocked| blocked.into_error(path))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Blocked {
    Shape { position: usize, found: ValueKind },
    IndexTooLarge { position: usize },
}

impl Blocked {
    fn position(self) -> usize {
        match self {
            Self::Shape { position, .. } | Self::IndexTooLarge { position } => position,
        }
    }

    fn segment(self, path: &OptionPath) -> String {
        path.segments()
            .get(self.position())
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    fn into_error(self, path: &OptionPath) -> StudioError {
        match self {
            Self::Shape { found, .. } => StudioError::StructuralMismatch {
                path: path.to_string(),
                segment: self.segment(path),
                found,
            },
            Self::IndexTooLarge { .. } => StudioError::InvalidPath(format!(
                "`{path}` indexes past the sequence limit of {MAX_SEQUENCE_INDEX}"
            )),
        }
    }
}

impl std::fmt::Display for Blocked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shape { found, .. } => write!(f, "container is {found}"),
            Self::IndexTooLarge { .. } => write!(f, "index above {MAX_SEQUENCE_INDEX}"),
        }
    }
}

fn write_segments(
    root: &mut OptionValue,
    path: &OptionPath,
    value: OptionValue,
) -> Result<(), Blocked> {
    let segments = path.segments();
    let Some((last, parents)) = segments.split_last() else {
        return Ok(());
    };
    // Checked up front so a rejected write never leaves half-built containers.
    if let Some(position) = segments
        .iter()
        .position(|segment| matches!(segment, PathSegment::Index(index) if *index > MAX_SEQUENCE_INDEX))
    {
        return Err(Blocked::IndexTooLarge { position });
    }

    if root.is_nullish() {
        *root = container_for(&segments[0]);
    }

    let mut cursor = root;
    for (position, segment) in parents.iter().enumerate() {
        let slot = slot_mut(cursor, segment).map_err(|found| Blocked::Shape { position, found })?;
        if slot.is_nullish() {
            *slot = container_for(&segments[position + 1]);
        }
        cursor = slot;
    }

    let slot = slot_mut(cursor, last).map_err(|found| Blocked::Shape {
        position: parents.len(),
        found,
    })?;
    *slot = value;
    Ok(())
}

fn child<'a>(container: &'a OptionValue, segment: &PathSegment) -> Option<&'a OptionValue> {
    match (container, segment) {
        (OptionValue::Mapping(map), segment) => map.get(segment.as_key().as_ref()),
        (OptionValue::Sequence(items), PathSegment::Index(index)) => items.get(*index),
        _ => None,
    }
}

/// Returns the slot `segment` addresses inside `container`, inserting a `Null`
/// placeholder when absent. Errors carry the kind of the blocking node.
fn slot_mut<'a>(
    container: &'a mut OptionValue,
    segment: &PathSegment,
) -> Result<&'a mut OptionValue, ValueKind> {
    match (container, segment) {
        (OptionValue::Mapping(map), segment) => Ok(map
            .entry(segment.as_key().into_owned())
            .or_insert(OptionValue::Null)),
        (OptionValue::Sequence(items), PathSegment::Index(index)) => {
            if *index >= items.len() {
                items.resize(*index + 1, OptionValue::Null);
            }
            Ok(&mut items[*index])
        }
        (other, _) => Err(other.kind()),
    }
}

fn container_for(next: &PathSegment) -> OptionValue {
    if next.is_index() {
        OptionValue::empty_sequence()
    } else {
        OptionValue::empty_mapping()
    }
}
