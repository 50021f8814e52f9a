use crate::core::value::{OptionMap, OptionValue};

/// Merges `source` over `target` into a new tree.
///
/// Mappings merge key by key and recurse when both sides hold a mapping.
/// Sequences and every other value in `source` replace the target value
/// wholesale, so a patched `series` array is never spliced element-wise.
/// Keys present only in `target` keep their position.
///
/// Unless both roots are mappings there is nothing to merge: the result is a
/// copy of `target` when it is a container, and an empty mapping otherwise.
#[must_use]
pub fn deep_merge(target: &OptionValue, source: &OptionValue) -> OptionValue {
    match (target, source) {
        (OptionValue::Mapping(target), OptionValue::Mapping(source)) => {
            OptionValue::Mapping(merge_maps(target, source))
        }
        (OptionValue::Mapping(_) | OptionValue::Sequence(_), _) => target.clone(),
        _ => OptionValue::empty_mapping(),
    }
}

/// Structural copy of `value` produced by merging it into an empty mapping.
///
/// Non-mapping inputs yield an empty mapping.
#[must_use]
pub fn clone_tree(value: &OptionValue) -> OptionValue {
    deep_merge(&OptionValue::empty_mapping(), value)
}

fn merge_maps(target: &OptionMap, source: &OptionMap) -> OptionMap {
    let mut output = target.clone();
    for (key, source_value) in source {
        let merged = match (source_value, output.get(key)) {
            (OptionValue::Sequence(items), _) => OptionValue::Sequence(items.clone()),
            (OptionValue::Mapping(source_map), Some(OptionValue::Mapping(target_map))) => {
                OptionValue::Mapping(merge_maps(target_map, source_map))
            }
            (other, _) => other.clone(),
        };
        output.insert(key.clone(), merged);
    }
    output
}
