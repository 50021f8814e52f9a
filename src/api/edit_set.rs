use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{OptionPath, OptionValue};
use crate::error::StudioError;

/// Pending path -> value edits accumulated over an editing session.
///
/// Keys are the raw path strings controls emit. Recording a path again replaces
/// its value and moves it to the end, so application order is submission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditSet {
    edits: IndexMap<String, OptionValue>,
}

/// Two recorded paths where `ancestor` addresses a container holding `descendant`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOverlap {
    pub ancestor: String,
    pub descendant: String,
}

impl From<EditOverlap> for StudioError {
    fn from(overlap: EditOverlap) -> Self {
        Self::OverlappingEdits {
            ancestor: overlap.ancestor,
            descendant: overlap.descendant,
        }
    }
}

/// What a single recording displaced, enough to put the set back as it was.
#[derive(Debug)]
pub(crate) struct RecordUndo {
    path: String,
    previous: Option<(usize, OptionValue)>,
}

impl EditSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` for `path` as the most recent edit, returning the value
    /// it replaced.
    pub fn record(
        &mut self,
        path: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.record_undoable(path.into(), value.into())
            .previous
            .map(|(_, value)| value)
    }

    pub(crate) fn record_undoable(&mut self, path: String, value: OptionValue) -> RecordUndo {
        let previous = self
            .edits
            .shift_remove_full(path.as_str())
            .map(|(index, _, value)| (index, value));
        self.edits.insert(path.clone(), value);
        RecordUndo { path, previous }
    }

    /// Reverts one [`Self::record_undoable`]; undo records must be replayed
    /// newest first.
    pub(crate) fn undo(&mut self, undo: RecordUndo) {
        self.edits.shift_remove(undo.path.as_str());
        if let Some((index, value)) = undo.previous {
            self.edits.shift_insert(index, undo.path, value);
        }
    }

    /// Removes the edit for `path`, returning a record that puts it back.
    pub(crate) fn remove_undoable(&mut self, path: &str) -> Option<RecordUndo> {
        let (index, path, value) = self.edits.shift_remove_full(path)?;
        Some(RecordUndo {
            path,
            previous: Some((index, value)),
        })
    }

    #[must_use]
    pub fn with_edit(mut self, path: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.record(path, value);
        self
    }

    /// Drops the edit for `path`; later edits keep their relative order.
    pub fn remove(&mut self, path: &str) -> Option<OptionValue> {
        self.edits.shift_remove(path)
    }

    pub fn clear(&mut self) {
        self.edits.clear();
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&OptionValue> {
        self.edits.get(path)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.edits.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Edits in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.edits.iter().map(|(path, value)| (path.as_str(), value))
    }

    /// Pairs of recorded paths where one is a strict ancestor of the other
    /// once normalized (`xAxis` and `xAxis.type`).
    ///
    /// Their combined effect depends on application order.
    #[must_use]
    pub fn ancestor_overlaps(&self) -> Vec<EditOverlap> {
        let parsed: Vec<(&str, OptionPath)> = self
            .edits
            .keys()
            .map(|path| (path.as_str(), OptionPath::parse(path)))
            .collect();

        let mut overlaps = Vec::new();
        for (ancestor, ancestor_path) in &parsed {
            for (descendant, descendant_path) in &parsed {
                if ancestor_path.is_ancestor_of(descendant_path) {
                    overlaps.push(EditOverlap {
                        ancestor: (*ancestor).to_owned(),
                        descendant: (*descendant).to_owned(),
                    });
                }
            }
        }
        overlaps
    }

    /// First recorded path that would overlap `path` if it were recorded.
    ///
    /// A path never overlaps its own entry.
    #[must_use]
    pub fn overlap_with(&self, path: &str) -> Option<EditOverlap> {
        let candidate = OptionPath::parse(path);
        self.edits
            .keys()
            .filter(|existing| existing.as_str() != path)
            .find_map(|existing| {
                let existing_path = OptionPath::parse(existing);
                if existing_path.is_ancestor_of(&candidate) {
                    Some(EditOverlap {
                        ancestor: existing.clone(),
                        descendant: path.to_owned(),
                    })
                } else if candidate.is_ancestor_of(&existing_path) {
                    Some(EditOverlap {
                        ancestor: path.to_owned(),
                        descendant: existing.clone(),
                    })
                } else {
                    None
                }
            })
    }
}

impl<P, V> FromIterator<(P, V)> for EditSet
where
    P: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut edits = Self::new();
        for (path, value) in iter {
            edits.record(path, value);
        }
        edits
    }
}

impl<P, V> Extend<(P, V)> for EditSet
where
    P: Into<String>,
    V: Into<OptionValue>,
{
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        for (path, value) in iter {
            self.record(path, value);
        }
    }
}
