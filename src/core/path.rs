use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

/// One step of an option path: a mapping key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl PathSegment {
    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// Key form used when this segment addresses a mapping.
    ///
    /// Index segments address mappings by their decimal spelling.
    #[must_use]
    pub fn as_key(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Self::Key(key) => std::borrow::Cow::Borrowed(key),
            Self::Index(index) => std::borrow::Cow::Owned(index.to_string()),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Normalized option path.
///
/// Most chart-option paths are a handful of segments deep (`series[0].itemStyle.color`),
/// so segments are kept inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OptionPath {
    segments: SmallVec<[PathSegment; 6]>,
}

impl OptionPath {
    /// Parses dotted and bracketed notation into segments.
    ///
    /// `a[0].b`, `a.0.b` and `.a..0.b.` all normalize to `[a, 0, b]`.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let rewritten = rewrite_bracket_indices(path);
        let segments = rewritten
            .split('.')
            .filter(|token| !token.is_empty())
            .map(classify_token)
            .collect();
        Self { segments }
    }

    #[must_use]
    pub fn from_segments(segments: impl IntoIterator<Item = PathSegment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// An empty path addresses the root itself.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.is_empty()
    }

    /// Returns `true` when `self` is a strict segment prefix of `other`.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.len() < other.len() && other.segments.starts_with(&self.segments)
    }

    #[must_use]
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for OptionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Key(key) if position == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
            }
        }
        Ok(())
    }
}

impl From<&str> for OptionPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl Serialize for OptionPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OptionPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Free-function form of [`OptionPath::parse`].
#[must_use]
pub fn normalize(path: &str) -> OptionPath {
    OptionPath::parse(path)
}

/// Rewrites every `[digits]` occurrence to `.digits`; other brackets are left as-is.
fn rewrite_bracket_indices(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 4);
    let mut rest = path;
    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && after.as_bytes().get(digits) == Some(&b']') {
            out.push('.');
            out.push_str(&after[..digits]);
            rest = &after[digits + 1..];
        } else {
            out.push('[');
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

fn classify_token(token: &str) -> PathSegment {
    if token.bytes().all(|byte| byte.is_ascii_digit()) {
        // Digit runs too long for `usize` stay keys.
        if let Ok(index) = token.parse::<usize>() {
            return PathSegment::Index(index);
        }
    }
    PathSegment::Key(token.to_owned())
}
