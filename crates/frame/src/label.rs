//! Row labels.
//!
//! A [`Label`] is one or more parts; a frame whose labels carry more than one
//! part has a multi-level index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One level of a row label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelPart {
    Int(i64),
    Str(String),
}

impl fmt::Display for LabelPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelPart::Int(i) => write!(f, "{i}"),
            LabelPart::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for LabelPart {
    fn from(i: i64) -> Self {
        LabelPart::Int(i)
    }
}

impl From<i32> for LabelPart {
    fn from(i: i32) -> Self {
        LabelPart::Int(i64::from(i))
    }
}

impl From<usize> for LabelPart {
    fn from(i: usize) -> Self {
        LabelPart::Int(i as i64)
    }
}

impl From<&str> for LabelPart {
    fn from(s: &str) -> Self {
        LabelPart::Str(s.to_string())
    }
}

impl From<String> for LabelPart {
    fn from(s: String) -> Self {
        LabelPart::Str(s)
    }
}

/// A row label made of at least one part.
///
/// Serializes as the bare part when single-level and as an array otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LabelRepr", into = "LabelRepr")]
pub struct Label {
    parts: Vec<LabelPart>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LabelRepr {
    One(LabelPart),
    Many(Vec<LabelPart>),
}

impl From<LabelRepr> for Label {
    fn from(repr: LabelRepr) -> Self {
        match repr {
            LabelRepr::One(part) => Label { parts: vec![part] },
            LabelRepr::Many(parts) => Label::new(parts),
        }
    }
}

impl From<Label> for LabelRepr {
    fn from(label: Label) -> Self {
        let mut parts = label.parts;
        if parts.len() == 1 {
            if let Some(part) = parts.pop() {
                return LabelRepr::One(part);
            }
        }
        LabelRepr::Many(parts)
    }
}

impl Label {
    /// Build a label from its parts. An empty part list becomes a single
    /// empty string part.
    #[must_use]
    pub fn new(parts: Vec<LabelPart>) -> Self {
        if parts.is_empty() {
            return Label {
                parts: vec![LabelPart::Str(String::new())],
            };
        }
        Label { parts }
    }

    /// A label padded with empty string parts up to `levels` parts.
    ///
    /// Used for summary titles on a multi-level index.
    #[must_use]
    pub fn padded<P: Into<LabelPart>>(first: P, levels: usize) -> Self {
        let mut parts = vec![first.into()];
        while parts.len() < levels {
            parts.push(LabelPart::Str(String::new()));
        }
        Label { parts }
    }

    #[must_use]
    pub fn parts(&self) -> &[LabelPart] {
        &self.parts
    }

    /// Number of levels in this label
    #[must_use]
    pub fn levels(&self) -> usize {
        self.parts.len()
    }

    /// Whether `query` selects this label.
    ///
    /// Equal labels match. A single-part query also matches a padded label
    /// (first part equal, every other part empty), so `"Total"` reaches a
    /// summary row on a multi-level index.
    #[must_use]
    pub fn matches(&self, query: &Label) -> bool {
        if self == query {
            return true;
        }
        match (self.parts.split_first(), query.parts.as_slice()) {
            (Some((first, rest)), [single]) => {
                first == single
                    && rest
                        .iter()
                        .all(|p| matches!(p, LabelPart::Str(s) if s.is_empty()))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [single] = self.parts.as_slice() {
            return write!(f, "{single}");
        }
        write!(f, "(")?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{part}")?;
        }
        write!(f, ")")
    }
}

impl From<LabelPart> for Label {
    fn from(part: LabelPart) -> Self {
        Label { parts: vec![part] }
    }
}

impl From<i64> for Label {
    fn from(i: i64) -> Self {
        LabelPart::from(i).into()
    }
}

impl From<i32> for Label {
    fn from(i: i32) -> Self {
        LabelPart::from(i).into()
    }
}

impl From<usize> for Label {
    fn from(i: usize) -> Self {
        LabelPart::from(i).into()
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        LabelPart::from(s).into()
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        LabelPart::from(s).into()
    }
}

impl<A: Into<LabelPart>, B: Into<LabelPart>> From<(A, B)> for Label {
    fn from((a, b): (A, B)) -> Self {
        Label::new(vec![a.into(), b.into()])
    }
}

impl<A: Into<LabelPart>, B: Into<LabelPart>, C: Into<LabelPart>> From<(A, B, C)> for Label {
    fn from((a, b, c): (A, B, C)) -> Self {
        Label::new(vec![a.into(), b.into(), c.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Label::from(3).to_string(), "3");
        assert_eq!(Label::from(("a", 1)).to_string(), "(a, 1)");
    }

    #[test]
    fn test_padded() {
        let label = Label::padded("Total", 3);
        assert_eq!(label.levels(), 3);
        assert_eq!(label.parts()[0], LabelPart::from("Total"));
        assert_eq!(label.parts()[2], LabelPart::from(""));
    }

    #[test]
    fn test_single_part_matches_padded() {
        let padded = Label::padded("Total", 2);
        assert!(padded.matches(&Label::from("Total")));
        assert!(padded.matches(&Label::from(("Total", ""))));
        assert!(!padded.matches(&Label::from("Average")));
        assert!(!Label::from(("Total", "x")).matches(&Label::from("Total")));
        assert!(!Label::from("Total").matches(&padded));
    }

    #[test]
    fn test_empty_parts() {
        assert_eq!(Label::new(vec![]).levels(), 1);
    }
}
