//! Record types produced by the line and character aligners

use serde::{Deserialize, Serialize};

/// Which input text a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The first (original) text
    Left,
    /// The second (modified) text
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Classification of one line at a given index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Both sides hold the same text
    Equal,
    /// Only the right side has text here
    Added,
    /// Only the left side has text here
    Removed,
    /// Both sides have text, and it differs
    Modified,
    /// Placeholder opposite an Added or Removed line
    Empty,
}

impl LineKind {
    /// Check if this is an actual change (not context or padding)
    pub fn is_change(self) -> bool {
        matches!(self, LineKind::Added | LineKind::Removed | LineKind::Modified)
    }

    /// The kind the same line would get if the two inputs were swapped
    pub fn mirrored(self) -> Self {
        match self {
            LineKind::Added => LineKind::Removed,
            LineKind::Removed => LineKind::Added,
            other => other,
        }
    }
}

/// One line of one side of a comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub content: String,
    /// 1-based row index, shared by both sides of the row
    #[serde(rename = "line")]
    pub line_number: usize,
    pub side: Side,
}

impl LineRecord {
    pub fn new(kind: LineKind, content: impl Into<String>, line_number: usize, side: Side) -> Self {
        Self {
            kind,
            content: content.into(),
            line_number,
            side,
        }
    }

    pub fn equal(content: impl Into<String>, line_number: usize, side: Side) -> Self {
        Self::new(LineKind::Equal, content, line_number, side)
    }

    pub fn modified(content: impl Into<String>, line_number: usize, side: Side) -> Self {
        Self::new(LineKind::Modified, content, line_number, side)
    }

    /// A removed line always lives on the left
    pub fn removed(content: impl Into<String>, line_number: usize) -> Self {
        Self::new(LineKind::Removed, content, line_number, Side::Left)
    }

    /// An added line always lives on the right
    pub fn added(content: impl Into<String>, line_number: usize) -> Self {
        Self::new(LineKind::Added, content, line_number, Side::Right)
    }

    pub fn empty(line_number: usize, side: Side) -> Self {
        Self::new(LineKind::Empty, String::new(), line_number, side)
    }

    pub fn is_change(&self) -> bool {
        self.kind.is_change()
    }
}

/// Classification of one character inside a modified line pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharKind {
    Equal,
    Added,
    Removed,
}

/// A single classified character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharSpan {
    #[serde(rename = "char")]
    pub ch: char,
    #[serde(rename = "type")]
    pub kind: CharKind,
}

impl CharSpan {
    pub fn new(ch: char, kind: CharKind) -> Self {
        Self { ch, kind }
    }

    pub fn equal(ch: char) -> Self {
        Self::new(ch, CharKind::Equal)
    }

    pub fn added(ch: char) -> Self {
        Self::new(ch, CharKind::Added)
    }

    pub fn removed(ch: char) -> Self {
        Self::new(ch, CharKind::Removed)
    }

    pub fn is_change(&self) -> bool {
        self.kind != CharKind::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_constructors() {
        assert_eq!(LineRecord::removed("a", 1).side, Side::Left);
        assert_eq!(LineRecord::added("a", 1).side, Side::Right);
        let empty = LineRecord::empty(3, Side::Right);
        assert_eq!(empty.content, "");
        assert_eq!(empty.line_number, 3);
    }

    #[test]
    fn test_mirrored_kinds() {
        assert_eq!(LineKind::Added.mirrored(), LineKind::Removed);
        assert_eq!(LineKind::Removed.mirrored(), LineKind::Added);
        assert_eq!(LineKind::Modified.mirrored(), LineKind::Modified);
        assert_eq!(LineKind::Empty.mirrored(), LineKind::Empty);
        assert_eq!(Side::Left.opposite(), Side::Right);
    }

    #[test]
    fn test_is_change() {
        assert!(!LineKind::Equal.is_change());
        assert!(!LineKind::Empty.is_change());
        assert!(LineKind::Modified.is_change());
        assert!(CharSpan::added('x').is_change());
        assert!(!CharSpan::equal('x').is_change());
    }

    #[test]
    fn test_serialized_shape() {
        let record = LineRecord::added("line4", 4);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "added");
        assert_eq!(json["content"], "line4");
        assert_eq!(json["line"], 4);
        assert_eq!(json["side"], "right");

        let span = serde_json::to_value(CharSpan::removed('a')).unwrap();
        assert_eq!(span["char"], "a");
        assert_eq!(span["type"], "removed");
    }
}
