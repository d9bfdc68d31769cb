//! Character-level comparison of a single line pair

use crate::change::{CharSpan, Side};
use serde::{Deserialize, Serialize};

/// Per-character classification for both sides of a line pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharDiff {
    pub left: Vec<CharSpan>,
    pub right: Vec<CharSpan>,
}

impl CharDiff {
    /// Spans for one side
    pub fn side(&self, side: Side) -> &[CharSpan] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Walk both strings position by position.
///
/// There is no resynchronisation: once the cursors disagree, every later
/// pair of characters is compared at the same offset. When one string runs
/// out the remainder of the other is reported on its own side only.
pub fn diff_chars(s1: &str, s2: &str) -> CharDiff {
    let mut left = Vec::with_capacity(s1.len());
    let mut right = Vec::with_capacity(s2.len());
    let mut a = s1.chars();
    let mut b = s2.chars();

    loop {
        match (a.next(), b.next()) {
            (None, None) => break,
            (None, Some(cb)) => right.push(CharSpan::added(cb)),
            (Some(ca), None) => left.push(CharSpan::removed(ca)),
            (Some(ca), Some(cb)) if ca == cb => {
                left.push(CharSpan::equal(ca));
                right.push(CharSpan::equal(cb));
            }
            (Some(ca), Some(cb)) => {
                left.push(CharSpan::removed(ca));
                right.push(CharSpan::added(cb));
            }
        }
    }

    CharDiff { left, right }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::CharKind;

    fn kinds(spans: &[CharSpan]) -> Vec<(char, CharKind)> {
        spans.iter().map(|s| (s.ch, s.kind)).collect()
    }

    #[test]
    fn test_single_substitution() {
        let diff = diff_chars("cat", "cot");
        assert_eq!(
            kinds(&diff.left),
            vec![
                ('c', CharKind::Equal),
                ('a', CharKind::Removed),
                ('t', CharKind::Equal)
            ]
        );
        assert_eq!(
            kinds(&diff.right),
            vec![
                ('c', CharKind::Equal),
                ('o', CharKind::Added),
                ('t', CharKind::Equal)
            ]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let diff = diff_chars("", "");
        assert!(diff.left.is_empty());
        assert!(diff.right.is_empty());
    }

    #[test]
    fn test_left_only() {
        let diff = diff_chars("abc", "");
        assert_eq!(
            kinds(&diff.left),
            vec![
                ('a', CharKind::Removed),
                ('b', CharKind::Removed),
                ('c', CharKind::Removed)
            ]
        );
        assert!(diff.right.is_empty());
    }

    #[test]
    fn test_longer_right_tail_is_added() {
        let diff = diff_chars("ab", "abcd");
        assert_eq!(diff.left.len(), 2);
        assert_eq!(diff.right.len(), 4);
        assert!(diff.left.iter().all(|s| s.kind == CharKind::Equal));
        assert_eq!(
            kinds(&diff.right[2..]),
            vec![('c', CharKind::Added), ('d', CharKind::Added)]
        );
    }

    #[test]
    fn test_insertion_does_not_resync() {
        // "xabc" vs "abc": the leading insertion shifts every later position
        let diff = diff_chars("abc", "xabc");
        assert!(diff.left.iter().all(|s| s.kind == CharKind::Removed));
        assert_eq!(
            kinds(&diff.right),
            vec![
                ('x', CharKind::Added),
                ('a', CharKind::Added),
                ('b', CharKind::Added),
                ('c', CharKind::Added)
            ]
        );
    }

    #[test]
    fn test_multibyte_chars() {
        let diff = diff_chars("héllo", "hallo");
        assert_eq!(diff.left.len(), 5);
        assert_eq!(diff.left[1], CharSpan::removed('é'));
        assert_eq!(diff.right[1], CharSpan::added('a'));
    }
}
