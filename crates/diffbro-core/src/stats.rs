//! Summary counts over an aligned comparison

use crate::change::{LineKind, LineRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of aligned rows
    pub total: usize,
    pub equal: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffStats {
    /// Rows that differ in any way
    pub fn changed(&self) -> usize {
        self.added + self.removed + self.modified
    }

    pub fn is_identical(&self) -> bool {
        self.changed() == 0
    }
}

/// Count line kinds.
///
/// Equal, Removed and Modified are read from the left records and Added from
/// the right records. Empty records are never counted.
pub fn stats(left: &[LineRecord], right: &[LineRecord]) -> DiffStats {
    let mut stats = DiffStats {
        total: left.len(),
        ..DiffStats::default()
    };

    for line in left {
        match line.kind {
            LineKind::Equal => stats.equal += 1,
            LineKind::Removed => stats.removed += 1,
            LineKind::Modified => stats.modified += 1,
            LineKind::Added | LineKind::Empty => {}
        }
    }

    stats.added = right.iter().filter(|l| l.kind == LineKind::Added).count();

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::Side;

    #[test]
    fn test_counts_use_fixed_sides() {
        // Records that could never come out of `align`, to pin down which
        // side each count is read from.
        let left = vec![
            LineRecord::equal("a", 1, Side::Left),
            LineRecord::removed("b", 2),
            LineRecord::new(LineKind::Added, "c", 3, Side::Left),
        ];
        let right = vec![
            LineRecord::new(LineKind::Removed, "x", 1, Side::Right),
            LineRecord::empty(2, Side::Right),
            LineRecord::added("c", 3),
        ];

        let stats = stats(&left, &right);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.equal, 1);
        assert_eq!(stats.removed, 1);
        assert_eq!(stats.added, 1);
        assert_eq!(stats.modified, 0);
    }

    #[test]
    fn test_empty_sequences() {
        let stats = stats(&[], &[]);
        assert_eq!(stats, DiffStats::default());
        assert!(stats.is_identical());
    }

    #[test]
    fn test_changed() {
        let stats = DiffStats {
            total: 6,
            equal: 2,
            added: 1,
            removed: 1,
            modified: 2,
        };
        assert_eq!(stats.changed(), 4);
        assert!(!stats.is_identical());
    }
}
