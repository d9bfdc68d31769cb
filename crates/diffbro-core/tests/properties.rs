//! Property tests for the aligners and the stats reduction

use diffbro_core::{align, diff_chars, stats, CharKind, LineKind, Side};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    // Small alphabet so that equal and blank lines show up often
    prop::collection::vec(prop::sample::select(vec!["", "a", "b", "ab", "é", " "]), 0..8)
        .prop_map(|lines| lines.join("\n"))
}

fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

proptest! {
    #[test]
    fn prop_self_alignment_is_equal(t in text()) {
        let result = align(&t, &t);
        prop_assert!(result.left_lines.iter().all(|l| l.kind == LineKind::Equal));
        prop_assert!(result.right_lines.iter().all(|l| l.kind == LineKind::Equal));
        let numbers: Vec<usize> = result.left_lines.iter().map(|l| l.line_number).collect();
        prop_assert_eq!(numbers, (1..=line_count(&t)).collect::<Vec<_>>());
    }

    #[test]
    fn prop_lengths_match_longest_input(t1 in text(), t2 in text()) {
        let result = align(&t1, &t2);
        let expected = line_count(&t1).max(line_count(&t2));
        prop_assert_eq!(result.left_lines.len(), expected);
        prop_assert_eq!(result.right_lines.len(), expected);
    }

    #[test]
    fn prop_left_counts_cover_total(t1 in text(), t2 in text()) {
        let result = align(&t1, &t2);
        let s = stats(&result.left_lines, &result.right_lines);
        let empty_left = result.left_lines.iter().filter(|l| l.kind == LineKind::Empty).count();
        prop_assert_eq!(s.total, s.equal + s.removed + s.modified + empty_left);
        prop_assert_eq!(s.added, empty_left);
        prop_assert!(result.left_lines.iter().all(|l| l.kind != LineKind::Added));
    }

    #[test]
    fn prop_rows_are_consistent(t1 in text(), t2 in text()) {
        let result = align(&t1, &t2);
        for (left, right) in result.rows() {
            prop_assert_eq!(left.side, Side::Left);
            prop_assert_eq!(right.side, Side::Right);
            let pair_ok = matches!(
                (left.kind, right.kind),
                (LineKind::Equal, LineKind::Equal)
                    | (LineKind::Removed, LineKind::Empty)
                    | (LineKind::Empty, LineKind::Added)
                    | (LineKind::Modified, LineKind::Modified)
            );
            prop_assert!(pair_ok, "inconsistent row {:?} / {:?}", left.kind, right.kind);
        }
    }

    #[test]
    fn prop_swapping_inputs_mirrors_sides(t1 in text(), t2 in text()) {
        let forward = align(&t1, &t2);
        let backward = align(&t2, &t1);
        for (b, f) in backward.left_lines.iter().zip(forward.right_lines.iter()) {
            prop_assert_eq!(b.kind, f.kind.mirrored());
            prop_assert_eq!(&b.content, &f.content);
            prop_assert_eq!(b.line_number, f.line_number);
        }
    }

    #[test]
    fn prop_self_char_diff_is_equal(s in "\\PC{0,24}") {
        let diff = diff_chars(&s, &s);
        prop_assert_eq!(diff.left.len(), diff.right.len());
        prop_assert!(diff.left.iter().chain(diff.right.iter()).all(|c| c.kind == CharKind::Equal));
        let rebuilt: String = diff.left.iter().map(|c| c.ch).collect();
        prop_assert_eq!(rebuilt, s);
    }

    #[test]
    fn prop_char_diff_preserves_each_side(s1 in "[a-c]{0,12}", s2 in "[a-c]{0,12}") {
        let diff = diff_chars(&s1, &s2);
        let left: String = diff.left.iter().map(|c| c.ch).collect();
        let right: String = diff.right.iter().map(|c| c.ch).collect();
        prop_assert_eq!(left, s1.clone());
        prop_assert_eq!(right, s2.clone());
        prop_assert!(diff.left.iter().all(|c| c.kind != CharKind::Added));
        prop_assert!(diff.right.iter().all(|c| c.kind != CharKind::Removed));
        if s1.chars().count() == s2.chars().count() {
            prop_assert_eq!(diff.left.len(), diff.right.len());
        }
    }
}
