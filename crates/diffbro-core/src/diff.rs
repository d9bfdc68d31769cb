//! Line alignment and the comparison engine

use crate::change::{LineKind, LineRecord, Side};
use crate::chars::{diff_chars, CharDiff};
use crate::stats::{stats, DiffStats};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default ceiling on the size of either input text (4 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: usize = 4 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Input too large: {side:?} text is {len} bytes, limit is {limit}")]
    InputTooLarge { side: Side, len: usize, limit: usize },
}

/// Two index-aligned line sequences of equal length
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub left_lines: Vec<LineRecord>,
    pub right_lines: Vec<LineRecord>,
}

impl DiffResult {
    /// Number of aligned rows
    pub fn len(&self) -> usize {
        self.left_lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left_lines.is_empty()
    }

    /// Iterate over (left, right) pairs row by row
    pub fn rows(&self) -> impl Iterator<Item = (&LineRecord, &LineRecord)> {
        self.left_lines.iter().zip(self.right_lines.iter())
    }

    /// Indices of rows classified as Modified
    pub fn modified_rows(&self) -> Vec<usize> {
        self.left_lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.kind == LineKind::Modified)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Lines for one side
    pub fn side(&self, side: Side) -> &[LineRecord] {
        match side {
            Side::Left => &self.left_lines,
            Side::Right => &self.right_lines,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.left_lines.iter().any(|l| l.is_change())
            || self.right_lines.iter().any(|l| l.is_change())
    }
}

/// Align two texts line by line, by position.
///
/// Row `i` compares line `i` of each text; a text that has run out
/// contributes an empty string. A blank line therefore looks the same as a
/// missing one.
pub fn align(text1: &str, text2: &str) -> DiffResult {
    let lines1: Vec<&str> = text1.split('\n').collect();
    let lines2: Vec<&str> = text2.split('\n').collect();
    let rows = lines1.len().max(lines2.len());

    let mut left_lines = Vec::with_capacity(rows);
    let mut right_lines = Vec::with_capacity(rows);

    for i in 0..rows {
        let a = lines1.get(i).copied().unwrap_or("");
        let b = lines2.get(i).copied().unwrap_or("");
        let line_number = i + 1;

        let (left, right) = if a == b {
            (
                LineRecord::equal(a, line_number, Side::Left),
                LineRecord::equal(b, line_number, Side::Right),
            )
        } else if b.is_empty() {
            (
                LineRecord::removed(a, line_number),
                LineRecord::empty(line_number, Side::Right),
            )
        } else if a.is_empty() {
            (
                LineRecord::empty(line_number, Side::Left),
                LineRecord::added(b, line_number),
            )
        } else {
            (
                LineRecord::modified(a, line_number, Side::Left),
                LineRecord::modified(b, line_number, Side::Right),
            )
        };

        left_lines.push(left);
        right_lines.push(right);
    }

    DiffResult {
        left_lines,
        right_lines,
    }
}

/// An aligned comparison together with its summary counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    #[serde(flatten)]
    pub result: DiffResult,
    pub stats: DiffStats,
}

impl Comparison {
    pub fn new(result: DiffResult) -> Self {
        let stats = stats(&result.left_lines, &result.right_lines);
        Self { result, stats }
    }

    /// Character-level diff for a Modified row, computed on demand
    pub fn char_diff(&self, row: usize) -> Option<CharDiff> {
        let left = self.result.left_lines.get(row)?;
        let right = self.result.right_lines.get(row)?;
        if left.kind != LineKind::Modified {
            return None;
        }
        Some(diff_chars(&left.content, &right.content))
    }
}

/// Comparison entry point with an input size guard
#[derive(Debug, Clone)]
pub struct DiffEngine {
    /// Byte limit for each input, `None` for unlimited
    max_input_bytes: Option<usize>,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self {
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
        }
    }
}

impl DiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_input_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_input_bytes = limit;
        self
    }

    pub fn max_input_bytes(&self) -> Option<usize> {
        self.max_input_bytes
    }

    fn check_size(&self, side: Side, text: &str) -> Result<(), DiffError> {
        match self.max_input_bytes {
            Some(limit) if text.len() > limit => {
                tracing::warn!(?side, len = text.len(), limit, "rejecting oversized input");
                Err(DiffError::InputTooLarge {
                    side,
                    len: text.len(),
                    limit,
                })
            }
            _ => Ok(()),
        }
    }

    /// Compare two strings
    pub fn compare(&self, text1: &str, text2: &str) -> Result<Comparison, DiffError> {
        self.check_size(Side::Left, text1)?;
        self.check_size(Side::Right, text2)?;

        let comparison = Comparison::new(align(text1, text2));
        tracing::debug!(
            rows = comparison.stats.total,
            changed = comparison.stats.changed(),
            "computed comparison"
        );
        Ok(comparison)
    }

    /// Compare the contents of two files
    pub fn compare_files(&self, path1: &Path, path2: &Path) -> Result<Comparison, DiffError> {
        let text1 = std::fs::read_to_string(path1)?;
        let text2 = std::fs::read_to_string(path2)?;
        self.compare(&text1, &text2)
    }
}
