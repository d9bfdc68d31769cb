//! Diffbro Core - positional text comparison
//!
//! Aligns two texts line by line (by index, not by edit distance), classifies
//! every row, summarises the result, and highlights characters inside
//! modified line pairs on demand.

pub mod change;
pub mod chars;
pub mod diff;
pub mod stats;

pub use change::{CharKind, CharSpan, LineKind, LineRecord, Side};
pub use chars::{diff_chars, CharDiff};
pub use diff::{align, Comparison, DiffEngine, DiffError, DiffResult, DEFAULT_MAX_INPUT_BYTES};
pub use stats::{stats, DiffStats};
