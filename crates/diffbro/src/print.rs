//! Non-interactive output of a comparison

use crate::cli::OutputFormat;
use anyhow::Result;
use diffbro_core::{Comparison, DiffStats, LineKind};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

fn marker(kind: LineKind) -> char {
    match kind {
        LineKind::Equal | LineKind::Empty => ' ',
        LineKind::Removed => '-',
        LineKind::Added => '+',
        LineKind::Modified => '~',
    }
}

fn summary(stats: &DiffStats) -> String {
    format!(
        "total {} | equal {} | added {} | removed {} | modified {}",
        stats.total, stats.equal, stats.added, stats.removed, stats.modified
    )
}

pub fn write_comparison(
    out: &mut impl Write,
    comparison: &Comparison,
    format: OutputFormat,
    stats_only: bool,
) -> Result<()> {
    match (format, stats_only) {
        (OutputFormat::Json, true) => {
            serde_json::to_writer_pretty(&mut *out, &comparison.stats)?;
            writeln!(out)?;
        }
        (OutputFormat::Json, false) => {
            serde_json::to_writer_pretty(&mut *out, comparison)?;
            writeln!(out)?;
        }
        (OutputFormat::Text, true) => writeln!(out, "{}", summary(&comparison.stats))?,
        (OutputFormat::Text, false) => write_rows(out, comparison)?,
    }
    Ok(())
}

fn write_rows(out: &mut impl Write, comparison: &Comparison) -> Result<()> {
    writeln!(out, "{}", summary(&comparison.stats))?;

    let number_width = comparison.result.len().to_string().len();
    let left_width = comparison
        .result
        .left_lines
        .iter()
        .map(|l| l.content.width())
        .max()
        .unwrap_or(0);

    for (left, right) in comparison.result.rows() {
        let pad = left_width.saturating_sub(left.content.width());
        let line = format!(
            "{:>number_width$} {} {}{} | {} {}",
            left.line_number,
            marker(left.kind),
            left.content,
            " ".repeat(pad),
            marker(right.kind),
            right.content,
        );
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use diffbro_core::DiffEngine;

    fn render(format: OutputFormat, stats_only: bool) -> String {
        let comparison = DiffEngine::new()
            .compare("line1\nline2\nline3", "line1\nlineX\nline3\nline4")
            .unwrap();
        let mut out = Vec::new();
        write_comparison(&mut out, &comparison, format, stats_only).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_rows() {
        let text = render(OutputFormat::Text, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "total 4 | equal 2 | added 1 | removed 0 | modified 1"
        );
        assert_eq!(lines[1], "1   line1 |   line1");
        assert_eq!(lines[2], "2 ~ line2 | ~ lineX");
        assert_eq!(lines[4], "4         | + line4");
    }

    #[test]
    fn test_text_stats_only() {
        let text = render(OutputFormat::Text, true);
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_json_output() {
        let text = render(OutputFormat::Json, false);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["stats"]["added"], 1);
        assert_eq!(value["left_lines"][1]["type"], "modified");
        assert_eq!(value["right_lines"][3]["content"], "line4");

        let stats: DiffStats = serde_json::from_str(&render(OutputFormat::Json, true)).unwrap();
        assert_eq!(stats.total, 4);
    }
}
